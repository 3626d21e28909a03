//! Shoe listing card.

use chrono::NaiveDate;
use leptos::prelude::*;
use stride_commerce::{ShoeFlag, ShoeListing};

use crate::spacer::Spacer;
use crate::theme;

/// Card for one shoe listing: image with promotional flag, name, price,
/// and colorway count. The whole card links to the listing's detail page.
///
/// `today` anchors flag selection, so rendering the same listing with the
/// same date always produces the same card.
#[component]
pub fn ShoeCard(shoe: ShoeListing, today: NaiveDate) -> impl IntoView {
    let flag = shoe.flag(today);
    let href = shoe.href();
    let price_class = price_class(shoe.is_on_sale());
    let price = shoe.price.display();
    let sale_price = shoe.sale_price.map(|m| m.display());
    let colors = shoe.color_label();

    view! {
        <a href=href class="shoe-card-link">
            <article class="shoe-card">
                <div class="shoe-image-wrapper">
                    <img alt="" src=shoe.image_src class="shoe-image"/>
                    <FlagBadge flag=flag/>
                </div>
                <Spacer size=12/>
                <div class="shoe-row">
                    <h3 class="shoe-name">{shoe.name}</h3>
                    <span class=price_class>{price}</span>
                </div>
                <div class="shoe-row">
                    <p class="shoe-colors">{colors}</p>
                    {sale_price.map(|p| view! { <span class="shoe-sale-price">{p}</span> })}
                </div>
            </article>
        </a>
    }
}

/// Promotional flag over the card image. Renders nothing for a listing
/// with no flag.
#[component]
pub fn FlagBadge(flag: ShoeFlag) -> impl IntoView {
    flag.label().map(|label| {
        let class = format!("shoe-flag shoe-flag--{}", flag.as_str());
        let style = format!("background-color: {};", flag_background(flag));
        view! { <span class=class style=style>{label}</span> }
    })
}

fn flag_background(flag: ShoeFlag) -> &'static str {
    match flag {
        ShoeFlag::Sale => theme::COLOR_PRIMARY,
        ShoeFlag::NewRelease => theme::COLOR_SECONDARY,
        ShoeFlag::Default => "transparent",
    }
}

fn price_class(on_sale: bool) -> &'static str {
    if on_sale {
        "shoe-price shoe-price--struck"
    } else {
        "shoe-price"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_background_tokens() {
        assert_eq!(flag_background(ShoeFlag::Sale), theme::COLOR_PRIMARY);
        assert_eq!(flag_background(ShoeFlag::NewRelease), theme::COLOR_SECONDARY);
        assert_eq!(flag_background(ShoeFlag::Default), "transparent");
    }

    #[test]
    fn test_price_class_struck_only_on_sale() {
        assert_eq!(price_class(false), "shoe-price");
        assert_eq!(price_class(true), "shoe-price shoe-price--struck");
    }
}
