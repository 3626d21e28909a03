//! Listing grid and loading skeletons.

use chrono::NaiveDate;
use leptos::prelude::*;
use stride_commerce::ShoeListing;

use crate::card::ShoeCard;

/// Wrapping grid of shoe cards.
#[component]
pub fn ShoeGrid(shoes: Vec<ShoeListing>, today: NaiveDate) -> impl IntoView {
    view! {
        <div class="shoe-grid">
            {shoes
                .into_iter()
                .map(|shoe| view! { <ShoeCard shoe=shoe today=today/> })
                .collect::<Vec<_>>()}
        </div>
    }
}

/// Loading placeholder for the grid.
#[component]
pub fn ShoeGridSkeleton(
    #[prop(default = 4)] count: usize,
) -> impl IntoView {
    view! {
        <div class="shoe-grid">
            {(0..count)
                .map(|_| view! { <ShoeCardSkeleton/> })
                .collect::<Vec<_>>()}
        </div>
    }
}

/// Loading placeholder for one card.
#[component]
pub fn ShoeCardSkeleton() -> impl IntoView {
    view! {
        <div class="shoe-card">
            <div class="skeleton" style="width: 100%; height: 200px;"></div>
            <div class="shoe-row" style="margin-top: 12px;">
                <div class="skeleton" style="width: 60%; height: 1.25rem;"></div>
                <div class="skeleton" style="width: 25%; height: 1.25rem;"></div>
            </div>
        </div>
    }
}
