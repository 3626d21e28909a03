//! Shoe listing record and its display operations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::flag::ShoeFlag;
use crate::money::Money;
use crate::text::pluralize;

/// A shoe listing as shown on the storefront.
///
/// Owned by the caller and never mutated by the card; every display
/// value is derived fresh per render.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShoeListing {
    /// URL-friendly slug (unique).
    pub slug: String,
    /// Shoe name.
    pub name: String,
    /// URL of the listing image.
    pub image_src: String,
    /// Regular price.
    pub price: Money,
    /// Sale price, when the shoe is on sale. Any present value counts,
    /// zero and negative included.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<Money>,
    /// Release date ("YYYY-MM-DD" on the wire).
    pub release_date: NaiveDate,
    /// Number of colorways, at least 1.
    pub num_of_colors: u32,
}

impl ShoeListing {
    /// Create a new listing with no sale price and a single colorway.
    pub fn new(
        slug: impl Into<String>,
        name: impl Into<String>,
        image_src: impl Into<String>,
        price: Money,
        release_date: NaiveDate,
    ) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            image_src: image_src.into(),
            price,
            sale_price: None,
            release_date,
            num_of_colors: 1,
        }
    }

    /// Set the sale price.
    pub fn with_sale_price(mut self, sale_price: Money) -> Self {
        self.sale_price = Some(sale_price);
        self
    }

    /// Set the number of colorways.
    pub fn with_colors(mut self, num_of_colors: u32) -> Self {
        self.num_of_colors = num_of_colors;
        self
    }

    /// Select the promotional flag for this listing as of `today`.
    pub fn flag(&self, today: NaiveDate) -> ShoeFlag {
        ShoeFlag::for_listing(self.sale_price, self.release_date, today)
    }

    /// Link target for the listing's detail page.
    pub fn href(&self) -> String {
        format!("/shoe/{}", self.slug)
    }

    /// Check if this listing is on sale.
    pub fn is_on_sale(&self) -> bool {
        self.sale_price.is_some()
    }

    /// The colorway count line, e.g. "3 Colors".
    pub fn color_label(&self) -> String {
        pluralize("Color", self.num_of_colors)
    }

    /// Amount saved against the regular price, when on sale in the same
    /// currency.
    pub fn savings(&self) -> Option<Money> {
        self.sale_price
            .and_then(|sale| self.price.try_subtract(&sale))
    }

    /// Discount percentage against the regular price, when the sale price
    /// is actually lower.
    pub fn discount_percent(&self) -> Option<f64> {
        let sale = self.sale_price?;
        if sale.currency != self.price.currency
            || self.price.amount_cents <= 0
            || sale.amount_cents >= self.price.amount_cents
        {
            return None;
        }
        let savings = self.price.amount_cents - sale.amount_cents;
        Some(savings as f64 / self.price.amount_cents as f64 * 100.0)
    }

    /// Check the upstream invariants the card relies on.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.num_of_colors == 0 {
            return Err(CatalogError::NoColorways(self.slug.clone()));
        }
        Ok(())
    }

    /// Parse a listing from its JSON wire form and check its invariants.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let listing: ShoeListing = serde_json::from_str(json)?;
        listing.validate()?;
        Ok(listing)
    }

    /// Serialize to the JSON wire form.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Parse an ISO-8601 release date ("YYYY-MM-DD").
pub fn parse_release_date(s: &str) -> Result<NaiveDate, CatalogError> {
    Ok(s.parse::<NaiveDate>()?)
}
