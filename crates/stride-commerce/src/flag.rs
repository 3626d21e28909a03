//! Promotional flag selection for shoe listings.
//!
//! A listing renders with at most one flag over its image: "Sale" when it
//! carries a sale price, "Just released!" when it came out recently, or
//! nothing. Selection is a pure function of the listing and a
//! caller-supplied `today`, so rendering stays deterministic.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::money::Money;

/// Number of days after release during which a shoe still counts as newly
/// released. The boundary is inclusive: released exactly this many days
/// before `today` is still new.
pub const NEW_RELEASE_WINDOW_DAYS: i64 = 30;

/// The flag a listing renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ShoeFlag {
    /// Listing carries a sale price.
    Sale,
    /// Listing was released within the new-release window.
    NewRelease,
    /// No flag shown.
    #[default]
    Default,
}

impl ShoeFlag {
    /// Select the flag for a listing, first match wins:
    ///
    /// 1. Any sale price (zero and negative included) selects `Sale`.
    /// 2. A release date inside the new-release window selects `NewRelease`.
    /// 3. Otherwise `Default`.
    ///
    /// A shoe can be both on sale and newly released; the sale flag wins.
    pub fn for_listing(
        sale_price: Option<Money>,
        release_date: NaiveDate,
        today: NaiveDate,
    ) -> Self {
        if sale_price.is_some() {
            ShoeFlag::Sale
        } else if is_new_shoe(release_date, today) {
            ShoeFlag::NewRelease
        } else {
            ShoeFlag::Default
        }
    }

    /// The label shown on the flag, or `None` when no flag is shown.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            ShoeFlag::Sale => Some("Sale"),
            ShoeFlag::NewRelease => Some("Just released!"),
            ShoeFlag::Default => None,
        }
    }

    /// Whether the flag renders at all.
    pub fn is_visible(&self) -> bool {
        !matches!(self, ShoeFlag::Default)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShoeFlag::Sale => "on-sale",
            ShoeFlag::NewRelease => "new-release",
            ShoeFlag::Default => "default",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "on-sale" => Some(ShoeFlag::Sale),
            "new-release" => Some(ShoeFlag::NewRelease),
            "default" => Some(ShoeFlag::Default),
            _ => None,
        }
    }
}

/// Check whether a release date falls inside the new-release window.
///
/// Future release dates count as new: the window only bounds how long ago
/// a shoe may have come out.
pub fn is_new_shoe(release_date: NaiveDate, today: NaiveDate) -> bool {
    today.signed_duration_since(release_date).num_days() <= NEW_RELEASE_WINDOW_DAYS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn usd(amount: f64) -> Money {
        Money::from_decimal(amount, Currency::USD)
    }

    #[test]
    fn test_flag_sale_regardless_of_release_date() {
        // Spec scenario: salePrice = 110.00, released 2020-01-01, today 2024-01-01.
        let flag = ShoeFlag::for_listing(Some(usd(110.00)), date(2020, 1, 1), date(2024, 1, 1));
        assert_eq!(flag, ShoeFlag::Sale);

        // Sale also wins for a shoe released today.
        let today = date(2024, 4, 1);
        let flag = ShoeFlag::for_listing(Some(usd(80.00)), today, today);
        assert_eq!(flag, ShoeFlag::Sale);
    }

    #[test]
    fn test_flag_new_release_inside_window() {
        // Spec scenario: no sale price, released 2024-03-20, today 2024-04-01.
        let flag = ShoeFlag::for_listing(None, date(2024, 3, 20), date(2024, 4, 1));
        assert_eq!(flag, ShoeFlag::NewRelease);
    }

    #[test]
    fn test_flag_default_outside_window() {
        // Spec scenario: no sale price, released 2020-01-01, today 2024-04-01.
        let flag = ShoeFlag::for_listing(None, date(2020, 1, 1), date(2024, 4, 1));
        assert_eq!(flag, ShoeFlag::Default);
    }

    #[test]
    fn test_flag_tie_break_sale_wins() {
        // Spec scenario: salePrice = 50, released 2024-03-25, today 2024-04-01.
        let flag = ShoeFlag::for_listing(Some(usd(50.0)), date(2024, 3, 25), date(2024, 4, 1));
        assert_eq!(flag, ShoeFlag::Sale);
    }

    #[test]
    fn test_flag_zero_and_negative_sale_prices() {
        let today = date(2024, 4, 1);
        let old = date(2020, 1, 1);
        assert_eq!(
            ShoeFlag::for_listing(Some(Money::zero(Currency::USD)), old, today),
            ShoeFlag::Sale
        );
        assert_eq!(
            ShoeFlag::for_listing(Some(Money::new(-100, Currency::USD)), old, today),
            ShoeFlag::Sale
        );
    }

    #[test]
    fn test_flag_boundary_inclusive() {
        let today = date(2024, 4, 1);
        // Exactly 30 days before today: still new.
        let at_boundary = date(2024, 3, 2);
        assert_eq!(
            today.signed_duration_since(at_boundary).num_days(),
            NEW_RELEASE_WINDOW_DAYS
        );
        assert!(is_new_shoe(at_boundary, today));
        assert_eq!(
            ShoeFlag::for_listing(None, at_boundary, today),
            ShoeFlag::NewRelease
        );

        // One day past the window: no longer new.
        let past_boundary = date(2024, 3, 1);
        assert!(!is_new_shoe(past_boundary, today));
        assert_eq!(
            ShoeFlag::for_listing(None, past_boundary, today),
            ShoeFlag::Default
        );
    }

    #[test]
    fn test_is_new_shoe_future_release() {
        let today = date(2024, 4, 1);
        assert!(is_new_shoe(date(2024, 5, 1), today));
    }

    #[test]
    fn test_flag_label_and_visibility() {
        assert_eq!(ShoeFlag::Sale.label(), Some("Sale"));
        assert_eq!(ShoeFlag::NewRelease.label(), Some("Just released!"));
        assert_eq!(ShoeFlag::Default.label(), None);

        assert!(ShoeFlag::Sale.is_visible());
        assert!(ShoeFlag::NewRelease.is_visible());
        assert!(!ShoeFlag::Default.is_visible());
    }

    #[test]
    fn test_flag_str_round_trip() {
        assert_eq!(ShoeFlag::from_str("on-sale"), Some(ShoeFlag::Sale));
        assert_eq!(ShoeFlag::from_str("new-release"), Some(ShoeFlag::NewRelease));
        assert_eq!(ShoeFlag::from_str("default"), Some(ShoeFlag::Default));
        assert_eq!(ShoeFlag::from_str("clearance"), None);
        assert_eq!(ShoeFlag::Sale.as_str(), "on-sale");
    }
}
