//! Shoe catalog domain types and display logic for Stride.
//!
//! This crate provides the data side of the storefront's listing card:
//!
//! - **Listing**: the immutable shoe record and its display operations
//! - **Flag**: promotional flag selection ("Sale" / "Just released!")
//! - **Money**: cents-based prices with currency formatting
//! - **Text**: pluralized display strings
//!
//! # Example
//!
//! ```rust
//! use stride_commerce::prelude::*;
//! use chrono::NaiveDate;
//!
//! let listing = ShoeListing::new(
//!     "laced-up-runner",
//!     "Laced Up Runner",
//!     "/assets/laced-up-runner.jpg",
//!     Money::from_decimal(110.00, Currency::USD),
//!     NaiveDate::from_ymd_opt(2024, 3, 20).unwrap(),
//! )
//! .with_colors(3);
//!
//! let today = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
//! assert_eq!(listing.flag(today), ShoeFlag::NewRelease);
//! assert_eq!(listing.price.display(), "$110.00");
//! ```

pub mod error;
pub mod flag;
pub mod listing;
pub mod money;
pub mod text;

pub use error::CatalogError;
pub use flag::{is_new_shoe, ShoeFlag, NEW_RELEASE_WINDOW_DAYS};
pub use listing::{parse_release_date, ShoeListing};
pub use money::{Currency, Money};
pub use text::pluralize;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::flag::{is_new_shoe, ShoeFlag, NEW_RELEASE_WINDOW_DAYS};
    pub use crate::listing::{parse_release_date, ShoeListing};
    pub use crate::money::{Currency, Money};
    pub use crate::text::pluralize;
}
