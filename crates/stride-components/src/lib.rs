//! Leptos storefront components for Stride.
//!
//! Presentational only: every component derives its output from a
//! [`stride_commerce::ShoeListing`] plus a caller-supplied date. No
//! state, no data fetching.
//!
//! Enable the `csr`, `hydrate`, or `ssr` feature to match the leptos
//! rendering mode of the embedding application.
//!
//! # Example
//!
//! ```rust,ignore
//! use stride_components::ShoeGrid;
//!
//! view! {
//!     <ShoeGrid shoes=shoes today=today/>
//! }
//! ```

pub mod card;
pub mod grid;
pub mod spacer;
pub mod theme;

pub use card::{FlagBadge, ShoeCard};
pub use grid::{ShoeCardSkeleton, ShoeGrid, ShoeGridSkeleton};
pub use spacer::Spacer;
