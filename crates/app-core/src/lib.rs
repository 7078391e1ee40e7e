//! Core collaborators for the Shapeshift storefront
//!
//! This crate holds the data and ambient services the UI engine reads at
//! its edges: the product catalog, the curated showcase listings used by
//! the home compositions, the clock, and the analytics sink.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analytics;
pub mod branding;
pub mod catalog;
pub mod clock;
pub mod showcase;

pub use analytics::{AnalyticsError, AnalyticsEvent, AnalyticsSink, TracingSink};
pub use catalog::{Product, ProductCatalog, StaticCatalog};
pub use clock::{Clock, FixedClock, SystemClock};
pub use showcase::{Category, ListItem, ProductCard, Story};
