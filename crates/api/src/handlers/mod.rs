//! HTTP handlers, one module per resource.

pub mod category;
pub mod conversions;
pub mod pages;
pub mod sitemap;
pub mod units;
