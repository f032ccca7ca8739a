//! HTTP service for the unit-conversion site.
//!
//! Thin axum layer over `unitconver-core` (conversion, slugs, pair
//! generation) and `unitconver-db` (dictionary, localizations, usage
//! log), plus the read-only static snapshot cache.

pub mod config;
pub mod error;
pub mod handlers;
pub mod names;
pub mod response;
pub mod router;
pub mod routes;
pub mod snapshot;
pub mod state;
