pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /units/symbols                         active symbols for a category
/// /units/names                           resolved display names
///
/// /conversions                           perform + log a conversion (POST)
///
/// /categories/{category}/recent          recency-ordered usage log feed
/// /categories/{category}/aside           aside widget payload (logs + names)
/// /categories/{category}/pairs           "you may also want" pairs
///
/// /pages/{category}/{pair}               pair page payload
/// /pages/{category}/{pair}/{value_pair}  value-pair page payload
///
/// /sitemap                               sitemap URL list
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/units/symbols", get(handlers::units::list_symbols))
        .route("/units/names", get(handlers::units::resolve_names))
        .route(
            "/conversions",
            post(handlers::conversions::create_conversion),
        )
        .route(
            "/categories/{category}/recent",
            get(handlers::category::recent),
        )
        .route(
            "/categories/{category}/aside",
            get(handlers::category::aside),
        )
        .route(
            "/categories/{category}/pairs",
            get(handlers::category::pairs),
        )
        .route("/pages/{category}/{pair}", get(handlers::pages::pair_page))
        .route(
            "/pages/{category}/{pair}/{value_pair}",
            get(handlers::pages::value_pair_page),
        )
        .route("/sitemap", get(handlers::sitemap::sitemap))
}
