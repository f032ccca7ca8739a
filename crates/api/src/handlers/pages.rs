//! Page-payload endpoints backing the pair and value-pair pages.
//!
//! These replace the site's server-side page loaders: everything a
//! pair page needs (parsed slug, display names, category label, ratio,
//! computed result) in one response. Slug decoding is total, so even a
//! mangled public URL produces a renderable payload.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use unitconver_core::locale::DEFAULT_LOCALE;
use unitconver_core::{convert, slug};
use unitconver_db::repositories::UnitRepo;

use crate::error::AppResult;
use crate::names::{names_only, NameResolver};
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub locale: Option<String>,
}

/// Payload for a pair or value-pair page.
#[derive(Debug, Serialize)]
pub struct PagePayload {
    pub category: String,
    /// Localized category label, `None` when not seeded for this locale.
    pub category_name: Option<String>,
    pub from: String,
    pub to: String,
    pub from_name: String,
    pub to_name: String,
    /// The parsed value ("1" on plain pair pages).
    pub value: String,
    /// Computed result, `None` when the units are not convertible.
    pub output_value: Option<String>,
    /// `1 from = ratio to`, `None` when not convertible.
    pub ratio: Option<f64>,
    pub convertible: bool,
    /// The category's convertible symbols, for the unit selectors.
    pub symbols: Vec<String>,
    pub names: HashMap<String, String>,
}

// ---------------------------------------------------------------------------
// GET /pages/{category}/{pair}
// ---------------------------------------------------------------------------

/// Page payload for `<from>-to-<to>`.
pub async fn pair_page(
    State(state): State<AppState>,
    Path((category, pair)): Path<(String, String)>,
    Query(params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    let decoded = slug::decode_pair(&pair);
    let payload = build_payload(
        &state,
        &category,
        decoded.from,
        decoded.to,
        "1".to_string(),
        params.locale,
    )
    .await;
    Ok(Json(DataResponse { data: payload }))
}

// ---------------------------------------------------------------------------
// GET /pages/{category}/{pair}/{value_pair}
// ---------------------------------------------------------------------------

/// Page payload for `<value><from>-to-<to>`. The value-pair slug wins
/// over the enclosing pair slug where both parse.
pub async fn value_pair_page(
    State(state): State<AppState>,
    Path((category, pair, value_pair)): Path<(String, String, String)>,
    Query(params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    let outer = slug::decode_pair(&pair);
    let decoded = slug::decode_value_pair(&value_pair);

    let from = if decoded.from.is_empty() {
        outer.from
    } else {
        decoded.from
    };
    let to = if decoded.to.is_empty() { outer.to } else { decoded.to };

    let payload = build_payload(&state, &category, from, to, decoded.value, params.locale).await;
    Ok(Json(DataResponse { data: payload }))
}

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

async fn build_payload(
    state: &AppState,
    category: &str,
    from: String,
    to: String,
    value: String,
    locale: Option<String>,
) -> PagePayload {
    let locale = locale.unwrap_or_else(|| DEFAULT_LOCALE.to_string());

    // Category label only exists in its Chinese localization.
    let category_name = if locale.starts_with("zh") {
        match UnitRepo::category_display_name(&state.pool, category).await {
            Ok(name) => name,
            Err(err) => {
                tracing::warn!(%category, error = %err, "Category label lookup failed");
                None
            }
        }
    } else {
        None
    };

    let symbols = super::category::category_symbols(state, category).await;

    let mut name_targets = symbols.clone();
    name_targets.push(from.clone());
    name_targets.push(to.clone());
    name_targets.sort();
    name_targets.dedup();

    let resolver = NameResolver::new(&state.pool, &state.snapshots);
    let resolved = resolver.resolve(category, &name_targets, &locale).await;
    let names = names_only(&resolved);

    let display_name = |symbol: &str| {
        names
            .get(symbol)
            .cloned()
            .unwrap_or_else(|| symbol.to_string())
    };

    let ratio = convert::unit_ratio(&from, &to).ok();
    let output_value = value
        .parse::<f64>()
        .ok()
        .and_then(|v| convert::convert(v, &from, &to).ok())
        .map(|out| out.to_string());

    PagePayload {
        category: category.to_string(),
        category_name,
        from_name: display_name(&from),
        to_name: display_name(&to),
        convertible: ratio.is_some(),
        from,
        to,
        value,
        output_value,
        ratio,
        symbols: convert::supported_symbols(&symbols),
        names,
    }
}
