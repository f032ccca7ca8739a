//! Category-scoped feeds: recent conversions, the aside widget, and
//! "you may also want" pairs.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use unitconver_core::locale::DEFAULT_LOCALE;
use unitconver_core::recommend::{self, DEFAULT_MAX_PAIRS};
use unitconver_core::{convert, slug};
use unitconver_db::models::conversion_log::UnitConversionLog;
use unitconver_db::repositories::conversion_log_repo::RECENT_DEFAULT_LIMIT;
use unitconver_db::repositories::{ConversionLogRepo, UnitRepo};

use crate::error::AppResult;
use crate::names::{names_only, NameResolver};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Shared lookups
// ---------------------------------------------------------------------------

/// Active dictionary symbols, falling back to the category snapshot
/// when the store errors or the dictionary has no rows.
pub(crate) async fn category_symbols(state: &AppState, category: &str) -> Vec<String> {
    match UnitRepo::active_symbols(&state.pool, category).await {
        Ok(symbols) if !symbols.is_empty() => symbols,
        Ok(_) | Err(_) => match state.snapshots.get(category).await {
            Some(snapshot) => {
                let mut symbols = snapshot.symbols.clone();
                symbols.sort();
                symbols.dedup();
                symbols
            }
            None => Vec::new(),
        },
    }
}

/// Recent log rows for a symbol set; store failures yield an empty feed.
async fn recent_logs(state: &AppState, symbols: &[String], limit: i64) -> Vec<UnitConversionLog> {
    match ConversionLogRepo::recent_for_units(&state.pool, symbols, limit).await {
        Ok(logs) => logs,
        Err(err) => {
            tracing::warn!(error = %err, "Recent-conversion lookup failed, returning empty feed");
            Vec::new()
        }
    }
}

// ---------------------------------------------------------------------------
// GET /categories/{category}/recent
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct RecentParams {
    pub limit: Option<i64>,
}

/// Recency-ordered usage log rows touching the category's units.
pub async fn recent(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Query(params): Query<RecentParams>,
) -> AppResult<impl IntoResponse> {
    let limit = params.limit.unwrap_or(RECENT_DEFAULT_LIMIT);
    let symbols = category_symbols(&state, &category).await;
    let logs = recent_logs(&state, &symbols, limit).await;
    tracing::debug!(%category, count = logs.len(), "Recent feed");
    Ok(Json(DataResponse { data: logs }))
}

// ---------------------------------------------------------------------------
// GET /categories/{category}/aside
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct AsideParams {
    pub locale: Option<String>,
}

/// The aside widget payload: recent logs plus display names for every
/// unit the widget will render.
#[derive(Debug, Serialize)]
pub struct AsideFeed {
    pub logs: Vec<UnitConversionLog>,
    pub names: HashMap<String, String>,
}

/// Build the aside feed: recent logs joined with resolved names over
/// {category symbols} ∪ {units appearing in the logs}.
pub async fn aside(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Query(params): Query<AsideParams>,
) -> AppResult<impl IntoResponse> {
    let locale = params.locale.unwrap_or_else(|| DEFAULT_LOCALE.to_string());

    let symbols = category_symbols(&state, &category).await;
    let logs = recent_logs(&state, &symbols, RECENT_DEFAULT_LIMIT).await;

    let mut name_targets = symbols.clone();
    for log in &logs {
        name_targets.push(log.from_unit.clone());
        name_targets.push(log.to_unit.clone());
    }
    name_targets.sort();
    name_targets.dedup();

    let resolver = NameResolver::new(&state.pool, &state.snapshots);
    let resolved = resolver.resolve(&category, &name_targets, &locale).await;

    Ok(Json(DataResponse {
        data: AsideFeed {
            logs,
            names: names_only(&resolved),
        },
    }))
}

// ---------------------------------------------------------------------------
// GET /categories/{category}/pairs
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct PairsParams {
    pub max: Option<usize>,
    pub locale: Option<String>,
}

/// One recommendation entry, display-ready.
#[derive(Debug, Serialize)]
pub struct RecommendedPair {
    pub from: String,
    pub to: String,
    pub from_name: String,
    pub to_name: String,
    pub slug: String,
}

/// "You may also want" pairs over the category's convertible symbols.
pub async fn pairs(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Query(params): Query<PairsParams>,
) -> AppResult<impl IntoResponse> {
    let max = params.max.unwrap_or(DEFAULT_MAX_PAIRS).min(DEFAULT_MAX_PAIRS);
    let locale = params.locale.unwrap_or_else(|| DEFAULT_LOCALE.to_string());

    let symbols = category_symbols(&state, &category).await;
    let supported = convert::supported_symbols(&symbols);
    let pairs = recommend::build_pairs(&supported, max);

    let resolver = NameResolver::new(&state.pool, &state.snapshots);
    let resolved = resolver.resolve(&category, &supported, &locale).await;
    let names = names_only(&resolved);

    let display_name = |symbol: &str| {
        names
            .get(symbol)
            .cloned()
            .unwrap_or_else(|| symbol.to_string())
    };

    let data: Vec<RecommendedPair> = pairs
        .into_iter()
        .map(|p| RecommendedPair {
            slug: slug::encode_pair(&p.from, &p.to),
            from_name: display_name(&p.from),
            to_name: display_name(&p.to),
            from: p.from,
            to: p.to,
        })
        .collect();

    tracing::debug!(%category, count = data.len(), "Recommendation pairs");
    Ok(Json(DataResponse { data }))
}
