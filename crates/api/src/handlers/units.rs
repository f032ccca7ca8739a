//! Handlers for unit dictionary and localization lookups.

use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use unitconver_core::locale::DEFAULT_LOCALE;
use unitconver_db::repositories::UnitRepo;

use crate::error::AppResult;
use crate::names::{names_only, NameResolver};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /units/symbols
// ---------------------------------------------------------------------------

/// Query parameters for the symbol listing.
#[derive(Debug, Deserialize)]
pub struct SymbolsParams {
    pub category: Option<String>,
}

/// List a category's distinct active symbols, ascending.
///
/// Missing categories and store failures both degrade to an empty list;
/// the page renders its empty state rather than an error.
pub async fn list_symbols(
    State(state): State<AppState>,
    Query(params): Query<SymbolsParams>,
) -> AppResult<impl IntoResponse> {
    let category = params.category.unwrap_or_default();
    if category.is_empty() {
        return Ok(Json(DataResponse { data: Vec::new() }));
    }

    let symbols = match UnitRepo::active_symbols(&state.pool, &category).await {
        Ok(symbols) => symbols,
        Err(err) => {
            tracing::warn!(%category, error = %err, "Symbol listing failed, returning empty");
            Vec::new()
        }
    };
    tracing::debug!(%category, count = symbols.len(), "Listed symbols");
    Ok(Json(DataResponse { data: symbols }))
}

// ---------------------------------------------------------------------------
// GET /units/names
// ---------------------------------------------------------------------------

/// Query parameters for name resolution.
#[derive(Debug, Deserialize)]
pub struct NamesParams {
    /// Comma-separated symbol list.
    pub symbols: Option<String>,
    pub lang: Option<String>,
    /// Category used for the snapshot fallback layer.
    pub category: Option<String>,
}

/// Resolve display names for a comma-separated symbol list.
pub async fn resolve_names(
    State(state): State<AppState>,
    Query(params): Query<NamesParams>,
) -> AppResult<impl IntoResponse> {
    let symbols: Vec<String> = params
        .symbols
        .unwrap_or_default()
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if symbols.is_empty() {
        return Ok(Json(DataResponse {
            data: HashMap::new(),
        }));
    }

    let lang = params.lang.unwrap_or_else(|| DEFAULT_LOCALE.to_string());
    let category = params.category.unwrap_or_default();

    let resolver = NameResolver::new(&state.pool, &state.snapshots);
    let resolved = resolver.resolve(&category, &symbols, &lang).await;

    Ok(Json(DataResponse {
        data: names_only(&resolved),
    }))
}
