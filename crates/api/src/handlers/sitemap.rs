//! Sitemap URL generation.
//!
//! Emits category and pair URLs for every locale, plus value-pair URLs
//! reconstructed from the usage log (a page that was converted once is
//! a page worth indexing).

use std::collections::BTreeMap;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use unitconver_core::recommend::build_pairs;
use unitconver_core::slug;
use unitconver_core::types::Timestamp;
use unitconver_db::repositories::{ConversionLogRepo, UnitRepo};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

const LOCALES: &[&str] = &["zh", "en"];

/// Cap on value-pair URLs reconstructed from the usage log.
const MAX_LOG_URLS: i64 = 100;

#[derive(Debug, Serialize)]
pub struct SitemapUrl {
    pub url: String,
    pub change_frequency: &'static str,
    pub priority: f64,
    pub last_modified: Timestamp,
}

#[derive(Debug, Serialize)]
pub struct SitemapPayload {
    pub urls: Vec<SitemapUrl>,
}

// ---------------------------------------------------------------------------
// GET /sitemap
// ---------------------------------------------------------------------------

/// Generate the sitemap URL list from the dictionary and usage log.
pub async fn sitemap(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let origin = &state.config.site_origin;

    let entries = UnitRepo::active_entries(&state.pool).await?;
    let mut by_category: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for entry in entries {
        let symbols = by_category.entry(entry.category).or_default();
        if !symbols.contains(&entry.symbol) {
            symbols.push(entry.symbol);
        }
    }

    let now = Utc::now();
    let mut urls = Vec::new();

    for locale in LOCALES {
        for (category, symbols) in &by_category {
            let encoded_category = urlencoding::encode(category);
            urls.push(entry(
                format!("{origin}/{locale}/{encoded_category}"),
                now,
            ));
            // All unordered pairs; the 200-row dictionary cap bounds this.
            for pair in build_pairs(symbols, usize::MAX) {
                urls.push(entry(
                    format!(
                        "{origin}/{locale}/{encoded_category}/{}",
                        slug::encode_pair(&pair.from, &pair.to)
                    ),
                    now,
                ));
            }
        }
    }

    // Value-pair URLs for conversions users actually performed.
    let all_symbols: Vec<String> = by_category.values().flatten().cloned().collect();
    let logs = match ConversionLogRepo::recent_for_units(&state.pool, &all_symbols, MAX_LOG_URLS)
        .await
    {
        Ok(logs) => logs,
        Err(err) => {
            tracing::warn!(error = %err, "Sitemap log lookup failed, skipping value-pair URLs");
            Vec::new()
        }
    };
    for log in logs {
        let Some(category) = by_category
            .iter()
            .find(|(_, symbols)| symbols.contains(&log.from_unit) && symbols.contains(&log.to_unit))
            .map(|(category, _)| category)
        else {
            continue;
        };
        let encoded_category = urlencoding::encode(category);
        let pair = slug::encode_pair(&log.from_unit, &log.to_unit);
        let value_pair = slug::encode_value_pair(&log.input_value, &log.from_unit, &log.to_unit);
        urls.push(entry(
            format!(
                "{origin}/{}/{encoded_category}/{pair}/{value_pair}",
                log.lang_code
            ),
            now,
        ));
    }

    tracing::debug!(count = urls.len(), "Sitemap generated");
    Ok(Json(DataResponse {
        data: SitemapPayload { urls },
    }))
}

fn entry(url: String, now: Timestamp) -> SitemapUrl {
    SitemapUrl {
        url,
        change_frequency: "daily",
        priority: 0.8,
        last_modified: now,
    }
}
