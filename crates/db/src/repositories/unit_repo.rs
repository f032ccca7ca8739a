//! Repository for the `unit_dictionary` and `unit_localizations` tables.

use sqlx::PgPool;

use crate::models::unit::{UnitDictionaryEntry, UnitLocalization};

/// Read-only access to the unit dictionary and its localizations.
pub struct UnitRepo;

impl UnitRepo {
    /// Distinct active symbols for a category, ascending.
    pub async fn active_symbols(
        pool: &PgPool,
        category: &str,
    ) -> Result<Vec<String>, sqlx::Error> {
        let rows: Vec<(String,)> = sqlx::query_as(
            "SELECT DISTINCT symbol FROM unit_dictionary \
             WHERE category = $1 AND is_active = true \
             ORDER BY symbol ASC \
             LIMIT 200",
        )
        .bind(category)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(|(s,)| s).collect())
    }

    /// Localization rows for the given symbols, filtered to the
    /// prioritized language candidates. Rows come back ordered by the
    /// candidate priority so the first row touched per symbol is the
    /// preferred one.
    pub async fn localized_names(
        pool: &PgPool,
        symbols: &[String],
        lang_candidates: &[String],
    ) -> Result<Vec<UnitLocalization>, sqlx::Error> {
        if symbols.is_empty() || lang_candidates.is_empty() {
            return Ok(Vec::new());
        }
        sqlx::query_as::<_, UnitLocalization>(
            "SELECT unit_symbol, lang_code, name, source_description \
             FROM unit_localizations \
             WHERE unit_symbol = ANY($1) AND lang_code = ANY($2) \
             ORDER BY array_position($2, lang_code), unit_symbol \
             LIMIT 2000",
        )
        .bind(symbols)
        .bind(lang_candidates)
        .fetch_all(pool)
        .await
    }

    /// Localized display name for a category (the `category_zh` column
    /// of any of its dictionary rows), `None` when not seeded.
    pub async fn category_display_name(
        pool: &PgPool,
        category: &str,
    ) -> Result<Option<String>, sqlx::Error> {
        let row: Option<(Option<String>,)> = sqlx::query_as(
            "SELECT category_zh FROM unit_dictionary WHERE category = $1 LIMIT 1",
        )
        .bind(category)
        .fetch_optional(pool)
        .await?;
        Ok(row.and_then(|(name,)| name))
    }

    /// All active dictionary rows, for sitemap generation. Bounded the
    /// same way the site's static-params query is.
    pub async fn active_entries(pool: &PgPool) -> Result<Vec<UnitDictionaryEntry>, sqlx::Error> {
        sqlx::query_as::<_, UnitDictionaryEntry>(
            "SELECT symbol, category, category_zh, is_active, created_at \
             FROM unit_dictionary \
             WHERE is_active = true \
             ORDER BY category ASC, symbol ASC \
             LIMIT 200",
        )
        .fetch_all(pool)
        .await
    }
}
