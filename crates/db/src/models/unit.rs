//! Unit dictionary and localization models.

use serde::Serialize;
use sqlx::FromRow;
use unitconver_core::types::Timestamp;

/// A row from the `unit_dictionary` table.
///
/// One row per symbol per category. Seeded and administered out of
/// band; the service only ever reads it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UnitDictionaryEntry {
    pub symbol: String,
    pub category: String,
    /// Localized (Chinese) category label, when seeded.
    pub category_zh: Option<String>,
    pub is_active: Option<bool>,
    pub created_at: Option<Timestamp>,
}

/// A row from the `unit_localizations` table.
///
/// Many rows may exist per symbol, one per `lang_code` variant
/// (e.g. "zh" and "zh-CN").
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UnitLocalization {
    pub unit_symbol: String,
    pub lang_code: String,
    pub name: String,
    pub source_description: Option<String>,
}
