//! Conversion usage-log models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use unitconver_core::types::Timestamp;

/// A row from the `unit_conversion_logs` table.
///
/// The natural key is (from_unit, input_value, to_unit, output_value,
/// lang_code) -- exact string match on all five fields, no numeric
/// normalization, so "1.50" and "1.5" are distinct rows. Values are
/// stored as the text the user entered / the engine emitted.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct UnitConversionLog {
    pub from_unit: String,
    pub input_value: String,
    pub to_unit: String,
    pub output_value: String,
    pub lang_code: String,
    pub conversion_count: i32,
    pub first_seen_at: Option<Timestamp>,
    pub last_seen_at: Option<Timestamp>,
}

impl UnitConversionLog {
    /// The five-field natural key, used for dedup when merging query
    /// results.
    pub fn natural_key(&self) -> (String, String, String, String, String) {
        (
            self.from_unit.clone(),
            self.input_value.clone(),
            self.to_unit.clone(),
            self.output_value.clone(),
            self.lang_code.clone(),
        )
    }
}

/// DTO for submitting one conversion to the log store. Counter and
/// timestamps are owned by the store, not the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct NewConversionLog {
    pub from_unit: String,
    pub input_value: String,
    pub to_unit: String,
    pub output_value: String,
    pub lang_code: String,
}
