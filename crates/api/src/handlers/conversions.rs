//! The conversion endpoint: compute, explain, and log.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use unitconver_core::locale::DEFAULT_LOCALE;
use unitconver_core::{convert, slug, CoreError};
use unitconver_db::models::conversion_log::NewConversionLog;
use unitconver_db::repositories::ConversionLogRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for POST /conversions.
///
/// The value arrives as a decimal string and is preserved verbatim in
/// the usage log; only the arithmetic goes through `f64`.
#[derive(Debug, Deserialize)]
pub struct ConvertRequest {
    pub from: String,
    pub to: String,
    pub value: String,
    pub lang_code: Option<String>,
}

/// Response payload for a successful conversion.
#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    pub from: String,
    pub to: String,
    pub input_value: String,
    pub output_value: String,
    /// `1 from = ratio to`, for the explanatory line.
    pub ratio: f64,
    pub pair_slug: String,
    pub value_pair_slug: String,
}

// ---------------------------------------------------------------------------
// POST /conversions
// ---------------------------------------------------------------------------

/// Perform a conversion and record it in the usage log.
///
/// Incompatible units return 422 and write nothing. A failed log write
/// never fails the conversion; the result is returned and the error is
/// logged.
pub async fn create_conversion(
    State(state): State<AppState>,
    Json(input): Json<ConvertRequest>,
) -> AppResult<impl IntoResponse> {
    if input.from.is_empty() || input.to.is_empty() {
        return Err(AppError::BadRequest("from and to units are required".into()));
    }
    let value: f64 = input.value.trim().parse().map_err(|_| {
        CoreError::Validation(format!("Invalid numeric value: '{}'", input.value))
    })?;

    let output = convert::convert(value, &input.from, &input.to)?;
    let ratio = convert::unit_ratio(&input.from, &input.to)?;

    let lang_code = input
        .lang_code
        .clone()
        .unwrap_or_else(|| DEFAULT_LOCALE.to_string());
    let output_value = output.to_string();

    let entry = NewConversionLog {
        from_unit: input.from.clone(),
        input_value: input.value.clone(),
        to_unit: input.to.clone(),
        output_value: output_value.clone(),
        lang_code,
    };
    if let Err(err) = ConversionLogRepo::record(&state.pool, &entry).await {
        tracing::warn!(
            from = %entry.from_unit,
            to = %entry.to_unit,
            error = %err,
            "Usage log write failed, returning result anyway"
        );
    } else {
        tracing::debug!(from = %entry.from_unit, to = %entry.to_unit, "Conversion logged");
    }

    Ok(Json(DataResponse {
        data: ConvertResponse {
            pair_slug: slug::encode_pair(&input.from, &input.to),
            value_pair_slug: slug::encode_value_pair(&input.value, &input.from, &input.to),
            from: input.from,
            to: input.to,
            input_value: input.value,
            output_value,
            ratio,
        },
    }))
}
