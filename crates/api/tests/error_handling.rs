//! Unit-level tests for the `AppError` -> HTTP response mapping.
//!
//! No database needed: these construct errors directly and check the
//! status code and JSON body produced by `IntoResponse`.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;

use unitconver_api::error::AppError;
use unitconver_core::error::CoreError;

async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn incompatible_units_map_to_422() {
    let err = AppError::Core(CoreError::IncompatibleUnits {
        from: "m".into(),
        to: "kg".into(),
    });
    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["code"], "INCOMPATIBLE_UNITS");
    let message = json["error"].as_str().unwrap();
    assert!(message.contains('m') && message.contains("kg"));
}

#[tokio::test]
async fn validation_error_maps_to_400() {
    let err = AppError::Core(CoreError::Validation("value out of range".into()));
    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "value out of range");
}

#[tokio::test]
async fn bad_request_maps_to_400() {
    let err = AppError::BadRequest("from and to units are required".into());
    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn row_not_found_maps_to_404() {
    let err = AppError::Database(sqlx::Error::RowNotFound);
    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn internal_errors_are_sanitized() {
    let err = AppError::InternalError("connection pool exhausted at 10.0.0.3".into());
    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    // Internals never leak into the response body.
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn core_internal_errors_are_sanitized() {
    let err = AppError::Core(CoreError::Internal("bad measure table state".into()));
    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}
