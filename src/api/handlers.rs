//! HTTP request handlers for the PTO Optimization Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::optimizer::{OptimizeParams, optimize};

use super::request::OptimizationRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/optimize", post(optimize_handler))
        .with_state(state)
}

/// Handler for POST /optimize endpoint.
///
/// Accepts an optimization request and returns the computed plan.
async fn optimize_handler(
    State(state): State<AppState>,
    payload: Result<Json<OptimizationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing optimization request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Convert request types to domain types
    let params: OptimizeParams = request.into();
    let config = state.config().config();

    let start_time = Instant::now();
    match optimize(&params, config) {
        Ok(result) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                plan_id = %result.plan_id,
                year = result.year,
                strategy = %result.strategy,
                breaks = result.breaks.len(),
                total_days_off = result.stats.total_days_off,
                duration_us = duration.as_micros(),
                "Optimization completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Optimization failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::models::OptimizationResult;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use chrono::{Datelike, Utc};
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        AppState::new(ConfigLoader::with_defaults())
    }

    /// A year whose planning window is guaranteed to be fully ahead of the
    /// wall clock the tests run under.
    fn next_year() -> i32 {
        Utc::now().year() + 1
    }

    fn valid_request_body() -> String {
        serde_json::json!({
            "year": next_year(),
            "ptoBudget": 10,
            "strategy": "balanced",
            "holidays": [
                { "date": format!("{}-12-25", next_year()), "name": "Christmas Day" }
            ]
        })
        .to_string()
    }

    async fn post_optimize(body: impl Into<Body>) -> axum::response::Response {
        let router = create_router(create_test_state());
        router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/optimize")
                    .header("Content-Type", "application/json")
                    .body(body.into())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_api_001_valid_request_returns_200() {
        let response = post_optimize(valid_request_body()).await;

        assert_eq!(response.status(), StatusCode::OK);

        // Verify Content-Type header
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        // Verify response body is a valid OptimizationResult
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let result: OptimizationResult = serde_json::from_slice(&body).unwrap();

        assert_eq!(result.year, next_year());
        assert!(!result.breaks.is_empty());
        assert_eq!(result.stats.total_pto_days, 10);
    }

    #[tokio::test]
    async fn test_api_002_malformed_json_returns_400() {
        let response = post_optimize("{invalid json").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();

        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_api_003_missing_budget_returns_400() {
        let body = serde_json::json!({
            "year": next_year(),
            "strategy": "balanced"
        })
        .to_string();

        let response = post_optimize(body).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();

        // serde reports the missing camelCase field
        assert!(
            error.message.contains("missing field")
                || error.message.to_lowercase().contains("ptobudget"),
            "Expected error message to mention the missing field, got: {}",
            error.message
        );
    }

    #[tokio::test]
    async fn test_api_004_zero_budget_returns_400() {
        let body = serde_json::json!({
            "year": next_year(),
            "ptoBudget": 0,
            "strategy": "balanced"
        })
        .to_string();

        let response = post_optimize(body).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();

        assert_eq!(error.code, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_api_005_oversized_budget_returns_422() {
        let body = serde_json::json!({
            "year": next_year(),
            "ptoBudget": 300,
            "strategy": "balanced"
        })
        .to_string();

        let response = post_optimize(body).await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();

        assert_eq!(error.code, "INFEASIBLE_BUDGET");
    }

    #[tokio::test]
    async fn test_api_006_every_strategy_is_accepted() {
        for strategy in [
            "balanced",
            "longWeekends",
            "miniBreaks",
            "weekLongBreaks",
            "extendedVacations",
        ] {
            let body = serde_json::json!({
                "year": next_year(),
                "ptoBudget": 8,
                "strategy": strategy
            })
            .to_string();

            let response = post_optimize(body).await;
            assert_eq!(
                response.status(),
                StatusCode::OK,
                "strategy {strategy} was rejected"
            );
        }
    }

    #[tokio::test]
    async fn test_response_uses_camel_case_keys() {
        let response = post_optimize(valid_request_body()).await;
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();

        assert!(text.contains("\"planId\""));
        assert!(text.contains("\"engineVersion\""));
        assert!(text.contains("\"totalDaysOff\""));
        assert!(text.contains("\"ptoDays\""));
    }
}
