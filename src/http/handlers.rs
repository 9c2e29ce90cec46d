//! HTTP handlers for the REST API.
//!
//! Each handler delegates to the service layer and forwards its result
//! verbatim as JSON. Requests missing required inputs are answered with
//! HTTP 400 via [`AppError`]; a structurally valid request whose
//! computation fails still answers HTTP 200 with an error-status body,
//! because the pipeline reports failures as data.

use axum::{extract::Query, http::StatusCode, Json};
use chrono::{SecondsFormat, Utc};

use super::dto::{ChartRequest, HealthResponse, WeekdayRequest};
use super::error::AppError;
use crate::models::{BirthDescriptor, ChartResult, WeekdayResult};
use crate::services;

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: "Astrowise-API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
    })
}

/// POST /v1/chart — birth descriptor in the JSON body.
pub async fn calc_chart_post(
    Json(request): Json<ChartRequest>,
) -> Result<Json<ChartResult>, AppError> {
    chart_response(request.into())
}

/// GET /v1/chart — birth descriptor in the query string.
pub async fn calc_chart_get(
    Query(request): Query<ChartRequest>,
) -> Result<Json<ChartResult>, AppError> {
    chart_response(request.into())
}

fn chart_response(birth: BirthDescriptor) -> Result<Json<ChartResult>, AppError> {
    // An incomplete descriptor is a caller error (400); everything
    // downstream is reported inside the chart body with a 200.
    birth.validated().map_err(AppError::from)?;
    Ok(Json(services::calc_astro_chart(&birth)))
}

/// GET /v1/weekday?date=...
pub async fn weekday_get(
    Query(request): Query<WeekdayRequest>,
) -> Result<(StatusCode, Json<WeekdayResult>), AppError> {
    weekday_response(request)
}

/// POST /v1/weekday — `{"date": "..."}` body.
pub async fn weekday_post(
    Json(request): Json<WeekdayRequest>,
) -> Result<(StatusCode, Json<WeekdayResult>), AppError> {
    weekday_response(request)
}

fn weekday_response(
    request: WeekdayRequest,
) -> Result<(StatusCode, Json<WeekdayResult>), AppError> {
    let date = request.date.unwrap_or_default();
    if date.trim().is_empty() {
        return Err(AppError::BadRequest("date parameter is required".into()));
    }
    let result = services::resolve_weekday(&date);
    let status = match result {
        WeekdayResult::Ok { .. } => StatusCode::OK,
        WeekdayResult::Error { .. } => StatusCode::BAD_REQUEST,
    };
    Ok((status, Json(result)))
}
