//! API handlers

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::error::Error;
use crate::route::{self, RouteRequest, RouteResponse};

/// Name reported by the health endpoint
const SERVICE_NAME: &str = "Entrepreneur Router";

/// Liveness message served at the root
const ROOT_MESSAGE: &str = "Entrepreneur Router API работает!";

/// Liveness check
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: ROOT_MESSAGE.to_string(),
    })
}

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: String,
}

/// Health check; no dependencies to probe, always healthy
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

/// Calculate a route for the submitted addresses
pub async fn calculate_route(
    Json(request): Json<RouteRequest>,
) -> Result<Json<RouteResponse>, ApiError> {
    tracing::debug!(
        stops = request.addresses.len(),
        optimize_by = %request.optimize_by,
        "Calculating route"
    );

    let response = route::plan_route(&request)?;

    Ok(Json(response))
}

/// API-boundary error: HTTP status plus the detail message for the body.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            detail: msg.into(),
        }
    }

    fn internal(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            detail: msg.into(),
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidRequest(detail) => ApiError::bad_request(detail),
            Error::Internal(detail) => ApiError::internal(format!("Ошибка: {}", detail)),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({
            "detail": self.detail,
        }));
        (self.status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_request_maps_to_bad_request() {
        let api_err = ApiError::from(Error::invalid_request("Список адресов пуст"));

        assert_eq!(api_err.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_err.detail, "Список адресов пуст");
    }

    #[test]
    fn test_internal_fault_detail_carries_error_prefix() {
        let api_err = ApiError::from(Error::internal("boom"));

        assert_eq!(api_err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_err.detail, "Ошибка: boom");
    }
}
