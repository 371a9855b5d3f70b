//! HTTP response handling for errors

use super::types::GateError;
use actix_web::http::StatusCode;
use actix_web::http::header::{CACHE_CONTROL, LOCATION};
use actix_web::{HttpResponse, ResponseError};

impl ResponseError for GateError {
    fn status_code(&self) -> StatusCode {
        match self {
            GateError::Unauthenticated { .. } | GateError::Forbidden { .. } => {
                StatusCode::TEMPORARY_REDIRECT
            }
            GateError::IdentityProvider(_) | GateError::HttpClient(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        self.response_for(None)
    }
}

impl GateError {
    /// Render the error, tagging the JSON envelope with `request_id` when known
    pub fn response_for(&self, request_id: Option<&str>) -> HttpResponse {
        // Denials carry no body; the page never starts rendering.
        if let Some(location) = self.redirect_location() {
            return HttpResponse::build(self.status_code())
                .insert_header((LOCATION, location))
                .insert_header((CACHE_CONTROL, "no-store"))
                .finish();
        }

        let (error_code, message) = match self {
            GateError::EmptyRequirement => ("GATE_MISCONFIGURED", self.to_string()),
            GateError::IdentityProvider(_) => {
                ("IDENTITY_PROVIDER_ERROR", "Identity provider failed".to_string())
            }
            GateError::HttpClient(_) => ("UPSTREAM_ERROR", "Upstream request failed".to_string()),
            GateError::Config(_) | GateError::Validation(_) => ("CONFIG_ERROR", self.to_string()),
            GateError::Jwt(_) => ("TOKEN_ERROR", "Token processing failed".to_string()),
            _ => ("INTERNAL_ERROR", "An internal error occurred".to_string()),
        };

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: error_code.to_string(),
                message,
                timestamp: chrono::Utc::now().timestamp(),
                request_id: request_id.map(str::to_string),
            },
        };

        HttpResponse::build(self.status_code()).json(error_response)
    }
}

/// Standard error response format
#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(serde::Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub timestamp: i64,
    pub request_id: Option<String>,
}
