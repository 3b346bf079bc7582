use std::error::Error as StdError;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::catalog::CatalogError;
use crate::application::error::ErrorReport;

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorMessage,
}

pub mod codes {
    pub const INVALID_INPUT: &str = "invalid_input";
    pub const NOT_FOUND: &str = "not_found";
    pub const DEPENDENCY: &str = "dependency_error";
}

#[derive(Debug, Serialize)]
pub struct ApiErrorMessage {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

/// A wire-level error: a JSON body plus a diagnostic report.
///
/// The body never carries internal detail; the report rides in response
/// extensions for the logging middleware only.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: &'static str,
    hint: Option<String>,
    report: Option<ErrorReport>,
}

impl ApiError {
    pub fn new(
        status: StatusCode,
        code: &'static str,
        message: &'static str,
        hint: Option<String>,
    ) -> Self {
        Self {
            status,
            code,
            message,
            hint,
            report: None,
        }
    }

    pub fn from_error(
        source: &'static str,
        status: StatusCode,
        code: &'static str,
        message: &'static str,
        error: &dyn StdError,
    ) -> Self {
        Self {
            status,
            code,
            message,
            hint: None,
            report: Some(ErrorReport::from_error(source, status, error)),
        }
    }

    pub fn bad_request(message: &'static str, hint: Option<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, codes::INVALID_INPUT, message, hint)
    }

    pub fn not_found(message: &'static str) -> Self {
        Self::new(StatusCode::NOT_FOUND, codes::NOT_FOUND, message, None)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiErrorBody {
            error: ApiErrorMessage {
                code: self.code.to_string(),
                message: self.message.to_string(),
                hint: self.hint.clone(),
            },
        };
        let report = self.report.unwrap_or_else(|| {
            ErrorReport::from_message(
                "infra::http",
                self.status,
                format!(
                    "{}: {}",
                    self.code,
                    self.hint.as_deref().unwrap_or(self.message)
                ),
            )
        });
        let mut response = (self.status, Json(body)).into_response();
        report.attach(&mut response);
        response
    }
}

/// Map a catalog error to the wire taxonomy.
pub fn catalog_error_to_api(source: &'static str, err: CatalogError) -> ApiError {
    match err {
        CatalogError::Validation(validation) => {
            ApiError::bad_request("Missing required fields", Some(validation.to_string()))
        }
        CatalogError::NotFound => ApiError::not_found("asset not found"),
        dependency => ApiError::from_error(
            source,
            StatusCode::INTERNAL_SERVER_ERROR,
            codes::DEPENDENCY,
            "Service dependency failed",
            &dependency,
        ),
    }
}
