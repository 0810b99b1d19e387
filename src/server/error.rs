//! HTTP error conversion (spec.md §7).

use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;

use crate::core::AnalysisError;

/// Transport-level error, covering both request validation failures and
/// core analysis failures surfaced through the HTTP API.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    PayloadTooLarge(String),
    Core(AnalysisError),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadRequest(m) => write!(f, "bad request: {m}"),
            Self::PayloadTooLarge(m) => write!(f, "payload too large: {m}"),
            Self::Core(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ApiError {}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        let body = ErrorBody { message: self.to_string() };
        match self {
            Self::BadRequest(_) => HttpResponse::BadRequest().json(body),
            Self::PayloadTooLarge(_) => HttpResponse::PayloadTooLarge().json(body),
            Self::Core(AnalysisError::MalformedInput(_)) => HttpResponse::BadRequest().json(body),
            Self::Core(AnalysisError::LimitExceeded(_)) => HttpResponse::PayloadTooLarge().json(body),
            Self::Core(AnalysisError::StopwordsUnavailable(_)) => {
                HttpResponse::InternalServerError().json(body)
            }
            Self::Core(AnalysisError::AllocationFailure(_)) => {
                HttpResponse::InternalServerError().json(body)
            }
            Self::Core(AnalysisError::PipelineFailure(_)) => HttpResponse::InternalServerError().json(body),
            Self::Core(AnalysisError::Timeout) => HttpResponse::ServiceUnavailable().json(body),
        }
    }
}

impl From<AnalysisError> for ApiError {
    fn from(err: AnalysisError) -> Self {
        Self::Core(err)
    }
}
