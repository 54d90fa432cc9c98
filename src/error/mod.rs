use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failures of the fetch-and-extract flow.
///
/// Extraction itself never fails; malformed HTML degrades to empty fields.
#[derive(Error, Debug)]
pub enum SummaryError {
    #[error("Invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Failed to fetch {url}: {source}")]
    FetchFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

pub type SummaryResult<T> = Result<T, SummaryError>;

/// Transport-level errors. `NotFound` and `BadRequest` carry no body.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found")]
    NotFound,

    #[error("Bad request")]
    BadRequest,

    #[error("Authentication error: {0}")]
    Auth(String),
}

/// Every core failure surfaces as the same bodiless 400. The match is kept
/// exhaustive so a new failure kind has to be mapped here explicitly.
impl From<SummaryError> for AppError {
    fn from(e: SummaryError) -> Self {
        match e {
            SummaryError::InvalidUrl { ref url, ref source } => {
                tracing::debug!(url = %url, error = %source, "Rejected invalid URL");
                AppError::BadRequest
            }
            SummaryError::FetchFailed { ref url, ref source } => {
                tracing::warn!(url = %url, error = ?source, "Failed to fetch URL for summary");
                AppError::BadRequest
            }
            SummaryError::Client(ref source) => {
                tracing::error!(error = ?source, "HTTP client unavailable");
                AppError::BadRequest
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND.into_response(),
            AppError::BadRequest => StatusCode::BAD_REQUEST.into_response(),
            AppError::Auth(msg) => {
                (StatusCode::UNAUTHORIZED, Json(json!({ "error": msg }))).into_response()
            }
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
