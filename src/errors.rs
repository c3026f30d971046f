use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum CatalogError {
    NotFound(String),
    InvalidCatalog(String),
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::NotFound(name) => write!(f, "Country not found: {}", name),
            CatalogError::InvalidCatalog(msg) => write!(f, "Invalid country catalog: {}", msg),
            CatalogError::Io(err) => write!(f, "Failed to read country catalog: {}", err),
            CatalogError::Parse(err) => write!(f, "Failed to parse country catalog: {}", err),
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::Io(err)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Parse(err)
    }
}

/// Raised only for tier names outside the fixed menu; a caller bug, not user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetError {
    InvalidTier(String),
}

impl fmt::Display for BudgetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BudgetError::InvalidTier(tier) => write!(
                f,
                "Invalid budget tier '{}': expected one of budget, mid_range, luxury, ultra_luxury",
                tier
            ),
        }
    }
}

impl std::error::Error for BudgetError {}

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            ApiError::BadRequest(msg) | ApiError::NotFound(msg) => msg.clone(),
            // Internal details stay in the logs
            ApiError::Internal(_) => "Something went wrong. Please try again.".to_string(),
        };
        HttpResponse::build(self.status_code()).json(json!({ "error": message }))
    }
}

impl From<BudgetError> for ApiError {
    fn from(err: BudgetError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(name) => ApiError::NotFound(format!("Unknown country: {}", name)),
            other => ApiError::Internal(other.to_string()),
        }
    }
}
