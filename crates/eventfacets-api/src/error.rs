use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use eventfacets_core::FacetsError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Facets error: {0}")]
    Facets(#[from] FacetsError),

    #[error("Not found")]
    NotFound,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::Facets(ref err) => match err {
                // Capability failures hide the resource instead of
                // acknowledging it exists.
                FacetsError::AuthorizationDenied => (StatusCode::NOT_FOUND, self.to_string()),
                FacetsError::NoProjects
                | FacetsError::InvalidProjects(_)
                | FacetsError::CrossProjectRestricted
                | FacetsError::InvalidQuery(_)
                | FacetsError::OutsideRetention(_) => (StatusCode::BAD_REQUEST, err.to_string()),
                FacetsError::Engine(_) => (StatusCode::SERVICE_UNAVAILABLE, err.to_string()),
                FacetsError::Io(_) | FacetsError::Serialization(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
                }
            },
            ApiError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
