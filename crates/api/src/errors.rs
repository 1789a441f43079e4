use axum::{
    http::StatusCode,
    response::{IntoResponse, Response, Json},
};
use thiserror::Error;

use crate::models::{ErrorResponse, ErrorDetail};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("The image '{image}' is not supported")]
    UnsupportedImage {
        image: String,
        supported: Vec<String>,
    },

    #[error("The version '{version}' is not valid semver")]
    InvalidVersion { version: String },

    #[error("Route not found")]
    RouteNotFound,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            ApiError::UnsupportedImage { image, supported } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: ErrorDetail {
                        code: "UNSUPPORTED_IMAGE".to_string(),
                        message: format!(
                            "The image '{}' is not supported. Supported images: {}.",
                            image,
                            supported.join(", ")
                        ),
                        supported_images: Some(supported),
                    },
                },
            ),
            ApiError::InvalidVersion { version } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: ErrorDetail {
                        code: "INVALID_VERSION".to_string(),
                        message: format!("The version '{}' is not valid semver.", version),
                        supported_images: None,
                    },
                },
            ),
            ApiError::RouteNotFound => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    error: ErrorDetail {
                        code: "ROUTE_NOT_FOUND".to_string(),
                        message: "Expected a path of the form /{image}/{version}".to_string(),
                        supported_images: None,
                    },
                },
            ),
        };

        (status, Json(error_response)).into_response()
    }
}
