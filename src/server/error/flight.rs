use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Domain errors raised by flight operations.
#[derive(Error, Debug, PartialEq)]
pub enum FlightError {
    /// No flight row exists for the requested id.
    ///
    /// Results in 404 Not Found.
    #[error("No Flight with Id: {0}")]
    NotFound(i32),
}

impl IntoResponse for FlightError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
        }
    }
}
