use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::db::trades::TradeError;
use crate::models::FieldError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),
    #[error("Invalid column '{0}'")]
    InvalidColumn(String),
    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    DatabaseError(#[from] sqlx::Error),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MissingFields(_) | ApiError::InvalidColumn(_) | ApiError::InvalidValue { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::DatabaseError(err) => {
                // details stay in the server log
                tracing::error!("Database error: {}", err);
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response();
            }
        };

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}

impl From<FieldError> for ApiError {
    fn from(err: FieldError) -> Self {
        match err {
            FieldError::InvalidColumn(column) => ApiError::InvalidColumn(column),
            FieldError::InvalidValue { column, reason } => ApiError::InvalidValue { field: column, reason },
        }
    }
}

impl From<TradeError> for ApiError {
    fn from(err: TradeError) -> Self {
        match err {
            TradeError::Database(err) => ApiError::DatabaseError(err),
            other => ApiError::NotFound(other.to_string()),
        }
    }
}
