use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::alerts::AlertError;
use crate::data::DataError;
use crate::store::StoreError;

/// Everything a handler can fail with, mapped onto plain
/// `(status, Json<String>)` bodies.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Unauthorized access")]
    Unauthorized,
    #[error("Insufficient funds")]
    InsufficientFunds,
    #[error("Quantity must be at least 1")]
    InvalidQuantity,
    #[error("Unknown symbol: {0}")]
    UnknownSymbol(String),
    #[error("No such alert: {0}")]
    UnknownAlert(String),
    #[error(transparent)]
    Alert(#[from] AlertError),
    #[error("Profile store error: {0}")]
    Store(#[from] StoreError),
    #[error("Market data error: {0}")]
    Data(#[from] DataError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::InsufficientFunds | ApiError::InvalidQuantity | ApiError::Alert(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::UnknownSymbol(_) | ApiError::UnknownAlert(_) => StatusCode::NOT_FOUND,
            ApiError::Store(_) | ApiError::Data(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        }
        (status, Json(self.to_string())).into_response()
    }
}
