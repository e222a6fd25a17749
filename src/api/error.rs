use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::db::repo::StoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Please provide name and bio for the user.")]
    MissingFields,
    #[error("{0}")]
    MalformedBody(String),
    #[error("The user with the specified ID does not exist.")]
    NotFound,
    /// Same as `NotFound`, but reported under `message`. Delete and update
    /// have always answered this way.
    #[error("The user with the specified ID does not exist.")]
    NotFoundMessage,
    /// A rejected create. Reported as a client error.
    #[error("Error: {0}")]
    WriteRejected(StoreError),
    #[error("{0}")]
    Internal(&'static str),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingFields | ApiError::MalformedBody(_) | ApiError::WriteRejected(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound | ApiError::NotFoundMessage => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message_key(&self) -> &'static str {
        match self {
            ApiError::NotFoundMessage => "message",
            _ => "errorMessage",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut body = Map::new();
        body.insert("success".to_string(), Value::Bool(false));
        body.insert(self.message_key().to_string(), Value::String(self.to_string()));
        (self.status_code(), Json(Value::Object(body))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::MissingFields.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::NotFoundMessage.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::WriteRejected(StoreError::from(sqlx::Error::PoolClosed)).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Internal("boom").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_message_keys() {
        assert_eq!(ApiError::NotFound.message_key(), "errorMessage");
        assert_eq!(ApiError::NotFoundMessage.message_key(), "message");
        assert_eq!(ApiError::MissingFields.message_key(), "errorMessage");
    }

    #[test]
    fn test_write_rejected_prefix() {
        let err = ApiError::WriteRejected(StoreError::from(sqlx::Error::PoolClosed));
        assert!(err.to_string().starts_with("Error: "));
    }
}
