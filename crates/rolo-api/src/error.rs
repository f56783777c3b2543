//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use rolo_core::validate::Violations;
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  /// Validation rejected the candidate. Rendered as 422 with the violation
  /// map so the submitter can redisplay the offending fields.
  #[error("validation failed: {0}")]
  Invalid(Violations),

  #[error("not found: {0}")]
  NotFound(String),

  #[error("conflict: {0}")]
  Conflict(String),
}

impl ApiError {
  /// Map a backend error through the core error type.
  pub fn from_store<E>(err: E) -> Self
  where
    rolo_core::Error: From<E>,
  {
    rolo_core::Error::from(err).into()
  }
}

impl From<rolo_core::Error> for ApiError {
  fn from(err: rolo_core::Error) -> Self {
    match err {
      rolo_core::Error::Invalid(violations) => ApiError::Invalid(violations),
      rolo_core::Error::ContactNotFound(id) => {
        ApiError::NotFound(format!("contact {id} not found"))
      }
      other @ (rolo_core::Error::SentinelContact
      | rolo_core::Error::IdTaken(_)) => ApiError::Conflict(other.to_string()),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match self {
      ApiError::Invalid(violations) => (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({ "errors": violations })),
      )
        .into_response(),
      ApiError::NotFound(message) => {
        (StatusCode::NOT_FOUND, Json(json!({ "error": message })))
          .into_response()
      }
      ApiError::Conflict(message) => {
        (StatusCode::CONFLICT, Json(json!({ "error": message })))
          .into_response()
      }
    }
  }
}
