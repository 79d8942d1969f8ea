//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Every variant renders as `{"error": "<message>"}` with a fixed message.
//! Store and internal failures are logged here and never echoed to the
//! caller.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use renvest_core::{candidate::Violations, email::NormalizedEmail};
use serde_json::json;
use thiserror::Error;

pub const MISSING_FIELDS: &str = "Missing fields";
pub const INVALID_FIELDS: &str = "Invalid fields";
pub const EMAIL_EXISTS: &str = "Email already exists";
pub const DATABASE_ERROR: &str = "Database error";
pub const INTERNAL_ERROR: &str = "Internal error";

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  /// The submission body was incomplete or ill-typed.
  #[error(transparent)]
  Validation(#[from] Violations),

  /// A contact with this normalized email already exists.
  #[error("email already exists: {0}")]
  Conflict(NormalizedEmail),

  /// The duplicate lookup could not be performed.
  #[error("store error: {0}")]
  Store(#[source] BoxError),

  /// Anything else, including undecodable bodies.
  #[error("internal error: {0}")]
  Internal(#[source] BoxError),
}

impl ApiError {
  pub fn status(&self) -> StatusCode {
    match self {
      ApiError::Validation(_) => StatusCode::BAD_REQUEST,
      ApiError::Conflict(_) => StatusCode::CONFLICT,
      ApiError::Store(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  /// The message returned to the caller.
  pub fn public_message(&self) -> &'static str {
    match self {
      ApiError::Validation(v) if v.any_missing() => MISSING_FIELDS,
      ApiError::Validation(_) => INVALID_FIELDS,
      ApiError::Conflict(_) => EMAIL_EXISTS,
      ApiError::Store(_) => DATABASE_ERROR,
      ApiError::Internal(_) => INTERNAL_ERROR,
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match &self {
      ApiError::Validation(v) => tracing::debug!(violations = %v, "rejected submission"),
      ApiError::Conflict(email) => tracing::info!(%email, "duplicate contact rejected"),
      ApiError::Store(e) => tracing::error!(error = %e, "contact lookup failed"),
      ApiError::Internal(e) => tracing::error!(error = %e, "contact submission failed"),
    }
    let status = self.status();
    (status, Json(json!({ "error": self.public_message() }))).into_response()
  }
}
