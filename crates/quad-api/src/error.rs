//! API error taxonomy and the JSON envelope `IntoResponse` implementation.
//!
//! Every route handler converts to this type at its own boundary; nothing is
//! retried and nothing escalates past the request. Store and runtime errors
//! surface their raw message in the envelope — acceptable for an internal
//! admin tool, not a hardened public API.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use quad_core::access::Deny;
use serde_json::json;
use thiserror::Error;

use crate::session::ClaimError;

#[derive(Debug, Error)]
pub enum Error {
  /// No session claim, or one that failed to parse.
  #[error("unauthorized")]
  Unauthorized,

  /// Login failure. Deliberately identical for unknown email and wrong
  /// password so the response cannot be used for account enumeration.
  #[error("invalid email or password")]
  InvalidCredentials,

  /// Authenticated, but the access policy says no.
  #[error("{0}")]
  Forbidden(String),

  #[error("{0}")]
  NotFound(String),

  /// Duplicate email / slug / role name.
  #[error("{0}")]
  Conflict(String),

  /// Operation not valid for the resource's current state.
  #[error("{0}")]
  InvalidState(String),

  #[error("{0}")]
  BadRequest(String),

  #[error("internal error: {0}")]
  Internal(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<Deny> for Error {
  fn from(deny: Deny) -> Self {
    Error::Forbidden(deny.to_string())
  }
}

impl From<ClaimError> for Error {
  fn from(_: ClaimError) -> Self {
    // Both a missing and a malformed claim mean "not authenticated",
    // never a server error.
    Error::Unauthorized
  }
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    let status = match &self {
      Error::Unauthorized | Error::InvalidCredentials => StatusCode::UNAUTHORIZED,
      Error::Forbidden(_) => StatusCode::FORBIDDEN,
      Error::NotFound(_) => StatusCode::NOT_FOUND,
      Error::Conflict(_) | Error::InvalidState(_) | Error::BadRequest(_) => {
        StatusCode::BAD_REQUEST
      }
      Error::Internal(_) | Error::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let body = Json(json!({ "success": false, "message": self.to_string() }));
    (status, body).into_response()
  }
}

/// Wrap a backend error for the 500 path.
pub(crate) fn store_err<E>(e: E) -> Error
where
  E: std::error::Error + Send + Sync + 'static,
{
  Error::Store(Box::new(e))
}
