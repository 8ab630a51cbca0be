//! Error types for `quad-core`.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum Error {
  #[error("user not found: {0}")]
  UserNotFound(Uuid),

  #[error("college not found: {0}")]
  CollegeNotFound(Uuid),

  #[error("unknown role: {0:?}")]
  UnknownRole(String),

  #[error("unknown blood group: {0:?}")]
  UnknownBloodGroup(String),

  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
