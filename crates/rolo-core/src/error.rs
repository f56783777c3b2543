//! Error types for `rolo-core`.

use thiserror::Error;
use uuid::Uuid;

use crate::validate::Violations;

#[derive(Debug, Error)]
pub enum Error {
  /// A rule rejected the candidate. This is an expected outcome the caller
  /// must display, not a fault; the store is left unchanged.
  #[error("validation failed: {0}")]
  Invalid(Violations),

  #[error("contact not found: {0}")]
  ContactNotFound(Uuid),

  #[error("refusing to store the nil-id sentinel contact")]
  SentinelContact,

  #[error("contact id already taken: {0}")]
  IdTaken(Uuid),
}

impl Error {
  /// The violations carried by a validation failure, if that is what this is.
  pub fn violations(&self) -> Option<&Violations> {
    match self {
      Self::Invalid(violations) => Some(violations),
      _ => None,
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
