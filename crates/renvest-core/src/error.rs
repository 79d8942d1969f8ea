//! Error types for `renvest-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unknown role: {0:?}")]
  UnknownRole(String),

  #[error("email address is empty")]
  EmptyEmail,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
