//! Error type for `renvest-store-sqlite`.

use renvest_core::store::ContactStoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] renvest_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("uuid parse error: {0}")]
  Uuid(#[from] uuid::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),

  /// The `UNIQUE` constraint on `contacts.email` rejected an insert.
  #[error("email already exists: {0}")]
  DuplicateEmail(String),

  #[error("database not configured; set RENVEST_DATABASE_URL or DATABASE_URL")]
  NotConfigured,

  #[error("unsupported database url: {0:?}")]
  UnsupportedUrl(String),
}

impl ContactStoreError for Error {
  fn is_duplicate_email(&self) -> bool { matches!(self, Error::DuplicateEmail(_)) }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
