//! [`LazyStore`]: a store handle that opens its database on first use.
//!
//! The connection string is captured when the handle is built, but nothing
//! touches the filesystem until a request needs the store. A missing or
//! unusable connection string therefore never prevents the server from
//! starting; it surfaces as an error from the first store operation instead.

use std::path::PathBuf;

use renvest_core::{
  contact::{Contact, NewContact},
  email::NormalizedEmail,
  store::ContactStore,
};
use tokio::sync::OnceCell;

use crate::{Error, Result, SqliteStore};

// ─── Connection target ───────────────────────────────────────────────────────

/// Where a connection string points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionTarget {
  Memory,
  File(PathBuf),
}

impl ConnectionTarget {
  /// Parse `sqlite::memory:`, `:memory:`, `sqlite://<path>`, `sqlite:<path>`
  /// or a bare filesystem path. Any other URL scheme is rejected.
  pub fn parse(url: &str) -> Result<Self> {
    let url = url.trim();
    match url {
      "" => return Err(Error::NotConfigured),
      ":memory:" | "sqlite::memory:" | "sqlite://:memory:" => return Ok(Self::Memory),
      _ => {}
    }

    if let Some(path) = url
      .strip_prefix("sqlite://")
      .or_else(|| url.strip_prefix("sqlite:"))
    {
      if path.is_empty() {
        return Err(Error::UnsupportedUrl(url.to_owned()));
      }
      return Ok(Self::File(PathBuf::from(path)));
    }

    if url.contains("://") {
      return Err(Error::UnsupportedUrl(url.to_owned()));
    }
    Ok(Self::File(PathBuf::from(url)))
  }

  async fn open(&self) -> Result<SqliteStore> {
    match self {
      Self::Memory => SqliteStore::open_in_memory().await,
      Self::File(path) => SqliteStore::open(path).await,
    }
  }
}

// ─── Lazy store ──────────────────────────────────────────────────────────────

/// A [`ContactStore`] that opens its [`SqliteStore`] on first use.
///
/// The opened store is shared by every later call. A failed open is not
/// cached; the next request tries again.
pub struct LazyStore {
  database_url: Option<String>,
  store:        OnceCell<SqliteStore>,
}

impl LazyStore {
  pub fn new(database_url: Option<String>) -> Self {
    Self {
      database_url: database_url.filter(|u| !u.trim().is_empty()),
      store:        OnceCell::new(),
    }
  }

  /// Whether a connection string was supplied at all.
  pub fn is_configured(&self) -> bool { self.database_url.is_some() }

  /// The opened store, opening it if this is the first call.
  pub async fn get(&self) -> Result<&SqliteStore> {
    let Some(url) = self.database_url.as_deref() else {
      return Err(Error::NotConfigured);
    };
    self
      .store
      .get_or_try_init(|| async {
        let target = ConnectionTarget::parse(url)?;
        tracing::info!(?target, "opening contact store");
        target.open().await
      })
      .await
  }
}

impl ContactStore for LazyStore {
  type Error = Error;

  async fn find_by_email(&self, email: &NormalizedEmail) -> Result<Option<Contact>> {
    self.get().await?.find_by_email(email).await
  }

  async fn insert(&self, contact: NewContact) -> Result<Contact> {
    self.get().await?.insert(contact).await
  }
}
