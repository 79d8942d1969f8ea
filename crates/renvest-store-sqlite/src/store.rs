//! [`SqliteStore`]: the SQLite implementation of [`ContactStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use renvest_core::{
  contact::{Contact, NewContact},
  email::NormalizedEmail,
  store::ContactStore,
};

use crate::{
  encode::{RawContact, encode_dt, encode_role, encode_uuid},
  schema::SCHEMA,
  Error, Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A contact store backed by a single SQLite file.
///
/// Cloning is cheap: the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store: useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Number of stored contacts.
  pub async fn count(&self) -> Result<u64> {
    let n: i64 = self
      .conn
      .call(|conn| {
        Ok(conn.query_row("SELECT COUNT(*) FROM contacts", [], |r| r.get(0))?)
      })
      .await?;
    Ok(u64::try_from(n).unwrap_or_default())
  }
}

/// `true` if `err` is SQLite rejecting a row because of a `UNIQUE` index.
/// The only such index on `contacts` is the one on `email`.
fn is_unique_violation(err: &tokio_rusqlite::Error) -> bool {
  matches!(
    err,
    tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(e, _))
      if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
  )
}

// ─── ContactStore impl ───────────────────────────────────────────────────────

impl ContactStore for SqliteStore {
  type Error = Error;

  async fn find_by_email(&self, email: &NormalizedEmail) -> Result<Option<Contact>> {
    let email_str = email.as_str().to_owned();

    let raw: Option<RawContact> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT id, name, email, role, created_at
                 FROM contacts WHERE email = ?1 LIMIT 1",
              rusqlite::params![email_str],
              RawContact::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawContact::into_contact).transpose()
  }

  async fn insert(&self, input: NewContact) -> Result<Contact> {
    let contact = Contact {
      id:         Uuid::new_v4(),
      name:       input.name,
      email:      input.email,
      role:       input.role,
      created_at: Utc::now(),
    };

    let id_str    = encode_uuid(contact.id);
    let name      = contact.name.clone();
    let email_str = contact.email.as_str().to_owned();
    let role_str  = encode_role(&contact.role).to_owned();
    let at_str    = encode_dt(contact.created_at);

    let inserted = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO contacts (id, name, email, role, created_at)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![id_str, name, email_str, role_str, at_str],
        )?;
        Ok(())
      })
      .await;

    match inserted {
      Ok(()) => {
        tracing::debug!(id = %contact.id, "contact inserted");
        Ok(contact)
      }
      Err(e) if is_unique_violation(&e) => {
        Err(Error::DuplicateEmail(contact.email.into_inner()))
      }
      Err(e) => Err(e.into()),
    }
  }
}
