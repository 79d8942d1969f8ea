//! The `ContactStore` trait.
//!
//! Implemented by storage backends (e.g. `renvest-store-sqlite`). The API
//! layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::{
  contact::{Contact, NewContact},
  email::NormalizedEmail,
};

/// Errors produced by a [`ContactStore`] backend.
///
/// Backends must report a violated email uniqueness constraint distinctly so
/// that a duplicate lost in a concurrent race is still rejected as a
/// conflict rather than an internal failure.
pub trait ContactStoreError: std::error::Error + Send + Sync + 'static {
  /// `true` if the error is a uniqueness violation on the email column.
  fn is_duplicate_email(&self) -> bool;
}

/// Abstraction over a contact persistence backend.
///
/// Contacts are insert-only: there are no update or delete operations.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait ContactStore: Send + Sync {
  type Error: ContactStoreError;

  /// Look up a contact by its normalized email. This is an exact,
  /// case-sensitive match against the stored (already normalized) value.
  fn find_by_email<'a>(
    &'a self,
    email: &'a NormalizedEmail,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + 'a;

  /// Persist a new contact. The store assigns `id` and `created_at`.
  ///
  /// Backends enforce email uniqueness; a violation is reported through
  /// [`ContactStoreError::is_duplicate_email`].
  fn insert(
    &self,
    contact: NewContact,
  ) -> impl Future<Output = Result<Contact, Self::Error>> + Send + '_;
}
