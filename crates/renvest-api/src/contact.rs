//! Handler for the contact submission endpoint.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/contact` | Body: `{"name","email","role"}`; returns 201 + id |
//!
//! The handler runs four steps: validate the body into a
//! [`ContactCandidate`], look the normalized email up, reject it if present,
//! otherwise insert. The lookup is advisory; the store's uniqueness
//! constraint decides concurrent races, and a violation there is reported as
//! the same conflict.

use std::sync::Arc;

use axum::{
  Json,
  body::Bytes,
  extract::{State, rejection::BytesRejection},
  http::StatusCode,
  response::IntoResponse,
};
use renvest_core::{
  candidate::ContactCandidate,
  contact::{ContactCreated, NewContact},
  store::{ContactStore, ContactStoreError as _},
};

use crate::error::ApiError;

/// `POST /contact`
///
/// The body is read as raw bytes and decoded here, regardless of the request
/// content type, so an unreadable (e.g. over the body limit) or undecodable
/// body becomes an [`ApiError::Internal`] like any other unexpected failure.
#[tracing::instrument(skip_all)]
pub async fn submit<S>(
  State(store): State<Arc<S>>,
  body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: ContactStore,
{
  let body = body.map_err(|e| ApiError::Internal(Box::new(e)))?;
  let body: serde_json::Value =
    serde_json::from_slice(&body).map_err(|e| ApiError::Internal(Box::new(e)))?;

  let candidate = ContactCandidate::from_json(&body)?;

  let existing = store
    .find_by_email(&candidate.email)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  if existing.is_some() {
    return Err(ApiError::Conflict(candidate.email));
  }

  let email = candidate.email.clone();
  let contact = match store.insert(NewContact::from(candidate)).await {
    Ok(contact) => contact,
    Err(e) if e.is_duplicate_email() => return Err(ApiError::Conflict(email)),
    Err(e) => return Err(ApiError::Internal(Box::new(e))),
  };

  tracing::info!(id = %contact.id, role = %contact.role, "contact created");

  Ok((
    StatusCode::CREATED,
    Json(ContactCreated::from(&contact)),
  ))
}
