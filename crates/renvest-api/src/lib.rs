//! JSON API for the Renvest contact form.
//!
//! Exposes an axum [`Router`] backed by any
//! [`renvest_core::store::ContactStore`]. TLS and transport concerns are the
//! caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", renvest_api::api_router(store.clone()))
//! ```

pub mod contact;
pub mod error;

use std::{any::Any, sync::Arc};

use axum::{
  Router,
  response::{IntoResponse, Response},
  routing::post,
};
use renvest_core::store::ContactStore;
use tower_http::catch_panic::CatchPanicLayer;

pub use error::ApiError;

/// Build the API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type. A panicking handler is answered with the same
/// opaque `500 Internal error` as any other unexpected failure.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: ContactStore + 'static,
{
  Router::new()
    .route("/contact", post(contact::submit::<S>))
    .with_state(store)
    .layer(CatchPanicLayer::custom(panic_response))
}

fn panic_response(_payload: Box<dyn Any + Send + 'static>) -> Response {
  ApiError::Internal("handler panicked".into()).into_response()
}

// ─── Integration tests ────────────────────────────────────────────────────────
