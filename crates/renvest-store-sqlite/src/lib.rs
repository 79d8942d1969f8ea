//! SQLite backend for the Renvest contact store.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated thread
//! without blocking the async runtime. [`LazyStore`] defers opening the
//! database until the first request that needs it.

mod encode;
mod lazy;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use lazy::{ConnectionTarget, LazyStore};
pub use store::SqliteStore;
