//! Core types and trait definitions for the Renvest lead-capture service.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it.

pub mod candidate;
pub mod contact;
pub mod email;
pub mod error;
pub mod store;

pub use error::{Error, Result};
