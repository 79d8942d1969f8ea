//! Email normalization: the identity key used for deduplication.
//!
//! A normalized email has surrounding whitespace removed and every character
//! lowercased. Normalization is idempotent, so values read back from the
//! store can be rewrapped without changing.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Trim and lowercase `raw`.
pub fn normalize(raw: &str) -> String { raw.trim().to_lowercase() }

/// A non-empty, normalized email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NormalizedEmail(String);

impl NormalizedEmail {
  /// Normalize `raw`. Fails if nothing is left after trimming.
  pub fn new(raw: &str) -> Result<Self> {
    let normalized = normalize(raw);
    if normalized.is_empty() {
      return Err(Error::EmptyEmail);
    }
    Ok(Self(normalized))
  }

  pub fn as_str(&self) -> &str { &self.0 }

  pub fn into_inner(self) -> String { self.0 }
}

impl TryFrom<String> for NormalizedEmail {
  type Error = Error;

  fn try_from(raw: String) -> Result<Self> { Self::new(&raw) }
}

impl From<NormalizedEmail> for String {
  fn from(email: NormalizedEmail) -> Self { email.0 }
}

impl AsRef<str> for NormalizedEmail {
  fn as_ref(&self) -> &str { &self.0 }
}

impl fmt::Display for NormalizedEmail {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn trims_and_lowercases() {
    let email = NormalizedEmail::new(" Jane@Example.com ").unwrap();
    assert_eq!(email.as_str(), "jane@example.com");
  }

  #[test]
  fn normalization_is_idempotent() {
    let once = normalize("\tMiXeD@Case.ORG\n");
    let twice = normalize(&once);
    assert_eq!(once, twice);
    assert_eq!(once, "mixed@case.org");
  }

  #[test]
  fn case_and_whitespace_variants_collide() {
    let a = NormalizedEmail::new("a@b.com").unwrap();
    let b = NormalizedEmail::new("  A@B.COM").unwrap();
    assert_eq!(a, b);
  }

  #[test]
  fn blank_input_is_rejected() {
    assert!(matches!(NormalizedEmail::new("   "), Err(Error::EmptyEmail)));
    assert!(matches!(NormalizedEmail::new(""), Err(Error::EmptyEmail)));
  }

  #[test]
  fn deserialization_normalizes() {
    let email: NormalizedEmail =
      serde_json::from_str("\" Someone@Example.COM\"").unwrap();
    assert_eq!(email.as_str(), "someone@example.com");
    assert_eq!(
      serde_json::to_string(&email).unwrap(),
      "\"someone@example.com\""
    );
  }
}
