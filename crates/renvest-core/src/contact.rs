//! The `Contact` entity: one persisted lead submission.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};
use uuid::Uuid;

use crate::{Error, Result, email::NormalizedEmail};

// ─── Role ────────────────────────────────────────────────────────────────────

/// Who the lead says they are.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  AsRefStr,
  Display,
  EnumIter,
  EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Role {
  Tenant,
  Landlord,
  PropertyManagement,
}

impl Role {
  /// Parse the wire form (`tenant`, `landlord`, `property_management`).
  pub fn parse(s: &str) -> Result<Self> {
    s.parse().map_err(|_| Error::UnknownRole(s.to_owned()))
  }

  /// Human-readable label, as shown in the role picker.
  pub const fn label(self) -> &'static str {
    match self {
      Self::Tenant => "Tenant",
      Self::Landlord => "Landlord",
      Self::PropertyManagement => "Property Management",
    }
  }
}

// ─── Contact ─────────────────────────────────────────────────────────────────

/// A persisted contact. Created once; never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
  pub id:         Uuid,
  pub name:       String,
  pub email:      NormalizedEmail,
  pub role:       Role,
  pub created_at: DateTime<Utc>,
}

/// Input to [`ContactStore::insert`](crate::store::ContactStore::insert).
/// The store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
  pub name:  String,
  pub email: NormalizedEmail,
  pub role:  Role,
}

/// Body of a successful submission response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactCreated {
  pub success:    bool,
  pub id:         Uuid,
  pub created_at: DateTime<Utc>,
}

impl From<&Contact> for ContactCreated {
  fn from(c: &Contact) -> Self {
    ContactCreated {
      success:    true,
      id:         c.id,
      created_at: c.created_at,
    }
  }
}

#[cfg(test)]
mod tests {
  use strum::IntoEnumIterator as _;

  use super::*;

  #[test]
  fn role_wire_names() {
    assert_eq!(Role::Tenant.as_ref(), "tenant");
    assert_eq!(Role::Landlord.to_string(), "landlord");
    assert_eq!(Role::PropertyManagement.as_ref(), "property_management");
    assert_eq!(
      serde_json::to_string(&Role::PropertyManagement).unwrap(),
      "\"property_management\""
    );
  }

  #[test]
  fn role_parse_round_trips_every_variant() {
    for role in Role::iter() {
      assert_eq!(Role::parse(role.as_ref()).unwrap(), role);
    }
  }

  #[test]
  fn role_parse_rejects_labels_and_unknowns() {
    assert!(matches!(Role::parse("Tenant"), Err(Error::UnknownRole(_))));
    assert!(matches!(
      Role::parse("property management"),
      Err(Error::UnknownRole(_))
    ));
    assert!(matches!(Role::parse("owner"), Err(Error::UnknownRole(_))));
  }

  #[test]
  fn role_labels() {
    assert_eq!(Role::PropertyManagement.label(), "Property Management");
    assert_eq!(Role::Tenant.label(), "Tenant");
  }
}
