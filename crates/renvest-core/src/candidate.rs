//! Parsing an untrusted submission body into a typed [`ContactCandidate`].
//!
//! The validator never stops at the first problem: it checks every field and
//! returns either a well-typed candidate or the full list of [`Violation`]s.
//! Callers decide how much of that detail to expose.

use serde_json::Value;
use strum::{AsRefStr, Display};
use thiserror::Error;

use crate::{
  contact::{NewContact, Role},
  email::NormalizedEmail,
};

// ─── Violations ──────────────────────────────────────────────────────────────

/// A field of the submission body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Field {
  Name,
  Email,
  Role,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
  /// Absent, `null`, or blank after trimming.
  Missing,
  /// Present but not a JSON string.
  NotAString,
  /// A string outside the [`Role`] enumeration.
  UnknownRole,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
  pub field: Field,
  pub kind:  ViolationKind,
}

/// Every problem found in one submission body. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid submission: {}", describe(.0))]
pub struct Violations(Vec<Violation>);

impl Violations {
  pub fn iter(&self) -> impl Iterator<Item = &Violation> { self.0.iter() }

  /// `true` if at least one required field is missing.
  pub fn any_missing(&self) -> bool {
    self.0.iter().any(|v| v.kind == ViolationKind::Missing)
  }
}

fn describe(violations: &[Violation]) -> String {
  violations
    .iter()
    .map(|v| {
      let what = match v.kind {
        ViolationKind::Missing => "missing",
        ViolationKind::NotAString => "not a string",
        ViolationKind::UnknownRole => "unknown role",
      };
      format!("{} {what}", v.field)
    })
    .collect::<Vec<_>>()
    .join(", ")
}

// ─── Candidate ───────────────────────────────────────────────────────────────

/// A validated submission, ready to be checked for duplicates and inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactCandidate {
  pub name:  String,
  pub email: NormalizedEmail,
  pub role:  Role,
}

impl ContactCandidate {
  /// Validate a decoded JSON body.
  ///
  /// A body that is not a JSON object is treated as having every field
  /// missing.
  pub fn from_json(body: &Value) -> Result<Self, Violations> {
    let object = body.as_object();
    let field = |f: Field| object.and_then(|o| o.get(f.as_ref()));

    let mut violations = Vec::new();

    let name = present_string(Field::Name, field(Field::Name), &mut violations);
    let email = present_string(Field::Email, field(Field::Email), &mut violations)
      .and_then(|raw| NormalizedEmail::new(raw).ok());
    let role = present_string(Field::Role, field(Field::Role), &mut violations)
      .and_then(|raw| match Role::parse(raw) {
        Ok(role) => Some(role),
        Err(_) => {
          violations.push(Violation {
            field: Field::Role,
            kind:  ViolationKind::UnknownRole,
          });
          None
        }
      });

    match (name, email, role) {
      (Some(name), Some(email), Some(role)) if violations.is_empty() => Ok(Self {
        name: name.to_owned(),
        email,
        role,
      }),
      _ => Err(Violations(violations)),
    }
  }
}

/// Return the string value of a present, non-blank field, recording a
/// violation otherwise.
///
/// Falsy JSON values (`null`, `false`, `0`, blank strings) count as missing.
fn present_string<'a>(
  field: Field,
  value: Option<&'a Value>,
  violations: &mut Vec<Violation>,
) -> Option<&'a str> {
  let kind = match value {
    None | Some(Value::Null | Value::Bool(false)) => ViolationKind::Missing,
    Some(Value::Number(n)) if n.as_f64() == Some(0.0) => ViolationKind::Missing,
    Some(Value::String(s)) if s.trim().is_empty() => ViolationKind::Missing,
    Some(Value::String(s)) => return Some(s.as_str()),
    Some(_) => ViolationKind::NotAString,
  };
  violations.push(Violation { field, kind });
  None
}

impl From<ContactCandidate> for NewContact {
  fn from(c: ContactCandidate) -> Self {
    NewContact {
      name:  c.name,
      email: c.email,
      role:  c.role,
    }
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  fn kinds(v: &Violations) -> Vec<(Field, ViolationKind)> {
    v.iter().map(|v| (v.field, v.kind)).collect()
  }

  #[test]
  fn valid_body_normalizes_email() {
    let body = json!({
      "name": "Jane Doe",
      "email": " Jane@Example.com ",
      "role": "tenant",
    });
    let candidate = ContactCandidate::from_json(&body).unwrap();
    assert_eq!(candidate.name, "Jane Doe");
    assert_eq!(candidate.email.as_str(), "jane@example.com");
    assert_eq!(candidate.role, Role::Tenant);
  }

  #[test]
  fn empty_name_is_missing() {
    let body = json!({ "name": "", "email": "a@b.com", "role": "tenant" });
    let err = ContactCandidate::from_json(&body).unwrap_err();
    assert_eq!(kinds(&err), vec![(Field::Name, ViolationKind::Missing)]);
    assert!(err.any_missing());
  }

  #[test]
  fn blank_and_null_fields_are_missing() {
    let body = json!({ "name": "Jo", "email": "   ", "role": null });
    let err = ContactCandidate::from_json(&body).unwrap_err();
    assert_eq!(kinds(&err), vec![
      (Field::Email, ViolationKind::Missing),
      (Field::Role, ViolationKind::Missing),
    ]);
  }

  #[test]
  fn every_field_missing_from_empty_object() {
    let err = ContactCandidate::from_json(&json!({})).unwrap_err();
    assert_eq!(err.iter().count(), 3);
    assert!(err.iter().all(|v| v.kind == ViolationKind::Missing));
  }

  #[test]
  fn non_object_body_is_all_missing() {
    for body in [json!([1, 2, 3]), json!("hello"), json!(42), Value::Null] {
      let err = ContactCandidate::from_json(&body).unwrap_err();
      assert_eq!(err.iter().count(), 3, "body: {body}");
      assert!(err.any_missing());
    }
  }

  #[test]
  fn falsy_values_are_missing() {
    let body = json!({ "name": false, "email": 0, "role": 0.0 });
    let err = ContactCandidate::from_json(&body).unwrap_err();
    assert_eq!(kinds(&err), vec![
      (Field::Name, ViolationKind::Missing),
      (Field::Email, ViolationKind::Missing),
      (Field::Role, ViolationKind::Missing),
    ]);
  }

  #[test]
  fn truthy_non_strings_are_not_strings() {
    let body = json!({ "name": true, "email": 1, "role": "tenant" });
    let err = ContactCandidate::from_json(&body).unwrap_err();
    assert_eq!(kinds(&err), vec![
      (Field::Name, ViolationKind::NotAString),
      (Field::Email, ViolationKind::NotAString),
    ]);
    assert!(!err.any_missing());
  }

  #[test]
  fn non_string_values_are_reported() {
    let body = json!({ "name": 7, "email": "a@b.com", "role": "landlord" });
    let err = ContactCandidate::from_json(&body).unwrap_err();
    assert_eq!(kinds(&err), vec![(Field::Name, ViolationKind::NotAString)]);
    assert!(!err.any_missing());
  }

  #[test]
  fn unknown_role_is_reported() {
    let body = json!({ "name": "Jo", "email": "a@b.com", "role": "owner" });
    let err = ContactCandidate::from_json(&body).unwrap_err();
    assert_eq!(kinds(&err), vec![(Field::Role, ViolationKind::UnknownRole)]);
    assert_eq!(err.to_string(), "invalid submission: role unknown role");
  }

  #[test]
  fn candidate_converts_to_new_contact() {
    let body = json!({
      "name": "Pat",
      "email": "PAT@example.com",
      "role": "property_management",
    });
    let new = NewContact::from(ContactCandidate::from_json(&body).unwrap());
    assert_eq!(new.email.as_str(), "pat@example.com");
    assert_eq!(new.role, Role::PropertyManagement);
  }
}
