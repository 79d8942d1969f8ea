//! Async HTTP client for the contact submission endpoint.

use std::time::Duration;

use anyhow::{Context, Result};
use renvest_core::contact::{ContactCreated, Role};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

/// Connection settings for the contact API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  pub base_url: String,
}

/// The request body sent to `POST /api/contact`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
  pub name:  String,
  /// Already trimmed and lowercased.
  pub email: String,
  pub role:  Role,
}

/// How a submission attempt ended, from the form's point of view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
  /// 2xx. The receipt is absent if the body could not be decoded.
  Created(Option<ContactCreated>),
  /// The service already knows this email.
  DuplicateEmail,
  /// Any other non-success response.
  Rejected { status: u16, message: Option<String> },
  /// The request could not be completed.
  Network(String),
}

#[derive(Deserialize)]
struct ErrorBody {
  error: Option<String>,
}

/// Map a response status and body to an outcome.
///
/// A duplicate is recognised either by `409 Conflict` or by an error
/// message saying the email already exists, whatever the status.
pub fn classify(status: StatusCode, body: &str) -> SubmitOutcome {
  if status.is_success() {
    return SubmitOutcome::Created(serde_json::from_str(body).ok());
  }

  let message = serde_json::from_str::<ErrorBody>(body)
    .ok()
    .and_then(|b| b.error);

  let says_duplicate = message
    .as_deref()
    .is_some_and(|m| m.to_lowercase().contains("email already exists"));

  if status == StatusCode::CONFLICT || says_duplicate {
    SubmitOutcome::DuplicateEmail
  } else {
    SubmitOutcome::Rejected {
      status: status.as_u16(),
      message,
    }
  }
}

/// Async HTTP client for the contact API.
///
/// Cheap to clone: the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ApiClient {
  client: Client,
  config: ApiConfig,
}

impl ApiClient {
  pub fn new(config: ApiConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self { client, config })
  }

  fn url(&self, path: &str) -> String {
    format!(
      "{}/api{}",
      self.config.base_url.trim_end_matches('/'),
      path
    )
  }

  /// `POST /api/contact`: exactly one attempt, never retried.
  pub async fn submit_contact(&self, submission: &Submission) -> SubmitOutcome {
    let resp = match self
      .client
      .post(self.url("/contact"))
      .json(submission)
      .send()
      .await
    {
      Ok(resp) => resp,
      Err(e) => {
        tracing::warn!(error = %e, "POST /contact failed");
        return SubmitOutcome::Network(e.to_string());
      }
    };

    let status = resp.status();
    match resp.text().await {
      Ok(body) => {
        let outcome = classify(status, &body);
        tracing::debug!(%status, ?outcome, "POST /contact");
        outcome
      }
      Err(e) => {
        tracing::warn!(%status, error = %e, "reading /contact response failed");
        SubmitOutcome::Network(e.to_string())
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn created_with_receipt() {
    let body = r#"{"success":true,"id":"6f1c1f8e-2f38-4b8e-9a53-1b0d1c7c9b11","created_at":"2026-01-02T03:04:05Z"}"#;
    match classify(StatusCode::CREATED, body) {
      SubmitOutcome::Created(Some(receipt)) => assert!(receipt.success),
      other => panic!("unexpected outcome: {other:?}"),
    }
  }

  #[test]
  fn created_with_unreadable_body_is_still_success() {
    assert_eq!(
      classify(StatusCode::CREATED, "not json"),
      SubmitOutcome::Created(None)
    );
  }

  #[test]
  fn conflict_status_is_duplicate() {
    assert_eq!(
      classify(StatusCode::CONFLICT, r#"{"error":"Email already exists"}"#),
      SubmitOutcome::DuplicateEmail
    );
    assert_eq!(classify(StatusCode::CONFLICT, ""), SubmitOutcome::DuplicateEmail);
  }

  #[test]
  fn duplicate_message_is_recognised_under_other_statuses() {
    assert_eq!(
      classify(StatusCode::BAD_REQUEST, r#"{"error":"EMAIL ALREADY EXISTS"}"#),
      SubmitOutcome::DuplicateEmail
    );
  }

  #[test]
  fn other_errors_are_rejections() {
    assert_eq!(
      classify(StatusCode::BAD_REQUEST, r#"{"error":"Missing fields"}"#),
      SubmitOutcome::Rejected {
        status:  400,
        message: Some("Missing fields".into()),
      }
    );
    assert_eq!(
      classify(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>"),
      SubmitOutcome::Rejected {
        status:  500,
        message: None,
      }
    );
  }

  #[test]
  fn submission_serialises_role_wire_name() {
    let s = Submission {
      name:  "Pat".into(),
      email: "pat@example.com".into(),
      role:  Role::PropertyManagement,
    };
    let v = serde_json::to_value(&s).unwrap();
    assert_eq!(
      v,
      serde_json::json!({
        "name": "Pat",
        "email": "pat@example.com",
        "role": "property_management",
      })
    );
  }
}
