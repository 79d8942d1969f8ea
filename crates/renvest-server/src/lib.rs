//! HTTP server for the Renvest contact API.
//!
//! Wires configuration, the lazily-opened SQLite store and the API router
//! together. The binary in `main.rs` is a thin shell around this crate.

use std::{path::Path, sync::Arc};

use axum::Router;
use renvest_store_sqlite::LazyStore;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;

/// Runtime server configuration.
///
/// Layered from defaults, an optional TOML file and `RENVEST_*` environment
/// variables, in increasing precedence.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
  pub host:         String,
  pub port:         u16,
  /// SQLite connection string. Optional: the server starts without it and
  /// reports a database error on the first submission.
  #[serde(default)]
  pub database_url: Option<String>,
}

impl ServerConfig {
  /// Load configuration from `path` (which need not exist) and the
  /// environment. `DATABASE_URL` is used when no `RENVEST_DATABASE_URL` or
  /// file setting is present.
  pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
    let mut cfg: Self = config::Config::builder()
      .set_default("host", DEFAULT_HOST)?
      .set_default("port", i64::from(DEFAULT_PORT))?
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("RENVEST"))
      .build()?
      .try_deserialize()?;

    cfg.database_url =
      resolve_database_url(cfg.database_url.take(), std::env::var("DATABASE_URL").ok());
    Ok(cfg)
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

/// Prefer the explicitly configured URL; blank values count as unset.
pub fn resolve_database_url(
  configured: Option<String>,
  fallback: Option<String>,
) -> Option<String> {
  configured
    .filter(|u| !u.trim().is_empty())
    .or_else(|| fallback.filter(|u| !u.trim().is_empty()))
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the store handle for `config`. Nothing is opened yet.
pub fn build_store(config: &ServerConfig) -> Arc<LazyStore> {
  let store = LazyStore::new(config.database_url.clone());
  if !store.is_configured() {
    tracing::warn!(
      "no RENVEST_DATABASE_URL or DATABASE_URL set; contact submissions will fail until one is provided"
    );
  }
  Arc::new(store)
}

/// Build the application router, serving the API under `/api`.
pub fn router(store: Arc<LazyStore>) -> Router {
  Router::new()
    .nest("/api", renvest_api::api_router(store))
    .layer(TraceLayer::new_for_http())
}

// ─── Integration tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
  };
  use renvest_core::contact::ContactCreated;
  use serde_json::{Value, json};
  use tower::ServiceExt as _;

  fn config(database_url: Option<&str>) -> ServerConfig {
    ServerConfig {
      host:         DEFAULT_HOST.to_string(),
      port:         DEFAULT_PORT,
      database_url: database_url.map(str::to_owned),
    }
  }

  async fn submit(app: Router, body: Value) -> (StatusCode, Value) {
    let req = Request::builder()
      .method("POST")
      .uri("/api/contact")
      .header(header::CONTENT_TYPE, "application/json")
      .body(Body::from(body.to_string()))
      .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
      .await
      .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
  }

  #[test]
  fn database_url_precedence() {
    assert_eq!(
      resolve_database_url(Some("a.db".into()), Some("b.db".into())),
      Some("a.db".into())
    );
    assert_eq!(
      resolve_database_url(None, Some("b.db".into())),
      Some("b.db".into())
    );
    assert_eq!(
      resolve_database_url(Some("  ".into()), Some("b.db".into())),
      Some("b.db".into())
    );
    assert_eq!(resolve_database_url(None, Some(String::new())), None);
  }

  #[test]
  fn load_reads_toml_file() {
    let path = std::env::temp_dir().join(format!("renvest-{}.toml", uuid::Uuid::new_v4()));
    std::fs::write(
      &path,
      "host = \"0.0.0.0\"\nport = 8080\ndatabase_url = \"sqlite://contacts.db\"\n",
    )
    .unwrap();

    let cfg = ServerConfig::load(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(cfg.host, "0.0.0.0");
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.database_url.as_deref(), Some("sqlite://contacts.db"));
    assert_eq!(cfg.address(), "0.0.0.0:8080");
  }

  #[test]
  fn load_without_file_uses_defaults() {
    let path = std::env::temp_dir().join(format!("missing-{}.toml", uuid::Uuid::new_v4()));
    let cfg = ServerConfig::load(&path).unwrap();
    assert_eq!(cfg.host, DEFAULT_HOST);
    assert_eq!(cfg.port, DEFAULT_PORT);
  }

  #[tokio::test]
  async fn unconfigured_server_starts_and_reports_database_error() {
    let app = router(build_store(&config(None)));
    let (status, body) = submit(
      app,
      json!({ "name": "Jane", "email": "jane@example.com", "role": "tenant" }),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Database error" }));
  }

  #[tokio::test]
  async fn contact_endpoint_is_mounted_under_api() {
    let store = build_store(&config(Some("sqlite::memory:")));
    let body = json!({ "name": "Jane", "email": "Jane@Example.com", "role": "tenant" });

    let (status, created) = submit(router(store.clone()), body.clone()).await;
    assert_eq!(status, StatusCode::CREATED);
    let created: ContactCreated = serde_json::from_value(created).unwrap();
    assert!(created.success);

    let (status, conflict) = submit(router(store), body).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(conflict, json!({ "error": "Email already exists" }));
  }
}
