//! SQL schema for the Renvest SQLite store.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- Insert-only. No UPDATE or DELETE is ever issued against this table.
-- The UNIQUE constraint on email is the authoritative duplicate guard; the
-- lookup done before inserting is advisory.
CREATE TABLE IF NOT EXISTS contacts (
    id          TEXT PRIMARY KEY,
    name        TEXT NOT NULL,
    email       TEXT NOT NULL UNIQUE,   -- trimmed + lowercased
    role        TEXT NOT NULL CHECK (role IN ('tenant', 'landlord', 'property_management')),
    created_at  TEXT NOT NULL           -- ISO 8601 UTC; store-assigned
);

CREATE INDEX IF NOT EXISTS contacts_created_idx ON contacts(created_at);

PRAGMA user_version = 1;
";
