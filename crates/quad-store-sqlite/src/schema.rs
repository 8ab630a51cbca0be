//! SQL schema for the Quad SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.
//!
//! `users.college_id` and `colleges.president_id` are weak references
//! (lookup hints carried over from the document-store data model), so they
//! are deliberately not declared as foreign keys: deleting either side must
//! not be blocked by the other.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS users (
    user_id             TEXT PRIMARY KEY,
    name                TEXT NOT NULL,
    email               TEXT NOT NULL UNIQUE COLLATE NOCASE,
    password_hash       TEXT NOT NULL,   -- argon2 PHC string
    image               TEXT,
    phone               TEXT,
    role                TEXT NOT NULL DEFAULT 'unverified',
    rejection_reason    TEXT,
    college_id          TEXT,            -- weak reference to colleges
    other_college_name  TEXT,
    blood_group         TEXT,
    is_blood_donor      INTEGER NOT NULL DEFAULT 0,
    is_campus_volunteer INTEGER NOT NULL DEFAULT 0,
    location            TEXT,            -- JSON {city, sector?}
    created_at          TEXT NOT NULL,   -- ISO 8601 UTC
    updated_at          TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS colleges (
    college_id      TEXT PRIMARY KEY,
    name            TEXT NOT NULL,
    slug            TEXT NOT NULL UNIQUE,
    short_name      TEXT,
    location        TEXT,
    description     TEXT,
    established     TEXT,
    accreditation   TEXT,
    banner_color    TEXT,
    logo            TEXT,
    highlights      TEXT NOT NULL DEFAULT '[]',  -- JSON array of strings
    contact         TEXT,                        -- JSON ContactInfo
    courses         TEXT NOT NULL DEFAULT '[]',  -- JSON array of Course
    important_dates TEXT NOT NULL DEFAULT '[]',  -- JSON array of ImportantDate
    volunteers      TEXT NOT NULL DEFAULT '[]',  -- JSON array of Volunteer
    president_id    TEXT,                        -- weak reference to users
    created_at      TEXT NOT NULL,
    updated_at      TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS announcements (
    announcement_id TEXT PRIMARY KEY,
    text            TEXT NOT NULL,
    link            TEXT,
    is_active       INTEGER NOT NULL DEFAULT 1,
    priority        INTEGER NOT NULL DEFAULT 0,
    author_id       TEXT,                        -- weak reference to users
    created_at      TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS roles (
    role_id     TEXT PRIMARY KEY,
    name        TEXT NOT NULL UNIQUE,
    description TEXT,
    color       TEXT NOT NULL DEFAULT 'primary',
    is_static   INTEGER NOT NULL DEFAULT 0,
    created_at  TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS users_college_idx       ON users(college_id);
CREATE INDEX IF NOT EXISTS users_role_idx          ON users(role);
CREATE INDEX IF NOT EXISTS announcements_active_idx ON announcements(is_active);

PRAGMA user_version = 1;
";
