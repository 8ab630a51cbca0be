//! Role metadata — the configuration table behind the role-management UI.
//!
//! This is descriptive data (name, color, blurb), not a capability engine;
//! the actual policy lives in [`crate::access`]. The four built-in roles are
//! seeded at store open with `is_static = true` and cannot be deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A row in the role-management table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleMeta {
  pub role_id:     Uuid,
  pub name:        String,
  pub description: Option<String>,
  /// Color token consumed by the dashboard, e.g. "red", "slate".
  pub color:       String,
  /// Static roles are the built-ins; the delete endpoint refuses them.
  pub is_static:   bool,
  pub created_at:  DateTime<Utc>,
}

/// Input to [`crate::store::PortalStore::create_role`].
#[derive(Debug, Clone)]
pub struct NewRoleMeta {
  pub name:        String,
  pub description: Option<String>,
  pub color:       String,
}

/// The built-in roles seeded into an empty store.
/// `(name, description, color)` — all static.
pub const STATIC_ROLES: [(&str, &str, &str); 4] = [
  ("superadmin", "Full system access", "red"),
  ("president", "College-level administrator", "orange"),
  ("member", "Verified student member", "blue"),
  ("unverified", "Pending account verification", "slate"),
];
