//! Announcement — a broadcast message shown in the portal ticker.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A broadcast message. Read by everyone; created and deleted by managers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Announcement {
  pub announcement_id: Uuid,
  pub text:            String,
  /// Optional URL the ticker entry links to.
  pub link:            Option<String>,
  pub is_active:       bool,
  /// Higher sorts first in the ticker.
  pub priority:        i64,
  /// The manager who posted it, if recorded.
  pub author_id:       Option<Uuid>,
  pub created_at:      DateTime<Utc>,
}

/// Input to [`crate::store::PortalStore::create_announcement`].
#[derive(Debug, Clone)]
pub struct NewAnnouncement {
  pub text:      String,
  pub link:      Option<String>,
  pub priority:  i64,
  pub author_id: Option<Uuid>,
}

impl NewAnnouncement {
  pub fn new(text: impl Into<String>) -> Self {
    Self {
      text:      text.into(),
      link:      None,
      priority:  0,
      author_id: None,
    }
  }
}
