//! The `PortalStore` trait and supporting query types.
//!
//! The trait is implemented by storage backends (e.g. `quad-store-sqlite`).
//! The HTTP layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use uuid::Uuid;

use crate::{
  announcement::{Announcement, NewAnnouncement},
  college::{College, CollegeSummary, CollegeUpdate, NewCollege},
  role::{NewRoleMeta, RoleMeta},
  user::{NewUser, ProfileUpdate, Role, User, UserModeration},
};

// ─── Query type ──────────────────────────────────────────────────────────────

/// Parameters for [`PortalStore::list_users`]. The admin listing and the
/// public donor registry are both expressed through this filter.
#[derive(Debug, Clone, Default)]
pub struct UserQuery {
  /// Restrict to these roles; empty means any role.
  pub roles:       Vec<Role>,
  /// Restrict to one college.
  pub college_id:  Option<Uuid>,
  /// Only accounts that opted into the blood-donor registry.
  pub donors_only: bool,
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over the portal's document store.
///
/// One logical operation per method; there is no cross-method transaction
/// surface. The single multi-step write (president creation plus college
/// link) is its own method so the backend can make it atomic.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (tokio with `axum`).
pub trait PortalStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Users ─────────────────────────────────────────────────────────────

  /// Persist a new user. The caller has already normalized the email and
  /// decided the role; a duplicate email surfaces as a backend error.
  fn create_user(
    &self,
    input: NewUser,
  ) -> impl Future<Output = Result<User, Self::Error>> + Send + '_;

  /// Retrieve a user by id. Returns `None` if not found.
  fn get_user(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<User>, Self::Error>> + Send + '_;

  /// Case-insensitive email lookup (handles legacy mixed-case rows).
  fn find_user_by_email<'a>(
    &'a self,
    email: &'a str,
  ) -> impl Future<Output = Result<Option<User>, Self::Error>> + Send + 'a;

  /// List users matching `query`, newest first.
  fn list_users<'a>(
    &'a self,
    query: &'a UserQuery,
  ) -> impl Future<Output = Result<Vec<User>, Self::Error>> + Send + 'a;

  /// Apply a self-service profile update and return the fresh record.
  fn update_profile(
    &self,
    id: Uuid,
    update: ProfileUpdate,
  ) -> impl Future<Output = Result<User, Self::Error>> + Send + '_;

  /// Apply a manager-side mutation (role and/or rejection note).
  /// An empty rejection reason clears the stored value.
  fn moderate_user(
    &self,
    id: Uuid,
    moderation: UserModeration,
  ) -> impl Future<Output = Result<User, Self::Error>> + Send + '_;

  /// Hard-delete a user. Returns `false` if no such record existed.
  /// Role-based delete protection is the policy layer's job, not the
  /// store's.
  fn delete_user(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  /// Create a president account and, when a college is given, point that
  /// college's `president_id` at the new account — atomically.
  fn create_president(
    &self,
    input: NewUser,
    college_id: Option<Uuid>,
  ) -> impl Future<Output = Result<User, Self::Error>> + Send + '_;

  /// Update an existing president's name/email/password.
  fn update_president(
    &self,
    id: Uuid,
    name: String,
    email: String,
    password_hash: Option<String>,
  ) -> impl Future<Output = Result<User, Self::Error>> + Send + '_;

  // ── Colleges ──────────────────────────────────────────────────────────

  fn create_college(
    &self,
    input: NewCollege,
  ) -> impl Future<Output = Result<College, Self::Error>> + Send + '_;

  fn get_college(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<College>, Self::Error>> + Send + '_;

  fn find_college_by_slug<'a>(
    &'a self,
    slug: &'a str,
  ) -> impl Future<Output = Result<Option<College>, Self::Error>> + Send + 'a;

  /// All colleges, for the admin dashboard.
  fn list_colleges(
    &self,
  ) -> impl Future<Output = Result<Vec<College>, Self::Error>> + Send + '_;

  /// The public directory subset (id + name), sorted by name.
  fn list_college_summaries(
    &self,
  ) -> impl Future<Output = Result<Vec<CollegeSummary>, Self::Error>> + Send + '_;

  fn update_college(
    &self,
    id: Uuid,
    update: CollegeUpdate,
  ) -> impl Future<Output = Result<College, Self::Error>> + Send + '_;

  // ── Announcements ─────────────────────────────────────────────────────

  /// Announcements sorted by priority (descending), then recency.
  fn list_announcements(
    &self,
    active_only: bool,
  ) -> impl Future<Output = Result<Vec<Announcement>, Self::Error>> + Send + '_;

  fn create_announcement(
    &self,
    input: NewAnnouncement,
  ) -> impl Future<Output = Result<Announcement, Self::Error>> + Send + '_;

  /// Returns `false` if no such announcement existed.
  fn delete_announcement(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  // ── Role metadata ─────────────────────────────────────────────────────

  fn list_roles(
    &self,
  ) -> impl Future<Output = Result<Vec<RoleMeta>, Self::Error>> + Send + '_;

  fn get_role(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<RoleMeta>, Self::Error>> + Send + '_;

  fn find_role_by_name<'a>(
    &'a self,
    name: &'a str,
  ) -> impl Future<Output = Result<Option<RoleMeta>, Self::Error>> + Send + 'a;

  fn create_role(
    &self,
    input: NewRoleMeta,
  ) -> impl Future<Output = Result<RoleMeta, Self::Error>> + Send + '_;

  /// Returns `false` if no such role existed. Static-role protection is
  /// enforced by the handler, which loads the record first.
  fn delete_role(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;
}
