//! Role-scoped access policy for the admin API.
//!
//! Every admin route funnels through these functions instead of carrying its
//! own copy of the rules. They are pure: the caller has already been
//! re-resolved from the store (claim roles are never trusted for
//! authorization), and targets are loaded before the post-load checks run.
//!
//! The policy, by caller role:
//!
//! | Caller       | Users                                         | Colleges        |
//! |--------------|-----------------------------------------------|-----------------|
//! | superadmin   | all, except superadmin targets stay delete-protected | all      |
//! | president    | own college only, and never superadmin/president targets | own college only |
//! | member/unverified | own record only (profile self-service)   | public subset   |

use thiserror::Error;
use uuid::Uuid;

use crate::user::{Role, User};

// ─── Caller ──────────────────────────────────────────────────────────────────

/// The authenticated caller, freshly re-resolved from the store.
///
/// `role` and `college_id` come from the caller's current user record, not
/// from the session claim — a manager may have changed them since login.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
  pub user_id:    Uuid,
  pub role:       Role,
  pub college_id: Option<Uuid>,
}

impl Caller {
  pub fn from_user(user: &User) -> Self {
    Self {
      user_id:    user.user_id,
      role:       user.role,
      college_id: user.college_id,
    }
  }
}

// ─── Denials ─────────────────────────────────────────────────────────────────

/// A policy denial. All variants map to 403 at the API boundary; the message
/// is surfaced verbatim in the response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Deny {
  #[error("insufficient role for this operation")]
  NotManager,

  #[error("no college on record for this account")]
  NoCollege,

  #[error("target account is outside your jurisdiction")]
  OutsideJurisdiction,

  #[error("cannot modify superadmin or president accounts")]
  PrivilegedTarget,

  #[error("cannot assign superadmin or president roles")]
  PrivilegedAssignment,

  #[error("cannot delete superadmin accounts")]
  ProtectedRole,

  #[error("only a superadmin may perform this operation")]
  SuperadminOnly,
}

// ─── List scopes ─────────────────────────────────────────────────────────────

/// The subset of user records a manager may list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserScope {
  /// Every non-superadmin account.
  AllManaged,
  /// Members and unverified accounts of one college.
  College(Uuid),
  /// Nothing — a president with no college on record.
  Empty,
}

/// The subset of college records a manager may list through the admin API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollegeScope {
  All,
  One(Uuid),
  Empty,
}

/// Which users `caller` may see through `GET /admin/users`.
///
/// Superadmins see every managed account; superadmin records themselves are
/// never listed. A president without a college sees an empty list rather
/// than an error (listing is read-only, so the lenient answer is safe).
pub fn user_list_scope(caller: &Caller) -> Result<UserScope, Deny> {
  match caller.role {
    Role::Superadmin => Ok(UserScope::AllManaged),
    Role::President => Ok(match caller.college_id {
      Some(college) => UserScope::College(college),
      None => UserScope::Empty,
    }),
    _ => Err(Deny::NotManager),
  }
}

/// Which colleges `caller` may see through `GET /admin/colleges`.
pub fn college_list_scope(caller: &Caller) -> Result<CollegeScope, Deny> {
  match caller.role {
    Role::Superadmin => Ok(CollegeScope::All),
    Role::President => Ok(match caller.college_id {
      Some(college) => CollegeScope::One(college),
      None => CollegeScope::Empty,
    }),
    _ => Err(Deny::NotManager),
  }
}

// ─── Pre-load checks ─────────────────────────────────────────────────────────

/// Step run before the target is loaded: the caller must hold a manager
/// role, and a president must have a college on record. Ordering matters —
/// a non-manager gets 403 before any 404 can reveal whether a target exists.
pub fn ensure_manager(caller: &Caller) -> Result<(), Deny> {
  if !caller.role.is_manager() {
    return Err(Deny::NotManager);
  }
  if caller.role == Role::President && caller.college_id.is_none() {
    return Err(Deny::NoCollege);
  }
  Ok(())
}

/// Operations reserved for the superadmin: college creation, president
/// assignment, role-table management.
pub fn ensure_superadmin(caller: &Caller) -> Result<(), Deny> {
  match caller.role {
    Role::Superadmin => Ok(()),
    _ => Err(Deny::SuperadminOnly),
  }
}

// ─── Post-load checks ────────────────────────────────────────────────────────

/// May `caller` mutate `target` (role change, rejection note)?
///
/// Assumes [`ensure_manager`] already passed. A president is confined to
/// their own college and may never touch superadmin or president accounts.
pub fn authorize_user_mutation(caller: &Caller, target: &User) -> Result<(), Deny> {
  ensure_manager(caller)?;
  if caller.role == Role::President {
    if target.college_id != caller.college_id {
      return Err(Deny::OutsideJurisdiction);
    }
    if target.role.is_manager() {
      return Err(Deny::PrivilegedTarget);
    }
  }
  Ok(())
}

/// May `caller` assign `new_role` to a target they are allowed to mutate?
pub fn authorize_role_assignment(caller: &Caller, new_role: Role) -> Result<(), Deny> {
  if caller.role == Role::President && new_role.is_manager() {
    return Err(Deny::PrivilegedAssignment);
  }
  Ok(())
}

/// May `caller` delete `target`?
///
/// Superadmin accounts are delete-protected by role, not by caller identity:
/// the check fires for every caller, another superadmin included. This is
/// absolute — there is no override path. (Role *changes* are not covered;
/// demoting the last superadmin remains possible. Known gap, kept.)
pub fn authorize_user_deletion(caller: &Caller, target: &User) -> Result<(), Deny> {
  if target.role == Role::Superadmin {
    return Err(Deny::ProtectedRole);
  }
  authorize_user_mutation(caller, target)
}

/// May `caller` update `college`? Superadmins may update any; presidents
/// only their own record.
pub fn authorize_college_update(caller: &Caller, college_id: Uuid) -> Result<(), Deny> {
  ensure_manager(caller)?;
  if caller.role == Role::President && caller.college_id != Some(college_id) {
    return Err(Deny::OutsideJurisdiction);
  }
  Ok(())
}

/// May `caller` create or delete announcements? Granted to both manager
/// roles; everyone else is read-only.
pub fn authorize_announcement_manage(caller: &Caller) -> Result<(), Deny> {
  if caller.role.is_manager() {
    Ok(())
  } else {
    Err(Deny::NotManager)
  }
}

#[cfg(test)]
mod tests {
  use chrono::Utc;

  use super::*;
  use crate::user::{Role, User};

  fn caller(role: Role, college_id: Option<Uuid>) -> Caller {
    Caller {
      user_id: Uuid::new_v4(),
      role,
      college_id,
    }
  }

  fn target(role: Role, college_id: Option<Uuid>) -> User {
    let now = Utc::now();
    User {
      user_id: Uuid::new_v4(),
      name: "Target".into(),
      email: "target@example.com".into(),
      password_hash: String::new(),
      image: None,
      phone: None,
      role,
      rejection_reason: None,
      college_id,
      other_college_name: None,
      blood_group: None,
      is_blood_donor: false,
      is_campus_volunteer: false,
      location: None,
      created_at: now,
      updated_at: now,
    }
  }

  // ── List scopes ──────────────────────────────────────────────────────────

  #[test]
  fn superadmin_lists_all_managed() {
    let c = caller(Role::Superadmin, None);
    assert_eq!(user_list_scope(&c).unwrap(), UserScope::AllManaged);
    assert_eq!(college_list_scope(&c).unwrap(), CollegeScope::All);
  }

  #[test]
  fn president_scope_is_their_college() {
    let college = Uuid::new_v4();
    let c = caller(Role::President, Some(college));
    assert_eq!(user_list_scope(&c).unwrap(), UserScope::College(college));
    assert_eq!(college_list_scope(&c).unwrap(), CollegeScope::One(college));
  }

  #[test]
  fn president_without_college_sees_nothing() {
    let c = caller(Role::President, None);
    assert_eq!(user_list_scope(&c).unwrap(), UserScope::Empty);
    assert_eq!(college_list_scope(&c).unwrap(), CollegeScope::Empty);
  }

  #[test]
  fn members_cannot_list() {
    for role in [Role::Member, Role::Unverified] {
      let c = caller(role, Some(Uuid::new_v4()));
      assert_eq!(user_list_scope(&c), Err(Deny::NotManager));
      assert_eq!(college_list_scope(&c), Err(Deny::NotManager));
    }
  }

  // ── Mutation ─────────────────────────────────────────────────────────────

  #[test]
  fn superadmin_mutates_anyone() {
    let c = caller(Role::Superadmin, None);
    let t = target(Role::President, Some(Uuid::new_v4()));
    assert!(authorize_user_mutation(&c, &t).is_ok());
  }

  #[test]
  fn president_mutates_own_college_member() {
    let college = Uuid::new_v4();
    let c = caller(Role::President, Some(college));
    let t = target(Role::Unverified, Some(college));
    assert!(authorize_user_mutation(&c, &t).is_ok());
  }

  #[test]
  fn president_denied_outside_jurisdiction() {
    let c = caller(Role::President, Some(Uuid::new_v4()));
    let t = target(Role::Member, Some(Uuid::new_v4()));
    assert_eq!(authorize_user_mutation(&c, &t), Err(Deny::OutsideJurisdiction));
  }

  #[test]
  fn president_denied_on_unaffiliated_target() {
    // Target with no college at all is also outside a president's scope.
    let c = caller(Role::President, Some(Uuid::new_v4()));
    let t = target(Role::Member, None);
    assert_eq!(authorize_user_mutation(&c, &t), Err(Deny::OutsideJurisdiction));
  }

  #[test]
  fn president_denied_on_privileged_targets() {
    let college = Uuid::new_v4();
    let c = caller(Role::President, Some(college));
    for role in [Role::Superadmin, Role::President] {
      let t = target(role, Some(college));
      assert_eq!(authorize_user_mutation(&c, &t), Err(Deny::PrivilegedTarget));
    }
  }

  #[test]
  fn president_without_college_cannot_mutate() {
    let c = caller(Role::President, None);
    let t = target(Role::Member, None);
    assert_eq!(authorize_user_mutation(&c, &t), Err(Deny::NoCollege));
  }

  #[test]
  fn member_cannot_mutate() {
    let c = caller(Role::Member, None);
    let t = target(Role::Unverified, None);
    assert_eq!(authorize_user_mutation(&c, &t), Err(Deny::NotManager));
  }

  // ── Role assignment ──────────────────────────────────────────────────────

  #[test]
  fn president_cannot_assign_privileged_roles() {
    let c = caller(Role::President, Some(Uuid::new_v4()));
    assert_eq!(
      authorize_role_assignment(&c, Role::Superadmin),
      Err(Deny::PrivilegedAssignment)
    );
    assert_eq!(
      authorize_role_assignment(&c, Role::President),
      Err(Deny::PrivilegedAssignment)
    );
    assert!(authorize_role_assignment(&c, Role::Member).is_ok());
  }

  #[test]
  fn superadmin_assigns_any_role() {
    let c = caller(Role::Superadmin, None);
    for role in [Role::Superadmin, Role::President, Role::Member, Role::Unverified] {
      assert!(authorize_role_assignment(&c, role).is_ok());
    }
  }

  // ── Deletion ─────────────────────────────────────────────────────────────

  #[test]
  fn superadmin_target_is_delete_protected_from_everyone() {
    let t = target(Role::Superadmin, None);
    for role in [Role::Superadmin, Role::President, Role::Member] {
      let c = caller(role, Some(Uuid::new_v4()));
      assert_eq!(authorize_user_deletion(&c, &t), Err(Deny::ProtectedRole));
    }
  }

  #[test]
  fn superadmin_deletes_ordinary_accounts() {
    let c = caller(Role::Superadmin, None);
    let t = target(Role::Member, Some(Uuid::new_v4()));
    assert!(authorize_user_deletion(&c, &t).is_ok());
  }

  // ── Colleges / announcements ─────────────────────────────────────────────

  #[test]
  fn college_update_scoping() {
    let college = Uuid::new_v4();
    let other = Uuid::new_v4();

    let sa = caller(Role::Superadmin, None);
    assert!(authorize_college_update(&sa, college).is_ok());

    let p = caller(Role::President, Some(college));
    assert!(authorize_college_update(&p, college).is_ok());
    assert_eq!(
      authorize_college_update(&p, other),
      Err(Deny::OutsideJurisdiction)
    );

    let m = caller(Role::Member, Some(college));
    assert_eq!(authorize_college_update(&m, college), Err(Deny::NotManager));
  }

  #[test]
  fn announcement_management_is_manager_only() {
    assert!(authorize_announcement_manage(&caller(Role::Superadmin, None)).is_ok());
    assert!(authorize_announcement_manage(&caller(Role::President, None)).is_ok());
    assert!(authorize_announcement_manage(&caller(Role::Member, None)).is_err());
  }
}
