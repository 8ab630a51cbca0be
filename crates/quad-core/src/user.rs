//! User — the identity record behind every portal account.
//!
//! A user carries a role, an optional college affiliation, and the profile
//! fields surfaced on the public blood-donor registry. The password hash is
//! never serialized into API responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Role ────────────────────────────────────────────────────────────────────

/// The four built-in account roles, in descending order of privilege.
///
/// `Superadmin` and `President` are "manager" roles: they may act on records
/// other than their own, subject to the policy in [`crate::access`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
  Superadmin,
  President,
  Member,
  #[serde(rename = "unverified")]
  Unverified,
}

impl Role {
  /// The name stored in the `role` column and the `auth_role` cookie.
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Superadmin => "superadmin",
      Self::President => "president",
      Self::Member => "member",
      Self::Unverified => "unverified",
    }
  }

  pub fn parse(s: &str) -> Result<Self> {
    match s {
      "superadmin" => Ok(Self::Superadmin),
      "president" => Ok(Self::President),
      "member" => Ok(Self::Member),
      "unverified" => Ok(Self::Unverified),
      other => Err(Error::UnknownRole(other.to_string())),
    }
  }

  /// Whether this role may act on accounts other than its own.
  pub fn is_manager(&self) -> bool {
    matches!(self, Self::Superadmin | Self::President)
  }
}

// ─── Profile attributes ──────────────────────────────────────────────────────

/// ABO/Rh blood group, as shown on the donor registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BloodGroup {
  #[serde(rename = "A+")]
  APositive,
  #[serde(rename = "A-")]
  ANegative,
  #[serde(rename = "B+")]
  BPositive,
  #[serde(rename = "B-")]
  BNegative,
  #[serde(rename = "AB+")]
  AbPositive,
  #[serde(rename = "AB-")]
  AbNegative,
  #[serde(rename = "O+")]
  OPositive,
  #[serde(rename = "O-")]
  ONegative,
  Unknown,
}

impl BloodGroup {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::APositive => "A+",
      Self::ANegative => "A-",
      Self::BPositive => "B+",
      Self::BNegative => "B-",
      Self::AbPositive => "AB+",
      Self::AbNegative => "AB-",
      Self::OPositive => "O+",
      Self::ONegative => "O-",
      Self::Unknown => "Unknown",
    }
  }

  pub fn parse(s: &str) -> Result<Self> {
    match s {
      "A+" => Ok(Self::APositive),
      "A-" => Ok(Self::ANegative),
      "B+" => Ok(Self::BPositive),
      "B-" => Ok(Self::BNegative),
      "AB+" => Ok(Self::AbPositive),
      "AB-" => Ok(Self::AbNegative),
      "O+" => Ok(Self::OPositive),
      "O-" => Ok(Self::ONegative),
      "Unknown" => Ok(Self::Unknown),
      other => Err(Error::UnknownBloodGroup(other.to_string())),
    }
  }
}

/// City plus an optional sector, used for donor matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
  pub city:   String,
  pub sector: Option<String>,
}

// ─── User ────────────────────────────────────────────────────────────────────

/// A portal account.
///
/// `email` is stored lowercased and trimmed; uniqueness is case-insensitive.
/// `college_id` is a weak reference — the college may list this user back as
/// its president, but neither side owns the other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
  pub user_id:             Uuid,
  pub name:                String,
  pub email:               String,
  /// Argon2 PHC string. Skipped on serialization so it can never leak
  /// through an API response.
  #[serde(skip_serializing, default)]
  pub password_hash:       String,
  pub image:               Option<String>,
  pub phone:               Option<String>,
  pub role:                Role,
  /// Set by a manager when a verification request is declined; cleared when
  /// the user re-requests.
  pub rejection_reason:    Option<String>,
  pub college_id:          Option<Uuid>,
  /// Free-text college name when the user's college is not in the directory.
  pub other_college_name:  Option<String>,
  pub blood_group:         Option<BloodGroup>,
  pub is_blood_donor:      bool,
  pub is_campus_volunteer: bool,
  pub location:            Option<Location>,
  pub created_at:          DateTime<Utc>,
  pub updated_at:          DateTime<Utc>,
}

// ─── Store inputs ────────────────────────────────────────────────────────────

/// Input to [`crate::store::PortalStore::create_user`].
///
/// The role is decided by the calling handler (registration forces
/// [`Role::Unverified`], president creation forces [`Role::President`]);
/// it is never taken from client JSON.
#[derive(Debug, Clone)]
pub struct NewUser {
  pub name:               String,
  /// Already normalized (lowercased, trimmed) by the caller.
  pub email:              String,
  pub password_hash:      String,
  pub role:               Role,
  pub college_id:         Option<Uuid>,
  pub other_college_name: Option<String>,
  pub phone:              Option<String>,
  pub blood_group:        Option<BloodGroup>,
  pub is_blood_donor:     bool,
  pub location:           Option<Location>,
}

/// Self-service profile update. Only the allow-listed fields appear here;
/// role, email, and password have dedicated paths.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
  pub name:                Option<String>,
  pub phone:               Option<String>,
  pub image:               Option<String>,
  pub blood_group:         Option<BloodGroup>,
  pub is_blood_donor:      Option<bool>,
  pub is_campus_volunteer: Option<bool>,
  pub location:            Option<Location>,
  pub college_id:          Option<Uuid>,
  pub other_college_name:  Option<String>,
}

impl ProfileUpdate {
  pub fn is_empty(&self) -> bool {
    self.name.is_none()
      && self.phone.is_none()
      && self.image.is_none()
      && self.blood_group.is_none()
      && self.is_blood_donor.is_none()
      && self.is_campus_volunteer.is_none()
      && self.location.is_none()
      && self.college_id.is_none()
      && self.other_college_name.is_none()
  }
}

/// Manager-side mutation of a target account: role change and/or rejection
/// note. An empty `rejection_reason` string clears the stored reason.
#[derive(Debug, Clone, Default)]
pub struct UserModeration {
  pub role:             Option<Role>,
  pub rejection_reason: Option<String>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn role_round_trips_through_names() {
    for role in [Role::Superadmin, Role::President, Role::Member, Role::Unverified] {
      assert_eq!(Role::parse(role.as_str()).unwrap(), role);
    }
  }

  #[test]
  fn role_parse_rejects_unknown() {
    assert!(Role::parse("admin").is_err());
  }

  #[test]
  fn manager_roles() {
    assert!(Role::Superadmin.is_manager());
    assert!(Role::President.is_manager());
    assert!(!Role::Member.is_manager());
    assert!(!Role::Unverified.is_manager());
  }

  #[test]
  fn blood_group_serde_uses_clinical_names() {
    let json = serde_json::to_string(&BloodGroup::AbNegative).unwrap();
    assert_eq!(json, "\"AB-\"");
    let parsed: BloodGroup = serde_json::from_str("\"O+\"").unwrap();
    assert_eq!(parsed, BloodGroup::OPositive);
  }
}
