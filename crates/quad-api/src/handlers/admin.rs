//! Manager-facing endpoints under `/admin`.
//!
//! Every route here re-resolves the caller from the store before consulting
//! the policy in [`quad_core::access`]. The check order is fixed: claim
//! first (401), then the pre-load role check (403), then the target load
//! (404), then the post-load checks (403).

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::{IntoResponse, Response},
};
use quad_core::{
  access::{self, CollegeScope, UserScope},
  college::{
    CollegeUpdate, ContactInfo, Course, ImportantDate, NewCollege, Volunteer,
  },
  store::{PortalStore, UserQuery},
  user::{NewUser, Role, UserModeration},
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
  AppState,
  error::{Error, store_err},
  handlers::{auth, ok_data, ok_message, resolve_caller},
  session::Claim,
};

// ─── Users ───────────────────────────────────────────────────────────────────

/// `GET /admin/users` — the accounts the caller manages, newest first.
pub async fn list_users<S>(
  State(state): State<AppState<S>>,
  claim: Claim,
) -> Result<Json<serde_json::Value>, Error>
where
  S: PortalStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let caller = resolve_caller(&*state.store, &claim).await?;
  let query = match access::user_list_scope(&caller)? {
    UserScope::AllManaged => UserQuery {
      roles: vec![Role::President, Role::Member, Role::Unverified],
      ..UserQuery::default()
    },
    UserScope::College(college) => UserQuery {
      roles:      vec![Role::Member, Role::Unverified],
      college_id: Some(college),
      ..UserQuery::default()
    },
    UserScope::Empty => return Ok(ok_data(Vec::<()>::new())),
  };
  let users = state.store.list_users(&query).await.map_err(store_err)?;
  Ok(ok_data(users))
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModerateBody {
  #[serde(default)]
  pub role: Option<Role>,
  /// An empty string clears any stored rejection note.
  #[serde(default, rename = "rejectionReason")]
  pub rejection_reason: Option<String>,
}

/// `PATCH /admin/users/{id}` — change a target's role and/or rejection note.
pub async fn update_user<S>(
  State(state): State<AppState<S>>,
  claim: Claim,
  Path(id): Path<Uuid>,
  Json(body): Json<ModerateBody>,
) -> Result<Json<serde_json::Value>, Error>
where
  S: PortalStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let caller = resolve_caller(&*state.store, &claim).await?;
  access::ensure_manager(&caller)?;

  if body.role.is_none() && body.rejection_reason.is_none() {
    return Err(Error::BadRequest("no fields to update".to_string()));
  }

  let target = state
    .store
    .get_user(id)
    .await
    .map_err(store_err)?
    .ok_or_else(|| Error::NotFound("user not found".to_string()))?;

  access::authorize_user_mutation(&caller, &target)?;
  if let Some(new_role) = body.role {
    access::authorize_role_assignment(&caller, new_role)?;
  }

  let user = state
    .store
    .moderate_user(id, UserModeration {
      role:             body.role,
      rejection_reason: body.rejection_reason,
    })
    .await
    .map_err(store_err)?;

  tracing::info!(
    caller = %caller.user_id,
    target = %id,
    role = ?body.role,
    "moderated user account"
  );
  Ok(ok_data(user))
}

/// `DELETE /admin/users/{id}` — hard-delete an account.
pub async fn delete_user<S>(
  State(state): State<AppState<S>>,
  claim: Claim,
  Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, Error>
where
  S: PortalStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let caller = resolve_caller(&*state.store, &claim).await?;
  access::ensure_manager(&caller)?;

  let target = state
    .store
    .get_user(id)
    .await
    .map_err(store_err)?
    .ok_or_else(|| Error::NotFound("user not found".to_string()))?;

  access::authorize_user_deletion(&caller, &target)?;

  if !state.store.delete_user(id).await.map_err(store_err)? {
    return Err(Error::NotFound("user not found".to_string()));
  }
  tracing::info!(caller = %caller.user_id, target = %id, "deleted user account");
  Ok(ok_message("user account deleted"))
}

// ─── Colleges ────────────────────────────────────────────────────────────────

/// `GET /admin/colleges` — the full college records the caller manages.
pub async fn list_colleges<S>(
  State(state): State<AppState<S>>,
  claim: Claim,
) -> Result<Json<serde_json::Value>, Error>
where
  S: PortalStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let caller = resolve_caller(&*state.store, &claim).await?;
  match access::college_list_scope(&caller)? {
    CollegeScope::All => {
      let colleges = state.store.list_colleges().await.map_err(store_err)?;
      Ok(ok_data(colleges))
    }
    CollegeScope::One(id) => {
      let college = state.store.get_college(id).await.map_err(store_err)?;
      Ok(ok_data(college.into_iter().collect::<Vec<_>>()))
    }
    CollegeScope::Empty => Ok(ok_data(Vec::<()>::new())),
  }
}

/// Shared college DTO for create and update. Field names match the
/// dashboard's JSON.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CollegeBody {
  #[serde(default)]
  pub name: Option<String>,
  #[serde(default)]
  pub slug: Option<String>,
  #[serde(default, rename = "shortName")]
  pub short_name: Option<String>,
  #[serde(default)]
  pub location: Option<String>,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub established: Option<String>,
  #[serde(default)]
  pub accreditation: Option<String>,
  #[serde(default, rename = "bannerColor")]
  pub banner_color: Option<String>,
  #[serde(default)]
  pub logo: Option<String>,
  #[serde(default)]
  pub highlights: Option<Vec<String>>,
  #[serde(default)]
  pub contact: Option<ContactInfo>,
  #[serde(default)]
  pub courses: Option<Vec<Course>>,
  #[serde(default, rename = "importantDates")]
  pub important_dates: Option<Vec<ImportantDate>>,
  #[serde(default)]
  pub volunteers: Option<Vec<Volunteer>>,
}

impl CollegeBody {
  pub(crate) fn into_update(self) -> CollegeUpdate {
    CollegeUpdate {
      name:            self.name,
      short_name:      self.short_name,
      location:        self.location,
      description:     self.description,
      established:     self.established,
      accreditation:   self.accreditation,
      banner_color:    self.banner_color,
      logo:            self.logo,
      highlights:      self.highlights,
      contact:         self.contact,
      courses:         self.courses,
      important_dates: self.important_dates,
      volunteers:      self.volunteers,
    }
  }

  fn into_new(self) -> Result<NewCollege, Error> {
    let name = self
      .name
      .filter(|n| !n.trim().is_empty())
      .ok_or_else(|| Error::BadRequest("college name is required".to_string()))?;
    let slug = self
      .slug
      .filter(|s| !s.trim().is_empty())
      .ok_or_else(|| Error::BadRequest("college slug is required".to_string()))?;
    Ok(NewCollege {
      name,
      slug,
      short_name:      self.short_name,
      location:        self.location,
      description:     self.description,
      established:     self.established,
      accreditation:   self.accreditation,
      banner_color:    self.banner_color,
      logo:            self.logo,
      highlights:      self.highlights.unwrap_or_default(),
      contact:         self.contact,
      courses:         self.courses.unwrap_or_default(),
      important_dates: self.important_dates.unwrap_or_default(),
      volunteers:      self.volunteers.unwrap_or_default(),
    })
  }
}

/// `POST /admin/colleges` — create a directory entry. Superadmin only.
pub async fn create_college<S>(
  State(state): State<AppState<S>>,
  claim: Claim,
  Json(body): Json<CollegeBody>,
) -> Result<Response, Error>
where
  S: PortalStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let caller = resolve_caller(&*state.store, &claim).await?;
  access::ensure_superadmin(&caller)?;

  let input = body.into_new()?;
  if state
    .store
    .find_college_by_slug(&input.slug)
    .await
    .map_err(store_err)?
    .is_some()
  {
    return Err(Error::Conflict(
      "college already exists with this slug".to_string(),
    ));
  }

  let college = state.store.create_college(input).await.map_err(store_err)?;
  tracing::info!(college = %college.college_id, slug = %college.slug, "created college");
  Ok((StatusCode::CREATED, ok_data(college)).into_response())
}

// ─── President assignment ────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssignPresidentBody {
  pub name:  String,
  pub email: String,
  /// Required when creating; optional (rehash) when updating.
  #[serde(default)]
  pub password: Option<String>,
  #[serde(default, rename = "collegeId")]
  pub college_id: Option<Uuid>,
  /// When set, the existing account is updated in place instead of a new
  /// one being created.
  #[serde(default, rename = "previousPresidentId")]
  pub previous_president_id: Option<Uuid>,
}

/// `POST /admin/assign-president` — create or replace a college's president
/// account. Superadmin only.
///
/// The create path inserts the account and points the college's
/// `president_id` at it in one transaction, so a crash between the two steps
/// cannot leave a dangling half-assignment.
pub async fn assign_president<S>(
  State(state): State<AppState<S>>,
  claim: Claim,
  Json(body): Json<AssignPresidentBody>,
) -> Result<Response, Error>
where
  S: PortalStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let caller = resolve_caller(&*state.store, &claim).await?;
  access::ensure_superadmin(&caller)?;

  let email = auth::normalize_email(&body.email);
  if body.name.trim().is_empty() || email.is_empty() {
    return Err(Error::BadRequest("name and email are required".to_string()));
  }

  if let Some(president_id) = body.previous_president_id {
    let existing = state
      .store
      .get_user(president_id)
      .await
      .map_err(store_err)?
      .ok_or_else(|| Error::NotFound("president account not found".to_string()))?;

    // On an email change, the new address must not collide with another
    // account.
    if existing.email != email
      && state
        .store
        .find_user_by_email(&email)
        .await
        .map_err(store_err)?
        .is_some()
    {
      return Err(Error::Conflict(
        "user already exists with this email".to_string(),
      ));
    }

    let password_hash = match body.password.as_deref() {
      Some(p) if !p.is_empty() => Some(auth::hash_password(p)?),
      _ => None,
    };

    let user = state
      .store
      .update_president(president_id, body.name, email, password_hash)
      .await
      .map_err(store_err)?;
    tracing::info!(president = %president_id, "updated president account");
    return Ok(ok_data(user).into_response());
  }

  let password = body
    .password
    .as_deref()
    .filter(|p| !p.is_empty())
    .ok_or_else(|| {
      Error::BadRequest("password is required for a new president".to_string())
    })?;

  if state
    .store
    .find_user_by_email(&email)
    .await
    .map_err(store_err)?
    .is_some()
  {
    return Err(Error::Conflict(
      "user already exists with this email".to_string(),
    ));
  }

  if let Some(college_id) = body.college_id
    && state
      .store
      .get_college(college_id)
      .await
      .map_err(store_err)?
      .is_none()
  {
    return Err(Error::NotFound("college not found".to_string()));
  }

  let user = state
    .store
    .create_president(
      NewUser {
        name:               body.name,
        email,
        password_hash:      auth::hash_password(password)?,
        role:               Role::President,
        college_id:         body.college_id,
        other_college_name: None,
        phone:              None,
        blood_group:        None,
        is_blood_donor:     false,
        location:           None,
      },
      body.college_id,
    )
    .await
    .map_err(store_err)?;

  tracing::info!(
    president = %user.user_id,
    college = ?body.college_id,
    "created president account"
  );
  Ok((StatusCode::CREATED, ok_data(user)).into_response())
}
