//! Handlers for `/auth` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/auth/register` | Role is always forced to `unverified` |
//! | `POST` | `/auth/login`    | Issues the claim cookie pair |
//! | `POST` | `/auth/logout`   | Clears both cookies; idempotent |
//! | `GET`  | `/auth/me`       | Echoes the claim; 200 either way |

use argon2::{
  Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
  password_hash::SaltString,
};
use axum::{
  Json,
  extract::State,
  http::HeaderMap,
  response::{IntoResponse, Response},
};
use quad_core::{
  store::PortalStore,
  user::{BloodGroup, Location, NewUser, Role, User},
};
use rand_core::OsRng;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::{
  AppState,
  error::{Error, store_err},
  handlers::ok_data,
  session,
};

// ─── Password hashing ────────────────────────────────────────────────────────

pub(crate) fn hash_password(password: &str) -> Result<String, Error> {
  let salt = SaltString::generate(&mut OsRng);
  Ok(
    Argon2::default()
      .hash_password(password.as_bytes(), &salt)
      .map_err(|e| Error::Internal(format!("argon2 error: {e}")))?
      .to_string(),
  )
}

fn verify_password(password: &str, phc: &str) -> bool {
  let Ok(parsed) = PasswordHash::new(phc) else {
    return false;
  };
  Argon2::default()
    .verify_password(password.as_bytes(), &parsed)
    .is_ok()
}

/// Lowercase and trim, the canonical form for storage and lookup.
pub(crate) fn normalize_email(email: &str) -> String {
  email.trim().to_lowercase()
}

// ─── Register ────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegisterBody {
  pub name:     String,
  pub email:    String,
  pub password: String,
  /// Accepted and discarded: registration always yields an `unverified`
  /// account, whatever the client claims to be.
  #[serde(default)]
  pub role: Option<serde_json::Value>,
  #[serde(default, rename = "college")]
  pub college_id: Option<Uuid>,
  #[serde(default, rename = "otherCollegeName")]
  pub other_college_name: Option<String>,
  #[serde(default)]
  pub phone: Option<String>,
  #[serde(default, rename = "bloodGroup")]
  pub blood_group: Option<BloodGroup>,
  #[serde(default, rename = "isBloodDonor")]
  pub is_blood_donor: Option<bool>,
  #[serde(default)]
  pub location: Option<Location>,
}

/// `POST /auth/register`
pub async fn register<S>(
  State(state): State<AppState<S>>,
  Json(body): Json<RegisterBody>,
) -> Result<Json<serde_json::Value>, Error>
where
  S: PortalStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let email = normalize_email(&body.email);
  if body.name.trim().is_empty() || email.is_empty() || body.password.is_empty() {
    return Err(Error::BadRequest(
      "name, email, and password are required".to_string(),
    ));
  }

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

  let user = state
    .store
    .create_user(NewUser {
      name:               body.name,
      email,
      password_hash:      hash_password(&body.password)?,
      role:               Role::Unverified,
      college_id:         body.college_id,
      other_college_name: body.other_college_name,
      phone:              body.phone,
      blood_group:        body.blood_group,
      is_blood_donor:     body.is_blood_donor.unwrap_or(false),
      location:           body.location,
    })
    .await
    .map_err(store_err)?;

  tracing::info!(user_id = %user.user_id, "registered new account");

  Ok(ok_data(json!({
    "id":      user.user_id,
    "name":    user.name,
    "email":   user.email,
    "role":    user.role,
    "college": user.college_id,
  })))
}

// ─── Login ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoginBody {
  pub email:    String,
  pub password: String,
}

fn login_view(user: &User) -> serde_json::Value {
  json!({
    "id":              user.user_id,
    "name":            user.name,
    "email":           user.email,
    "role":            user.role,
    "image":           user.image,
    "college":         user.college_id,
    "rejectionReason": user.rejection_reason,
  })
}

/// `POST /auth/login`
///
/// Unknown email and wrong password take the same rejection path so the two
/// cases are indistinguishable to the client.
pub async fn login<S>(
  State(state): State<AppState<S>>,
  Json(body): Json<LoginBody>,
) -> Result<Response, Error>
where
  S: PortalStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let email = normalize_email(&body.email);
  let user = state
    .store
    .find_user_by_email(&email)
    .await
    .map_err(store_err)?
    .ok_or(Error::InvalidCredentials)?;

  if !verify_password(&body.password, &user.password_hash) {
    return Err(Error::InvalidCredentials);
  }

  let mut response = ok_data(login_view(&user)).into_response();
  session::attach(&mut response, &user)?;
  Ok(response)
}

// ─── Logout ──────────────────────────────────────────────────────────────────

/// `POST /auth/logout` — clears the claim cookies whether or not any were
/// sent, so repeated calls behave identically.
pub async fn logout() -> Response {
  let mut response =
    Json(json!({ "success": true, "message": "logged out" })).into_response();
  session::revoke(&mut response);
  response
}

// ─── Me ──────────────────────────────────────────────────────────────────────

/// `GET /auth/me` — echoes the claim without touching the store. An absent
/// or malformed claim yields `{"success": false}` with a 200, matching what
/// the dashboard's bootstrap fetch expects.
pub async fn me(headers: HeaderMap) -> Json<serde_json::Value> {
  match session::parse(&headers) {
    Ok(claim) => Json(json!({
      "success": true,
      "data": { "id": claim.id, "name": claim.name, "role": claim.role },
    })),
    Err(_) => Json(json!({ "success": false })),
  }
}
