//! Session claim carrier — the cookie pair asserting who is calling.
//!
//! Two cookies, both deliberately readable by scripts (the dashboard reads
//! them client-side), with a one-week lifetime:
//!
//! - `auth_role`: the role name as a plain string.
//! - `auth_user`: URL-safe base64 of the JSON blob `{id, name, role}`.
//!
//! There is no server-side session store; the claim is the only session
//! record. The role embedded here is set at login and can go stale, so
//! authorization-sensitive routes re-resolve the caller from the store and
//! use the claim only for its `id`.

use axum::{
  extract::FromRequestParts,
  http::{HeaderMap, HeaderValue, header, request::Parts},
  response::Response,
};
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD as B64;
use quad_core::user::{Role, User};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::error::Error;

pub const USER_COOKIE: &str = "auth_user";
pub const ROLE_COOKIE: &str = "auth_role";

/// One week, in seconds.
const MAX_AGE_SECS: u64 = 60 * 60 * 24 * 7;

// ─── Claim ───────────────────────────────────────────────────────────────────

/// The caller-asserted identity parsed from the cookie pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
  pub id:   Uuid,
  pub name: String,
  pub role: Role,
}

/// Why a claim could not be produced from a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClaimError {
  #[error("no session claim present")]
  Missing,
  #[error("malformed session claim")]
  Malformed,
}

// ─── Issue / revoke ──────────────────────────────────────────────────────────

/// Append both claim cookies for `user` to `response`.
pub fn attach(response: &mut Response, user: &User) -> Result<(), Error> {
  let blob = serde_json::to_vec(&Claim {
    id:   user.user_id,
    name: user.name.clone(),
    role: user.role,
  })
  .map_err(|e| Error::Internal(e.to_string()))?;

  let cookies = [
    format!(
      "{ROLE_COOKIE}={}; Path=/; Max-Age={MAX_AGE_SECS}; SameSite=Lax",
      user.role.as_str()
    ),
    format!(
      "{USER_COOKIE}={}; Path=/; Max-Age={MAX_AGE_SECS}; SameSite=Lax",
      B64.encode(&blob)
    ),
  ];
  for cookie in cookies {
    let value = HeaderValue::from_str(&cookie)
      .map_err(|e| Error::Internal(e.to_string()))?;
    response.headers_mut().append(header::SET_COOKIE, value);
  }
  Ok(())
}

/// Clear both claim cookies immediately. Idempotent: clearing an absent
/// cookie is a no-op on the client.
pub fn revoke(response: &mut Response) {
  for cookie in [
    "auth_role=; Path=/; Max-Age=0",
    "auth_user=; Path=/; Max-Age=0",
  ] {
    response
      .headers_mut()
      .append(header::SET_COOKIE, HeaderValue::from_static(cookie));
  }
}

// ─── Parse ───────────────────────────────────────────────────────────────────

/// Find `name` in any `Cookie` header.
fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
  for header in headers.get_all(header::COOKIE) {
    let Ok(raw) = header.to_str() else { continue };
    for pair in raw.split(';') {
      if let Some((key, value)) = pair.trim().split_once('=')
        && key == name
      {
        return Some(value.to_string());
      }
    }
  }
  None
}

/// Parse the claim from a request's cookies.
///
/// The plain `auth_role` cookie wins over the role inside the blob (it is
/// the one the original clients kept refreshed); if either cookie is absent
/// the claim is [`ClaimError::Missing`], and any undecodable payload is
/// [`ClaimError::Malformed`] — unauthenticated, never a server error.
pub fn parse(headers: &HeaderMap) -> Result<Claim, ClaimError> {
  let blob = cookie_value(headers, USER_COOKIE).ok_or(ClaimError::Missing)?;
  let role = cookie_value(headers, ROLE_COOKIE).ok_or(ClaimError::Missing)?;

  let bytes = B64.decode(blob.as_bytes()).map_err(|_| ClaimError::Malformed)?;
  let mut claim: Claim =
    serde_json::from_slice(&bytes).map_err(|_| ClaimError::Malformed)?;
  claim.role = Role::parse(&role).map_err(|_| ClaimError::Malformed)?;
  Ok(claim)
}

// ─── Extractor ───────────────────────────────────────────────────────────────

impl<S> FromRequestParts<S> for Claim
where
  S: Send + Sync,
{
  type Rejection = Error;

  async fn from_request_parts(
    parts: &mut Parts,
    _state: &S,
  ) -> Result<Self, Self::Rejection> {
    Ok(parse(&parts.headers)?)
  }
}
