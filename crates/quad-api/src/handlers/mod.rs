//! Route handlers, one module per resource.
//!
//! Shared plumbing lives here: the envelope helpers and the caller
//! resolution step every authorization-sensitive route starts with.

pub mod admin;
pub mod announcements;
pub mod auth;
pub mod colleges;
pub mod donors;
pub mod profile;
pub mod roles;

use axum::Json;
use quad_core::{access::Caller, store::PortalStore};
use serde::Serialize;
use serde_json::json;

use crate::{
  error::{Error, store_err},
  session::Claim,
};

/// `{"success": true, "data": ...}`
pub(crate) fn ok_data<T: Serialize>(data: T) -> Json<serde_json::Value> {
  Json(json!({ "success": true, "data": data }))
}

/// `{"success": true, "message": ...}`
pub(crate) fn ok_message(message: &str) -> Json<serde_json::Value> {
  Json(json!({ "success": true, "message": message }))
}

/// Re-resolve the caller from the store by claim id.
///
/// The claim's embedded role is never trusted here: a manager may have
/// changed the caller's role or college since login, and authorization must
/// see the current values. A claim whose account no longer exists is treated
/// as unauthenticated.
pub(crate) async fn resolve_caller<S>(store: &S, claim: &Claim) -> Result<Caller, Error>
where
  S: PortalStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let user = store
    .get_user(claim.id)
    .await
    .map_err(store_err)?
    .ok_or(Error::Unauthorized)?;
  Ok(Caller::from_user(&user))
}
