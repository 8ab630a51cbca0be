//! Role-metadata management under `/admin/roles`.
//!
//! This table feeds the dashboard's role picker; it carries no authority of
//! its own (the policy is fixed in `quad_core::access`), which is why
//! creating a custom role row grants nothing.

use axum::{
  Json,
  extract::{Query, State},
  http::StatusCode,
  response::{IntoResponse, Response},
};
use quad_core::{access, role::NewRoleMeta, store::PortalStore};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
  AppState,
  error::{Error, store_err},
  handlers::{ok_data, ok_message, resolve_caller},
  session::Claim,
};

/// `GET /admin/roles` — all role rows. Managers only.
pub async fn list<S>(
  State(state): State<AppState<S>>,
  claim: Claim,
) -> Result<Json<serde_json::Value>, Error>
where
  S: PortalStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let caller = resolve_caller(&*state.store, &claim).await?;
  access::ensure_manager(&caller)?;

  let roles = state.store.list_roles().await.map_err(store_err)?;
  Ok(ok_data(roles))
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoleBody {
  pub name: String,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub color: Option<String>,
}

/// `POST /admin/roles` — add a custom role row. Superadmin only.
pub async fn create<S>(
  State(state): State<AppState<S>>,
  claim: Claim,
  Json(body): Json<RoleBody>,
) -> Result<Response, Error>
where
  S: PortalStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let caller = resolve_caller(&*state.store, &claim).await?;
  access::ensure_superadmin(&caller)?;

  let name = body.name.trim().to_lowercase();
  if name.is_empty() {
    return Err(Error::BadRequest("role name is required".to_string()));
  }
  if state
    .store
    .find_role_by_name(&name)
    .await
    .map_err(store_err)?
    .is_some()
  {
    return Err(Error::Conflict("role already exists with this name".to_string()));
  }

  let role = state
    .store
    .create_role(NewRoleMeta {
      name,
      description: body.description,
      color: body.color.unwrap_or_else(|| "gray".to_string()),
    })
    .await
    .map_err(store_err)?;
  Ok((StatusCode::CREATED, ok_data(role)).into_response())
}

#[derive(Debug, Deserialize)]
pub struct DeleteQuery {
  pub id: Uuid,
}

/// `DELETE /admin/roles?id=...` — remove a custom role row. Superadmin only;
/// the four built-in rows are refused.
pub async fn delete<S>(
  State(state): State<AppState<S>>,
  claim: Claim,
  Query(query): Query<DeleteQuery>,
) -> Result<Json<serde_json::Value>, Error>
where
  S: PortalStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let caller = resolve_caller(&*state.store, &claim).await?;
  access::ensure_superadmin(&caller)?;

  let role = state
    .store
    .get_role(query.id)
    .await
    .map_err(store_err)?
    .ok_or_else(|| Error::NotFound("role not found".to_string()))?;

  if role.is_static {
    return Err(Error::InvalidState("static roles cannot be deleted".to_string()));
  }

  if !state.store.delete_role(query.id).await.map_err(store_err)? {
    return Err(Error::NotFound("role not found".to_string()));
  }
  Ok(ok_message("role deleted"))
}
