//! Public college directory under `/colleges`.

use axum::{
  Json,
  extract::{Path, State},
};
use quad_core::{access, store::PortalStore};
use uuid::Uuid;

use crate::{
  AppState,
  error::{Error, store_err},
  handlers::{ok_data, resolve_caller},
  session::Claim,
};

/// `GET /colleges` — the public directory listing (id, name, short name).
/// No authentication required.
pub async fn list<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<serde_json::Value>, Error>
where
  S: PortalStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let summaries = state
    .store
    .list_college_summaries()
    .await
    .map_err(store_err)?;
  Ok(ok_data(summaries))
}

/// `GET /colleges/{id}` — the full public college page, unauthenticated.
pub async fn get_one<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, Error>
where
  S: PortalStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let college = state
    .store
    .get_college(id)
    .await
    .map_err(store_err)?
    .ok_or_else(|| Error::NotFound("college not found".to_string()))?;
  Ok(ok_data(college))
}

/// `GET /colleges/slug/{slug}` — lookup by URL slug.
pub async fn get_by_slug<S>(
  State(state): State<AppState<S>>,
  Path(slug): Path<String>,
) -> Result<Json<serde_json::Value>, Error>
where
  S: PortalStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let college = state
    .store
    .find_college_by_slug(&slug)
    .await
    .map_err(store_err)?
    .ok_or_else(|| Error::NotFound("college not found".to_string()))?;
  Ok(ok_data(college))
}

/// `PUT /colleges/{id}` — update a college page.
///
/// Check order: claim, then manager role, then record existence, then
/// jurisdiction. A non-manager never learns whether the id exists.
pub async fn update<S>(
  State(state): State<AppState<S>>,
  claim: Claim,
  Path(id): Path<Uuid>,
  Json(body): Json<super::admin::CollegeBody>,
) -> Result<Json<serde_json::Value>, Error>
where
  S: PortalStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let caller = resolve_caller(&*state.store, &claim).await?;
  access::ensure_manager(&caller)?;

  if state.store.get_college(id).await.map_err(store_err)?.is_none() {
    return Err(Error::NotFound("college not found".to_string()));
  }
  access::authorize_college_update(&caller, id)?;

  let college = state
    .store
    .update_college(id, body.into_update())
    .await
    .map_err(store_err)?;
  Ok(ok_data(college))
}
