//! Announcement ticker endpoints under `/announcements`.

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::{IntoResponse, Response},
};
use quad_core::{access, announcement::NewAnnouncement, store::PortalStore};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
  AppState,
  error::{Error, store_err},
  handlers::{ok_data, ok_message, resolve_caller},
  session::Claim,
};

/// `GET /announcements` — active announcements, priority then recency.
/// Public.
pub async fn list<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<serde_json::Value>, Error>
where
  S: PortalStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let announcements = state
    .store
    .list_announcements(true)
    .await
    .map_err(store_err)?;
  Ok(ok_data(announcements))
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnnouncementBody {
  pub text: String,
  #[serde(default)]
  pub link: Option<String>,
  #[serde(default)]
  pub priority: Option<i64>,
}

/// `POST /announcements` — post to the ticker. Managers only; the author is
/// the caller, never taken from the body.
pub async fn create<S>(
  State(state): State<AppState<S>>,
  claim: Claim,
  Json(body): Json<AnnouncementBody>,
) -> Result<Response, Error>
where
  S: PortalStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let caller = resolve_caller(&*state.store, &claim).await?;
  access::authorize_announcement_manage(&caller)?;

  if body.text.trim().is_empty() {
    return Err(Error::BadRequest("announcement text is required".to_string()));
  }

  let announcement = state
    .store
    .create_announcement(NewAnnouncement {
      text:      body.text,
      link:      body.link,
      priority:  body.priority.unwrap_or(0),
      author_id: Some(caller.user_id),
    })
    .await
    .map_err(store_err)?;
  Ok((StatusCode::CREATED, ok_data(announcement)).into_response())
}

/// `DELETE /announcements/{id}` — remove a ticker entry. Managers only.
pub async fn delete<S>(
  State(state): State<AppState<S>>,
  claim: Claim,
  Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, Error>
where
  S: PortalStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let caller = resolve_caller(&*state.store, &claim).await?;
  access::authorize_announcement_manage(&caller)?;

  if !state.store.delete_announcement(id).await.map_err(store_err)? {
    return Err(Error::NotFound("announcement not found".to_string()));
  }
  Ok(ok_message("announcement deleted"))
}
