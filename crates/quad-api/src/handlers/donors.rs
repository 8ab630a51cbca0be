//! Public blood-donor registry at `GET /donors`.

use std::collections::HashMap;

use axum::{Json, extract::State};
use quad_core::{
  store::{PortalStore, UserQuery},
  user::{BloodGroup, Location, Role, User},
};
use serde::Serialize;
use uuid::Uuid;

use crate::{
  AppState,
  error::{Error, store_err},
  handlers::ok_data,
};

/// The subset of a donor's record exposed without authentication. Email and
/// role are deliberately absent; phone is included because donor matching is
/// the whole point of the registry.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorView {
  pub id:          Uuid,
  pub name:        String,
  pub image:       Option<String>,
  pub phone:       Option<String>,
  pub blood_group: Option<BloodGroup>,
  pub location:    Option<Location>,
  pub college:     Option<String>,
}

impl DonorView {
  fn from_user(user: User, colleges: &HashMap<Uuid, String>) -> Self {
    let college = user
      .college_id
      .and_then(|id| colleges.get(&id).cloned())
      .or(user.other_college_name);
    Self {
      id: user.user_id,
      name: user.name,
      image: user.image,
      phone: user.phone,
      blood_group: user.blood_group,
      location: user.location,
      college,
    }
  }
}

/// `GET /donors` — verified accounts that opted into the registry, with
/// college ids resolved to names.
pub async fn list<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<serde_json::Value>, Error>
where
  S: PortalStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let donors = state
    .store
    .list_users(&UserQuery {
      roles:       vec![Role::Member, Role::President],
      college_id:  None,
      donors_only: true,
    })
    .await
    .map_err(store_err)?;

  let colleges: HashMap<Uuid, String> = state
    .store
    .list_college_summaries()
    .await
    .map_err(store_err)?
    .into_iter()
    .map(|c| (c.college_id, c.name))
    .collect();

  let views: Vec<DonorView> = donors
    .into_iter()
    .map(|u| DonorView::from_user(u, &colleges))
    .collect();
  Ok(ok_data(views))
}
