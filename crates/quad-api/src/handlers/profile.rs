//! Self-service profile endpoints under `/profile`.

use axum::{Json, extract::State, response::{IntoResponse, Response}};
use quad_core::{
  store::PortalStore,
  user::{BloodGroup, Location, ProfileUpdate, Role, UserModeration},
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
  AppState,
  error::{Error, store_err},
  handlers::{ok_data, ok_message},
  session::{self, Claim},
};

/// `GET /profile` — the caller's own record, freshly loaded.
pub async fn get_profile<S>(
  State(state): State<AppState<S>>,
  claim: Claim,
) -> Result<Json<serde_json::Value>, Error>
where
  S: PortalStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let user = state
    .store
    .get_user(claim.id)
    .await
    .map_err(store_err)?
    .ok_or_else(|| Error::NotFound("user not found".to_string()))?;
  Ok(ok_data(user))
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileBody {
  #[serde(default)]
  pub name: Option<String>,
  #[serde(default)]
  pub phone: Option<String>,
  #[serde(default)]
  pub image: Option<String>,
  #[serde(default, rename = "bloodGroup")]
  pub blood_group: Option<BloodGroup>,
  #[serde(default, rename = "isBloodDonor")]
  pub is_blood_donor: Option<bool>,
  #[serde(default, rename = "isCampusVolunteer")]
  pub is_campus_volunteer: Option<bool>,
  #[serde(default)]
  pub location: Option<Location>,
  #[serde(default, rename = "college")]
  pub college_id: Option<Uuid>,
  #[serde(default, rename = "otherCollegeName")]
  pub other_college_name: Option<String>,
}

impl From<ProfileBody> for ProfileUpdate {
  fn from(body: ProfileBody) -> Self {
    ProfileUpdate {
      name:                body.name,
      phone:               body.phone,
      image:               body.image,
      blood_group:         body.blood_group,
      is_blood_donor:      body.is_blood_donor,
      is_campus_volunteer: body.is_campus_volunteer,
      location:            body.location,
      college_id:          body.college_id,
      other_college_name:  body.other_college_name,
    }
  }
}

/// `PATCH /profile` — partial update of the allow-listed fields. The claim
/// cookies are reissued so a name change is reflected client-side without a
/// fresh login.
pub async fn update_profile<S>(
  State(state): State<AppState<S>>,
  claim: Claim,
  Json(body): Json<ProfileBody>,
) -> Result<Response, Error>
where
  S: PortalStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let update = ProfileUpdate::from(body);
  if update.is_empty() {
    return Err(Error::BadRequest("no fields to update".to_string()));
  }

  if state.store.get_user(claim.id).await.map_err(store_err)?.is_none() {
    return Err(Error::NotFound("user not found".to_string()));
  }

  let user = state
    .store
    .update_profile(claim.id, update)
    .await
    .map_err(store_err)?;

  let mut response = ok_data(&user).into_response();
  session::attach(&mut response, &user)?;
  Ok(response)
}

/// `POST /profile/request-upgrade` — ask a manager to verify the account.
///
/// Only meaningful for an `unverified` account that has a college on record;
/// the request itself just clears any previous rejection note, which puts the
/// account back in the managers' pending queue.
pub async fn request_upgrade<S>(
  State(state): State<AppState<S>>,
  claim: Claim,
) -> Result<Json<serde_json::Value>, Error>
where
  S: PortalStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let user = state
    .store
    .get_user(claim.id)
    .await
    .map_err(store_err)?
    .ok_or_else(|| Error::NotFound("user not found".to_string()))?;

  if user.role != Role::Unverified {
    return Err(Error::InvalidState(
      "account is already verified".to_string(),
    ));
  }
  // A free-text `other_college_name` is not enough: verification requests
  // route to a college's managers, so a directory college must be linked.
  if user.college_id.is_none() {
    return Err(Error::InvalidState(
      "a college must be set before requesting verification".to_string(),
    ));
  }

  state
    .store
    .moderate_user(claim.id, UserModeration {
      role:             None,
      rejection_reason: Some(String::new()),
    })
    .await
    .map_err(store_err)?;

  Ok(ok_message("verification request submitted"))
}
