//! JSON REST API for the Quad student-union portal.
//!
//! Exposes an axum [`Router`] backed by any [`quad_core::store::PortalStore`].
//! Sessions ride in a cookie pair (see [`session`]); every response body is
//! the `{"success": ..}` envelope the dashboard consumes.

pub mod error;
pub mod handlers;
pub mod session;

pub use error::Error;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  routing::{delete, get, patch, post},
};
use quad_core::store::PortalStore;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml`.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState<S: PortalStore> {
  pub store:  Arc<S>,
  pub config: Arc<ServerConfig>,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the full portal router for `state`.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: PortalStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    // Auth
    .route("/auth/register", post(handlers::auth::register::<S>))
    .route("/auth/login",    post(handlers::auth::login::<S>))
    .route("/auth/logout",   post(handlers::auth::logout))
    .route("/auth/me",       get(handlers::auth::me))
    // Profile (self-service)
    .route(
      "/profile",
      get(handlers::profile::get_profile::<S>)
        .patch(handlers::profile::update_profile::<S>),
    )
    .route(
      "/profile/request-upgrade",
      post(handlers::profile::request_upgrade::<S>),
    )
    // Public directory
    .route("/colleges",             get(handlers::colleges::list::<S>))
    .route(
      "/colleges/{id}",
      get(handlers::colleges::get_one::<S>).put(handlers::colleges::update::<S>),
    )
    .route("/colleges/slug/{slug}", get(handlers::colleges::get_by_slug::<S>))
    .route("/donors",               get(handlers::donors::list::<S>))
    // Announcements
    .route(
      "/announcements",
      get(handlers::announcements::list::<S>)
        .post(handlers::announcements::create::<S>),
    )
    .route("/announcements/{id}", delete(handlers::announcements::delete::<S>))
    // Admin
    .route("/admin/users",      get(handlers::admin::list_users::<S>))
    .route(
      "/admin/users/{id}",
      patch(handlers::admin::update_user::<S>)
        .delete(handlers::admin::delete_user::<S>),
    )
    .route(
      "/admin/colleges",
      get(handlers::admin::list_colleges::<S>)
        .post(handlers::admin::create_college::<S>),
    )
    .route(
      "/admin/assign-president",
      post(handlers::admin::assign_president::<S>),
    )
    .route(
      "/admin/roles",
      get(handlers::roles::list::<S>)
        .post(handlers::roles::create::<S>)
        .delete(handlers::roles::delete::<S>),
    )
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────
