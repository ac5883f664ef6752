//! # Preferences Service Module
//!
//! Persists the UI choices the frontend restores on start-up: interface and
//! template languages, search text, selected category, favorites and the
//! last variable values. Storage is a SQLite key-value table (see `store`).
//!
//! ## Routes
//! - `GET /api/preferences`: the stored preferences, defaults when none.
//! - `POST /api/preferences/save`: replaces the stored preferences with the
//!   JSON body.
//! - `POST /api/preferences/favorites/{template_id}`: adds or removes one
//!   template from the favorites and returns the updated preferences.

mod favorites;
mod get;
mod save;
pub(crate) mod store;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/preferences";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(get::process))
        .route("/save", post().to(save::process))
        .route("/favorites/{template_id}", post().to(favorites::process))
}
