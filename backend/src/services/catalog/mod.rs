//! # Catalog Service Module
//!
//! Serves the whole template catalog as loaded at start-up. The frontend
//! fetches it once and runs searches, drafting and rendering locally.
//!
//! ## Routes
//! - `GET /api/catalog`: the catalog JSON (`templates` and `variables`).

mod get;

use actix_web::web::{get, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/catalog";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", get().to(get::process))
}
