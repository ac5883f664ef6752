//! # Draft Service Module
//!
//! Runs the substitution engine and the reconciling renderer on the server,
//! for hosts that draft messages without the browser editor (scripts, mail
//! merge tools). Nothing is stored: each request carries the whole draft.
//!
//! ## Routes
//! - `POST /api/drafts/render`: opens a template with the catalog examples,
//!   overlaid with the request's variables, and returns the substituted
//!   subject and body with their annotations.
//! - `POST /api/drafts/annotate`: aligns edited subject and body texts
//!   against the template and returns the annotations. Texts come back
//!   unchanged.

mod annotate;
mod render;

use actix_web::web::{post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/drafts";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/render", post().to(render::process))
        .route("/annotate", post().to(annotate::process))
}
