//! # Export Service Module
//!
//! Turns a finished subject and body into the formats the user takes out of
//! the app. Exports work on flattened text only; annotations never reach
//! this module.
//!
//! ## Routes
//! - `POST /api/export/{format}` with `{subject, body, language, target}`:
//!   - `text`: the clipboard text (`target` picks subject, body or both).
//!   - `eml`: an unsent RFC 5322 message served as a `draft.eml` download.
//!   - `html`: a minimal HTML document.
//!   - `mailto`: the `mailto:` URL that opens the default mail client.

mod format;

use actix_web::web::{post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/export";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/{format}", post().to(format::process))
}
