//! # Template Service Module
//!
//! Read-only queries over the template catalog, for clients that do not want
//! to download and filter the whole catalog themselves.
//!
//! ## Sub-modules:
//! - `list`: search and category filtering, optionally restricted to the
//!   stored favorites.
//! - `categories`: distinct categories with their localized labels.
//! - `get`: a single template by id.

mod categories;
mod get;
mod list;

use actix_web::web::{get, scope};
use actix_web::Scope;

/// The base path for all template-related API endpoints.
const API_PATH: &str = "/api/templates";

/// Configures and returns the Actix `Scope` for all template-related routes.
///
/// # Registered Routes:
///
/// *   **`GET ?q=&category=&lang=&favorites_only=`**:
///     - **Handler**: `list::process`
///     - **Description**: Templates whose localized title or description, or
///       whose category, contains `q` (case-insensitive), restricted to
///       `category` unless it is empty or `all`. With `favorites_only=true`
///       only templates in the stored favorites are returned. Catalog order
///       is kept.
///
/// *   **`GET /categories?lang=`**:
///     - **Handler**: `categories::process`
///     - **Description**: The `all` pseudo-category followed by every catalog
///       category in first-seen order, each with its label in `lang`.
///
/// *   **`GET /{template_id}`**:
///     - **Handler**: `get::process`
///     - **Description**: The template with both languages, or `404`.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("/categories", get().to(categories::process))
        .route("/{template_id}", get().to(get::process))
}
