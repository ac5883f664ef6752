//! Shared model and template engine for the Courriel drafting assistant.
//!
//! The crate is split the same way the rest of the workspace consumes it:
//!
//! - [`model`]: catalog records, variable definitions, the per-template
//!   variable store and user preferences. Everything here is `serde`-ready
//!   because the backend serves it as JSON and the frontend deserializes it.
//! - [`engine`]: the pure text algorithms. Parsing `<<Name>>` placeholders into
//!   segments, substituting values, aligning edited text back onto a template
//!   and the edit-preserving refill.
//! - [`editor`]: the edit reconciliation loop that sits between an editable
//!   surface (a `contenteditable` element, a terminal buffer, ...) and the
//!   engine, plus the [`editor::Draft`] session that owns subject and body.
//! - [`export`]: plain text, `mailto:`, `.eml` and HTML serializations of a
//!   finished message, and deep links to a template.
//! - [`requests`]: JSON payloads exchanged between frontend and backend.
//!
//! Nothing in this crate performs I/O.

pub mod editor;
pub mod engine;
pub mod error;
pub mod export;
pub mod model;
pub mod requests;
pub mod transform;
