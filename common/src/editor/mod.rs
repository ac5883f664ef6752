//! Edit reconciliation loop.
//!
//! A host shows each live text (subject, body) on an editable surface. On
//! every keystroke the host calls [`LiveField::on_input`]; when the variable
//! store or template changes it calls [`LiveField::replace_text`] with the
//! text produced by the [`Draft`]. The field re-annotates, re-renders the
//! surface and puts the caret back at the same plain-text offset.
//!
//! Writes the field makes to the surface are never reported back as edits:
//! after a render the surface flattens to the field's own text, so the next
//! `on_input` sees no change, and pushing the field's own text back through
//! `replace_text` is a no-op.

pub mod caret;
mod draft;
mod field;
mod surface;

pub use draft::{Draft, Field};
pub use field::LiveField;
pub use surface::{EditSurface, MemorySurface};
