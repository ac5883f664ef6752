//! Pure text algorithms over `<<Name>>` templates.
//!
//! ```text
//! template ──parse_segments──▶ [Literal | Variable]*
//!     │                               │
//!     └──substitute(variables)──▶ live text ──(user edits)──▶ live text'
//!                                                               │
//!                      annotate(template, live', variables) ◀───┘
//! ```
//!
//! Literal template text is the anchor used to find variables again once the
//! user has edited the live text; see [`annotate`] for the alignment rules.

mod align;
mod annotate;
mod segments;
mod substitute;

pub use annotate::{annotate, diverges, flatten, has_unaligned_text, AnnotatedSpan, SpanKind};
pub use segments::{parse_segments, placeholder, variable_names, Segment, PLACEHOLDER_PATTERN};
pub use substitute::{refill, replace_tokens, substitute, RefillPolicy};
