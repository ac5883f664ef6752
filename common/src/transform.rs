//! Text-transform collaborators (e.g. an AI rewording service).
//!
//! The draft hands the current body to a transform and treats the result as
//! if the user had pasted it: it replaces the body and is re-aligned against
//! the template like any other edit.

use crate::error::TransformError;

pub trait TextTransform {
    fn transform(&self, body: &str) -> Result<String, TransformError>;
}

impl<F> TextTransform for F
where
    F: Fn(&str) -> Result<String, TransformError>,
{
    fn transform(&self, body: &str) -> Result<String, TransformError> {
        self(body)
    }
}
