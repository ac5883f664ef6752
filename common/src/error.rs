use thiserror::Error;

/// Failures when reading or querying the template catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Template not found: {0}")]
    UnknownTemplate(String),

    #[error("Failed to parse template catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failure reported by a text-transform collaborator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    #[error("Text transform unavailable: {0}")]
    Unavailable(String),

    #[error("Text transform failed: {0}")]
    Failed(String),
}
