//! JSON payloads of the backend API, shared with the frontend.

use crate::engine::AnnotatedSpan;
use crate::export::CopyTarget;
use crate::model::template::Language;
use crate::model::variable::VariableStore;
use serde::{Deserialize, Serialize};

/// Request payload for `POST /api/drafts/render`.
/// Without `variables` the catalog examples are used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderDraftRequest {
    pub template_id: String,
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub variables: Option<VariableStore>,
}

/// Request payload for `POST /api/drafts/annotate`: live texts the user
/// edited, to be aligned against the template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotateDraftRequest {
    pub template_id: String,
    #[serde(default)]
    pub language: Language,
    pub subject: String,
    pub body: String,
    #[serde(default)]
    pub variables: VariableStore,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftResponse {
    pub subject: String,
    pub body: String,
    pub subject_spans: Vec<AnnotatedSpan>,
    pub body_spans: Vec<AnnotatedSpan>,
    pub variables: VariableStore,
}

/// Request payload for `POST /api/export/{format}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportRequest {
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub language: Language,
    /// Part of the message returned by the `text` format.
    #[serde(default)]
    pub target: CopyTarget,
}

/// One entry of `GET /api/templates/categories`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOption {
    pub id: String,
    pub label: String,
}
