use super::surface::DomSurface;
use common::editor::LiveField;
use common::model::variable::VariableStore;
use yew::NodeRef;

/// Runtime state of one highlighting editor.
///
/// The field keeps the text and its annotation; the surface is the
/// `contenteditable` element behind `root`. Yew never renders children into
/// that element, so the markup written by the surface is left alone between
/// renders.
pub struct HighlightingEditor {
    pub root: NodeRef,
    pub field: LiveField,
    pub surface: DomSurface,
}

impl HighlightingEditor {
    pub fn new(template: &str, text: &str, variables: &VariableStore) -> Self {
        let root = NodeRef::default();
        Self {
            surface: DomSurface::new(root.clone()),
            field: LiveField::new(template, text, variables),
            root,
        }
    }
}
