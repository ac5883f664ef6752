//! Properties of the `HighlightingEditor`.

use common::model::variable::VariableStore;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HighlightingEditorProps {
    /// Template string the text is aligned against.
    pub template: AttrValue,

    /// Text to show. Changing it from outside (variable refill, reset)
    /// re-renders the field; handing back the text the editor just emitted
    /// through `on_change` does nothing.
    pub text: AttrValue,

    /// Current variable values, used to tell filled regions from empty ones.
    pub variables: VariableStore,

    /// Receives the flattened text after each user edit.
    pub on_change: Callback<String>,

    #[prop_or_default]
    pub id: Option<AttrValue>,

    /// Shown while the field is empty.
    #[prop_or_default]
    pub placeholder: AttrValue,

    #[prop_or(AttrValue::Static("150px"))]
    pub min_height: AttrValue,

    /// Subject-style field: Enter does not insert a line break.
    #[prop_or_default]
    pub single_line: bool,
}
