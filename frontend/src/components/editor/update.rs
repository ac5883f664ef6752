//! Update function for the highlighting editor.
//!
//! Every path that may have changed the content goes through
//! `LiveField::on_input`, which ignores events whose flattened text equals
//! the last known one. Only real changes reach the parent's `on_change`.

use super::helpers::insert_at_selection;
use super::messages::Msg;
use super::state::HighlightingEditor;
use yew::prelude::*;

pub fn update(editor: &mut HighlightingEditor, ctx: &Context<HighlightingEditor>, msg: Msg) -> bool {
    let props = ctx.props();
    let changed = match msg {
        Msg::Input => editor.field.on_input(&mut editor.surface, &props.variables),
        Msg::CompositionStart => {
            editor.field.begin_composition();
            None
        }
        Msg::CompositionEnd => editor
            .field
            .end_composition(&mut editor.surface, &props.variables),
        Msg::InsertText(text) => {
            if insert_at_selection(&editor.root, &text) {
                editor.field.on_input(&mut editor.surface, &props.variables)
            } else {
                None
            }
        }
    };

    if let Some(text) = changed {
        props.on_change.emit(text);
    }
    false
}
