//! Highlighting editor: a `contenteditable` field that shows a live text
//! with its variable regions highlighted while the user types.
//!
//! The component wires the reconciliation loop from `common::editor` to the
//! DOM:
//! - `surface` implements `EditSurface` over the element (flatten, caret,
//!   render).
//! - `update` feeds browser events to `LiveField` and emits real edits.
//! - `changed` applies text, template or variable changes coming from the
//!   parent.
//!
//! The view is rendered once; afterwards only the surface touches the
//! element's children.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod surface;
mod update;
mod view;

pub use messages::Msg;
pub use props::HighlightingEditorProps;
pub use state::HighlightingEditor;

impl Component for HighlightingEditor {
    type Message = Msg;
    type Properties = HighlightingEditorProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        HighlightingEditor::new(&props.template, &props.text, &props.variables)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        if props.template != old_props.template {
            self.field.set_template(
                &mut self.surface,
                props.template.to_string(),
                props.text.to_string(),
                &props.variables,
            );
        } else if self.field.text() != props.text.as_str() {
            self.field
                .replace_text(&mut self.surface, props.text.to_string(), &props.variables);
        } else if props.variables != old_props.variables {
            self.field.refresh(&mut self.surface, &props.variables);
        }
        false
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render {
            self.field.mount(&mut self.surface);
        }
    }
}
