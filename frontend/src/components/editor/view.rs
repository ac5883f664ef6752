use super::helpers::pasted_text;
use super::messages::Msg;
use super::state::HighlightingEditor;
use yew::prelude::*;
use web_sys::CompositionEvent;

pub fn view(editor: &HighlightingEditor, ctx: &Context<HighlightingEditor>) -> Html {
    let link = ctx.link();
    let props = ctx.props();
    let single_line = props.single_line;

    let onkeydown = link.batch_callback(move |e: KeyboardEvent| {
        // Ctrl/Cmd+Enter belongs to the global shortcuts.
        if e.key() != "Enter" || e.is_composing() || e.ctrl_key() || e.meta_key() {
            return vec![];
        }
        e.prevent_default();
        if single_line {
            vec![]
        } else {
            vec![Msg::InsertText("\n".to_string())]
        }
    });

    let onpaste = link.batch_callback(move |e: Event| {
        e.prevent_default();
        match pasted_text(&e) {
            Some(text) if single_line => vec![Msg::InsertText(text.replace(['\r', '\n'], " "))],
            Some(text) => vec![Msg::InsertText(text.replace("\r\n", "\n"))],
            None => vec![],
        }
    });

    html! {
        <div
            id={props.id.clone()}
            ref={editor.root.clone()}
            class={classes!("highlighting-editor", single_line.then_some("single-line"))}
            contenteditable="true"
            role="textbox"
            aria-multiline={(!single_line).to_string()}
            spellcheck="true"
            data-placeholder={props.placeholder.clone()}
            style={format!("min-height: {};", props.min_height)}
            oninput={link.callback(|_: InputEvent| Msg::Input)}
            oncompositionstart={link.callback(|_: CompositionEvent| Msg::CompositionStart)}
            oncompositionend={link.callback(|_: CompositionEvent| Msg::CompositionEnd)}
            {onkeydown}
            {onpaste}
        />
    }
}
