//! DOM helpers for the highlighting editor.

use wasm_bindgen::JsCast;
use web_sys::{ClipboardEvent, Event, HtmlElement};
use yew::NodeRef;

/// Replaces the current selection inside `root` with `text` and puts the
/// caret after it. Returns `false` when there is no selection in `root`.
pub fn insert_at_selection(root: &NodeRef, text: &str) -> bool {
    try_insert(root, text).is_some()
}

fn try_insert(root: &NodeRef, text: &str) -> Option<()> {
    let root = root.cast::<HtmlElement>()?;
    let window = web_sys::window()?;
    let document = window.document()?;
    let selection = window.get_selection().ok()??;
    if selection.range_count() == 0 {
        return None;
    }
    let range = selection.get_range_at(0).ok()?;
    let container = range.common_ancestor_container().ok()?;
    if !root.contains(Some(&container)) {
        return None;
    }

    range.delete_contents().ok()?;
    let node = document.create_text_node(text);
    range.insert_node(&node).ok()?;
    range.set_start_after(&node).ok()?;
    range.collapse_with_to_start(true);
    selection.remove_all_ranges().ok()?;
    selection.add_range(&range).ok()?;
    Some(())
}

/// Plain-text content of a paste event, if any.
pub fn pasted_text(event: &Event) -> Option<String> {
    event
        .dyn_ref::<ClipboardEvent>()?
        .clipboard_data()?
        .get_data("text/plain")
        .ok()
}
