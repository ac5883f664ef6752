//! `contenteditable` implementation of [`EditSurface`].
//!
//! Each annotated span becomes one `<span>` whose class tells the stylesheet
//! how to highlight it. The element is styled `white-space: pre-wrap`, so
//! line breaks are plain `\n` characters inside text nodes and flattening is
//! a walk over text nodes. Offsets are UTF-16 code units, which is what
//! `Range` and `Text::length` count in.

use common::editor::caret::locate;
use common::editor::EditSurface;
use common::engine::{flatten, AnnotatedSpan, SpanKind};
use common::export::escape_html;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, Node, Range, Selection};
use yew::NodeRef;

/// Marks the `<br>` appended after a trailing newline so the last empty line
/// is visible. It carries no text.
const TRAILING_BREAK: &str = "data-trailing";

pub struct DomSurface {
    root: NodeRef,
    /// Non-empty spans of the last render, one per `<span>` child.
    rendered: Vec<AnnotatedSpan>,
}

impl DomSurface {
    pub fn new(root: NodeRef) -> Self {
        Self {
            root,
            rendered: Vec::new(),
        }
    }

    fn element(&self) -> Option<HtmlElement> {
        self.root.cast::<HtmlElement>()
    }
}

impl EditSurface for DomSurface {
    fn flatten(&self) -> String {
        let mut text = String::new();
        if let Some(root) = self.element() {
            flatten_into(&root, &mut text);
        }
        text
    }

    fn caret(&self) -> Option<usize> {
        let root = self.element()?;
        let selection = selection()?;
        let focus = selection.focus_node()?;
        if !root.contains(Some(&focus)) {
            return None;
        }
        let range = document()?.create_range().ok()?;
        range.select_node_contents(&root).ok()?;
        range.set_end(&focus, selection.focus_offset()).ok()?;
        Some(range.to_string().length() as usize)
    }

    fn render(&mut self, spans: &[AnnotatedSpan]) {
        self.rendered = spans.iter().filter(|s| !s.text.is_empty()).cloned().collect();
        if let Some(root) = self.element() {
            root.set_inner_html(&spans_to_html(spans));
        }
    }

    /// Maps `offset` through the rendered spans and places the caret in the
    /// text of that span's element. The earlier span wins on a boundary, so
    /// the caret stays at the end of the span just typed into.
    fn set_caret(&mut self, offset: usize) {
        let Some(root) = self.element() else { return };
        let range = locate(&self.rendered, offset)
            .and_then(|pos| {
                let text = root.child_nodes().item(pos.span as u32)?.first_child()?;
                collapsed_at(&text, pos.offset as u32)
            })
            .or_else(|| collapsed_at_end(&root));
        if let (Some(range), Some(selection)) = (range, selection()) {
            let _ = selection.remove_all_ranges();
            let _ = selection.add_range(&range);
        }
    }
}

/// Markup for `spans`. Text is escaped; variable names go in `data-var` so
/// hovering shows which variable a region belongs to.
pub fn spans_to_html(spans: &[AnnotatedSpan]) -> String {
    let mut html = String::new();
    for span in spans.iter().filter(|s| !s.text.is_empty()) {
        let text = escape_html(&span.text);
        match &span.kind {
            SpanKind::Literal => html.push_str(&format!("<span class=\"literal\">{}</span>", text)),
            SpanKind::Plain => html.push_str(&format!("<span class=\"plain\">{}</span>", text)),
            SpanKind::Variable { name, filled, known } => {
                let class = match (known, filled) {
                    (false, _) => "variable unknown",
                    (true, true) => "variable filled",
                    (true, false) => "variable empty",
                };
                let name = escape_html(name);
                html.push_str(&format!(
                    "<span class=\"{}\" data-var=\"{}\" title=\"{}\">{}</span>",
                    class, name, name, text
                ));
            }
        }
    }
    if flatten(spans).ends_with('\n') {
        html.push_str(&format!("<br {}=\"1\">", TRAILING_BREAK));
    }
    html
}

/// Appends the plain text under `node`. Breaks the browser inserts on its
/// own are ignored; block elements it may wrap lines in start a new line.
fn flatten_into(node: &Node, out: &mut String) {
    let children = node.child_nodes();
    for i in 0..children.length() {
        let Some(child) = children.item(i) else { continue };
        match child.node_type() {
            Node::TEXT_NODE => {
                if let Some(text) = child.text_content() {
                    out.push_str(&text);
                }
            }
            Node::ELEMENT_NODE => {
                let element: &Element = child.unchecked_ref();
                match element.tag_name().as_str() {
                    "BR" => {}
                    "DIV" | "P" => {
                        if !out.is_empty() && !out.ends_with('\n') {
                            out.push('\n');
                        }
                        flatten_into(&child, out);
                    }
                    _ => flatten_into(&child, out),
                }
            }
            _ => {}
        }
    }
}

fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

fn selection() -> Option<Selection> {
    web_sys::window()?.get_selection().ok()?
}

fn collapsed_at(node: &Node, offset: u32) -> Option<Range> {
    let range = document()?.create_range().ok()?;
    range.set_start(node, offset).ok()?;
    range.collapse_with_to_start(true);
    Some(range)
}

fn collapsed_at_end(root: &Node) -> Option<Range> {
    let range = document()?.create_range().ok()?;
    range.select_node_contents(root).ok()?;
    range.collapse_with_to_start(false);
    Some(range)
}
