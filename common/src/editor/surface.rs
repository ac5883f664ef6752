use super::caret::{clamp, locate, utf16_len, utf16_to_byte_idx, SpanPosition};
use crate::engine::{flatten, AnnotatedSpan};

/// An editable display of one live text, implemented by the host.
///
/// Offsets are UTF-16 code units from the start of the content (see
/// [`super::caret`]).
pub trait EditSurface {
    /// The displayed content as plain text. Must be lossless: newlines and
    /// every character the user sees, nothing else.
    fn flatten(&self) -> String;

    /// Current caret offset, or `None` when the surface is not focused.
    fn caret(&self) -> Option<usize>;

    /// Replaces the displayed content with `spans`.
    fn render(&mut self, spans: &[AnnotatedSpan]);

    /// Places the caret. Offsets past the end go to the end.
    fn set_caret(&mut self, offset: usize);
}

/// In-memory surface: a string buffer with a caret.
///
/// Used by terminal-style hosts and by tests to drive the reconciliation loop
/// the way a user would.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    text: String,
    caret: Option<usize>,
    spans: Vec<AnnotatedSpan>,
    renders: usize,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the caret as a click would.
    pub fn focus_at(&mut self, offset: usize) {
        self.caret = Some(clamp(offset, &self.text));
    }

    pub fn blur(&mut self) {
        self.caret = None;
    }

    /// Inserts `s` at the caret (or at the end when unfocused) and moves the
    /// caret after it. The surface is not re-rendered, as with a real keystroke.
    pub fn type_str(&mut self, s: &str) {
        let at = self.caret.unwrap_or_else(|| utf16_len(&self.text));
        let byte = utf16_to_byte_idx(&self.text, at);
        self.text.insert_str(byte, s);
        self.caret = Some(at + utf16_len(s));
    }

    /// Deletes up to `count` characters before the caret.
    pub fn backspace(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        let at = self.caret.unwrap_or_else(|| utf16_len(&self.text));
        let end = utf16_to_byte_idx(&self.text, at);
        let start = self.text[..end]
            .char_indices()
            .rev()
            .nth(count - 1)
            .map(|(i, _)| i)
            .unwrap_or(0);
        let removed = utf16_len(&self.text[start..end]);
        self.text.replace_range(start..end, "");
        self.caret = Some(at - removed);
    }

    /// Replaces the whole content, as a paste over a full selection would.
    pub fn paste_all(&mut self, text: &str) {
        self.text = text.to_string();
        self.caret = Some(utf16_len(text));
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Spans of the last render.
    pub fn spans(&self) -> &[AnnotatedSpan] {
        &self.spans
    }

    /// The caret mapped onto the rendered spans, as a DOM host would place
    /// it inside the element of that span.
    pub fn caret_position(&self) -> Option<SpanPosition> {
        locate(&self.spans, self.caret?)
    }

    pub fn render_count(&self) -> usize {
        self.renders
    }
}

impl EditSurface for MemorySurface {
    fn flatten(&self) -> String {
        self.text.clone()
    }

    fn caret(&self) -> Option<usize> {
        self.caret
    }

    fn render(&mut self, spans: &[AnnotatedSpan]) {
        self.text = flatten(spans);
        self.spans = spans.to_vec();
        self.renders += 1;
        self.caret = self.caret.map(|c| clamp(c, &self.text));
    }

    fn set_caret(&mut self, offset: usize) {
        self.caret = Some(clamp(offset, &self.text));
    }
}
