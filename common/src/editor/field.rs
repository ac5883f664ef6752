use super::caret::clamp;
use super::surface::EditSurface;
use crate::engine::{annotate, substitute, AnnotatedSpan};
use crate::model::variable::VariableStore;

/// One live text (subject or body) bound to its template.
///
/// Holds the last known flattened text and its annotation. The surface is
/// passed into each call rather than owned, so the host keeps control of its
/// widget lifetime.
#[derive(Debug, Clone, Default)]
pub struct LiveField {
    template: String,
    text: String,
    spans: Vec<AnnotatedSpan>,
    composing: bool,
    render_pending: bool,
}

impl LiveField {
    /// A field showing `template` fully substituted with `variables`.
    pub fn from_template(template: impl Into<String>, variables: &VariableStore) -> Self {
        let template = template.into();
        let text = substitute(&template, variables);
        Self::new(template, text, variables)
    }

    /// A field showing `text`, which may already diverge from `template`.
    pub fn new(template: impl Into<String>, text: impl Into<String>, variables: &VariableStore) -> Self {
        let template = template.into();
        let text = text.into();
        let spans = annotate(&template, &text, variables);
        Self {
            template,
            text,
            spans,
            composing: false,
            render_pending: false,
        }
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn spans(&self) -> &[AnnotatedSpan] {
        &self.spans
    }

    pub fn is_composing(&self) -> bool {
        self.composing
    }

    /// Shows the current annotation on a freshly created surface.
    pub fn mount<S: EditSurface + ?Sized>(&mut self, surface: &mut S) {
        self.render(surface);
    }

    /// Binds the field to another template (template or language switch) and
    /// renders `text` against it.
    pub fn set_template<S: EditSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        template: impl Into<String>,
        text: impl Into<String>,
        variables: &VariableStore,
    ) {
        self.template = template.into();
        self.text = text.into();
        self.spans = annotate(&self.template, &self.text, variables);
        self.render(surface);
    }

    /// Handles a user edit on `surface`.
    ///
    /// Returns the new plain text when it differs from the last known one, so
    /// the host can store it; returns `None` for no-op events (selection
    /// changes, echoes of the field's own render).
    pub fn on_input<S: EditSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        variables: &VariableStore,
    ) -> Option<String> {
        let current = surface.flatten();
        if current == self.text {
            return None;
        }
        self.text = current;
        self.spans = annotate(&self.template, &self.text, variables);
        if self.composing {
            self.render_pending = true;
        } else {
            self.render(surface);
        }
        Some(self.text.clone())
    }

    /// Overwrites the text from outside (re-substitution, transform result).
    ///
    /// Returns `false` without touching the surface when `text` is what the
    /// field already holds, which is the case when the host stores and hands
    /// back a value this field emitted.
    pub fn replace_text<S: EditSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        text: impl Into<String>,
        variables: &VariableStore,
    ) -> bool {
        let text = text.into();
        if text == self.text {
            return false;
        }
        self.text = text;
        self.spans = annotate(&self.template, &self.text, variables);
        self.render(surface);
        true
    }

    /// Re-annotates after a store change that left the text unchanged
    /// (a variable becoming known, or filled state flipping).
    pub fn refresh<S: EditSurface + ?Sized>(&mut self, surface: &mut S, variables: &VariableStore) {
        let spans = annotate(&self.template, &self.text, variables);
        if spans != self.spans {
            self.spans = spans;
            self.render(surface);
        }
    }

    /// An input method composition started; renders are held back until it
    /// ends so the IME keeps its in-progress text.
    pub fn begin_composition(&mut self) {
        self.composing = true;
    }

    /// Ends a composition and applies the deferred render.
    pub fn end_composition<S: EditSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        variables: &VariableStore,
    ) -> Option<String> {
        self.composing = false;
        let changed = self.on_input(surface, variables);
        if changed.is_none() && self.render_pending {
            self.render(surface);
        }
        changed
    }

    fn render<S: EditSurface + ?Sized>(&mut self, surface: &mut S) {
        let caret = surface.caret();
        surface.render(&self.spans);
        if let Some(offset) = caret {
            surface.set_caret(clamp(offset, &self.text));
        }
        self.render_pending = false;
    }
}
