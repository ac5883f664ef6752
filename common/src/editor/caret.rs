//! Caret offsets.
//!
//! Surfaces report the caret in UTF-16 code units from the start of the
//! content, which is what browser selection APIs (`selectionStart`,
//! `Range.startOffset` on text nodes) use. Rust strings are indexed by UTF-8
//! bytes, so every offset crossing the boundary goes through these helpers.

use crate::engine::AnnotatedSpan;

/// Caret position relative to the annotated spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanPosition {
    /// Index into the span slice.
    pub span: usize,
    /// UTF-16 offset inside that span's text.
    pub offset: usize,
}

pub fn utf16_len(s: &str) -> usize {
    s.chars().map(char::len_utf16).sum()
}

/// Converts a UTF-16 code unit index to a UTF-8 byte index.
///
/// An index that splits a surrogate pair resolves to the end of that
/// character; indices past the end resolve to `s.len()`.
pub fn utf16_to_byte_idx(s: &str, utf16_idx: usize) -> usize {
    let mut units = 0;
    for (byte_idx, ch) in s.char_indices() {
        if units >= utf16_idx {
            return byte_idx;
        }
        units += ch.len_utf16();
    }
    s.len()
}

/// Clamps a caret offset to the length of `text`.
pub fn clamp(offset: usize, text: &str) -> usize {
    offset.min(utf16_len(text))
}

/// Finds the span a plain-text caret offset falls in. Surfaces use this to
/// put the caret back inside the element rendered for that span.
///
/// On a boundary between two spans the earlier one wins, so typing at the end
/// of a variable keeps extending that variable. Empty spans are skipped since
/// they have no text to hold a caret. Offsets past the end are clamped to the
/// end of the last non-empty span. Returns `None` when there is no text.
pub fn locate(spans: &[AnnotatedSpan], offset: usize) -> Option<SpanPosition> {
    let mut start = 0;
    let mut last = None;

    for (index, span) in spans.iter().enumerate() {
        let len = utf16_len(&span.text);
        if len == 0 {
            continue;
        }
        if offset <= start + len {
            return Some(SpanPosition {
                span: index,
                offset: offset.saturating_sub(start),
            });
        }
        start += len;
        last = Some(SpanPosition {
            span: index,
            offset: len,
        });
    }
    last
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SpanKind;

    fn span(text: &str) -> AnnotatedSpan {
        AnnotatedSpan {
            text: text.into(),
            kind: SpanKind::Literal,
        }
    }

    #[test]
    fn utf16_indices_handle_multibyte_and_astral() {
        let s = "é😀a";
        assert_eq!(utf16_len(s), 4);
        assert_eq!(utf16_to_byte_idx(s, 1), 2);
        assert_eq!(utf16_to_byte_idx(s, 2), 6);
        assert_eq!(utf16_to_byte_idx(s, 3), 6);
        assert_eq!(utf16_to_byte_idx(s, 4), 7);
        assert_eq!(utf16_to_byte_idx(s, 40), 7);
    }

    #[test]
    fn locate_prefers_earlier_span_on_boundary() {
        let spans = vec![span("ab"), span(""), span("cd")];
        assert_eq!(locate(&spans, 0), Some(SpanPosition { span: 0, offset: 0 }));
        assert_eq!(locate(&spans, 2), Some(SpanPosition { span: 0, offset: 2 }));
        assert_eq!(locate(&spans, 3), Some(SpanPosition { span: 2, offset: 1 }));
        assert_eq!(locate(&spans, 9), Some(SpanPosition { span: 2, offset: 2 }));
        assert_eq!(locate(&[], 0), None);
    }

    #[test]
    fn clamp_limits_to_text_length() {
        assert_eq!(clamp(10, "abc"), 3);
        assert_eq!(clamp(1, "abc"), 1);
    }
}
