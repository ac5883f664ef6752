use super::align::{align, split_group, Region};
use super::segments::parse_segments;
use crate::model::variable::VariableStore;
use serde::{Deserialize, Serialize};

/// A classified slice of live text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedSpan {
    pub text: String,
    #[serde(flatten)]
    pub kind: SpanKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SpanKind {
    /// Template text found where the template puts it.
    Literal,
    /// Text that could not be attributed to the template: content typed
    /// before the first anchor or after the last one, or everything after an
    /// anchor the user deleted.
    Plain,
    Variable {
        name: String,
        /// Holds a real value rather than nothing or its own placeholder.
        filled: bool,
        /// The variable has an entry in the store. Unknown variables are never
        /// filled and are not editable from the variable panel.
        known: bool,
    },
}

impl AnnotatedSpan {
    pub fn is_variable(&self) -> bool {
        matches!(self.kind, SpanKind::Variable { .. })
    }

    pub fn is_filled(&self) -> bool {
        matches!(self.kind, SpanKind::Variable { filled: true, .. })
    }

    pub fn variable_name(&self) -> Option<&str> {
        match &self.kind {
            SpanKind::Variable { name, .. } => Some(name),
            _ => None,
        }
    }
}

/// Re-aligns `live` against `template` and classifies every character.
///
/// Each literal segment of the template is searched for, in order, at or
/// after the end of the previous match. Whatever lies between two anchors
/// belongs to the variable(s) between them in the template. When an anchor is
/// missing the rest of the text is returned as one [`SpanKind::Plain`] span.
///
/// The concatenation of the returned span texts is always exactly `live`.
/// Empty variable spans are kept so a cleared variable can still be shown;
/// other spans are never empty.
pub fn annotate(template: &str, live: &str, variables: &VariableStore) -> Vec<AnnotatedSpan> {
    let segments = parse_segments(template);
    let alignment = align(&segments, live);
    let mut spans = Vec::with_capacity(alignment.regions.len());

    for region in alignment.regions {
        match region {
            Region::Literal(range) => spans.push(AnnotatedSpan {
                text: live[range].to_string(),
                kind: SpanKind::Literal,
            }),
            Region::Plain(range) => spans.push(AnnotatedSpan {
                text: live[range].to_string(),
                kind: SpanKind::Plain,
            }),
            Region::Variables(vars, range) => {
                for (var, range) in split_group(&vars, range, live, variables) {
                    let text = &live[range];
                    let known = variables.contains(var.name);
                    let filled = known && !text.is_empty() && text != var.placeholder;
                    spans.push(AnnotatedSpan {
                        text: text.to_string(),
                        kind: SpanKind::Variable {
                            name: var.name.to_string(),
                            filled,
                            known,
                        },
                    });
                }
            }
        }
    }
    spans
}

/// Concatenates span texts back into the plain live text.
pub fn flatten(spans: &[AnnotatedSpan]) -> String {
    spans.iter().map(|span| span.text.as_str()).collect()
}

/// Whether any span holds text the template does not account for: stray
/// text around the anchors or an unaligned tail.
pub fn has_unaligned_text(spans: &[AnnotatedSpan]) -> bool {
    spans.iter().any(|span| span.kind == SpanKind::Plain)
}

/// Whether a literal anchor of `template` is missing from `live`, leaving
/// the rest of the text unaligned. Extra text after the last anchor is not a
/// divergence.
pub fn diverges(template: &str, live: &str) -> bool {
    align(&parse_segments(template), live).diverged
}
