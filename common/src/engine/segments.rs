use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;

/// Placeholder syntax: `<<` + a name without `>` + `>>`, matched left to right
/// without nesting. There is no escape for a literal `<<`.
pub const PLACEHOLDER_PATTERN: &str = r"<<([^>]+)>>";

pub(crate) static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PLACEHOLDER_PATTERN).expect("placeholder pattern is valid"));

/// One unit of a decomposed template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    Literal { text: String },
    Variable { name: String, placeholder: String },
}

impl Segment {
    /// The template text this segment was parsed from.
    pub fn source(&self) -> &str {
        match self {
            Segment::Literal { text } => text,
            Segment::Variable { placeholder, .. } => placeholder,
        }
    }

    pub fn variable_name(&self) -> Option<&str> {
        match self {
            Segment::Variable { name, .. } => Some(name),
            Segment::Literal { .. } => None,
        }
    }
}

/// Formats the placeholder token for `name`.
pub fn placeholder(name: &str) -> String {
    format!("<<{name}>>")
}

/// Splits `template` into literal and variable segments in source order.
///
/// Literal segments are never empty and never adjacent; concatenating every
/// segment's [`Segment::source`] gives back `template`.
pub fn parse_segments(template: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut last = 0;

    for caps in PLACEHOLDER_RE.captures_iter(template) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if whole.start() > last {
            segments.push(Segment::Literal {
                text: template[last..whole.start()].to_string(),
            });
        }
        segments.push(Segment::Variable {
            name: name.as_str().to_string(),
            placeholder: whole.as_str().to_string(),
        });
        last = whole.end();
    }

    if last < template.len() {
        segments.push(Segment::Literal {
            text: template[last..].to_string(),
        });
    }
    segments
}

/// Distinct variable names referenced by `template`, first occurrence first.
pub fn variable_names(template: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    PLACEHOLDER_RE
        .captures_iter(template)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lit(text: &str) -> Segment {
        Segment::Literal { text: text.into() }
    }

    fn var(name: &str) -> Segment {
        Segment::Variable {
            name: name.into(),
            placeholder: placeholder(name),
        }
    }

    #[test]
    fn parses_alternating_segments() {
        let segments = parse_segments("A<<X>>B<<Y>>C");
        assert_eq!(segments, vec![lit("A"), var("X"), lit("B"), var("Y"), lit("C")]);
        let rebuilt: String = segments.iter().map(Segment::source).collect();
        assert_eq!(rebuilt, "A<<X>>B<<Y>>C");
    }

    #[test]
    fn adjacent_and_edge_placeholders() {
        assert_eq!(parse_segments("<<A>><<B>>"), vec![var("A"), var("B")]);
        assert_eq!(parse_segments("<<A>> end"), vec![var("A"), lit(" end")]);
        assert_eq!(parse_segments(""), vec![]);
        assert_eq!(parse_segments("no placeholders"), vec![lit("no placeholders")]);
    }

    #[test]
    fn names_exclude_closing_bracket_and_keep_spaces() {
        assert_eq!(
            parse_segments("a <<First Name>> b"),
            vec![lit("a "), var("First Name"), lit(" b")]
        );
        // `<<>>` has an empty name and `<<a>b>>` contains `>`: both stay literal
        // up to the next well-formed token.
        assert_eq!(parse_segments("<<>>"), vec![lit("<<>>")]);
        assert_eq!(
            parse_segments("<<a>b>> <<c>>"),
            vec![lit("<<a>b>> "), var("c")]
        );
    }

    #[test]
    fn multibyte_text_keeps_boundaries() {
        assert_eq!(
            parse_segments("Échéance : <<Date>> — merci"),
            vec![lit("Échéance : "), var("Date"), lit(" — merci")]
        );
    }

    #[test]
    fn variable_names_are_distinct_in_order() {
        assert_eq!(
            variable_names("<<B>> <<A>> <<B>>"),
            vec!["B".to_string(), "A".to_string()]
        );
    }
}
