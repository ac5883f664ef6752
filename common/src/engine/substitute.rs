use super::align::{align, split_group, Region};
use super::segments::{parse_segments, Segment, PLACEHOLDER_RE};
use crate::model::variable::VariableStore;
use regex::Captures;
use serde::{Deserialize, Serialize};

/// How a variable change is carried into text the user may have edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefillPolicy {
    /// Regenerate the live text from the template, discarding manual edits.
    #[default]
    Overwrite,
    /// Rewrite only the variable regions the user has not rewritten
    /// (see [`refill`]).
    PreserveEdits,
}

/// Fills every placeholder of `template` with its non-empty value.
///
/// Unresolved variables keep their `<<Name>>` token, which is what later marks
/// them as empty. Values are inserted verbatim.
pub fn substitute(template: &str, variables: &VariableStore) -> String {
    parse_segments(template)
        .iter()
        .fold(String::with_capacity(template.len()), |mut out, segment| {
            match segment {
                Segment::Literal { text } => out.push_str(text),
                Segment::Variable { name, placeholder } => {
                    out.push_str(variables.resolved(name).unwrap_or(placeholder))
                }
            }
            out
        })
}

/// Replaces the `<<Name>>` tokens still present in arbitrary text.
pub fn replace_tokens(text: &str, variables: &VariableStore) -> String {
    PLACEHOLDER_RE
        .replace_all(text, |caps: &Captures| {
            let token = caps.get(0).map(|m| m.as_str()).unwrap_or_default();
            caps.get(1)
                .and_then(|name| variables.resolved(name.as_str()))
                .unwrap_or(token)
                .to_string()
        })
        .into_owned()
}

/// Applies a variable change to `live` while keeping manual edits.
///
/// `live` is aligned against `template` with the same anchors [`annotate`]
/// uses. A variable region is rewritten with the new value (or its
/// placeholder when the value is empty) only when it still holds the
/// placeholder, the `previous` value or nothing, compared both as-is and
/// trimmed. Any other content was typed by the user and is kept, as is all
/// text outside variable regions.
///
/// When `live` no longer aligns, the remaining `<<Name>>` tokens are filled
/// and everything else is left untouched.
///
/// [`annotate`]: super::annotate
pub fn refill(template: &str, live: &str, variables: &VariableStore, previous: &VariableStore) -> String {
    if template.is_empty() {
        return replace_tokens(live, variables);
    }
    if live.is_empty() {
        return substitute(template, variables);
    }

    let segments = parse_segments(template);
    if segments.is_empty() {
        return replace_tokens(live, variables);
    }
    let alignment = align(&segments, live);
    if alignment.diverged {
        return replace_tokens(live, variables);
    }

    let mut out = String::with_capacity(live.len());
    for region in alignment.regions {
        match region {
            Region::Literal(range) | Region::Plain(range) => out.push_str(&live[range]),
            Region::Variables(vars, range) => {
                for (var, range) in split_group(&vars, range, live, previous) {
                    let content = &live[range];
                    let prev = previous.get(var.name).unwrap_or_default();
                    if is_untouched(content, var.placeholder, prev) {
                        out.push_str(variables.resolved(var.name).unwrap_or(var.placeholder));
                    } else {
                        out.push_str(content);
                    }
                }
            }
        }
    }
    out
}

fn is_untouched(content: &str, placeholder: &str, previous: &str) -> bool {
    let trimmed = content.trim();
    trimmed.is_empty()
        || content == placeholder
        || trimmed == placeholder.trim()
        || content == previous
        || trimmed == previous.trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn store(pairs: &[(&str, &str)]) -> VariableStore {
        pairs.iter().copied().collect()
    }

    #[test]
    fn substitute_keeps_unresolved_tokens() {
        let vars = store(&[("Name", ""), ("Amount", "42")]);
        assert_eq!(
            substitute("Hello <<Name>>, total <<Amount>> (<<Missing>>)", &vars),
            "Hello <<Name>>, total 42 (<<Missing>>)"
        );
    }

    #[test]
    fn substitute_is_deterministic_and_inserts_verbatim() {
        let vars = store(&[("Html", "<b>&</b>"), ("Tok", "<<Other>>")]);
        let first = substitute("<<Html>> <<Tok>>", &vars);
        assert_eq!(first, "<b>&</b> <<Other>>");
        assert_eq!(first, substitute("<<Html>> <<Tok>>", &vars));
    }

    #[test]
    fn resubstitution_from_template_does_not_duplicate() {
        let template = "Bonjour <<Client>>, merci.";
        let mut vars = store(&[("Client", "Luc")]);
        let _edited = format!("{} PS", substitute(template, &vars));
        vars.set("Client", "Luc Roy");
        assert_eq!(substitute(template, &vars), "Bonjour Luc Roy, merci.");
    }

    #[test]
    fn replace_tokens_in_free_text() {
        let vars = store(&[("A", "1")]);
        assert_eq!(replace_tokens("x <<A>> <<B>>", &vars), "x 1 <<B>>");
    }

    #[test]
    fn refill_updates_untouched_regions_only() {
        let template = "Hi <<Name>>, your order <<Order>> ships <<Day>>.";
        let previous = store(&[("Name", "Ann"), ("Order", "A-1"), ("Day", "")]);
        // The user rewrote the order region and added a sentence after the
        // final anchor.
        let live = "Hi Ann, your order A-1 (rush) ships <<Day>>. Thanks!";
        let next = store(&[("Name", "Anne"), ("Order", "A-2"), ("Day", "today")]);

        assert_eq!(
            refill(template, live, &next, &previous),
            "Hi Anne, your order A-1 (rush) ships today. Thanks!"
        );
    }

    #[test]
    fn refill_restores_placeholder_when_value_cleared() {
        let template = "Hi <<Name>>!";
        let previous = store(&[("Name", "Ann")]);
        let next = store(&[("Name", "")]);
        assert_eq!(refill(template, "Hi  Ann !", &next, &previous), "Hi <<Name>>!");
    }

    #[test]
    fn refill_falls_back_to_token_replacement_on_divergence() {
        let template = "Dear <<Client>>, see you <<Day>>.";
        let previous = store(&[("Client", "Jo"), ("Day", "")]);
        let next = store(&[("Client", "Joe"), ("Day", "Friday")]);
        assert_eq!(
            refill(template, "Dear Jo see you <<Day>>", &next, &previous),
            "Dear Jo see you Friday"
        );
    }

    #[test]
    fn refill_edge_inputs() {
        let vars = store(&[("A", "1")]);
        assert_eq!(refill("", "x <<A>>", &vars, &VariableStore::new()), "x 1");
        assert_eq!(refill("<<A>>!", "", &vars, &VariableStore::new()), "1!");
    }
}
