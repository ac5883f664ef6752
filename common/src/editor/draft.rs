use crate::engine::{annotate, refill, substitute, AnnotatedSpan, RefillPolicy};
use crate::error::{CatalogError, TransformError};
use crate::export::Message;
use crate::model::catalog::TemplateCatalog;
use crate::model::template::{Language, Template};
use crate::model::variable::VariableStore;
use crate::transform::TextTransform;
use serde::{Deserialize, Serialize};

/// The two live texts of a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Subject,
    Body,
}

impl Field {
    pub const ALL: [Field; 2] = [Field::Subject, Field::Body];
}

/// Session state for the selected template.
///
/// Owns the variable store and both live texts. Every store mutation
/// re-derives the live texts from the *original* template before returning,
/// so a later keystroke never races a half-applied refill.
#[derive(Debug, Clone)]
pub struct Draft {
    template: Template,
    language: Language,
    variables: VariableStore,
    subject: String,
    body: String,
    policy: RefillPolicy,
}

impl Draft {
    /// Opens `template_id` with the catalog's example values.
    pub fn open(catalog: &TemplateCatalog, template_id: &str, language: Language) -> Result<Self, CatalogError> {
        let template = catalog.get(template_id)?.clone();
        let variables = catalog.default_variables(&template);
        let subject = substitute(template.subject(language), &variables);
        let body = substitute(template.body(language), &variables);
        Ok(Self {
            template,
            language,
            variables,
            subject,
            body,
            policy: RefillPolicy::default(),
        })
    }

    pub fn with_policy(mut self, policy: RefillPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Restores previously saved values for the variables this template knows.
    pub fn with_saved_variables(mut self, saved: &VariableStore) -> Self {
        let restored: Vec<(String, String)> = saved
            .iter()
            .filter(|(name, _)| self.variables.contains(name))
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        self.set_variables(restored);
        self
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn variables(&self) -> &VariableStore {
        &self.variables
    }

    pub fn policy(&self) -> RefillPolicy {
        self.policy
    }

    /// The template string behind `field` in the current language.
    pub fn template_text(&self, field: Field) -> &str {
        match field {
            Field::Subject => self.template.subject(self.language),
            Field::Body => self.template.body(self.language),
        }
    }

    pub fn text(&self, field: Field) -> &str {
        match field {
            Field::Subject => &self.subject,
            Field::Body => &self.body,
        }
    }

    /// Switches the template language. Variables go back to their examples
    /// and both texts are regenerated.
    pub fn set_language(&mut self, catalog: &TemplateCatalog, language: Language) {
        self.language = language;
        self.reset(catalog);
    }

    /// Restores example values and regenerates both texts, dropping edits.
    pub fn reset(&mut self, catalog: &TemplateCatalog) {
        self.variables = catalog.default_variables(&self.template);
        self.subject = substitute(self.template_text(Field::Subject), &self.variables);
        self.body = substitute(self.template_text(Field::Body), &self.variables);
    }

    /// Sets one variable. Returns `true` when the value changed, in which
    /// case both texts have been refilled.
    pub fn set_variable(&mut self, name: &str, value: &str) -> bool {
        self.set_variables([(name, value)])
    }

    pub fn set_variables<K, V, I>(&mut self, values: I) -> bool
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let previous = self.variables.clone();
        let mut changed = false;
        for (name, value) in values {
            changed |= self.variables.set(name, value);
        }
        if changed {
            self.subject = self.refilled(Field::Subject, &previous);
            self.body = self.refilled(Field::Body, &previous);
        }
        changed
    }

    /// Stores a direct edit of `field`. The variable store is not touched.
    pub fn edit(&mut self, field: Field, text: impl Into<String>) -> bool {
        let text = text.into();
        let slot = match field {
            Field::Subject => &mut self.subject,
            Field::Body => &mut self.body,
        };
        if *slot == text {
            return false;
        }
        *slot = text;
        true
    }

    /// Runs `transform` over the body and applies its result as a paste.
    /// On failure the body is left unchanged.
    pub fn apply_transform<T: TextTransform + ?Sized>(&mut self, transform: &T) -> Result<bool, TransformError> {
        let body = transform.transform(&self.body)?;
        Ok(self.edit(Field::Body, body))
    }

    pub fn annotate(&self, field: Field) -> Vec<AnnotatedSpan> {
        annotate(self.template_text(field), self.text(field), &self.variables)
    }

    pub fn message(&self) -> Message {
        Message {
            subject: self.subject.clone(),
            body: self.body.clone(),
        }
    }

    fn refilled(&self, field: Field, previous: &VariableStore) -> String {
        let template = self.template_text(field);
        match self.policy {
            RefillPolicy::Overwrite => substitute(template, &self.variables),
            RefillPolicy::PreserveEdits => refill(template, self.text(field), &self.variables, previous),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{flatten, has_unaligned_text, SpanKind};
    use crate::model::template::Localized;
    use crate::model::variable::VariableDefinition;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn catalog() -> TemplateCatalog {
        let template = Template {
            id: "delay".into(),
            category: "Gestion de projets".into(),
            title: Localized::new("Retard", "Delay"),
            description: Localized::default(),
            subject: Localized::new("Retard – <<Project>>", "Delay – <<Project>>"),
            body: Localized::new(
                "Bonjour <<Client>>,\n\nLe projet <<Project>> sera livré le <<Date>>.",
                "Hello <<Client>>,\n\nProject <<Project>> will be delivered on <<Date>>.",
            ),
            variables: vec!["Client".into(), "Project".into(), "Date".into()],
        };
        let mut variables = HashMap::new();
        for (name, example) in [("Client", "Mme Roy"), ("Project", "P-7"), ("Date", "")] {
            variables.insert(
                name.to_string(),
                VariableDefinition {
                    example: example.into(),
                    ..Default::default()
                },
            );
        }
        TemplateCatalog {
            templates: vec![template],
            variables,
        }
    }

    #[test]
    fn open_substitutes_examples() {
        let draft = Draft::open(&catalog(), "delay", Language::En).unwrap();
        assert_eq!(draft.text(Field::Subject), "Delay – P-7");
        assert_eq!(
            draft.text(Field::Body),
            "Hello Mme Roy,\n\nProject P-7 will be delivered on <<Date>>."
        );
        let spans = draft.annotate(Field::Body);
        assert!(!has_unaligned_text(&spans));
        assert_eq!(flatten(&spans), draft.text(Field::Body));
        assert!(matches!(
            &spans.last().unwrap().kind,
            SpanKind::Literal
        ));
        assert!(spans.iter().any(|s| s.kind
            == SpanKind::Variable {
                name: "Date".into(),
                filled: false,
                known: true
            }));
    }

    #[test]
    fn open_unknown_template_fails() {
        assert!(matches!(
            Draft::open(&catalog(), "missing", Language::Fr),
            Err(CatalogError::UnknownTemplate(id)) if id == "missing"
        ));
    }

    #[test]
    fn variable_change_overwrites_from_template() {
        let mut draft = Draft::open(&catalog(), "delay", Language::Fr).unwrap();
        draft.edit(Field::Body, format!("{}\nPS", draft.text(Field::Body)));

        assert!(draft.set_variable("Date", "3 mars"));
        assert_eq!(
            draft.text(Field::Body),
            "Bonjour Mme Roy,\n\nLe projet P-7 sera livré le 3 mars."
        );
        assert!(!draft.set_variable("Date", "3 mars"));
    }

    #[test]
    fn preserve_edits_policy_keeps_rewritten_regions() {
        let mut draft = Draft::open(&catalog(), "delay", Language::Fr)
            .unwrap()
            .with_policy(RefillPolicy::PreserveEdits);
        draft.edit(
            Field::Body,
            "Bonjour Mme Roy et M. Roy,\n\nLe projet P-7 sera livré le <<Date>>.\nPS",
        );

        draft.set_variables([("Client", "Mme Tremblay"), ("Date", "3 mars")]);
        assert_eq!(
            draft.text(Field::Body),
            "Bonjour Mme Roy et M. Roy,\n\nLe projet P-7 sera livré le 3 mars.\nPS"
        );
    }

    #[test]
    fn language_switch_resets_variables() {
        let catalog = catalog();
        let mut draft = Draft::open(&catalog, "delay", Language::Fr).unwrap();
        draft.set_variable("Project", "X-1");
        draft.set_language(&catalog, Language::En);
        assert_eq!(draft.language(), Language::En);
        assert_eq!(draft.variables().get("Project"), Some("P-7"));
        assert_eq!(draft.text(Field::Subject), "Delay – P-7");
    }

    #[test]
    fn saved_variables_restore_known_names_only() {
        let saved: VariableStore = [("Project", "Z-9"), ("Other", "x")].into_iter().collect();
        let draft = Draft::open(&catalog(), "delay", Language::Fr)
            .unwrap()
            .with_saved_variables(&saved);
        assert_eq!(draft.text(Field::Subject), "Retard – Z-9");
        assert!(!draft.variables().contains("Other"));
    }

    #[test]
    fn transform_result_is_realigned_or_rejected() {
        let mut draft = Draft::open(&catalog(), "delay", Language::En).unwrap();
        let shout = |body: &str| Ok::<_, TransformError>(body.to_uppercase());
        assert!(draft.apply_transform(&shout).unwrap());
        assert!(has_unaligned_text(&draft.annotate(Field::Body)));
        assert_eq!(flatten(&draft.annotate(Field::Body)), draft.text(Field::Body));

        let before = draft.text(Field::Body).to_string();
        let failing = |_: &str| Err::<String, _>(TransformError::Unavailable("offline".into()));
        assert!(draft.apply_transform(&failing).is_err());
        assert_eq!(draft.text(Field::Body), before);
    }

    #[test]
    fn message_carries_flattened_texts() {
        let draft = Draft::open(&catalog(), "delay", Language::En).unwrap();
        let message = draft.message();
        assert_eq!(message.subject, "Delay – P-7");
        assert!(message.body.starts_with("Hello Mme Roy"));
    }
}
