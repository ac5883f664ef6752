//! End-to-end drafting session: a draft, two live fields and in-memory
//! surfaces driven the way the browser host drives them.

use common::editor::{Draft, EditSurface, Field, LiveField, MemorySurface};
use common::engine::{has_unaligned_text, RefillPolicy, SpanKind};
use common::export::{copy_text, CopyTarget};
use common::model::catalog::TemplateCatalog;
use common::model::template::Language;
use pretty_assertions::assert_eq;

const CATALOG: &str = r#"{
  "templates": [
    {
      "id": "quote_follow_up",
      "category": "Devis et estimations",
      "title": { "fr": "Suivi de devis", "en": "Quote follow-up" },
      "subject": { "fr": "Devis <<QuoteNumber>>", "en": "Quote <<QuoteNumber>>" },
      "body": {
        "fr": "Bonjour <<ClientName>>,\n\nVotre devis <<QuoteNumber>> s'élève à <<Amount>> $.",
        "en": "Hello <<ClientName>>,\n\nYour quote <<QuoteNumber>> totals $<<Amount>>."
      },
      "variables": ["ClientName", "QuoteNumber", "Amount"]
    }
  ],
  "variables": {
    "ClientName": { "description": { "fr": "Nom du client", "en": "Client name" }, "format": "text", "example": "Mme Roy" },
    "QuoteNumber": { "description": { "fr": "Numéro", "en": "Number" }, "format": "text", "example": "Q-100" },
    "Amount": { "description": { "fr": "Montant", "en": "Amount" }, "format": "number", "example": "" }
  }
}"#;

struct Host {
    draft: Draft,
    subject: (LiveField, MemorySurface),
    body: (LiveField, MemorySurface),
}

impl Host {
    fn open(policy: RefillPolicy) -> Self {
        let catalog = TemplateCatalog::from_json(CATALOG).unwrap();
        let draft = Draft::open(&catalog, "quote_follow_up", Language::En)
            .unwrap()
            .with_policy(policy);
        let mut subject = LiveField::new(
            draft.template_text(Field::Subject),
            draft.text(Field::Subject),
            draft.variables(),
        );
        let mut body = LiveField::new(
            draft.template_text(Field::Body),
            draft.text(Field::Body),
            draft.variables(),
        );
        let mut subject_surface = MemorySurface::new();
        let mut body_surface = MemorySurface::new();
        subject.mount(&mut subject_surface);
        body.mount(&mut body_surface);
        Self {
            draft,
            subject: (subject, subject_surface),
            body: (body, body_surface),
        }
    }

    /// Keystroke on the body surface.
    fn type_in_body(&mut self, at: usize, s: &str) {
        let (field, surface) = &mut self.body;
        surface.focus_at(at);
        surface.type_str(s);
        if let Some(text) = field.on_input(surface, self.draft.variables()) {
            self.draft.edit(Field::Body, text);
        }
    }

    /// Variable panel change: the draft refills, then each field takes the
    /// new text.
    fn set_variable(&mut self, name: &str, value: &str) {
        if self.draft.set_variable(name, value) {
            let vars = self.draft.variables().clone();
            let (field, surface) = &mut self.subject;
            field.replace_text(surface, self.draft.text(Field::Subject), &vars);
            let (field, surface) = &mut self.body;
            field.replace_text(surface, self.draft.text(Field::Body), &vars);
        }
    }
}

#[test]
fn keystrokes_and_refills_stay_consistent() {
    let mut host = Host::open(RefillPolicy::Overwrite);
    assert_eq!(
        host.body.1.text(),
        "Hello Mme Roy,\n\nYour quote Q-100 totals $<<Amount>>."
    );

    // Type inside the client name: "Hello Mme Roy|" -> "Hello Mme Roy-Côté".
    host.type_in_body(13, "-Côté");
    assert_eq!(host.draft.text(Field::Body), host.body.1.text());
    assert_eq!(host.body.1.caret(), Some(18));
    assert_eq!(host.body.0.spans()[1].text, "Mme Roy-Côté");

    // Filling a variable regenerates from the template.
    host.set_variable("Amount", "1 250");
    assert_eq!(
        host.body.1.text(),
        "Hello Mme Roy,\n\nYour quote Q-100 totals $1 250."
    );
    assert_eq!(host.body.1.caret(), Some(18));
    assert!(!has_unaligned_text(host.body.0.spans()));

    // The subject only changes when one of its variables does.
    let renders = host.subject.1.render_count();
    host.set_variable("ClientName", "M. Gagnon");
    assert_eq!(host.subject.1.render_count(), renders);
    host.set_variable("QuoteNumber", "Q-101");
    assert_eq!(host.subject.1.text(), "Quote Q-101");

    assert_eq!(
        copy_text(CopyTarget::All, &host.draft.message()),
        "Quote Q-101\n\nHello M. Gagnon,\n\nYour quote Q-101 totals $1 250."
    );
}

#[test]
fn preserve_edits_keeps_typed_name_across_refill() {
    let mut host = Host::open(RefillPolicy::PreserveEdits);
    host.type_in_body(13, "-Côté");
    host.set_variable("Amount", "80");
    assert_eq!(
        host.body.1.text(),
        "Hello Mme Roy-Côté,\n\nYour quote Q-100 totals $80."
    );
    assert_eq!(
        host.body.0.spans()[5].kind,
        SpanKind::Variable {
            name: "Amount".into(),
            filled: true,
            known: true,
        }
    );
}
