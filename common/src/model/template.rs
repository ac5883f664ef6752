use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two locales every template is authored in.
///
/// Serialized as the lowercase ISO code (`"fr"`, `"en"`), which is also the
/// form used in deep links (`?lang=fr`) and in the catalog JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Fr,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Fr, Language::En];

    pub fn code(self) -> &'static str {
        match self {
            Language::Fr => "fr",
            Language::En => "en",
        }
    }

    /// The other locale. Used as the fallback when a string is missing.
    pub fn other(self) -> Language {
        match self {
            Language::Fr => Language::En,
            Language::En => Language::Fr,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fr" => Ok(Language::Fr),
            "en" => Ok(Language::En),
            other => Err(format!("unsupported language: {other}")),
        }
    }
}

/// A string authored once per locale, as stored in the catalog
/// (`{ "fr": "...", "en": "..." }`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localized {
    #[serde(default)]
    pub fr: String,
    #[serde(default)]
    pub en: String,
}

impl Localized {
    pub fn new(fr: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            fr: fr.into(),
            en: en.into(),
        }
    }

    /// Returns the string for `language`, falling back to the other locale
    /// when the requested one was left empty by the template author.
    pub fn get(&self, language: Language) -> &str {
        let primary = self.exact(language);
        if primary.is_empty() {
            self.exact(language.other())
        } else {
            primary
        }
    }

    fn exact(&self, language: Language) -> &str {
        match language {
            Language::Fr => &self.fr,
            Language::En => &self.en,
        }
    }
}

/// An immutable catalog entry.
///
/// `subject` and `body` contain `<<VariableName>>` placeholders; `variables`
/// lists the names the template references, in the order the variable panel
/// shows them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub category: String,
    #[serde(default)]
    pub title: Localized,
    #[serde(default)]
    pub description: Localized,
    #[serde(default)]
    pub subject: Localized,
    #[serde(default)]
    pub body: Localized,
    #[serde(default)]
    pub variables: Vec<String>,
}

impl Template {
    pub fn subject(&self, language: Language) -> &str {
        self.subject.get(language)
    }

    pub fn body(&self, language: Language) -> &str {
        self.body.get(language)
    }
}
