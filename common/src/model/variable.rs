use crate::model::template::Localized;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Semantic tag of a variable.
///
/// Only used to pick an input affordance in the variable panel; values are
/// never validated against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableType {
    #[default]
    Text,
    Email,
    Phone,
    Date,
    Number,
}

impl VariableType {
    /// The HTML `<input type>` that best matches the tag.
    pub fn input_type(self) -> &'static str {
        match self {
            VariableType::Text => "text",
            VariableType::Email => "email",
            VariableType::Phone => "tel",
            VariableType::Date => "text",
            VariableType::Number => "text",
        }
    }
}

/// Catalog metadata for one variable name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariableDefinition {
    #[serde(default)]
    pub description: Localized,
    #[serde(rename = "format", alias = "type", default)]
    pub var_type: VariableType,
    /// Default value loaded into the store when the template is selected.
    #[serde(default)]
    pub example: String,
}

/// Current values of the variables of the selected template.
///
/// Keys are variable names without the `<<`/`>>` delimiters. A key that is
/// absent means the catalog has no definition for that name; a key mapped to
/// an empty string means the user cleared the field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariableStore {
    values: HashMap<String, String>,
}

impl VariableStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Sets `name` to `value`, returning `true` when the stored value changed.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> bool {
        let name = name.into();
        let value = value.into();
        match self.values.get(&name) {
            Some(current) if *current == value => false,
            _ => {
                self.values.insert(name, value);
                true
            }
        }
    }

    /// The value to splice into the text: the stored value when non-empty.
    pub fn resolved(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|value| !value.is_empty())
    }

    pub fn is_filled(&self, name: &str) -> bool {
        self.resolved(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_inner(self) -> HashMap<String, String> {
        self.values
    }
}

impl From<HashMap<String, String>> for VariableStore {
    fn from(values: HashMap<String, String>) -> Self {
        Self { values }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for VariableStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
