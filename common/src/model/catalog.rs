//! Read-only template catalog and the queries the template picker runs on it.
//!
//! The catalog is the JSON document `{ "templates": [...], "variables": {...} }`.
//! The backend loads it once at start-up and serves it as-is; the frontend and
//! the draft session consume it as an immutable snapshot.

use crate::error::CatalogError;
use crate::model::template::{Language, Template};
use crate::model::variable::{VariableDefinition, VariableStore};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Category filter value meaning "no category restriction".
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateCatalog {
    #[serde(default)]
    pub templates: Vec<Template>,
    #[serde(default)]
    pub variables: HashMap<String, VariableDefinition>,
}

/// Template picker filter, as sent by the frontend or read from a query string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateQuery {
    /// Free-text search over title, description and category.
    #[serde(default)]
    pub q: String,
    /// Category to restrict to; `None` or `"all"` disables the restriction.
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub lang: Language,
    #[serde(default)]
    pub favorites_only: bool,
}

impl TemplateCatalog {
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn find(&self, id: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    pub fn get(&self, id: &str) -> Result<&Template, CatalogError> {
        self.find(id)
            .ok_or_else(|| CatalogError::UnknownTemplate(id.to_string()))
    }

    pub fn definition(&self, name: &str) -> Option<&VariableDefinition> {
        self.variables.get(name)
    }

    /// Builds a fresh store for `template` from the catalog examples.
    ///
    /// Names without a definition get no entry: they render as always-empty,
    /// non-interactive variables.
    pub fn default_variables(&self, template: &Template) -> VariableStore {
        template
            .variables
            .iter()
            .filter_map(|name| {
                self.definition(name)
                    .map(|def| (name.clone(), def.example.clone()))
            })
            .collect()
    }

    /// Templates matching `query`, in catalog order.
    ///
    /// Search is a case-insensitive substring match against the localized
    /// title and description and the raw category.
    pub fn filter<'a>(&'a self, query: &TemplateQuery, favorites: &[String]) -> Vec<&'a Template> {
        let needle = query.q.trim().to_lowercase();
        let category = query
            .category
            .as_deref()
            .filter(|c| !c.is_empty() && *c != ALL_CATEGORIES);
        let favorites: HashSet<&str> = favorites.iter().map(String::as_str).collect();

        self.templates
            .iter()
            .filter(|t| needle.is_empty() || matches_search(t, &needle, query.lang))
            .filter(|t| category.is_none_or(|c| t.category == c))
            .filter(|t| !query.favorites_only || favorites.contains(t.id.as_str()))
            .collect()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.templates
            .iter()
            .map(|t| t.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }
}

fn matches_search(template: &Template, needle: &str, language: Language) -> bool {
    template.title.get(language).to_lowercase().contains(needle)
        || template.description.get(language).to_lowercase().contains(needle)
        || template.category.to_lowercase().contains(needle)
}

/// Display label of a catalog category. Categories are authored in French;
/// unknown ones are shown verbatim.
pub fn category_label(category: &str, language: Language) -> &str {
    if category == ALL_CATEGORIES {
        return match language {
            Language::Fr => "Toutes les catégories",
            Language::En => "All categories",
        };
    }
    if language == Language::Fr {
        return category;
    }
    match category {
        "Devis et estimations" => "Quotes and estimates",
        "Gestion de projets" => "Project management",
        "Problèmes techniques" => "Technical issues",
        "Communications générales" => "General communications",
        "Services spécialisés" => "Specialized services",
        other => other,
    }
}
