use crate::model::catalog::ALL_CATEGORIES;
use crate::model::template::Language;
use crate::model::variable::VariableStore;
use serde::{Deserialize, Serialize};

/// UI-level choices remembered between visits.
///
/// None of this is needed for the engine to be correct; the host restores it
/// on start-up and saves it whenever one of the fields changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub interface_language: Language,
    pub template_language: Language,
    pub search_query: String,
    pub selected_category: String,
    pub favorites: Vec<String>,
    pub favorites_only: bool,
    /// Values of the last edited template, restored when it is reopened.
    pub variables: VariableStore,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            interface_language: Language::Fr,
            template_language: Language::Fr,
            search_query: String::new(),
            selected_category: ALL_CATEGORIES.to_string(),
            favorites: Vec::new(),
            favorites_only: false,
            variables: VariableStore::new(),
        }
    }
}

impl Preferences {
    pub fn is_favorite(&self, template_id: &str) -> bool {
        self.favorites.iter().any(|id| id == template_id)
    }

    /// Adds or removes `template_id` from the favorites. Returns the new state.
    pub fn toggle_favorite(&mut self, template_id: &str) -> bool {
        if self.is_favorite(template_id) {
            self.favorites.retain(|id| id != template_id);
            false
        } else {
            self.favorites.push(template_id.to_string());
            true
        }
    }
}
