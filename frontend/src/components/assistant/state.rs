//! Component state for the drafting assistant.

use common::editor::Draft;
use common::engine::RefillPolicy;
use common::export::{CopyTarget, DeepLink};
use common::model::catalog::{TemplateCatalog, TemplateQuery};
use common::model::preferences::Preferences;
use common::model::template::Template;
use gloo_timers::callback::Timeout;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use web_sys::KeyboardEvent;
use yew::NodeRef;

/// Main state container for the `AssistantComponent`.
///
/// Fields are `pub` because they are accessed by the `view` and `update`
/// modules.
pub struct AssistantComponent {
    /// Catalog fetched from `/api/catalog`; `None` while loading.
    pub catalog: Option<Rc<TemplateCatalog>>,

    /// Error shown instead of the picker when the catalog could not load.
    pub load_error: Option<String>,

    /// Preferences restored from the backend and saved back on change.
    pub preferences: Preferences,

    /// Session for the selected template.
    pub draft: Option<Draft>,

    /// How variable changes treat text the user edited.
    pub policy: RefillPolicy,

    /// Template and language requested by the page URL, applied once the
    /// catalog is loaded.
    pub deep_link: DeepLink,

    /// Saved variables are restored into the first opened template only.
    pub restore_variables: bool,

    pub search_ref: NodeRef,

    /// Last successful copy, shown as "Copied!" for a moment.
    pub copied: Option<CopyTarget>,

    /// Pending debounced preferences save. Dropping it cancels the save.
    pub save_timer: Option<Timeout>,

    /// Global keyboard shortcut listener, removed on destroy.
    pub shortcuts: Option<Closure<dyn FnMut(KeyboardEvent)>>,

    /// Guard to avoid running first-render initialization more than once.
    pub loaded: bool,
}

impl AssistantComponent {
    pub fn new(deep_link: DeepLink) -> Self {
        Self {
            catalog: None,
            load_error: None,
            preferences: Preferences::default(),
            draft: None,
            policy: RefillPolicy::default(),
            deep_link,
            restore_variables: true,
            search_ref: NodeRef::default(),
            copied: None,
            save_timer: None,
            shortcuts: None,
            loaded: false,
        }
    }

    /// Template query matching the picker controls.
    pub fn query(&self) -> TemplateQuery {
        TemplateQuery {
            q: self.preferences.search_query.clone(),
            category: Some(self.preferences.selected_category.clone()),
            lang: self.preferences.template_language,
            favorites_only: self.preferences.favorites_only,
        }
    }

    /// Templates shown in the picker.
    pub fn visible_templates(&self) -> Vec<&Template> {
        match &self.catalog {
            Some(catalog) => catalog.filter(&self.query(), &self.preferences.favorites),
            None => Vec::new(),
        }
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.draft.as_ref().map(|d| d.template().id.as_str())
    }

    pub fn toggle_favorite(&mut self, template_id: &str) {
        self.preferences.toggle_favorite(template_id);
    }

    /// Snapshot sent by the debounced save, taken when the save runs.
    pub fn preferences_to_save(&self) -> Preferences {
        self.preferences.clone()
    }
}
