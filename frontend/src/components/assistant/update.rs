//! Update function for the assistant component.
//!
//! Elm-style: receives the current `AssistantComponent`, the `Context` and a
//! `Msg`, mutates the state, and returns whether the view should re-render.
//!
//! Key behaviors
//! - Opening a template creates a fresh `Draft` (catalog examples, optionally
//!   restored values on first open).
//! - Variable changes refill subject and body through the draft before the
//!   view re-renders, so the editors always receive a consistent text.
//! - Direct edits are stored in the draft without re-rendering; the editor
//!   that emitted them already shows them.
//! - Preference changes, favorites included, are saved to the backend after
//!   a short debounce.

use chrono::Utc;
use common::editor::Draft;
use common::engine::RefillPolicy;
use common::export::{copy_text, deep_link, mailto_url, to_eml};
use gloo_console::{error, log};
use gloo_timers::callback::Timeout;
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::helpers::{
    confirm, download, link_base, navigate, save_preferences, show_toast, write_clipboard,
};
use super::messages::Msg;
use super::state::AssistantComponent;
use super::texts::texts;

const SAVE_DELAY_MS: u32 = 500;
const COPIED_FEEDBACK_MS: u32 = 2000;

pub fn update(component: &mut AssistantComponent, ctx: &Context<AssistantComponent>, msg: Msg) -> bool {
    match msg {
        Msg::PreferencesLoaded(preferences) => {
            component.preferences = preferences;
            if let Some(language) = component.deep_link.language {
                component.preferences.template_language = language;
                component.preferences.interface_language = language;
            }
            true
        }
        Msg::CatalogLoaded(Ok(catalog)) => {
            log!(format!("Loaded {} templates", catalog.templates.len()));
            let requested = component
                .deep_link
                .id
                .as_deref()
                .filter(|id| catalog.find(id).is_some())
                .map(str::to_string);
            let first = requested.or_else(|| catalog.templates.first().map(|t| t.id.clone()));
            component.catalog = Some(Rc::new(catalog));
            if let Some(id) = first {
                open_template(component, &id);
            }
            true
        }
        Msg::CatalogLoaded(Err(e)) => {
            error!(format!("Catalog load failed: {}", e));
            component.load_error = Some(e);
            true
        }
        Msg::SetSearch(query) => {
            component.preferences.search_query = query;
            schedule_save(component, ctx);
            true
        }
        Msg::SetCategory(category) => {
            component.preferences.selected_category = category;
            schedule_save(component, ctx);
            true
        }
        Msg::ToggleFavoritesOnly => {
            component.preferences.favorites_only = !component.preferences.favorites_only;
            schedule_save(component, ctx);
            true
        }
        Msg::ToggleFavorite(id) => {
            component.toggle_favorite(&id);
            schedule_save(component, ctx);
            true
        }
        Msg::SavePreferences => {
            let preferences = component.preferences_to_save();
            spawn_local(async move {
                if let Err(e) = save_preferences(&preferences).await {
                    error!(format!("Preferences save failed: {}", e));
                }
            });
            false
        }
        Msg::SelectTemplate(id) => {
            if component.selected_id() == Some(id.as_str()) {
                return false;
            }
            open_template(component, &id);
            true
        }
        Msg::SetInterfaceLanguage(language) => {
            component.preferences.interface_language = language;
            schedule_save(component, ctx);
            true
        }
        Msg::SetTemplateLanguage(language) => {
            if component.preferences.template_language == language {
                return false;
            }
            component.preferences.template_language = language;
            if let (Some(draft), Some(catalog)) = (component.draft.as_mut(), component.catalog.as_ref()) {
                draft.set_language(catalog, language);
                component.preferences.variables = draft.variables().clone();
            }
            schedule_save(component, ctx);
            true
        }
        Msg::SetVariable(name, value) => {
            let Some(draft) = component.draft.as_mut() else {
                return false;
            };
            if !draft.set_variable(&name, &value) {
                return false;
            }
            component.preferences.variables = draft.variables().clone();
            schedule_save(component, ctx);
            true
        }
        Msg::Edit(field, text) => {
            if let Some(draft) = component.draft.as_mut() {
                draft.edit(field, text);
            }
            false
        }
        Msg::TogglePreserveEdits => {
            component.policy = match component.policy {
                RefillPolicy::Overwrite => RefillPolicy::PreserveEdits,
                RefillPolicy::PreserveEdits => RefillPolicy::Overwrite,
            };
            if let Some(draft) = component.draft.take() {
                component.draft = Some(draft.with_policy(component.policy));
            }
            true
        }
        Msg::Reset => {
            let t = texts(component.preferences.interface_language);
            if !confirm(t.reset_warning) {
                return false;
            }
            let reset = match (component.draft.as_mut(), component.catalog.as_ref()) {
                (Some(draft), Some(catalog)) => {
                    draft.reset(catalog);
                    component.preferences.variables = draft.variables().clone();
                    true
                }
                _ => false,
            };
            if reset {
                schedule_save(component, ctx);
            }
            reset
        }
        Msg::Copy(target) => {
            let Some(draft) = &component.draft else {
                return false;
            };
            let text = copy_text(target, &draft.message());
            let failed = texts(component.preferences.interface_language).copy_failed;
            let link = ctx.link().clone();
            spawn_local(async move {
                match write_clipboard(&text).await {
                    Ok(()) => link.send_message(Msg::Copied(target)),
                    Err(e) => {
                        error!(format!("Clipboard write failed: {}", e));
                        show_toast(failed);
                    }
                }
            });
            false
        }
        Msg::Copied(target) => {
            component.copied = Some(target);
            let link = ctx.link().clone();
            spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(COPIED_FEEDBACK_MS).await;
                link.send_message(Msg::ClearCopied);
            });
            true
        }
        Msg::ClearCopied => {
            component.copied = None;
            true
        }
        Msg::CopyLink => {
            let Some(draft) = &component.draft else {
                return false;
            };
            let url = deep_link(&link_base(), &draft.template().id, draft.language());
            let t = texts(component.preferences.interface_language);
            let (done, failed) = (t.link_copied, t.copy_failed);
            spawn_local(async move {
                match write_clipboard(&url).await {
                    Ok(()) => show_toast(done),
                    Err(_) => show_toast(failed),
                }
            });
            false
        }
        Msg::OpenMailClient => {
            if let Some(draft) = &component.draft {
                navigate(&mailto_url(&draft.message()));
            }
            false
        }
        Msg::DownloadEml => {
            if let Some(draft) = &component.draft {
                let eml = to_eml(&draft.message(), draft.language(), Utc::now());
                let filename = format!("{}.eml", draft.template().id);
                if let Err(e) = download(&filename, "message/rfc822", &eml) {
                    error!(e);
                }
            }
            false
        }
        Msg::FocusSearch => {
            if let Some(input) = component.search_ref.cast::<HtmlInputElement>() {
                let _ = input.focus();
                input.select();
            }
            false
        }
    }
}

/// Opens `id` in the current template language. Values saved in the
/// preferences are restored into the first template opened in this session.
fn open_template(component: &mut AssistantComponent, id: &str) {
    let Some(catalog) = component.catalog.clone() else {
        return;
    };
    let language = component.preferences.template_language;
    match Draft::open(&catalog, id, language) {
        Ok(draft) => {
            let mut draft = draft.with_policy(component.policy);
            if std::mem::take(&mut component.restore_variables) {
                draft = draft.with_saved_variables(&component.preferences.variables);
            }
            component.preferences.variables = draft.variables().clone();
            component.draft = Some(draft);
        }
        Err(e) => error!(format!("Cannot open template: {}", e)),
    }
}

/// Saves the preferences once they have been stable for a moment. Replacing
/// the pending timer drops it, which cancels the earlier save. The values are
/// read when the timer fires, so changes made in between are never lost.
fn schedule_save(component: &mut AssistantComponent, ctx: &Context<AssistantComponent>) {
    let link = ctx.link().clone();
    component.save_timer = Some(Timeout::new(SAVE_DELAY_MS, move || {
        link.send_message(Msg::SavePreferences);
    }));
}
