//! Drafting assistant: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `AssistantComponent`).
//! - Provide the `Component` implementation that delegates to `update::update` and `view::view`.
//! - On first render, load the saved preferences and then the catalog, and
//!   install the global keyboard shortcuts.

use common::export::CopyTarget;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

mod helpers;
mod messages;
mod state;
mod texts;
mod update;
mod view;

use helpers::{current_deep_link, fetch_catalog, fetch_preferences};
pub use messages::Msg;
pub use state::AssistantComponent;

impl Component for AssistantComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        AssistantComponent::new(current_deep_link())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            // Preferences first: the template language decides which text
            // the first draft opens in.
            let link = ctx.link().clone();
            spawn_local(async move {
                let preferences = fetch_preferences().await.unwrap_or_else(|e| {
                    gloo_console::warn!(format!("Using default preferences: {}", e));
                    Default::default()
                });
                link.send_message(Msg::PreferencesLoaded(preferences));
                link.send_message(Msg::CatalogLoaded(fetch_catalog().await));
            });

            self.shortcuts = install_shortcuts(ctx.link().clone());
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(listener) = self.shortcuts.take() {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                document
                    .remove_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref())
                    .ok();
            }
        }
    }
}

/// Maps a shortcut to its message. Ctrl and Cmd are interchangeable.
fn shortcut(event: &KeyboardEvent) -> Option<Msg> {
    if !(event.ctrl_key() || event.meta_key()) {
        return None;
    }
    match event.key().as_str() {
        "Enter" if event.shift_key() => Some(Msg::OpenMailClient),
        "Enter" => Some(Msg::Copy(CopyTarget::All)),
        "b" | "B" => Some(Msg::Copy(CopyTarget::Body)),
        "j" | "J" => Some(Msg::Copy(CopyTarget::Subject)),
        "/" => Some(Msg::FocusSearch),
        _ => None,
    }
}

fn install_shortcuts(link: Scope<AssistantComponent>) -> Option<Closure<dyn FnMut(KeyboardEvent)>> {
    let document = web_sys::window()?.document()?;
    let listener = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        if let Some(msg) = shortcut(&event) {
            event.prevent_default();
            link.send_message(msg);
        }
    });
    document
        .add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref())
        .ok()?;
    Some(listener)
}
