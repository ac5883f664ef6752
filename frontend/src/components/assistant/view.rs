//! View rendering for the assistant component.
//!
//! Layout: a header with the interface language switch, the template picker
//! on the left (search, category, favorites, list) and the drafting area on
//! the right (template language, variables panel, subject and body editors,
//! export actions).

use common::editor::Field;
use common::engine::RefillPolicy;
use common::export::CopyTarget;
use common::model::catalog::{category_label, TemplateCatalog, ALL_CATEGORIES};
use common::model::template::{Language, Template};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::AssistantComponent;
use super::texts::{texts, InterfaceTexts};
use crate::components::editor::HighlightingEditor;

pub fn view(component: &AssistantComponent, ctx: &Context<AssistantComponent>) -> Html {
    let link = ctx.link();
    let t = texts(component.preferences.interface_language);

    let content = match (&component.catalog, &component.load_error) {
        (_, Some(error)) => html! {
            <div class="panel">{ format!("{} : {}", t.load_failed, error) }</div>
        },
        (None, None) => html! { <div class="panel">{ t.loading }</div> },
        (Some(catalog), None) => html! {
            <div class="assistant-main">
                { build_picker(component, catalog, link, t) }
                { build_draft_area(component, catalog, link, t) }
            </div>
        },
    };

    html! {
        <div class="assistant-root">
            { build_header(component, link, t) }
            { content }
        </div>
    }
}

fn build_header(component: &AssistantComponent, link: &Scope<AssistantComponent>, t: &InterfaceTexts) -> Html {
    html! {
        <header class="assistant-header">
            <div>
                <h1>{ t.title }</h1>
                <small>{ t.subtitle }</small>
            </div>
            <div>
                <span>{ t.interface_language }{" "}</span>
                { language_toggle(component.preferences.interface_language, link, Msg::SetInterfaceLanguage) }
            </div>
        </header>
    }
}

fn language_toggle(
    current: Language,
    link: &Scope<AssistantComponent>,
    to_msg: fn(Language) -> Msg,
) -> Html {
    html! {
        <span class="toggle-group">
            { for Language::ALL.iter().map(|&language| html! {
                <button
                    class={classes!((language == current).then_some("active"))}
                    onclick={link.callback(move |_| to_msg(language))}
                >
                    { language.code().to_uppercase() }
                </button>
            }) }
        </span>
    }
}

fn build_picker(
    component: &AssistantComponent,
    catalog: &TemplateCatalog,
    link: &Scope<AssistantComponent>,
    t: &InterfaceTexts,
) -> Html {
    let prefs = &component.preferences;
    let interface = prefs.interface_language;
    let templates = component.visible_templates();
    let selected = component.selected_id();

    let categories = std::iter::once(ALL_CATEGORIES).chain(catalog.categories());

    html! {
        <aside class="panel">
            <h2>{ t.select_template }</h2>
            <small>{ format!("{} {}", templates.len(), t.templates_count) }</small>
            <input
                type="search"
                ref={component.search_ref.clone()}
                placeholder={t.search_placeholder}
                value={prefs.search_query.clone()}
                oninput={link.callback(|e: InputEvent| {
                    Msg::SetSearch(e.target_unchecked_into::<HtmlInputElement>().value())
                })}
            />
            <select
                onchange={link.callback(|e: Event| {
                    Msg::SetCategory(e.target_unchecked_into::<HtmlSelectElement>().value())
                })}
            >
                { for categories.map(|category| html! {
                    <option value={category.to_string()} selected={category == prefs.selected_category}>
                        { category_label(category, interface) }
                    </option>
                }) }
            </select>
            <label>
                <input
                    type="checkbox"
                    checked={prefs.favorites_only}
                    onchange={link.callback(|_| Msg::ToggleFavoritesOnly)}
                />
                { t.favorites_only }
            </label>
            <ul class="template-list">
                { for templates.into_iter().map(|template| template_item(component, template, selected, link)) }
            </ul>
        </aside>
    }
}

fn template_item(
    component: &AssistantComponent,
    template: &Template,
    selected: Option<&str>,
    link: &Scope<AssistantComponent>,
) -> Html {
    let prefs = &component.preferences;
    let language = prefs.template_language;
    let id = template.id.clone();
    let favorite_id = template.id.clone();
    let is_favorite = prefs.is_favorite(&template.id);

    html! {
        <li
            class={classes!("template-item", (selected == Some(template.id.as_str())).then_some("selected"))}
            onclick={link.callback(move |_| Msg::SelectTemplate(id.clone()))}
        >
            <button
                class="favorite-btn"
                onclick={link.callback(move |e: MouseEvent| {
                    e.stop_propagation();
                    Msg::ToggleFavorite(favorite_id.clone())
                })}
            >
                { if is_favorite { "★" } else { "☆" } }
            </button>
            <div>
                <div>{ template.title.get(language) }</div>
                <div class="description">{ template.description.get(language) }</div>
                <div class="category">{ category_label(&template.category, prefs.interface_language) }</div>
            </div>
        </li>
    }
}

fn build_draft_area(
    component: &AssistantComponent,
    catalog: &TemplateCatalog,
    link: &Scope<AssistantComponent>,
    t: &InterfaceTexts,
) -> Html {
    let Some(draft) = &component.draft else {
        return html! { <section class="panel">{ t.no_template }</section> };
    };
    let interface = component.preferences.interface_language;
    let variables = draft.variables().clone();

    let variable_inputs = draft.template().variables.iter().filter_map(|name| {
        let definition = catalog.definition(name)?;
        let value = variables.get(name).unwrap_or_default().to_string();
        let var_name = name.clone();
        Some(html! {
            <label>
                { format!("{} ({})", definition.description.get(interface), name) }
                <input
                    type={definition.var_type.input_type()}
                    value={value}
                    placeholder={definition.example.clone()}
                    oninput={link.callback(move |e: InputEvent| {
                        Msg::SetVariable(
                            var_name.clone(),
                            e.target_unchecked_into::<HtmlInputElement>().value(),
                        )
                    })}
                />
            </label>
        })
    }).collect::<Html>();

    html! {
        <section class="panel">
            <div>
                <span>{ t.template_language }{" "}</span>
                { language_toggle(draft.language(), link, Msg::SetTemplateLanguage) }
            </div>

            <h3>{ t.variables }</h3>
            <div class="variables-grid">
                { variable_inputs }
            </div>

            <h3>{ t.edit_email }</h3>
            <h4>{ t.subject }</h4>
            <HighlightingEditor
                id={AttrValue::Static("subject-editor")}
                template={AttrValue::from(draft.template_text(Field::Subject).to_string())}
                text={AttrValue::from(draft.text(Field::Subject).to_string())}
                variables={variables.clone()}
                on_change={link.callback(|text: String| Msg::Edit(Field::Subject, text))}
                placeholder={AttrValue::Static("")}
                min_height={AttrValue::Static("2.5em")}
                single_line=true
            />
            <h4>{ t.body }</h4>
            <HighlightingEditor
                id={AttrValue::Static("body-editor")}
                template={AttrValue::from(draft.template_text(Field::Body).to_string())}
                text={AttrValue::from(draft.text(Field::Body).to_string())}
                variables={variables}
                on_change={link.callback(|text: String| Msg::Edit(Field::Body, text))}
                min_height={AttrValue::Static("250px")}
            />

            <label>
                <input
                    type="checkbox"
                    checked={component.policy == RefillPolicy::PreserveEdits}
                    onchange={link.callback(|_| Msg::TogglePreserveEdits)}
                />
                { t.preserve_edits }
            </label>

            { build_actions(component, link, t) }
        </section>
    }
}

fn build_actions(component: &AssistantComponent, link: &Scope<AssistantComponent>, t: &InterfaceTexts) -> Html {
    let copy_label = |target: CopyTarget, label: &'static str| {
        if component.copied == Some(target) {
            t.copied
        } else {
            label
        }
    };

    html! {
        <div class="actions">
            <button onclick={link.callback(|_| Msg::Reset)}>{ t.reset }</button>
            <button onclick={link.callback(|_| Msg::Copy(CopyTarget::Subject))}>
                { copy_label(CopyTarget::Subject, t.copy_subject) }
            </button>
            <button onclick={link.callback(|_| Msg::Copy(CopyTarget::Body))}>
                { copy_label(CopyTarget::Body, t.copy_body) }
            </button>
            <button class="primary" onclick={link.callback(|_| Msg::Copy(CopyTarget::All))}>
                { copy_label(CopyTarget::All, t.copy_all) }
            </button>
            <button onclick={link.callback(|_| Msg::CopyLink)}>{ t.copy_link }</button>
            <button onclick={link.callback(|_| Msg::OpenMailClient)}>{ t.open_in_mail }</button>
            <button onclick={link.callback(|_| Msg::DownloadEml)}>{ t.download_eml }</button>
        </div>
    }
}
