//! View rendering for the font creation card.
//!
//! Both faces stay in the DOM; the `flipped` class on the root drives the
//! 3D transition defined in the stylesheet. Field visibility follows the
//! provider: the URI and file rows only exist for custom fonts, and the
//! name field becomes a select once Google names are loaded.

use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement, HtmlSelectElement, MouseEvent, SubmitEvent};
use yew::html::Scope;
use yew::prelude::*;

use common::model::font::Provider;

use crate::components::fonts::{accept_attribute, file_list};

use super::messages::Msg;
use super::state::{Face, FontCreationCard};

pub fn view(component: &FontCreationCard, ctx: &Context<FontCreationCard>) -> Html {
    let link = ctx.link();
    let flipped = component.face == Face::Editing;

    html! {
        <div class={classes!("flip-card", flipped.then_some("flipped"))}>
            <div class="card-face front" onclick={link.callback(|_| Msg::Activate)}>
                <span class="create-icon">{"+"}</span>
                <span>{"create font"}</span>
            </div>
            <div class="card-face back" onclick={background_dismiss(link)}>
                { build_form(component, ctx) }
            </div>
        </div>
    }
}

/// Flip back only for clicks that hit the form background, not one of its
/// controls.
fn background_dismiss(link: &Scope<FontCreationCard>) -> Callback<MouseEvent> {
    link.batch_callback(|e: MouseEvent| {
        let tag = e
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .map(|element| element.tag_name())
            .unwrap_or_default();
        let on_control = matches!(tag.as_str(), "INPUT" | "SELECT" | "OPTION");
        (!on_control).then_some(Msg::Dismiss)
    })
}

fn build_form(component: &FontCreationCard, ctx: &Context<FontCreationCard>) -> Html {
    let link = ctx.link();
    let custom = component.provider == Provider::Custom;
    let file_attached = !component.pending_files.is_empty();

    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });
    let on_provider_change = link.callback(|e: Event| {
        Msg::SelectProvider(e.target_unchecked_into::<HtmlSelectElement>().value())
    });
    let on_files_change = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::FilesChosen(file_list(input.files()))
    });

    html! {
        <form ref={component.form_ref.clone()} {onsubmit}>
            <div class="props">
                <label>{"provider"}</label>
                <select name="provider" onchange={on_provider_change}>
                    { for Provider::ALL.iter().map(|provider| html! {
                        <option
                            value={provider.as_str()}
                            selected={component.provider == *provider}
                        >
                            { provider.as_str() }
                        </option>
                    }) }
                </select>

                <label>{"name"}</label>
                {
                    if component.google_name_select() {
                        html! {
                            <select name="name" ref={component.name_select_ref.clone()}>
                                { for component.google_fonts.iter().map(|name| html! {
                                    <option value={name.clone()}>{ name }</option>
                                }) }
                            </select>
                        }
                    } else {
                        html! {
                            <input
                                type="text"
                                name="name"
                                required=true
                                ref={component.name_input_ref.clone()}
                            />
                        }
                    }
                }

                {
                    if custom {
                        html! {
                            <>
                                <label>{"uri"}</label>
                                <input
                                    type="text"
                                    name="uri"
                                    ref={component.uri_input_ref.clone()}
                                    disabled={file_attached}
                                    value={file_attached.then(|| component.pending_files[0].name())}
                                />
                            </>
                        }
                    } else {
                        html! {}
                    }
                }

                {
                    if custom && ctx.props().can_attach {
                        html! {
                            <>
                                <label>{"file"}</label>
                                <input
                                    type="file"
                                    name="file"
                                    multiple=true
                                    accept={accept_attribute()}
                                    ref={component.file_input_ref.clone()}
                                    onchange={on_files_change}
                                />
                            </>
                        }
                    } else {
                        html! {}
                    }
                }

                <label>{"active"}</label>
                <input
                    type="checkbox"
                    name="active"
                    checked=true
                    ref={component.active_input_ref.clone()}
                />
            </div>
            <input type="submit" value="create" />
        </form>
    }
}
