//! View rendering for the font grid selector.
//!
//! A filter bar (refresh, provider select) sits above a card grid: the
//! creation card first (when creatable), then one preview card per font.
//! A `<style>` block of `@font-face` rules accompanies the grid so the
//! sample lines render in the listed faces. Drag-and-drop targets the
//! whole grid and is only wired when the attachment capability exists.

use web_sys::{DragEvent, Event, HtmlSelectElement, MouseEvent};
use yew::html::Scope;
use yew::prelude::*;

use common::model::font::{Font, Provider};

use crate::components::fonts::creation_card::FontCreationCard;
use crate::components::fonts::file_list;

use super::messages::Msg;
use super::state::FontSelector;

pub fn view(component: &FontSelector, ctx: &Context<FontSelector>) -> Html {
    html! {
        <div class="font-selector">
            { font_face_rules(&component.fonts) }
            { build_filter_bar(component, ctx.link()) }
            { build_grid(component, ctx) }
        </div>
    }
}

/// One `@font-face` rule per font with a location, so the preview samples
/// actually load. Google fonts are loaded by name by the host and carry no
/// URI here.
fn font_face_rules(fonts: &[Font]) -> Html {
    let rules: Vec<String> = fonts
        .iter()
        .filter(|font| !font.uri.is_empty())
        .map(|font| {
            format!(
                "@font-face {{ font-family: '{}'; src: url('{}'); }}",
                font.name, font.uri
            )
        })
        .collect();
    html! { <style>{ rules.join("\n") }</style> }
}

fn build_filter_bar(component: &FontSelector, link: &Scope<FontSelector>) -> Html {
    let on_filter_change = link.callback(|e: Event| {
        let value = e.target_unchecked_into::<HtmlSelectElement>().value();
        Msg::SetProviderFilter(Provider::parse(&value))
    });

    html! {
        <div class="filter">
            <button
                class="refresh"
                title="refresh"
                onclick={link.callback(|_| Msg::Refresh)}
            >
                {"\u{27F3}"}
            </button>
            <select onchange={on_filter_change}>
                <option value="" selected={component.provider_filter.is_none()}>
                    {"-- please choose a provider --"}
                </option>
                { for Provider::ALL.iter().map(|provider| html! {
                    <option
                        value={provider.as_str()}
                        selected={component.provider_filter == Some(*provider)}
                    >
                        { provider.as_str() }
                    </option>
                }) }
            </select>
        </div>
    }
}

fn build_grid(component: &FontSelector, ctx: &Context<FontSelector>) -> Html {
    let link = ctx.link();
    let can_attach = ctx.props().attachments.is_some();

    let ondragover = can_attach.then(|| {
        link.callback(|e: DragEvent| {
            // Without this the browser navigates to the dropped file.
            e.prevent_default();
            Msg::DragState(true)
        })
    });
    let ondragleave = can_attach.then(|| link.callback(|_: DragEvent| Msg::DragState(false)));
    let ondrop = can_attach.then(|| {
        link.callback(|e: DragEvent| {
            e.prevent_default();
            let files = e
                .data_transfer()
                .map(|transfer| file_list(transfer.files()))
                .unwrap_or_default();
            Msg::Dropped(files)
        })
    });

    html! {
        <div
            id="main"
            class={classes!(component.drag_over.then_some("candrop"))}
            {ondragover}
            {ondragleave}
            {ondrop}
        >
            {
                if ctx.props().creatable {
                    html! {
                        <div class="card create">
                            <FontCreationCard
                                can_attach={can_attach}
                                reset_epoch={component.reset_epoch}
                                on_create={link.callback(Msg::Create)}
                            />
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            { for component.visible_fonts().into_iter().map(|font| build_font_card(font, link)) }
        </div>
    }
}

fn build_font_card(font: &Font, link: &Scope<FontSelector>) -> Html {
    let onclick = {
        let font = font.clone();
        link.callback(move |_| Msg::Select(font.clone()))
    };
    let ontoggle = {
        let font = font.clone();
        link.callback(move |e: MouseEvent| {
            e.stop_propagation();
            Msg::ToggleActive(font.clone())
        })
    };
    let ondelete = {
        let font = font.clone();
        link.callback(move |e: MouseEvent| {
            e.stop_propagation();
            Msg::Delete(font.clone())
        })
    };

    html! {
        <div class="card" key={font.id.clone()} {onclick}>
            <div class="sample" style={format!("font-family: '{}'", font.name)}>
                <div>{"ABCDEFGHIJKLMN"}</div>
                <div>{"abcdefghijklmn"}</div>
            </div>
            <div class="name">{ &font.name }</div>
            <div class="provider">{ font.provider.as_str() }</div>
            <div class="controls">
                <button
                    class={classes!("toggle", font.active.then_some("on"))}
                    title={if font.active { "deactivate" } else { "activate" }}
                    onclick={ontoggle}
                >
                    {"\u{2605}"}
                </button>
                <button class="delete" title="delete" onclick={ondelete}>
                    {"\u{2715}"}
                </button>
            </div>
        </div>
    }
}
