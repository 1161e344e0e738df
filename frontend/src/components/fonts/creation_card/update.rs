//! Update function for the font creation card.
//!
//! Elm-style: receives the current state, the context, and a message,
//! mutates the state, and returns whether the view should re-render.
//! Switching the provider to Google triggers the async name lookup; its
//! failure is logged and leaves the selectable list untouched.

use gloo_console::warn;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::font::Provider;

use crate::api::google_fonts;

use super::helpers;
use super::messages::Msg;
use super::state::FontCreationCard;

pub fn update(
    component: &mut FontCreationCard,
    ctx: &Context<FontCreationCard>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Activate => {
            component.activate();
            true
        }
        Msg::Dismiss => {
            component.dismiss();
            true
        }
        Msg::SelectProvider(value) => {
            let Some(provider) = Provider::parse(&value) else {
                return false;
            };
            component.provider = provider;
            if provider == Provider::Google {
                let link = ctx.link().clone();
                spawn_local(async move {
                    match google_fonts::fetch_all().await {
                        Ok(names) => link.send_message(Msg::GoogleFontsLoaded(names)),
                        // The selectable list stays as it was; no retry.
                        Err(e) => warn!(e),
                    }
                });
            }
            true
        }
        Msg::GoogleFontsLoaded(names) => {
            component.google_fonts = names;
            true
        }
        Msg::FilesChosen(files) => {
            component.pending_files = files;
            true
        }
        Msg::Submit => {
            let name = if component.google_name_select() {
                select_value(&component.name_select_ref)
            } else {
                input_value(&component.name_input_ref)
            };
            let uri = input_value(&component.uri_input_ref);
            let active = checkbox_checked(&component.active_input_ref);

            let request = helpers::package_request(
                name,
                component.provider,
                active,
                &uri,
                component.pending_files.clone(),
            );
            ctx.props().on_create.emit(request);
            component.reset();
            true
        }
    }
}

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

fn select_value(node: &NodeRef) -> String {
    node.cast::<HtmlSelectElement>()
        .map(|select| select.value())
        .unwrap_or_default()
}

fn checkbox_checked(node: &NodeRef) -> bool {
    node.cast::<HtmlInputElement>()
        .map(|input| input.checked())
        .unwrap_or(false)
}
