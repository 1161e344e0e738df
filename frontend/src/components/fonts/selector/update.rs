//! Update function for the font grid selector.
//!
//! Owns the ingestion workflow. Both entry points (a creation request
//! carrying attached files, and a multi-file drop) run through one
//! routine: filter to uploadable, non-duplicate files, upload the
//! survivors, then dispatch one create action per resulting font. Within
//! a single request the upload always completes (or fails) before the
//! corresponding dispatch; concurrent requests are not serialized against
//! each other.

use std::collections::HashMap;

use gloo_console::{error, warn};
use uuid::Uuid;
use web_sys::File;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::font::{NewFont, Provider};

use crate::api::attachments::AttachmentApi;
use crate::components::fonts::FontCreateRequest;
use crate::store::{toggle_action, FontAction};

use super::helpers;
use super::messages::Msg;
use super::state::FontSelector;

pub fn update(component: &mut FontSelector, ctx: &Context<FontSelector>, msg: Msg) -> bool {
    match msg {
        Msg::FontsChanged(fonts) => {
            component.apply_fonts(fonts);
            true
        }
        Msg::Refresh => {
            ctx.props()
                .store
                .dispatch(FontAction::FetchFontList { filter: None });
            false
        }
        Msg::SetProviderFilter(filter) => {
            component.provider_filter = filter;
            true
        }
        Msg::Create(request) => {
            handle_create(component, ctx, request);
            false
        }
        Msg::Dropped(files) => {
            component.drag_over = false;
            handle_drop(component, ctx, files);
            true
        }
        Msg::DragState(over) => {
            if component.drag_over == over {
                return false;
            }
            component.drag_over = over;
            true
        }
        Msg::ToggleActive(font) => {
            ctx.props().store.dispatch(toggle_action(&font));
            false
        }
        Msg::Delete(font) => {
            // The delete action goes out unconditionally; attachment
            // cleanup is a separate best-effort task whose outcome is
            // swallowed.
            ctx.props()
                .store
                .dispatch(FontAction::DeleteFont(font.clone()));
            if let Some(api) = ctx.props().attachments.clone() {
                spawn_local(async move {
                    let _ = api.delete_by_refs(&[font.id]).await;
                });
            }
            false
        }
        Msg::Select(font) => {
            ctx.props().on_font_selected.emit(font);
            false
        }
    }
}

/// Creation request from the card. Without files the request dispatches
/// as-is; with files the single-file ingestion path supplies id and uri
/// first, and the typed form values win for everything else.
fn handle_create(component: &FontSelector, ctx: &Context<FontSelector>, request: FontCreateRequest) {
    let store = ctx.props().store.clone();

    if request.files.is_empty() {
        store.dispatch(FontAction::CreateFont(NewFont {
            id: None,
            name: request.name,
            provider: request.provider,
            uri: request.uri,
            active: request.active,
        }));
        return;
    }

    let Some(api) = ctx.props().attachments.clone() else {
        warn!("attachment subsystem unavailable, cannot upload font files");
        return;
    };
    let existing_names = component.font_names();
    let FontCreateRequest {
        name,
        provider,
        active,
        files,
        ..
    } = request;
    spawn_local(async move {
        match ingest(&api, files, &existing_names, true).await {
            Ok(drafts) => match drafts.into_iter().next() {
                Some(draft) => store.dispatch(FontAction::CreateFont(NewFont {
                    id: draft.id,
                    name,
                    provider,
                    uri: draft.uri,
                    active,
                })),
                None => warn!("no uploadable file in the creation request"),
            },
            Err(e) => error!(format!("font upload failed: {e}")),
        }
    });
}

/// Multi-file drop. Every surviving file becomes an active custom font
/// named after it.
fn handle_drop(component: &FontSelector, ctx: &Context<FontSelector>, files: Vec<File>) {
    let Some(api) = ctx.props().attachments.clone() else {
        return;
    };
    let store = ctx.props().store.clone();
    let existing_names = component.font_names();
    spawn_local(async move {
        match ingest(&api, files, &existing_names, false).await {
            Ok(drafts) => {
                for font in drafts {
                    store.dispatch(FontAction::CreateFont(font));
                }
            }
            Err(e) => error!(format!("font upload failed: {e}")),
        }
    });
}

/// The one ingestion routine behind both entry points.
///
/// Filters `files` through the canonical extension allow-list and the
/// duplicate-name check against `existing_names`, uploads the survivors
/// (one mutation in either mode), and resolves the created attachments to
/// font drafts with `id` = the attachment's reference id and `uri` = its
/// resolved location. Returns an empty list when nothing survives the
/// filters.
async fn ingest(
    api: &AttachmentApi,
    files: Vec<File>,
    existing_names: &[String],
    single_file: bool,
) -> Result<Vec<NewFont>, String> {
    let mut selected: Vec<(String, File)> = files
        .into_iter()
        .filter(|file| helpers::ingestible(&file.name(), existing_names))
        .map(|file| (Uuid::new_v4().to_string(), file))
        .collect();
    if single_file {
        selected.truncate(1);
    }
    if selected.is_empty() {
        return Ok(Vec::new());
    }

    let derived_names: HashMap<String, String> = selected
        .iter()
        .map(|(ref_by, file)| (ref_by.clone(), helpers::derive_font_name(&file.name())))
        .collect();

    let attachments = if single_file {
        let (ref_by, file) = &selected[0];
        vec![api.create_one(ref_by, file).await?]
    } else {
        api.create_many(&selected).await?
    };

    Ok(attachments
        .into_iter()
        .filter_map(|attachment| {
            derived_names.get(&attachment.ref_by).map(|name| NewFont {
                id: Some(attachment.ref_by.clone()),
                name: name.clone(),
                provider: Provider::Custom,
                uri: Some(attachment.fullpath),
                active: true,
            })
        })
        .collect())
}
