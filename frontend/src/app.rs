use gloo_console::log;
use yew::{html, Component, Context, Html};

use common::model::font::Font;

use crate::api::attachments::AttachmentApi;
use crate::components::fonts::selector::FontSelector;
use crate::store::{FontAction, FontStore};

/// Demo shell standing in for the host application: owns the store handle
/// and the attachment capability, and loads the font list once at startup.
pub struct App {
    store: FontStore,
    attachments: Option<AttachmentApi>,
}

pub enum Msg {
    FontSelected(Font),
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let store = FontStore::new();
        store.dispatch(FontAction::FetchFontList { filter: None });
        Self {
            store,
            attachments: Some(AttachmentApi::new()),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FontSelected(font) => {
                log!(format!("font selected: {}", font.name));
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <FontSelector
                store={self.store.clone()}
                attachments={self.attachments.clone()}
                creatable=true
                on_font_selected={ctx.link().callback(Msg::FontSelected)}
            />
        }
    }
}
