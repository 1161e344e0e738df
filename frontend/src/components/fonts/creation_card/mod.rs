//! Font creation card: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and helpers.
//!
//! The card is a two-faced flip card. The idle face is a "create font"
//! invitation; activating it discards any stale input and flips to the
//! editing face, a form collecting name (or Google-fonts pick), provider,
//! active flag, and either a URI or font files. Submitting emits one
//! packaged [`FontCreateRequest`](crate::components::fonts::FontCreateRequest)
//! to the parent; uploads are the parent's business.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::FontCreationCardProps;
pub use state::{Face, FontCreationCard};

impl Component for FontCreationCard {
    type Message = Msg;
    type Properties = FontCreationCardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        FontCreationCard::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        // A bumped epoch is the parent signalling a store-driven list
        // refresh; pending input must not survive it.
        if ctx.props().reset_epoch != old_props.reset_epoch {
            self.reset();
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
