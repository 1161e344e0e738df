//! Font grid selector: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic, view rendering,
//! and the pure ingestion helpers.
//!
//! Responsibilities
//! - Subscribe to the host store's font collection and render it as a grid.
//! - Mediate creation, activation toggles, and deletion between the
//!   creation card and the store.
//! - Own the file-attachment ingestion workflow for both the form-submit
//!   path and drag-and-drop.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::FontSelectorProps;
pub use state::FontSelector;

impl Component for FontSelector {
    type Message = Msg;
    type Properties = FontSelectorProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut selector = FontSelector::new();
        let subscription = ctx
            .props()
            .store
            .subscribe(ctx.link().callback(Msg::FontsChanged));
        selector.subscription = Some(subscription);
        selector
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn destroy(&mut self, ctx: &Context<Self>) {
        if let Some(subscription) = self.subscription.take() {
            ctx.props().store.unsubscribe(subscription);
        }
    }
}
