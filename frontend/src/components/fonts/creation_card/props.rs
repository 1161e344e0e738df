use yew::prelude::*;

use crate::components::fonts::FontCreateRequest;

#[derive(Properties, PartialEq, Clone)]
pub struct FontCreationCardProps {
    /// Receives the packaged request on submit.
    pub on_create: Callback<FontCreateRequest>,

    /// Whether the attachment subsystem is available. Without it the file
    /// picker is not rendered and a font needs a direct URI.
    #[prop_or_default]
    pub can_attach: bool,

    /// Bumped by the parent after every store-driven list refresh; the card
    /// resets when it observes a change.
    #[prop_or_default]
    pub reset_epoch: u32,
}
