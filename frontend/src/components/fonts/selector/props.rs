use yew::prelude::*;

use common::model::font::Font;

use crate::api::attachments::AttachmentApi;
use crate::store::FontStore;

#[derive(Properties, PartialEq, Clone)]
pub struct FontSelectorProps {
    /// Host store handle; the selector subscribes on mount and dispatches
    /// all mutations through it.
    pub store: FontStore,

    /// Attachment capability. `None` hides every upload affordance and
    /// turns delete-side cleanup into a no-op.
    #[prop_or_default]
    pub attachments: Option<AttachmentApi>,

    /// Whether the creation card is rendered at all.
    #[prop_or(true)]
    pub creatable: bool,

    /// Notified with the chosen font on card click; an outward signal,
    /// never a store mutation.
    #[prop_or_default]
    pub on_font_selected: Callback<Font>,
}
