use web_sys::File;

use common::model::font::{Font, Provider};

use crate::components::fonts::FontCreateRequest;

pub enum Msg {
    /// Store subscription delivered a refreshed collection.
    FontsChanged(Vec<Font>),
    Refresh,
    SetProviderFilter(Option<Provider>),
    /// Packaged request from the creation card.
    Create(FontCreateRequest),
    /// Files dropped onto the grid.
    Dropped(Vec<File>),
    DragState(bool),
    ToggleActive(Font),
    Delete(Font),
    Select(Font),
}
