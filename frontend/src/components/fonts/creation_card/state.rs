//! Component state for the font creation card.

use web_sys::{File, HtmlFormElement};
use yew::prelude::*;

use common::model::font::Provider;

/// Which face of the flip card is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    /// The "create font" invitation.
    Idle,
    /// The input form.
    Editing,
}

/// State container for the creation card.
///
/// Fields are `pub` because they are accessed by the `view` and `update`
/// modules. Form field values live in the DOM and are read through the
/// node refs at submit time; only the pieces the view logic branches on
/// (provider, fetched Google names, pending files, face) are mirrored here.
pub struct FontCreationCard {
    /// Currently selected provider.
    pub provider: Provider,

    /// Selectable Google font names. Empty until the provider is switched
    /// to Google and the lookup succeeds; a failed lookup leaves it as is.
    pub google_fonts: Vec<String>,

    /// Files picked but not yet submitted. Upload happens in the parent,
    /// after submit.
    pub pending_files: Vec<File>,

    /// Active face of the card.
    pub face: Face,

    pub form_ref: NodeRef,
    pub name_input_ref: NodeRef,
    pub name_select_ref: NodeRef,
    pub uri_input_ref: NodeRef,
    pub active_input_ref: NodeRef,
    pub file_input_ref: NodeRef,
}

impl FontCreationCard {
    pub fn new() -> Self {
        Self {
            provider: Provider::default(),
            google_fonts: Vec::new(),
            pending_files: Vec::new(),
            face: Face::Idle,
            form_ref: NodeRef::default(),
            name_input_ref: NodeRef::default(),
            name_select_ref: NodeRef::default(),
            uri_input_ref: NodeRef::default(),
            active_input_ref: NodeRef::default(),
            file_input_ref: NodeRef::default(),
        }
    }

    /// Idle -> Editing. Entering the editing face always discards whatever
    /// an earlier visit left behind.
    pub fn activate(&mut self) {
        self.reset();
        self.face = Face::Editing;
    }

    /// Editing -> Idle without clearing; the next activation clears.
    pub fn dismiss(&mut self) {
        self.face = Face::Idle;
    }

    /// Clears the form fields and the pending file selection, and returns
    /// to the idle face.
    pub fn reset(&mut self) {
        if let Some(form) = self.form_ref.cast::<HtmlFormElement>() {
            form.reset();
        }
        // The DOM reset put the provider select back on its first option.
        self.provider = Provider::default();
        self.pending_files.clear();
        self.face = Face::Idle;
    }

    /// Whether the name field is a select over fetched Google names rather
    /// than a free text input.
    pub fn google_name_select(&self) -> bool {
        self.provider == Provider::Google && !self.google_fonts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_with_google_provider_and_no_names() {
        let card = FontCreationCard::new();
        assert_eq!(card.face, Face::Idle);
        assert_eq!(card.provider, Provider::Google);
        assert!(card.google_fonts.is_empty());
        assert!(!card.google_name_select());
    }

    #[test]
    fn activation_enters_editing_and_reset_returns_to_idle() {
        let mut card = FontCreationCard::new();
        card.activate();
        assert_eq!(card.face, Face::Editing);
        card.reset();
        assert_eq!(card.face, Face::Idle);
        assert!(card.pending_files.is_empty());
    }

    #[test]
    fn dismissing_keeps_state_until_the_next_activation() {
        let mut card = FontCreationCard::new();
        card.activate();
        card.provider = Provider::Custom;
        card.dismiss();
        assert_eq!(card.face, Face::Idle);
        assert_eq!(card.provider, Provider::Custom);
        card.activate();
        assert_eq!(card.provider, Provider::Google);
    }

    #[test]
    fn name_select_requires_a_loaded_google_list() {
        let mut card = FontCreationCard::new();
        assert!(!card.google_name_select());
        card.google_fonts = vec!["Roboto".to_string()];
        assert!(card.google_name_select());
        card.provider = Provider::Custom;
        assert!(!card.google_name_select());
    }
}
