//! Component state for the font grid selector.

use common::model::font::{Font, Provider};

/// State container for the selector.
///
/// `fonts` is the last collection pushed by the store subscription; the
/// selector never edits it directly. Fields are `pub` for the `view` and
/// `update` modules.
pub struct FontSelector {
    /// Read-only view of the store's font collection.
    pub fonts: Vec<Font>,

    /// Visual provider filter; never triggers a refetch.
    pub provider_filter: Option<Provider>,

    /// Whether a drag currently hovers the grid (drop highlight).
    pub drag_over: bool,

    /// Incremented on every store-driven refresh and passed down to the
    /// creation card so stale pending input cannot be resubmitted.
    pub reset_epoch: u32,

    /// Store subscription id, released on destroy.
    pub subscription: Option<usize>,
}

impl FontSelector {
    pub fn new() -> Self {
        Self {
            fonts: Vec::new(),
            provider_filter: None,
            drag_over: false,
            reset_epoch: 0,
            subscription: None,
        }
    }

    /// Replaces the collection with a store-delivered refresh and
    /// invalidates any pending form input.
    pub fn apply_fonts(&mut self, fonts: Vec<Font>) {
        self.fonts = fonts;
        self.reset_epoch = self.reset_epoch.wrapping_add(1);
    }

    pub fn font_names(&self) -> Vec<String> {
        self.fonts.iter().map(|font| font.name.clone()).collect()
    }

    /// Fonts currently shown, after the visual provider filter.
    pub fn visible_fonts(&self) -> Vec<&Font> {
        self.fonts
            .iter()
            .filter(|font| {
                self.provider_filter
                    .map_or(true, |provider| font.provider == provider)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn font(name: &str, provider: Provider) -> Font {
        Font {
            id: name.to_lowercase(),
            name: name.to_string(),
            provider,
            uri: String::new(),
            active: true,
        }
    }

    #[test]
    fn store_refresh_bumps_the_reset_epoch() {
        let mut selector = FontSelector::new();
        let before = selector.reset_epoch;
        selector.apply_fonts(vec![font("Arial", Provider::Custom)]);
        assert_ne!(selector.reset_epoch, before);
        assert_eq!(selector.font_names(), vec!["Arial".to_string()]);
    }

    #[test]
    fn provider_filter_is_visual_only() {
        let mut selector = FontSelector::new();
        selector.apply_fonts(vec![
            font("Roboto", Provider::Google),
            font("Arial", Provider::Custom),
        ]);

        assert_eq!(selector.visible_fonts().len(), 2);
        selector.provider_filter = Some(Provider::Google);
        let visible: Vec<&str> = selector
            .visible_fonts()
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(visible, vec!["Roboto"]);
        // The underlying collection is untouched.
        assert_eq!(selector.fonts.len(), 2);
    }
}
