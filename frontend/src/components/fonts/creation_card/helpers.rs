//! Pure packaging logic for the creation form.

use web_sys::File;

use common::model::font::Provider;

use crate::components::fonts::FontCreateRequest;

/// URI to carry on the request, if the direct-entry path supplies one.
/// Only a custom font can name a URI, and an attached file wins over
/// whatever the (then disabled) URI input displays.
pub fn direct_uri(provider: Provider, uri: &str, has_files: bool) -> Option<String> {
    (provider == Provider::Custom && !has_files && !uri.is_empty()).then(|| uri.to_string())
}

/// Packages the form's values into the request handed to the parent.
pub fn package_request(
    name: String,
    provider: Provider,
    active: bool,
    uri: &str,
    files: Vec<File>,
) -> FontCreateRequest {
    FontCreateRequest {
        uri: direct_uri(provider, uri, !files.is_empty()),
        name,
        provider,
        active,
        files,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_font_with_typed_uri_packages_exactly_the_form_values() {
        let request = package_request(
            "Foo".to_string(),
            Provider::Custom,
            true,
            "http://x/foo.ttf",
            Vec::new(),
        );
        assert_eq!(request.name, "Foo");
        assert_eq!(request.provider, Provider::Custom);
        assert_eq!(request.uri, Some("http://x/foo.ttf".to_string()));
        assert!(request.active);
        assert!(request.files.is_empty());
    }

    #[test]
    fn google_font_never_carries_a_uri() {
        assert_eq!(direct_uri(Provider::Google, "http://x/foo.ttf", false), None);
    }

    #[test]
    fn attached_files_suppress_the_displayed_uri() {
        assert_eq!(direct_uri(Provider::Custom, "foo.ttf", true), None);
    }

    #[test]
    fn empty_uri_field_is_omitted_rather_than_blank() {
        assert_eq!(direct_uri(Provider::Custom, "", false), None);
    }
}
