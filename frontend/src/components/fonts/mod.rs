//! Font widgets: the grid selector and the flip-card creation form.

use web_sys::{File, FileList};

use common::model::font::Provider;

pub mod creation_card;
pub mod selector;

/// Canonical allow-list of uploadable font file extensions, shared by the
/// file picker's `accept` attribute and the drop filter.
pub const FONT_FILE_EXTENSIONS: [&str; 7] =
    ["ttf", "woff", "woff2", "eot", "svg", "svgz", "otf"];

/// `accept` attribute value for file pickers limited to font files.
pub fn accept_attribute() -> String {
    let dotted: Vec<String> = FONT_FILE_EXTENSIONS
        .iter()
        .map(|ext| format!(".{ext}"))
        .collect();
    dotted.join(",")
}

/// Packaged creation request emitted by the creation card.
///
/// Exactly one of `uri` / `files` supplies the font location: a direct
/// entry carries `uri`, attached files defer the upload to the list
/// controller.
#[derive(Debug, Clone, PartialEq)]
pub struct FontCreateRequest {
    pub name: String,
    pub provider: Provider,
    pub active: bool,
    pub uri: Option<String>,
    pub files: Vec<File>,
}

/// Collects a DOM `FileList` (picker or drop payload) into a `Vec`.
pub fn file_list(list: Option<FileList>) -> Vec<File> {
    let mut files = Vec::new();
    if let Some(list) = list {
        for index in 0..list.length() {
            if let Some(file) = list.item(index) {
                files.push(file);
            }
        }
    }
    files
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_attribute_lists_every_extension_dotted() {
        assert_eq!(
            accept_attribute(),
            ".ttf,.woff,.woff2,.eot,.svg,.svgz,.otf"
        );
    }
}
