//! Pure ingestion logic: which files may become fonts, and under what name.

use crate::components::fonts::FONT_FILE_EXTENSIONS;

/// Whether `file_name` carries one of the recognized font extensions.
/// Extension matching ignores case; a bare extension with no stem is not a
/// usable font file.
pub fn is_font_file(file_name: &str) -> bool {
    match file_name.rsplit_once('.') {
        Some((stem, extension)) if !stem.is_empty() => {
            let extension = extension.to_ascii_lowercase();
            FONT_FILE_EXTENSIONS.contains(&extension.as_str())
        }
        _ => false,
    }
}

/// Font name derived from an uploaded filename: extension stripped, then
/// the first period in the stem rewritten to an underscore. The name
/// doubles as a CSS font-family identifier elsewhere in the host
/// application, where a period is not usable. The rewrite is lossy:
/// `a.b` and `a_b` collide.
pub fn derive_font_name(file_name: &str) -> String {
    let stem = file_name
        .rsplit_once('.')
        .map_or(file_name, |(stem, _)| stem);
    stem.replacen('.', "_", 1)
}

/// Ingestion gate for one file: recognized extension, and no collision of
/// the derived name with the loaded list (case-sensitive exact match).
/// Files failing either check are silently excluded.
pub fn ingestible(file_name: &str, existing_names: &[String]) -> bool {
    is_font_file(file_name)
        && !existing_names
            .iter()
            .any(|name| *name == derive_font_name(file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drop_filter_excludes_foreign_extensions_and_name_collisions() {
        let existing = vec!["Arial".to_string()];
        let dropped = ["Arial.ttf", "readme.txt", "Noto.woff2"];
        let kept: Vec<&str> = dropped
            .iter()
            .copied()
            .filter(|name| ingestible(name, &existing))
            .collect();
        assert_eq!(kept, vec!["Noto.woff2"]);
    }

    #[test]
    fn derived_name_strips_extension_and_rewrites_the_first_period() {
        assert_eq!(derive_font_name("My.Font.ttf"), "My_Font");
        assert_eq!(derive_font_name("Arial.ttf"), "Arial");
    }

    #[test]
    fn derivation_is_lossy_across_period_and_underscore() {
        assert_eq!(derive_font_name("a.b.ttf"), derive_font_name("a_b.ttf"));
    }

    #[test]
    fn collision_check_is_case_sensitive() {
        let existing = vec!["arial".to_string()];
        assert!(ingestible("Arial.ttf", &existing));
        assert!(!ingestible("arial.ttf", &existing));
    }

    #[test]
    fn every_recognized_extension_passes_regardless_of_case() {
        for extension in ["ttf", "woff", "woff2", "eot", "svg", "svgz", "otf"] {
            assert!(is_font_file(&format!("Sample.{extension}")));
            assert!(is_font_file(&format!("Sample.{}", extension.to_uppercase())));
        }
        assert!(!is_font_file("Sample.zip"));
        assert!(!is_font_file("Sample"));
        assert!(!is_font_file(".ttf"));
    }
}
