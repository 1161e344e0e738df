use std::fmt;

use serde::{Deserialize, Serialize};

/// Source of a font's definition.
///
/// `Google` fonts are picked from the host's `/all-google-fonts` lookup and
/// loaded by name; `Custom` fonts carry a user-supplied URI or one resolved
/// from an uploaded attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Google,
    Custom,
}

impl Provider {
    pub const ALL: [Provider; 2] = [Provider::Google, Provider::Custom];

    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Google => "google",
            Provider::Custom => "custom",
        }
    }

    /// Parses the wire/form value back into a provider. Unknown values map
    /// to `None` so callers can fall back to their own default.
    pub fn parse(value: &str) -> Option<Provider> {
        match value {
            "google" => Some(Provider::Google),
            "custom" => Some(Provider::Custom),
            _ => None,
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for Provider {
    fn default() -> Self {
        Provider::Google
    }
}

/// A font record as held by the host store.
///
/// `name` doubles as the CSS font-family identifier elsewhere in the host
/// application, so it must not contain a literal period; ingestion rewrites
/// filenames accordingly before a record is created. For attachment-backed
/// fonts `id` equals the `refBy` of the created attachment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub id: String,
    pub name: String,
    pub provider: Provider,
    pub uri: String,
    pub active: bool,
}

/// Payload of a create action.
///
/// `id` is set only for attachment-backed fonts, where it must equal the
/// upload's reference id; otherwise the host assigns one. `uri` is absent
/// for Google fonts, which the host loads by name. Absent fields stay off
/// the wire entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewFont {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub provider: Provider,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_wire_names_are_lowercase() {
        assert_eq!(
            serde_json::to_string(&Provider::Google).unwrap(),
            "\"google\""
        );
        assert_eq!(
            serde_json::to_string(&Provider::Custom).unwrap(),
            "\"custom\""
        );
    }

    #[test]
    fn new_font_omits_absent_id_and_uri_from_the_wire() {
        let direct = NewFont {
            id: None,
            name: "Foo".to_string(),
            provider: Provider::Custom,
            uri: Some("http://x/foo.ttf".to_string()),
            active: true,
        };
        assert_eq!(
            serde_json::to_value(&direct).unwrap(),
            serde_json::json!({
                "name": "Foo",
                "provider": "custom",
                "uri": "http://x/foo.ttf",
                "active": true,
            })
        );

        let google = NewFont {
            id: None,
            name: "Roboto".to_string(),
            provider: Provider::Google,
            uri: None,
            active: true,
        };
        let value = serde_json::to_value(&google).unwrap();
        assert!(value.get("id").is_none());
        assert!(value.get("uri").is_none());
    }

    #[test]
    fn provider_parse_rejects_unknown_values() {
        assert_eq!(Provider::parse("google"), Some(Provider::Google));
        assert_eq!(Provider::parse("custom"), Some(Provider::Custom));
        assert_eq!(Provider::parse("typekit"), None);
        assert_eq!(Provider::parse(""), None);
    }
}
