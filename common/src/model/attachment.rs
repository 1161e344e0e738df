use serde::{Deserialize, Serialize};

/// An uploaded-file resource managed by the host attachment subsystem.
///
/// Only the fields this widget selects are modeled; the server holds more.
/// `ref_by` is the id of the entity the upload belongs to. Fonts created
/// from uploads reuse it as their own id, which is what makes best-effort
/// cleanup by reference possible on delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub id: String,
    pub fullpath: String,
    pub ref_by: String,
}

/// Page shape returned by the `attachments(filters)` query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttachmentPage {
    pub items: Vec<Attachment>,
    pub total: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attachment_uses_camel_case_ref_by_on_the_wire() {
        let attachment: Attachment = serde_json::from_str(
            r#"{"id":"a-1","fullpath":"/files/a.woff2","refBy":"f-1"}"#,
        )
        .unwrap();
        assert_eq!(attachment.ref_by, "f-1");
        assert!(serde_json::to_string(&attachment).unwrap().contains("\"refBy\""));
    }
}
