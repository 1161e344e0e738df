//! Client for the host attachment subsystem.
//!
//! The subsystem is optional: components receive an `Option<AttachmentApi>`
//! decided once at construction, and every upload affordance disappears
//! when it is `None`. Creation mutations return only the new id, so the
//! metadata this widget needs (`fullpath`, `refBy`) is resolved with a
//! follow-up query.

use serde::Deserialize;
use serde_json::json;
use web_sys::File;

use common::model::attachment::{Attachment, AttachmentPage};

use super::graphql;

/// Category assigned to every font upload.
const CATEGORY: &str = "font";

#[derive(Clone, Default, PartialEq)]
pub struct AttachmentApi;

#[derive(Deserialize)]
struct CreatedId {
    id: String,
}

impl AttachmentApi {
    pub fn new() -> Self {
        Self
    }

    /// Uploads one file referenced by `ref_by` and resolves the created
    /// attachment's metadata.
    pub async fn create_one(&self, ref_by: &str, file: &File) -> Result<Attachment, String> {
        #[derive(Deserialize)]
        struct Data {
            #[serde(rename = "createAttachment")]
            created: CreatedId,
        }

        let query = "mutation ($attachment: NewAttachment!) {
            createAttachment(attachment: $attachment) { id }
        }";
        let variables = json!({
            "attachment": { "refBy": ref_by, "category": CATEGORY, "file": null }
        });
        let uploads = vec![("variables.attachment.file".to_string(), file.clone())];

        let data: Data = graphql::post_multipart(query, variables, &uploads).await?;
        self.get(&data.created.id).await
    }

    /// Uploads a batch of `(ref_by, file)` pairs in one mutation and
    /// resolves all created attachments by id.
    pub async fn create_many(&self, files: &[(String, File)]) -> Result<Vec<Attachment>, String> {
        #[derive(Deserialize)]
        struct Data {
            #[serde(rename = "createAttachments")]
            created: Vec<CreatedId>,
        }

        let query = "mutation ($attachments: [NewAttachment]!) {
            createAttachments(attachments: $attachments) { id }
        }";
        let variables = json!({
            "attachments": files
                .iter()
                .map(|(ref_by, _)| json!({ "refBy": ref_by, "category": CATEGORY, "file": null }))
                .collect::<Vec<_>>()
        });
        let uploads: Vec<(String, File)> = files
            .iter()
            .enumerate()
            .map(|(index, (_, file))| (format!("variables.attachments.{index}.file"), file.clone()))
            .collect();

        let data: Data = graphql::post_multipart(query, variables, &uploads).await?;
        let ids: Vec<String> = data.created.into_iter().map(|c| c.id).collect();
        self.list_by_ids(&ids).await
    }

    pub async fn get(&self, id: &str) -> Result<Attachment, String> {
        #[derive(Deserialize)]
        struct Data {
            attachment: Attachment,
        }

        let query = "query ($id: String!) {
            attachment(id: $id) { id fullpath refBy }
        }";
        let data: Data = graphql::post(query, json!({ "id": id })).await?;
        Ok(data.attachment)
    }

    pub async fn list_by_ids(&self, ids: &[String]) -> Result<Vec<Attachment>, String> {
        #[derive(Deserialize)]
        struct Data {
            attachments: AttachmentPage,
        }

        let query = "query ($filters: [Filter]) {
            attachments(filters: $filters) { items { id fullpath refBy } total }
        }";
        let variables = json!({
            "filters": [{ "name": "id", "operator": "in", "value": ids }]
        });
        let data: Data = graphql::post(query, variables).await?;
        Ok(data.attachments.items)
    }

    /// Deletes every attachment referencing one of `ref_bys`. Callers treat
    /// this as best-effort cleanup.
    pub async fn delete_by_refs(&self, ref_bys: &[String]) -> Result<(), String> {
        let query = "mutation ($refBys: [String]!) {
            deleteAttachmentsByRef(refBys: $refBys)
        }";
        let _: serde_json::Value = graphql::post(query, json!({ "refBys": ref_bys })).await?;
        Ok(())
    }
}
