//! Minimal GraphQL transport against the host `/graphql` endpoint.
//!
//! Two request shapes exist: a plain JSON envelope for queries and
//! mutations without uploads, and a multipart form body for mutations that
//! carry files (the GraphQL multipart request convention: an `operations`
//! JSON with `null` file placeholders, a `map` from form part names to
//! variable paths, and one form part per file).

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use web_sys::{File, FormData};

const ENDPOINT: &str = "/graphql";

#[derive(Serialize)]
struct Envelope<'a> {
    query: &'a str,
    variables: Value,
}

#[derive(Deserialize)]
struct Reply<T> {
    data: Option<T>,
    errors: Option<Vec<ReplyError>>,
}

#[derive(Deserialize)]
struct ReplyError {
    message: String,
}

/// Posts a query or mutation and unwraps the `data` member.
pub async fn post<T: DeserializeOwned>(query: &str, variables: Value) -> Result<T, String> {
    let response = Request::post(ENDPOINT)
        .json(&Envelope { query, variables })
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_data(response).await
}

/// Posts a mutation whose variables reference uploaded files. Each entry of
/// `uploads` pairs the dotted variable path of a `null` placeholder in
/// `variables` with the file that fills it.
pub async fn post_multipart<T: DeserializeOwned>(
    query: &str,
    variables: Value,
    uploads: &[(String, File)],
) -> Result<T, String> {
    let operations =
        serde_json::to_string(&Envelope { query, variables }).map_err(|e| e.to_string())?;
    let paths: Vec<String> = uploads.iter().map(|(path, _)| path.clone()).collect();

    let form = FormData::new().map_err(|_| "could not create form data".to_string())?;
    form.append_with_str("operations", &operations)
        .map_err(|_| "could not append operations".to_string())?;
    form.append_with_str("map", &upload_map(&paths).to_string())
        .map_err(|_| "could not append upload map".to_string())?;
    for (index, (_, file)) in uploads.iter().enumerate() {
        form.append_with_blob_and_filename(&index.to_string(), file, &file.name())
            .map_err(|_| format!("could not append file {}", file.name()))?;
    }

    // No explicit content type: the browser supplies the multipart boundary.
    let response = Request::post(ENDPOINT)
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_data(response).await
}

/// `map` member of a multipart request: form part name -> variable paths.
fn upload_map(paths: &[String]) -> Value {
    let map: serde_json::Map<String, Value> = paths
        .iter()
        .enumerate()
        .map(|(index, path)| {
            (
                index.to_string(),
                Value::Array(vec![Value::String(path.clone())]),
            )
        })
        .collect();
    Value::Object(map)
}

async fn read_data<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        return Err(format!(
            "({}) {} {}",
            response.url(),
            response.status(),
            response.status_text()
        ));
    }
    let reply: Reply<T> = response.json().await.map_err(|e| e.to_string())?;
    if let Some(errors) = reply.errors {
        if !errors.is_empty() {
            let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
            return Err(messages.join("; "));
        }
    }
    reply
        .data
        .ok_or_else(|| "empty GraphQL response".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn upload_map_numbers_parts_in_order() {
        let paths = vec![
            "variables.attachments.0.file".to_string(),
            "variables.attachments.1.file".to_string(),
        ];
        assert_eq!(
            upload_map(&paths),
            json!({
                "0": ["variables.attachments.0.file"],
                "1": ["variables.attachments.1.file"],
            })
        );
    }

    #[test]
    fn upload_map_is_empty_for_no_uploads() {
        assert_eq!(upload_map(&[]), json!({}));
    }
}
