//! Font operations behind the store actions: list, create, update, delete.

use serde::Deserialize;
use serde_json::json;

use common::model::font::{Font, NewFont, Provider};

use super::graphql;

pub async fn list(filter: Option<Provider>) -> Result<Vec<Font>, String> {
    #[derive(Deserialize)]
    struct Page {
        items: Vec<Font>,
    }
    #[derive(Deserialize)]
    struct Data {
        fonts: Page,
    }

    let query = "query ($filters: [Filter]) {
        fonts(filters: $filters) { items { id name provider uri active } }
    }";
    let filters = match filter {
        Some(provider) => json!([{ "name": "provider", "operator": "eq", "value": provider }]),
        None => json!([]),
    };
    let data: Data = graphql::post(query, json!({ "filters": filters })).await?;
    Ok(data.fonts.items)
}

pub async fn create(font: &NewFont) -> Result<(), String> {
    let query = "mutation ($font: NewFont!) {
        createFont(font: $font) { id }
    }";
    let _: serde_json::Value = graphql::post(query, json!({ "font": font })).await?;
    Ok(())
}

pub async fn update_active(id: &str, active: bool) -> Result<(), String> {
    let query = "mutation ($id: String!, $patch: FontPatch!) {
        updateFont(id: $id, patch: $patch) { id active }
    }";
    let variables = json!({ "id": id, "patch": { "active": active } });
    let _: serde_json::Value = graphql::post(query, variables).await?;
    Ok(())
}

pub async fn delete(id: &str) -> Result<(), String> {
    let query = "mutation ($id: String!) {
        deleteFont(id: $id)
    }";
    let _: serde_json::Value = graphql::post(query, json!({ "id": id })).await?;
    Ok(())
}
