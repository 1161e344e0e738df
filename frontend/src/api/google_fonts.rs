//! Fixed host lookup for the selectable Google font names.

use gloo_net::http::Request;

/// Fetches all Google font names. A non-2xx response is an error for the
/// caller to log; the current selectable list is then left as it was.
pub async fn fetch_all() -> Result<Vec<String>, String> {
    let response = Request::get("/all-google-fonts")
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!(
            "({}) {} {}. Could not load Google fonts.",
            response.url(),
            response.status(),
            response.status_text()
        ));
    }
    response.json::<Vec<String>>().await.map_err(|e| e.to_string())
}
