//! Server status probe

use serde_json::Value;

/// Result of probing a running server
#[derive(Debug, Clone)]
pub struct ServerStatus {
    /// Body of `/health`
    pub health: Value,
    /// Whether `/ready` answered 2xx
    pub ready: bool,
    /// Body of `/ready`, when it was JSON
    pub readiness: Option<Value>,
}

/// Format endpoint URL
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

/// Query `/health` and `/ready`
///
/// # Errors
///
/// Returns an error if the server cannot be reached or `/health` is not JSON.
pub async fn check(client: &reqwest::Client, base_url: &str) -> Result<ServerStatus, reqwest::Error> {
    let health = client
        .get(endpoint_url(base_url, "/health"))
        .send()
        .await?
        .error_for_status()?
        .json::<Value>()
        .await?;

    let ready_resp = client.get(endpoint_url(base_url, "/ready")).send().await?;
    let ready = ready_resp.status().is_success();
    let readiness = ready_resp.json::<Value>().await.ok();

    Ok(ServerStatus {
        health,
        ready,
        readiness,
    })
}
