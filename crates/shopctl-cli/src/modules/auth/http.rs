use shopctl_core::api::auth::{ApiErrorBody, LoginRequest, LoginResponse};
use tracing::debug;

/// Exchanges email/password for a session at the backend.
///
/// Every failure path returns before any session state is touched; the
/// caller mutates the store only on success. Rejected logins surface the
/// server's `msg` field when the body carries one, a generic message
/// otherwise.
pub(crate) async fn login(
    client: &reqwest::Client,
    addr: &str,
    email: String,
    password: String,
) -> anyhow::Result<LoginResponse> {
    let url = format!("{}/auth/login", addr.trim_end_matches('/'));
    let payload = LoginRequest { email, password };
    let response = match client.post(url).json(&payload).send().await {
        Ok(response) => response,
        Err(err) => {
            debug!("login transport failure: {err}");
            anyhow::bail!("Network error or unknown failure");
        }
    };
    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .ok()
            .and_then(|body| body.msg)
            .unwrap_or_else(|| "API request failed".to_string());
        debug!(status = %status, "login rejected");
        anyhow::bail!(message);
    }
    Ok(response.json::<LoginResponse>().await?)
}
