use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Method;
use tracing::debug;

use crate::modules::system::CommandContext;

pub(crate) fn auth_headers(token: &str) -> anyhow::Result<HeaderMap> {
    if token.trim().is_empty() {
        anyhow::bail!("session credential is empty; run `shopctl login`");
    }
    let mut headers = HeaderMap::new();
    let value = HeaderValue::from_str(&format!("Bearer {token}"))?;
    headers.insert(AUTHORIZATION, value);
    Ok(headers)
}

pub(crate) async fn send_request(
    ctx: &CommandContext<'_>,
    method: Method,
    url: String,
    payload: Option<serde_json::Value>,
) -> anyhow::Result<reqwest::Response> {
    if url.starts_with("http://") && !ctx.allow_insecure {
        anyhow::bail!("refusing to use http:// without --insecure");
    }
    let headers = auth_headers(&ctx.access_token)?;
    let method_clone = method.clone();
    let builder = ctx.client.request(method, url.as_str()).headers(headers);
    let builder = if let Some(payload) = payload {
        builder.json(&payload)
    } else {
        builder
    };
    debug!(method = %method_clone, url = %url, "http request");
    let start = std::time::Instant::now();
    let response = builder.send().await?;
    debug!(
        method = %method_clone,
        url = %url,
        status = %response.status(),
        elapsed_ms = start.elapsed().as_millis(),
        "http response"
    );
    Ok(response)
}

pub(crate) async fn print_json_response(response: reqwest::Response) -> anyhow::Result<()> {
    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        anyhow::bail!("Request failed: {status} {body}");
    }
    let body: serde_json::Value = response.json().await?;
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}

pub(crate) async fn print_empty_response(
    response: reqwest::Response,
    message: &str,
) -> anyhow::Result<()> {
    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        anyhow::bail!("Request failed: {status} {body}");
    }
    println!("{message}");
    Ok(())
}
