use reqwest::Method;
use shopctl_core::api::catalog::ProductPayload;

use crate::modules::system::http::send_request;
use crate::modules::system::CommandContext;

pub(crate) async fn list_products(ctx: &CommandContext<'_>) -> anyhow::Result<reqwest::Response> {
    let url = format!("{}/products", ctx.addr.trim_end_matches('/'));
    send_request(ctx, Method::GET, url, None).await
}

pub(crate) async fn create_product(
    ctx: &CommandContext<'_>,
    payload: ProductPayload,
) -> anyhow::Result<reqwest::Response> {
    let url = format!("{}/products", ctx.addr.trim_end_matches('/'));
    send_request(
        ctx,
        Method::POST,
        url,
        Some(serde_json::to_value(&payload)?),
    )
    .await
}

pub(crate) async fn update_product(
    ctx: &CommandContext<'_>,
    id: &str,
    payload: ProductPayload,
) -> anyhow::Result<reqwest::Response> {
    let url = format!("{}/products/{}", ctx.addr.trim_end_matches('/'), id);
    send_request(ctx, Method::PUT, url, Some(serde_json::to_value(&payload)?)).await
}

pub(crate) async fn delete_product(
    ctx: &CommandContext<'_>,
    id: &str,
) -> anyhow::Result<reqwest::Response> {
    let url = format!("{}/products/{}", ctx.addr.trim_end_matches('/'), id);
    send_request(ctx, Method::DELETE, url, None).await
}
