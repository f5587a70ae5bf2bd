use reqwest::Method;
use serde::de::DeserializeOwned;
use shopctl_core::api::catalog::Product;
use shopctl_core::api::orders::Order;
use shopctl_core::api::users::UserRecord;

use crate::modules::system::http::send_request;
use crate::modules::system::CommandContext;

pub(crate) async fn fetch_products(ctx: &CommandContext<'_>) -> anyhow::Result<Vec<Product>> {
    fetch_list(ctx, "products").await
}

pub(crate) async fn fetch_orders(ctx: &CommandContext<'_>) -> anyhow::Result<Vec<Order>> {
    fetch_list(ctx, "orders").await
}

pub(crate) async fn fetch_users(ctx: &CommandContext<'_>) -> anyhow::Result<Vec<UserRecord>> {
    fetch_list(ctx, "users").await
}

async fn fetch_list<T: DeserializeOwned>(
    ctx: &CommandContext<'_>,
    path: &str,
) -> anyhow::Result<Vec<T>> {
    let url = format!("{}/{}", ctx.addr.trim_end_matches('/'), path);
    let response = send_request(ctx, Method::GET, url, None).await?;
    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        anyhow::bail!("Stats fetch failed: {status} {body}");
    }
    Ok(response.json::<Vec<T>>().await?)
}
