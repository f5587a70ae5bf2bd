use reqwest::Method;

use crate::modules::system::http::send_request;
use crate::modules::system::CommandContext;

pub(crate) async fn list_orders(ctx: &CommandContext<'_>) -> anyhow::Result<reqwest::Response> {
    let url = format!("{}/orders", ctx.addr.trim_end_matches('/'));
    send_request(ctx, Method::GET, url, None).await
}
