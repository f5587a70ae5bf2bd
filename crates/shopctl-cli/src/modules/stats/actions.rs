use super::http::{fetch_orders, fetch_products, fetch_users};
use super::types::StatsOverview;
use crate::modules::system::CommandContext;

pub(crate) async fn handle_stats(ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    let (products, orders, users) = tokio::join!(
        fetch_products(ctx),
        fetch_orders(ctx),
        fetch_users(ctx),
    );
    let products = products?;
    let orders = orders?;
    let users = users?;

    let overview = StatsOverview {
        total_products: products.len(),
        total_orders: orders.len(),
        total_users: users.len(),
        total_revenue: orders.iter().map(|order| order.total_amount).sum(),
    };
    println!("{}", serde_json::to_string_pretty(&overview)?);
    Ok(())
}
