use serde::Serialize;

/// Aggregates computed client-side from the three list endpoints.
#[derive(Debug, Serialize)]
pub(crate) struct StatsOverview {
    pub total_products: usize,
    pub total_orders: usize,
    pub total_users: usize,
    pub total_revenue: f64,
}
