//! Read-only dashboard aggregates.

use serde::Serialize;
use sqlx::FromRow;

use crate::models::car::Car;
use crate::models::client::Client;
use crate::models::master::Master;
use crate::models::order::Order;

/// Row counts for every entity table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct EntityCounts {
    pub clients: i64,
    pub cars: i64,
    pub tires: i64,
    pub masters: i64,
    pub services: i64,
    pub orders: i64,
    pub completed_works: i64,
}

/// Order breakdowns. `active_orders` (no completed work yet) and
/// `completed_orders` (at least one) partition all orders.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct OrderStats {
    pub active_orders: i64,
    pub completed_orders: i64,
    pub orders_today: i64,
    pub unpaid_orders: i64,
    pub assigned_orders: i64,
}

/// A client ranked by number of orders across all their cars.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct TopClient {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub client: Client,
    pub order_count: i64,
}

/// A recent order with the records it references.
#[derive(Debug, Clone, Serialize)]
pub struct RecentOrder {
    pub order: Order,
    pub car: Car,
    pub client: Client,
    pub master: Option<Master>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub counts: EntityCounts,
    #[serde(flatten)]
    pub order_stats: OrderStats,
    pub top_clients: Vec<TopClient>,
    pub recent_orders: Vec<RecentOrder>,
}
