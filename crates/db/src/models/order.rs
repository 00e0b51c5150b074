//! Order entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tireshop_core::billing::PaymentStatus;
use tireshop_core::types::DbId;
use validator::Validate;

use crate::crud::{Entity, PgQueryAs};

/// A row from the `orders` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Order {
    pub order_number: DbId,
    pub order_date: NaiveDate,
    pub car_id: DbId,
    /// Cleared when the assigned master is deleted.
    pub master_id: Option<DbId>,
    pub payment_date: Option<NaiveDate>,
}

/// DTO for creating or updating an order.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SaveOrder {
    pub order_date: NaiveDate,
    pub car_id: DbId,
    pub master_id: Option<DbId>,
    pub payment_date: Option<NaiveDate>,
}

impl Entity for Order {
    type Input = SaveOrder;

    const NAME: &'static str = "Order";
    const TABLE: &'static str = "orders";
    const KEY: &'static str = "order_number";
    const COLUMNS: &'static str = "order_number, order_date, car_id, master_id, payment_date";
    const WRITE_COLUMNS: &'static [&'static str] =
        &["order_date", "car_id", "master_id", "payment_date"];
    const ORDER_BY: &'static str = "order_date DESC, order_number DESC";

    fn id(&self) -> DbId {
        self.order_number
    }

    fn bind_input<'q, O>(input: &'q SaveOrder, query: PgQueryAs<'q, O>) -> PgQueryAs<'q, O> {
        query
            .bind(input.order_date)
            .bind(input.car_id)
            .bind(input.master_id)
            .bind(input.payment_date)
    }
}

#[derive(Debug, Serialize)]
pub struct OrderView {
    #[serde(flatten)]
    pub order: Order,
    pub payment_status: PaymentStatus,
}

impl Order {
    pub fn into_view(self) -> OrderView {
        OrderView {
            payment_status: PaymentStatus::from_payment_date(self.payment_date),
            order: self,
        }
    }
}
