//! Completed-work entity model and DTOs.
//!
//! One row bills one service performed on an order by a master.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tireshop_core::billing;
use tireshop_core::types::DbId;
use tireshop_core::validation::money;
use validator::Validate;

use crate::crud::{Entity, PgQueryAs};

/// A row from the `completed_works` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct CompletedWork {
    pub work_id: DbId,
    pub order_number: DbId,
    pub service_code: DbId,
    pub master_id: DbId,
    pub wheel_count: i32,
    pub completion_time_min: i32,
    pub work_total: Decimal,
}

/// DTO for creating or updating a completed work record.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SaveCompletedWork {
    pub order_number: DbId,
    pub service_code: DbId,
    pub master_id: DbId,
    #[validate(range(min = 0, max = 4))]
    pub wheel_count: i32,
    #[validate(range(min = 1, max = 480))]
    pub completion_time_min: i32,
    #[validate(custom(function = "money"))]
    pub work_total: Decimal,
}

impl Entity for CompletedWork {
    type Input = SaveCompletedWork;

    const NAME: &'static str = "CompletedWork";
    const TABLE: &'static str = "completed_works";
    const KEY: &'static str = "work_id";
    const COLUMNS: &'static str = "work_id, order_number, service_code, master_id, \
         wheel_count, completion_time_min, work_total";
    const WRITE_COLUMNS: &'static [&'static str] = &[
        "order_number",
        "service_code",
        "master_id",
        "wheel_count",
        "completion_time_min",
        "work_total",
    ];

    fn id(&self) -> DbId {
        self.work_id
    }

    fn bind_input<'q, O>(
        input: &'q SaveCompletedWork,
        query: PgQueryAs<'q, O>,
    ) -> PgQueryAs<'q, O> {
        query
            .bind(input.order_number)
            .bind(input.service_code)
            .bind(input.master_id)
            .bind(input.wheel_count)
            .bind(input.completion_time_min)
            .bind(input.work_total)
    }
}

#[derive(Debug, Serialize)]
pub struct CompletedWorkView {
    #[serde(flatten)]
    pub work: CompletedWork,
    pub hourly_rate: Decimal,
    pub cost_per_wheel: Decimal,
}

impl CompletedWork {
    pub fn into_view(self) -> CompletedWorkView {
        CompletedWorkView {
            hourly_rate: billing::hourly_rate(self.work_total, self.completion_time_min),
            cost_per_wheel: billing::cost_per_wheel(self.work_total, self.wheel_count),
            work: self,
        }
    }
}
