//! Master (staff member) entity model and DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tireshop_core::billing::format_currency;
use tireshop_core::types::DbId;
use tireshop_core::validation::money;
use validator::Validate;

use crate::crud::{Entity, PgQueryAs};

/// A row from the `masters` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Master {
    pub master_id: DbId,
    pub full_name: String,
    pub position: String,
    /// Qualification rank, 1-6.
    pub rank: i32,
    pub hourly_rate: Decimal,
}

/// DTO for creating or updating a master.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SaveMaster {
    #[validate(length(min = 1, max = 100))]
    pub full_name: String,
    #[validate(length(min = 1, max = 50))]
    pub position: String,
    #[validate(range(min = 1, max = 6))]
    pub rank: i32,
    #[validate(custom(function = "money"))]
    pub hourly_rate: Decimal,
}

impl Entity for Master {
    type Input = SaveMaster;

    const NAME: &'static str = "Master";
    const TABLE: &'static str = "masters";
    const KEY: &'static str = "master_id";
    const COLUMNS: &'static str = "master_id, full_name, position, rank, hourly_rate";
    const WRITE_COLUMNS: &'static [&'static str] = &["full_name", "position", "rank", "hourly_rate"];
    // Masters appear in select lists, which are alphabetical.
    const ORDER_BY: &'static str = "full_name, master_id";

    fn id(&self) -> DbId {
        self.master_id
    }

    fn bind_input<'q, O>(input: &'q SaveMaster, query: PgQueryAs<'q, O>) -> PgQueryAs<'q, O> {
        query
            .bind(&input.full_name)
            .bind(&input.position)
            .bind(input.rank)
            .bind(input.hourly_rate)
    }
}

#[derive(Debug, Serialize)]
pub struct MasterView {
    #[serde(flatten)]
    pub master: Master,
    pub hourly_rate_display: String,
}

impl Master {
    pub fn into_view(self) -> MasterView {
        MasterView {
            hourly_rate_display: format_currency(self.hourly_rate),
            master: self,
        }
    }
}
