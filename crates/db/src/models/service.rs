//! Service price-list entity model and DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tireshop_core::types::DbId;
use tireshop_core::validation::money;
use validator::Validate;

use crate::crud::{Entity, PgQueryAs};

/// A row from the `services` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Service {
    pub service_code: DbId,
    pub service_name: String,
    pub service_cost: Decimal,
}

/// DTO for creating or updating a service.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SaveService {
    #[validate(length(min = 1, max = 100))]
    pub service_name: String,
    #[validate(custom(function = "money"))]
    pub service_cost: Decimal,
}

impl Entity for Service {
    type Input = SaveService;

    const NAME: &'static str = "Service";
    const TABLE: &'static str = "services";
    const KEY: &'static str = "service_code";
    const COLUMNS: &'static str = "service_code, service_name, service_cost";
    const WRITE_COLUMNS: &'static [&'static str] = &["service_name", "service_cost"];

    fn id(&self) -> DbId {
        self.service_code
    }

    fn bind_input<'q, O>(input: &'q SaveService, query: PgQueryAs<'q, O>) -> PgQueryAs<'q, O> {
        query.bind(&input.service_name).bind(input.service_cost)
    }
}
