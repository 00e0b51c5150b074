//! Client entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tireshop_core::types::DbId;
use tireshop_core::validation::PHONE_RE;
use validator::Validate;

use crate::crud::{Entity, PgQueryAs};

/// A row from the `clients` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Client {
    pub client_id: DbId,
    pub full_name: String,
    pub phone: String,
}

/// DTO for creating or updating a client.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SaveClient {
    #[validate(length(min = 1, max = 100))]
    pub full_name: String,
    #[validate(regex(path = *PHONE_RE, message = "invalid phone number"))]
    pub phone: String,
}

impl Entity for Client {
    type Input = SaveClient;

    const NAME: &'static str = "Client";
    const TABLE: &'static str = "clients";
    const KEY: &'static str = "client_id";
    const COLUMNS: &'static str = "client_id, full_name, phone";
    const WRITE_COLUMNS: &'static [&'static str] = &["full_name", "phone"];

    fn id(&self) -> DbId {
        self.client_id
    }

    fn bind_input<'q, O>(input: &'q SaveClient, query: PgQueryAs<'q, O>) -> PgQueryAs<'q, O> {
        query.bind(&input.full_name).bind(&input.phone)
    }
}
