//! Tire entity model, DTOs and derived view.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tireshop_core::tire::{PressureRecommendation, TireCondition};
use tireshop_core::types::DbId;
use tireshop_core::validation::TIRE_SIZE_RE;
use validator::Validate;

use crate::crud::{Entity, PgQueryAs};

/// A row from the `tires` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Tire {
    pub tire_id: DbId,
    pub car_id: DbId,
    pub tire_type: String,
    pub seasonality: String,
    pub manufacturer: String,
    pub tire_model: String,
    pub size: String,
    pub load_index: i32,
    /// Tread wear, 0-100.
    pub wear_percentage: i32,
    /// Inflation pressure in bar.
    pub pressure: f64,
}

/// DTO for creating or updating a tire.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SaveTire {
    pub car_id: DbId,
    #[validate(length(min = 1, max = 50))]
    pub tire_type: String,
    #[validate(length(min = 1, max = 20))]
    pub seasonality: String,
    #[validate(length(min = 1, max = 50))]
    pub manufacturer: String,
    #[validate(length(min = 1, max = 50))]
    pub tire_model: String,
    #[validate(regex(path = *TIRE_SIZE_RE, message = "size must look like 205/55 R16"))]
    pub size: String,
    #[validate(range(min = 0, max = 279))]
    pub load_index: i32,
    #[validate(range(min = 0, max = 100))]
    pub wear_percentage: i32,
    #[validate(range(min = 0.0, max = 10.0))]
    pub pressure: f64,
}

impl Entity for Tire {
    type Input = SaveTire;

    const NAME: &'static str = "Tire";
    const TABLE: &'static str = "tires";
    const KEY: &'static str = "tire_id";
    const COLUMNS: &'static str = "tire_id, car_id, tire_type, seasonality, manufacturer, \
         tire_model, size, load_index, wear_percentage, pressure";
    const WRITE_COLUMNS: &'static [&'static str] = &[
        "car_id",
        "tire_type",
        "seasonality",
        "manufacturer",
        "tire_model",
        "size",
        "load_index",
        "wear_percentage",
        "pressure",
    ];

    fn id(&self) -> DbId {
        self.tire_id
    }

    fn bind_input<'q, O>(input: &'q SaveTire, query: PgQueryAs<'q, O>) -> PgQueryAs<'q, O> {
        query
            .bind(input.car_id)
            .bind(&input.tire_type)
            .bind(&input.seasonality)
            .bind(&input.manufacturer)
            .bind(&input.tire_model)
            .bind(&input.size)
            .bind(input.load_index)
            .bind(input.wear_percentage)
            .bind(input.pressure)
    }
}

#[derive(Debug, Serialize)]
pub struct TireView {
    #[serde(flatten)]
    pub tire: Tire,
    pub condition: TireCondition,
    pub pressure_recommendation: PressureRecommendation,
}

impl Tire {
    pub fn into_view(self) -> TireView {
        TireView {
            condition: TireCondition::from_wear(self.wear_percentage),
            pressure_recommendation: PressureRecommendation::from_pressure(self.pressure),
            tire: self,
        }
    }
}
