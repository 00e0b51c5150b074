//! Car entity model, DTOs and derived view.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tireshop_core::types::DbId;
use tireshop_core::uploads;
use tireshop_core::validation::{LICENSE_PLATE_RE, VIN_RE};
use tireshop_core::vehicle;
use validator::Validate;

use crate::crud::{Entity, PgQueryAs};

/// A row from the `cars` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Car {
    pub car_id: DbId,
    pub client_id: DbId,
    pub brand: String,
    pub model: String,
    pub manufacture_year: i32,
    pub license_plate: String,
    pub vin: String,
    /// Path relative to the storage root, set by the photo upload endpoint.
    pub photo_path: Option<String>,
}

/// DTO for creating or updating a car.
///
/// The photo is managed separately, so saving a car never touches `photo_path`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SaveCar {
    pub client_id: DbId,
    #[validate(length(min = 1, max = 50))]
    pub brand: String,
    #[validate(length(min = 1, max = 50))]
    pub model: String,
    #[validate(range(min = 1900, max = 2100))]
    pub manufacture_year: i32,
    #[validate(regex(path = *LICENSE_PLATE_RE, message = "licence plate must look like A123BC77"))]
    pub license_plate: String,
    #[validate(
        length(equal = 17, message = "VIN must be exactly 17 characters"),
        regex(path = *VIN_RE, message = "VIN may only contain A-Z and 0-9, excluding I, O and Q")
    )]
    pub vin: String,
}

impl Entity for Car {
    type Input = SaveCar;

    const NAME: &'static str = "Car";
    const TABLE: &'static str = "cars";
    const KEY: &'static str = "car_id";
    const COLUMNS: &'static str =
        "car_id, client_id, brand, model, manufacture_year, license_plate, vin, photo_path";
    const WRITE_COLUMNS: &'static [&'static str] = &[
        "client_id",
        "brand",
        "model",
        "manufacture_year",
        "license_plate",
        "vin",
    ];

    fn id(&self) -> DbId {
        self.car_id
    }

    fn bind_input<'q, O>(input: &'q SaveCar, query: PgQueryAs<'q, O>) -> PgQueryAs<'q, O> {
        query
            .bind(input.client_id)
            .bind(&input.brand)
            .bind(&input.model)
            .bind(input.manufacture_year)
            .bind(&input.license_plate)
            .bind(&input.vin)
    }
}

/// A car with its derived display values.
#[derive(Debug, Serialize)]
pub struct CarView {
    #[serde(flatten)]
    pub car: Car,
    pub age: i32,
    pub is_new: bool,
    pub photo_url: Option<String>,
}

impl Car {
    pub fn into_view(self, current_year: i32) -> CarView {
        let age = vehicle::age(self.manufacture_year, current_year);
        let photo_url = self.photo_path.as_deref().map(uploads::public_url);
        CarView {
            car: self,
            age,
            is_new: vehicle::is_new(age),
            photo_url,
        }
    }
}
