//! Field validation rules shared by the input DTOs.
//!
//! The DTOs themselves live in `tireshop-db` and derive `validator::Validate`;
//! the patterns and custom checks they reference are defined here so the
//! rules can be unit tested without a database.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use validator::{ValidationError, ValidationErrors};

/// Phone number: optional leading `+`, then digits, spaces, dashes and parentheses.
pub static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9][0-9 ()\-]{5,19}$").expect("valid phone regex"));

/// Regional licence plate, e.g. `А123ВС77` or `A123BC777`. Only letters that
/// exist in both Cyrillic and Latin alphabets are issued, so both spellings
/// are accepted.
pub static LICENSE_PLATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[АВЕКМНОРСТУХABEKMHOPCTYX][0-9]{3}[АВЕКМНОРСТУХABEKMHOPCTYX]{2}[0-9]{2,3}$")
        .expect("valid licence plate regex")
});

/// Vehicle identification number: 17 characters, `I`, `O` and `Q` excluded.
pub static VIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-HJ-NPR-Z0-9]{17}$").expect("valid VIN regex"));

/// Tire size designation, e.g. `205/55 R16`.
pub static TIRE_SIZE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3}/[0-9]{2} ?R[0-9]{2}$").expect("valid tire size regex"));

/// Money columns are `NUMERIC(10, 2)`.
pub const MONEY_SCALE: u32 = 2;

/// Smallest amount that no longer fits a money column.
pub const MONEY_LIMIT: Decimal = Decimal::from_parts(100_000_000, 0, 0, false, 0);

fn money_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

/// A money amount storable without rounding: not negative, at most two
/// decimals and below [`MONEY_LIMIT`]. Trailing zeros do not count as decimals.
pub fn money(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(money_error("non_negative", "must not be negative"));
    }
    if value.normalize().scale() > MONEY_SCALE {
        return Err(money_error("scale", "must have at most 2 decimal places"));
    }
    if *value >= MONEY_LIMIT {
        return Err(money_error("too_large", "must be less than 100 000 000"));
    }
    Ok(())
}

/// Error attached to a foreign-key field whose target row does not exist.
pub fn missing_reference(entity: &str) -> ValidationError {
    let mut err = ValidationError::new("not_found");
    err.message = Some(Cow::Owned(format!("{entity} does not exist")));
    err
}

/// Flatten validation errors into `field -> [message]`, falling back to the
/// error code when a rule carries no message.
pub fn field_messages(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => e.code.to_string(),
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}
