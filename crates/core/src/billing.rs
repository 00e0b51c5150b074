//! Money formatting and per-work rate calculations.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// Suffix appended to formatted amounts.
pub const CURRENCY_SUFFIX: &str = " ₽";

/// Format an amount as roubles: `1 500,00 ₽`.
///
/// Rounds half away from zero to two decimals, groups thousands with a
/// space and uses a comma as the decimal separator.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let digits = int_part.len();
    let mut grouped = String::with_capacity(digits + digits / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    format!("{sign}{grouped},{frac_part}{CURRENCY_SUFFIX}")
}

/// Effective hourly rate of a piece of work. Zero when no time was recorded.
pub fn hourly_rate(work_total: Decimal, completion_time_min: i32) -> Decimal {
    if completion_time_min == 0 {
        return Decimal::ZERO;
    }
    (work_total * Decimal::from(60) / Decimal::from(completion_time_min)).round_dp(2)
}

/// Cost attributed to each wheel. Zero when no wheels were serviced.
pub fn cost_per_wheel(work_total: Decimal, wheel_count: i32) -> Decimal {
    if wheel_count == 0 {
        return Decimal::ZERO;
    }
    (work_total / Decimal::from(wheel_count)).round_dp(2)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PaymentStatus {
    Paid,
    Unpaid,
}

impl PaymentStatus {
    pub fn from_payment_date(payment_date: Option<NaiveDate>) -> Self {
        match payment_date {
            Some(_) => Self::Paid,
            None => Self::Unpaid,
        }
    }
}
