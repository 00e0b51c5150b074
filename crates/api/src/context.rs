//! Per-request context.
//!
//! Derived values that depend on "now" (car age, orders placed today) read
//! the clock once per request through [`RequestContext`] instead of calling
//! it ad hoc, so a single response is internally consistent.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use chrono::{Datelike, Local, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestContext {
    /// The shop's local calendar date when the request arrived.
    pub today: NaiveDate,
}

impl RequestContext {
    pub fn now() -> Self {
        Self {
            today: Local::now().date_naive(),
        }
    }

    pub fn current_year(&self) -> i32 {
        self.today.year()
    }
}

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(_parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::now())
    }
}
