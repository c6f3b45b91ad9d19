//! Income queries against the `incomes` endpoint.

use chrono::NaiveDate;

use crate::config::Endpoint;
use crate::filters::Filters;
use crate::models::Income;
use crate::transport::{FetchOutcome, Transport};

/// Query interface for supply shipments.
pub struct IncomeQuery<'a> {
    transport: &'a Transport,
}

impl<'a> IncomeQuery<'a> {
    /// Create a new `IncomeQuery` bound to the given transport.
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// List incomes with an arbitrary filter mapping.
    pub fn list(&self, filters: &Filters) -> FetchOutcome<Income> {
        self.transport.fetch(Endpoint::Incomes, filters)
    }

    /// List incomes within an inclusive calendar date range.
    pub fn list_between(&self, date_from: NaiveDate, date_to: NaiveDate) -> FetchOutcome<Income> {
        self.list(&Filters::new().date_from(date_from).date_to(date_to))
    }
}
