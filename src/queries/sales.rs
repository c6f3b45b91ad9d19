//! Sale queries against the `sales` endpoint.

use chrono::NaiveDate;

use crate::config::Endpoint;
use crate::filters::Filters;
use crate::models::Sale;
use crate::transport::{FetchOutcome, Transport};

/// Query interface for completed sales.
pub struct SaleQuery<'a> {
    transport: &'a Transport,
}

impl<'a> SaleQuery<'a> {
    /// Create a new `SaleQuery` bound to the given transport.
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// List sales with an arbitrary filter mapping.
    pub fn list(&self, filters: &Filters) -> FetchOutcome<Sale> {
        self.transport.fetch(Endpoint::Sales, filters)
    }

    /// List sales within an inclusive calendar date range.
    pub fn list_between(&self, date_from: NaiveDate, date_to: NaiveDate) -> FetchOutcome<Sale> {
        self.list(&Filters::new().date_from(date_from).date_to(date_to))
    }
}
