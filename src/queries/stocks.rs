//! Stock snapshot queries against the `stocks` endpoint.
//!
//! This is the endpoint with the date-filter quirk: date-range filters may be
//! rejected with a 400 naming the parameter, in which case the transport
//! retries once without them (see
//! [`Endpoint::rejects_date_filters`](crate::Endpoint::rejects_date_filters)).

use crate::config::Endpoint;
use crate::filters::Filters;
use crate::models::Stock;
use crate::transport::{FetchOutcome, Transport};

/// Query interface for inventory snapshots.
pub struct StockQuery<'a> {
    transport: &'a Transport,
}

impl<'a> StockQuery<'a> {
    /// Create a new `StockQuery` bound to the given transport.
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// List stock snapshots with an arbitrary filter mapping.
    pub fn list(&self, filters: &Filters) -> FetchOutcome<Stock> {
        self.transport.fetch(Endpoint::Stocks, filters)
    }

    /// Current snapshot with no filters, first page at the default size.
    pub fn current(&self) -> FetchOutcome<Stock> {
        self.list(&Filters::new())
    }
}
