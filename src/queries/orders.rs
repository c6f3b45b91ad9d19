//! Order queries against the `orders` endpoint.

use chrono::NaiveDate;

use crate::config::Endpoint;
use crate::filters::Filters;
use crate::models::Order;
use crate::transport::{FetchOutcome, Transport};

/// Query interface for customer orders.
pub struct OrderQuery<'a> {
    transport: &'a Transport,
}

impl<'a> OrderQuery<'a> {
    /// Create a new `OrderQuery` bound to the given transport.
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// List orders with an arbitrary filter mapping.
    pub fn list(&self, filters: &Filters) -> FetchOutcome<Order> {
        self.transport.fetch(Endpoint::Orders, filters)
    }

    /// List orders within an inclusive calendar date range.
    pub fn list_between(&self, date_from: NaiveDate, date_to: NaiveDate) -> FetchOutcome<Order> {
        self.list(&Filters::new().date_from(date_from).date_to(date_to))
    }
}
