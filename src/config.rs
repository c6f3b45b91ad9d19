//! Endpoint catalog and request defaults for the seller statistics API.

use std::fmt;

/// Query parameter carrying the static access key on every request.
pub const KEY_PARAM: &str = "key";

/// Page number appended when the caller supplies no `page` filter.
pub const DEFAULT_PAGE: u32 = 1;

/// Page size appended when the caller supplies no `limit` filter.
pub const DEFAULT_LIMIT: u32 = 10;

/// The four list resources exposed by the API.
///
/// Each maps to one URL path segment and one record shape in
/// [`models`](crate::models).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Incomes,
    Orders,
    Sales,
    Stocks,
}

impl Endpoint {
    /// URL path segment for this resource, appended to the base URL.
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Incomes => "incomes",
            Endpoint::Orders => "orders",
            Endpoint::Sales => "sales",
            Endpoint::Stocks => "stocks",
        }
    }

    /// All endpoints, in catalog order.
    pub fn all() -> [Endpoint; 4] {
        [
            Endpoint::Incomes,
            Endpoint::Orders,
            Endpoint::Sales,
            Endpoint::Stocks,
        ]
    }

    /// Known workaround: the stocks endpoint has rejected `dateFrom`/`dateTo`
    /// with a 400 whose body names the offending parameter, while ignoring
    /// those filters when it does accept them. Requests to an endpoint with
    /// this flag are re-issued once without date-range filters on that exact
    /// rejection. Do not set this for other endpoints without confirming the
    /// behavior against the real API.
    pub fn rejects_date_filters(self) -> bool {
        matches!(self, Endpoint::Stocks)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
