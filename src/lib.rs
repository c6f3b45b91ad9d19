//! Seller statistics SDK for Rust.
//!
//! Provides a high-level client for a seller analytics HTTP API exposing four
//! list resources: incomes, orders, sales and stock snapshots. The client
//! builds parameterized requests (static access key, caller filters,
//! pagination defaults), tolerates the several JSON envelope shapes the API
//! has been observed to return, and applies a one-shot compensating retry for
//! the stocks endpoint's rejection of date-range filters.
//!
//! # Quick start
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use sellerstats_sdk::SellerStatsSdk;
//!
//! let sdk = SellerStatsSdk::builder()
//!     .base_url("http://analytics.example.com/api")
//!     .api_key("my-access-key")
//!     .build()
//!     .unwrap();
//!
//! let from = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
//! let to = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
//!
//! let orders = sdk.orders().list_between(from, to);
//! for order in orders.records() {
//!     println!("{} {}", order.date, order.total_price);
//! }
//! ```
//!
//! Every call returns a [`FetchOutcome`]: records (possibly empty) plus an
//! optional terminal error message. Nothing panics or propagates past the
//! fetch boundary.

#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod filters;
pub mod models;
pub mod queries;
pub mod transport;

#[cfg(feature = "async")]
pub use async_client::AsyncSellerStatsSdk;
pub use config::Endpoint;
pub use envelope::Envelope;
pub use error::{Result, SellerStatsError};
pub use filters::{FilterValue, Filters};
pub use transport::{FetchOutcome, Transport};

use std::fmt;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;

// ---------------------------------------------------------------------------
// SellerStatsSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`SellerStatsSdk`] instance.
///
/// Use [`SellerStatsSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](SellerStatsSdkBuilder::build).
pub struct SellerStatsSdkBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    timeout: Duration,
}

impl Default for SellerStatsSdkBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            timeout: Duration::from_secs(30),
        }
    }
}

impl SellerStatsSdkBuilder {
    /// Set the API base URL (required), e.g. `http://host:6969/api`.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the static access key (required), appended to every request as
    /// the `key` query parameter.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the HTTP request timeout. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the SDK, validating the base URL and access key.
    pub fn build(self) -> Result<SellerStatsSdk> {
        let base_url = self.base_url.ok_or_else(|| {
            SellerStatsError::InvalidArgument("base_url is required".into())
        })?;
        let api_key = self.api_key.ok_or_else(|| {
            SellerStatsError::InvalidArgument("api_key is required".into())
        })?;
        let transport = Transport::new(&base_url, &api_key, self.timeout)?;
        Ok(SellerStatsSdk { transport })
    }
}

// ---------------------------------------------------------------------------
// SellerStatsSdk
// ---------------------------------------------------------------------------

/// The main entry point for the seller statistics SDK.
///
/// Wraps a [`Transport`] (which owns the HTTP client and the in-flight /
/// last-error state) and exposes per-endpoint query interfaces as lightweight
/// borrowing wrappers.
///
/// Created via [`SellerStatsSdk::builder()`].
#[derive(Debug)]
pub struct SellerStatsSdk {
    transport: Transport,
}

impl SellerStatsSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> SellerStatsSdkBuilder {
        SellerStatsSdkBuilder::default()
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the income (supply shipment) query interface.
    pub fn incomes(&self) -> queries::incomes::IncomeQuery<'_> {
        queries::incomes::IncomeQuery::new(&self.transport)
    }

    /// Access the order query interface.
    pub fn orders(&self) -> queries::orders::OrderQuery<'_> {
        queries::orders::OrderQuery::new(&self.transport)
    }

    /// Access the sale query interface.
    pub fn sales(&self) -> queries::sales::SaleQuery<'_> {
        queries::sales::SaleQuery::new(&self.transport)
    }

    /// Access the stock snapshot query interface.
    pub fn stocks(&self) -> queries::stocks::StockQuery<'_> {
        queries::stocks::StockQuery::new(&self.transport)
    }

    // -- Escape hatches and state ------------------------------------------

    /// Fetch an endpoint into any deserializable record type.
    ///
    /// Escape hatch for callers with their own record structs; the typed
    /// query interfaces above are thin wrappers over this.
    pub fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        filters: &Filters,
    ) -> FetchOutcome<T> {
        self.transport.fetch(endpoint, filters)
    }

    /// Fetch an endpoint as raw `serde_json::Value` records.
    pub fn fetch_values(&self, endpoint: Endpoint, filters: &Filters) -> FetchOutcome<Value> {
        self.transport.fetch(endpoint, filters)
    }

    /// True exactly while a fetch (including its retry) is outstanding.
    pub fn in_flight(&self) -> bool {
        self.transport.in_flight()
    }

    /// Terminal failure message of the most recent fetch, if it failed.
    ///
    /// Per-call callers should prefer [`FetchOutcome::error`]; this mirror
    /// exists for view code that polls client state between calls.
    pub fn last_error(&self) -> Option<String> {
        self.transport.last_error()
    }

    /// Return a reference to the underlying [`Transport`] for advanced usage.
    pub fn transport(&self) -> &Transport {
        &self.transport
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for SellerStatsSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SellerStatsSdk(base_url={}, in_flight={})",
            self.transport.base_url(),
            self.transport.in_flight()
        )
    }
}
