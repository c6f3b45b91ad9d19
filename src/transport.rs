//! HTTP transport for the seller statistics API.
//!
//! Builds request URLs (access key, rendered filters, pagination defaults),
//! issues blocking GETs, and resolves every outcome — transport failure,
//! non-success status, unreadable body — into a [`FetchOutcome`] instead of
//! propagating. Carries the one compensating retry this API needs: the stocks
//! endpoint rejecting date-range filters it elsewhere ignores.

use std::cell::{Cell, RefCell};
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::{self, Endpoint};
use crate::envelope::Envelope;
use crate::error::{Result, SellerStatsError};
use crate::filters::Filters;

// ---------------------------------------------------------------------------
// FetchOutcome
// ---------------------------------------------------------------------------

/// Per-call result of a fetch.
///
/// A fetch never fails past its own boundary: the records are empty and
/// [`error()`](FetchOutcome::error) is set when anything went wrong. Each call
/// gets its own outcome, so overlapping fetches cannot clobber each other's
/// error state.
#[derive(Debug)]
pub struct FetchOutcome<T> {
    records: Vec<T>,
    error: Option<String>,
    retried: bool,
}

impl<T> FetchOutcome<T> {
    fn succeeded(records: Vec<T>, retried: bool) -> Self {
        Self {
            records,
            error: None,
            retried,
        }
    }

    fn failed(message: String, retried: bool) -> Self {
        Self {
            records: Vec::new(),
            error: Some(message),
            retried,
        }
    }

    /// The fetched records, in the order the server returned them.
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// Consume the outcome, keeping only the records.
    pub fn into_records(self) -> Vec<T> {
        self.records
    }

    /// Terminal failure message, if the call failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// True when the call completed without a terminal failure.
    ///
    /// An empty record list can still be `is_ok()`: an unrecognized envelope
    /// degrades to success-shaped empty data.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// True when the date-filter retry path was taken, whatever its result.
    pub fn retried(&self) -> bool {
        self.retried
    }
}

// ---------------------------------------------------------------------------
// Transport
// ---------------------------------------------------------------------------

/// Owns the HTTP client and the caller-visible in-flight/last-error state.
///
/// The client is built lazily on first use. Interior mutability keeps the
/// fetch API `&self`; the type is single-threaded by construction, the async
/// wrapper serializes access behind a `Mutex`.
#[derive(Debug)]
pub struct Transport {
    base_url: String,
    api_key: String,
    timeout: Duration,
    client: RefCell<Option<Client>>,
    in_flight: Cell<bool>,
    last_error: RefCell<Option<String>>,
}

impl Transport {
    /// Create a transport for the given API base URL and access key.
    ///
    /// The base URL must parse as an absolute URL; a trailing slash is
    /// tolerated. The key is appended to every request as `key=...`.
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|e| {
            SellerStatsError::InvalidArgument(format!("invalid base URL {base_url:?}: {e}"))
        })?;
        if api_key.is_empty() {
            return Err(SellerStatsError::InvalidArgument(
                "API key must not be empty".into(),
            ));
        }
        Ok(Self {
            base_url,
            api_key: api_key.to_string(),
            timeout,
            client: RefCell::new(None),
            in_flight: Cell::new(false),
            last_error: RefCell::new(None),
        })
    }

    /// The configured base URL, without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// True exactly while a fetch (including its retry) is outstanding.
    pub fn in_flight(&self) -> bool {
        self.in_flight.get()
    }

    /// Terminal failure message of the most recent fetch, if it failed.
    ///
    /// Cleared at the start of every fetch.
    pub fn last_error(&self) -> Option<String> {
        self.last_error.borrow().clone()
    }

    /// Lazy HTTP client, created on first use.
    fn client(&self) -> Client {
        let mut slot = self.client.borrow_mut();
        if slot.is_none() {
            *slot = Some(
                Client::builder()
                    .timeout(self.timeout)
                    .build()
                    .expect("failed to build HTTP client"),
            );
        }
        slot.as_ref().unwrap().clone()
    }

    /// Fetch records from an endpoint, applying the filter mapping.
    ///
    /// Never panics or returns an error: every failure resolves to an
    /// outcome with empty records and a message. The in-flight flag is set
    /// for the duration of the call and reset on every exit path, and the
    /// outcome's error (if any) is mirrored into [`last_error`](Self::last_error).
    pub fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        filters: &Filters,
    ) -> FetchOutcome<T> {
        self.in_flight.set(true);
        *self.last_error.borrow_mut() = None;

        let outcome = self.dispatch(endpoint, filters);

        if let Some(message) = outcome.error() {
            log::warn!("{} fetch failed: {}", endpoint, message);
            *self.last_error.borrow_mut() = Some(message.to_string());
        }
        self.in_flight.set(false);
        outcome
    }

    fn dispatch<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        filters: &Filters,
    ) -> FetchOutcome<T> {
        let url = match self.build_url(endpoint, filters) {
            Ok(url) => url,
            Err(e) => return FetchOutcome::failed(e.to_string(), false),
        };

        match self.request(url) {
            Ok(body) => decode_outcome(body, false),
            Err(SellerStatsError::Status { status, body })
                if endpoint.rejects_date_filters()
                    && status == StatusCode::BAD_REQUEST
                    && mentions_date_range(&body) =>
            {
                log::warn!(
                    "{} rejected date filters ({}); retrying without dateFrom/dateTo",
                    endpoint,
                    body.trim()
                );
                self.retry_without_dates(endpoint, filters)
            }
            Err(e) => FetchOutcome::failed(e.to_string(), false),
        }
    }

    /// One-shot compensating retry with the date range stripped.
    ///
    /// Its own failure is terminal: no second retry, the message notes the
    /// retry was attempted.
    fn retry_without_dates<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        filters: &Filters,
    ) -> FetchOutcome<T> {
        let stripped = filters.without_date_range();
        let url = match self.build_url(endpoint, &stripped) {
            Ok(url) => url,
            Err(e) => return FetchOutcome::failed(retry_message(&e), true),
        };
        match self.request(url) {
            Ok(body) => decode_outcome(body, true),
            Err(e) => FetchOutcome::failed(retry_message(&e), true),
        }
    }

    fn build_url(&self, endpoint: Endpoint, filters: &Filters) -> Result<Url> {
        let raw = format!("{}/{}", self.base_url, endpoint.path());
        let mut url = Url::parse(&raw).map_err(|e| {
            SellerStatsError::InvalidArgument(format!("invalid request URL {raw:?}: {e}"))
        })?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair(config::KEY_PARAM, &self.api_key);
            for (key, value) in filters.render() {
                pairs.append_pair(&key, &value);
            }
            if !filters.has("page") {
                pairs.append_pair("page", &config::DEFAULT_PAGE.to_string());
            }
            if !filters.has("limit") {
                pairs.append_pair("limit", &config::DEFAULT_LIMIT.to_string());
            }
        }
        Ok(url)
    }

    fn request(&self, url: Url) -> Result<Value> {
        log::debug!("GET {}", url);
        let resp = self.client().get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(SellerStatsError::Status { status, body });
        }
        Ok(resp.json()?)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Does an error body textually reference the date-range parameters?
///
/// Substring match against the phrasing the stocks endpoint has been observed
/// to use. Fragile by nature; kept narrow on purpose.
fn mentions_date_range(body: &str) -> bool {
    body.contains("date from") || body.contains("date to")
}

fn retry_message(cause: &SellerStatsError) -> String {
    format!("retry without date filters failed: {cause}")
}

fn decode_outcome<T: DeserializeOwned>(body: Value, retried: bool) -> FetchOutcome<T> {
    let records = Envelope::decode(body).into_records();
    match serde_json::from_value::<Vec<T>>(Value::Array(records)) {
        Ok(records) => FetchOutcome::succeeded(records, retried),
        Err(e) => FetchOutcome::failed(format!("failed to decode records: {e}"), retried),
    }
}
