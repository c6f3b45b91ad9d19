//! Async wrapper around [`SellerStatsSdk`] for use in async runtimes.
//!
//! Runs all SDK operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free while
//! the blocking HTTP client waits on the network. The `Mutex` serializes
//! calls, so concurrent async callers cannot interleave on the shared
//! in-flight/last-error state.
//!
//! # Example
//!
//! ```no_run
//! # use sellerstats_sdk::AsyncSellerStatsSdk;
//! # async fn example() -> sellerstats_sdk::Result<()> {
//! let sdk = AsyncSellerStatsSdk::builder()
//!     .base_url("http://analytics.example.com/api")
//!     .api_key("my-access-key")
//!     .build()
//!     .await?;
//!
//! // Run any sync SDK method via closure
//! let stocks = sdk.run(|s| Ok(s.stocks().current())).await?;
//! println!("{} records", stocks.records().len());
//! # Ok(())
//! # }
//! ```

use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::Value;

use crate::error::{Result, SellerStatsError};
use crate::{Endpoint, FetchOutcome, Filters, SellerStatsSdk};

// ---------------------------------------------------------------------------
// AsyncSellerStatsSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncSellerStatsSdk`].
#[derive(Default)]
pub struct AsyncSellerStatsSdkBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    timeout: Option<Duration>,
}

impl AsyncSellerStatsSdkBuilder {
    /// Set the API base URL (required).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the static access key (required).
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the HTTP request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the async SDK.
    ///
    /// Construction runs on the blocking thread pool so it won't block the
    /// async event loop.
    pub async fn build(self) -> Result<AsyncSellerStatsSdk> {
        tokio::task::spawn_blocking(move || {
            let mut builder = SellerStatsSdk::builder();
            if let Some(base_url) = self.base_url {
                builder = builder.base_url(base_url);
            }
            if let Some(api_key) = self.api_key {
                builder = builder.api_key(api_key);
            }
            if let Some(timeout) = self.timeout {
                builder = builder.timeout(timeout);
            }
            let sdk = builder.build()?;
            Ok(AsyncSellerStatsSdk {
                inner: Arc::new(Mutex::new(sdk)),
            })
        })
        .await
        .map_err(|e| SellerStatsError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncSellerStatsSdk
// ---------------------------------------------------------------------------

/// Async wrapper around [`SellerStatsSdk`].
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`]. The underlying [`SellerStatsSdk`] is
/// protected by a [`Mutex`] since it uses interior mutability internally.
pub struct AsyncSellerStatsSdk {
    inner: Arc<Mutex<SellerStatsSdk>>,
}

impl AsyncSellerStatsSdk {
    /// Create a new builder for configuring the async SDK.
    pub fn builder() -> AsyncSellerStatsSdkBuilder {
        AsyncSellerStatsSdkBuilder::default()
    }

    /// Run a sync SDK operation on the blocking thread pool.
    ///
    /// The closure receives a `&SellerStatsSdk` reference and should return a
    /// `Result<T>`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use sellerstats_sdk::{AsyncSellerStatsSdk, Filters};
    /// # async fn example() -> sellerstats_sdk::Result<()> {
    /// # let sdk = AsyncSellerStatsSdk::builder().build().await?;
    /// let sales = sdk
    ///     .run(|s| Ok(s.sales().list(&Filters::new().page(2))))
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&SellerStatsSdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let guard = sdk
                .lock()
                .map_err(|_| SellerStatsError::InvalidArgument("SDK lock poisoned".into()))?;
            f(&guard)
        })
        .await
        .map_err(|e| SellerStatsError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Fetch an endpoint as raw `serde_json::Value` records asynchronously.
    ///
    /// Convenience wrapper around [`run()`](Self::run) for
    /// [`SellerStatsSdk::fetch_values()`].
    pub async fn fetch_values(
        &self,
        endpoint: Endpoint,
        filters: Filters,
    ) -> Result<FetchOutcome<Value>> {
        self.run(move |s| Ok(s.fetch_values(endpoint, &filters))).await
    }

    /// Terminal failure message of the most recent fetch, if it failed.
    pub async fn last_error(&self) -> Result<Option<String>> {
        self.run(|s| Ok(s.last_error())).await
    }
}
