//! Query modules for the seller statistics SDK.
//!
//! Each module provides a query struct that borrows the shared
//! [`Transport`](crate::transport::Transport) and exposes typed list methods
//! returning a [`FetchOutcome`](crate::transport::FetchOutcome) per call.

pub mod incomes;
pub mod orders;
pub mod sales;
pub mod stocks;

pub use incomes::IncomeQuery;
pub use orders::OrderQuery;
pub use sales::SaleQuery;
pub use stocks::StockQuery;
