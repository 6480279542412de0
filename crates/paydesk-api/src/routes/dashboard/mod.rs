//! Dashboard routes - Transaction table with search, filters, sort, pagination
//!
//! The full transaction set is fetched from the remote service on every
//! list render and queried entirely in memory; see paydesk-core::query.
//!
//! Structure:
//! - page.rs: Full page rendering
//! - api.rs: JSON API and HTMX list partial

pub mod api;
pub mod page;

pub use api::{api_transactions, htmx_dashboard_list};
pub use page::page_dashboard;
