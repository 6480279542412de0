//! Per-school routes - Transactions filtered to one school ID
//!
//! Unlike the dashboard this hits the remote per-school endpoint instead
//! of filtering locally.
//!
//! Structure:
//! - page.rs: Full page rendering
//! - api.rs: HTMX list partial

pub mod api;
pub mod page;

pub use api::htmx_school_list;
pub use page::page_school_transactions;
