//! Status check routes - Look up one transaction by custom order ID
//!
//! Structure:
//! - page.rs: Full page rendering
//! - api.rs: HTMX result partial

pub mod api;
pub mod page;

pub use api::htmx_status_result;
pub use page::page_status_check;
