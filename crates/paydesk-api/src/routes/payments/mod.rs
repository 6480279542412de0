//! Payment creation routes
//!
//! The form relays to the remote create-payment endpoint; on success the
//! browser is sent straight to the gateway's payment page.
//!
//! Structure:
//! - page.rs: Full page rendering
//! - api.rs: Form POST handler

pub mod api;
pub mod page;

pub use api::handle_create_payment;
pub use page::page_create_payment;
