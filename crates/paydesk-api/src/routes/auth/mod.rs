//! Auth routes - Login and registration
//!
//! Both forms POST to this server, which relays to the remote auth
//! endpoints. The session cookie lives in the shared client's jar, so a
//! successful login makes every later upstream call authenticated.
//!
//! Structure:
//! - page.rs: Full page rendering
//! - api.rs: Form POST handlers

pub mod api;
pub mod page;

pub use api::{handle_login, handle_register};
pub use page::{page_login, page_register};
