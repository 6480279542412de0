//! Route handlers, grouped by view

pub mod auth;
pub mod dashboard;
pub mod payments;
pub mod schools;
pub mod status;
