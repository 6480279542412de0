//! Session guard for protected views
//!
//! Every protected navigation re-probes the remote service with a read
//! against a protected endpoint. Any failure, transport or auth, counts as
//! "not authenticated" and redirects to the login page. There is no session
//! cache; the cookie jar inside the client is the only session state.

use crate::AppState;
use axum::response::{IntoResponse, Redirect, Response};
use log::debug;

/// Probe the session before rendering a protected view
///
/// Returns the redirect-to-login response as the error arm so handlers can
/// bail with `?`-like early returns.
pub async fn require_session(state: &AppState) -> Result<(), Response> {
    if state.service.probe_session().await {
        Ok(())
    } else {
        debug!("session probe failed, redirecting to login");
        Err(Redirect::to("/").into_response())
    }
}
