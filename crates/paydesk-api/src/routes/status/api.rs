//! Status check HTMX partial

use crate::session::require_session;
use crate::AppState;
use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Response};
use paydesk_utils::escape_html;
use serde_json::Value;
use std::collections::HashMap;

/// HTMX: Status lookup result - Partial page update
pub async fn htmx_status_result(
    state: State<AppState>,
    params: Query<HashMap<String, String>>,
) -> Response {
    if let Err(redirect) = require_session(&state).await {
        return redirect;
    }

    let order_id = params
        .get("custom_order_id")
        .map(|s| s.trim())
        .unwrap_or_default();
    if order_id.is_empty() {
        return Html(crate::error_box("Please enter a custom order ID")).into_response();
    }

    match state.service.transaction_status(order_id).await {
        Ok(status) => Html(render_status(order_id, &status)).into_response(),
        Err(err) => {
            Html(crate::error_box(&err.user_message("Failed to fetch transaction status")))
                .into_response()
        }
    }
}

/// The upstream shape for this endpoint is not pinned down, so the whole
/// payload is shown pretty-printed rather than picked apart field by field.
fn render_status(order_id: &str, status: &Value) -> String {
    let pretty = serde_json::to_string_pretty(status).unwrap_or_else(|_| status.to_string());
    format!(
        r#"<div class='bg-white rounded-lg shadow p-4'>
    <h3 class='font-semibold mb-2'>Status for <span class='font-mono'>{}</span></h3>
    <pre class='bg-gray-100 rounded p-3 text-sm overflow-x-auto'>{}</pre>
</div>"#,
        escape_html(order_id),
        escape_html(&pretty)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_status_pretty_prints() {
        let html = render_status("test_1", &json!({"status": "SUCCESS", "amount": 2000}));
        assert!(html.contains("test_1"));
        assert!(html.contains("SUCCESS"));
        assert!(html.contains("<pre"));
    }

    #[test]
    fn test_render_status_escapes_payload() {
        let html = render_status("x", &json!({"note": "<script>alert(1)</script>"}));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
