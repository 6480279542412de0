//! Per-school HTMX partial

use crate::session::require_session;
use crate::AppState;
use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Response};
use paydesk_core::Transaction;
use paydesk_utils::{escape_html, format_amount, format_payment_time};
use std::collections::HashMap;

/// HTMX: Transactions for one school - Partial page update
pub async fn htmx_school_list(
    state: State<AppState>,
    params: Query<HashMap<String, String>>,
) -> Response {
    if let Err(redirect) = require_session(&state).await {
        return redirect;
    }

    let school_id = params
        .get("school_id")
        .map(|s| s.trim())
        .unwrap_or_default();
    if school_id.is_empty() {
        return Html(
            "<p class='text-gray-500 text-center py-10'>Pick a school to see its transactions.</p>"
                .to_string(),
        )
        .into_response();
    }

    match state.service.school_transactions(school_id).await {
        Ok(rows) => Html(render_school_table(school_id, &rows)).into_response(),
        Err(err) => {
            Html(crate::error_box(&err.user_message("Failed to fetch school transactions")))
                .into_response()
        }
    }
}

fn render_school_table(school_id: &str, rows: &[Transaction]) -> String {
    if rows.is_empty() {
        return format!(
            "<p class='text-gray-500 text-center py-10'>No transactions for school {}.</p>",
            escape_html(school_id)
        );
    }

    let mut html = format!(
        "<p class='text-sm text-gray-500 mb-2'>{} transactions for school {}</p>",
        rows.len(),
        escape_html(school_id)
    );
    html.push_str(
        "<div class='overflow-x-auto'><table class='w-full text-sm'><thead class='bg-gray-100'><tr>\
<th class='px-3 py-2 text-left font-semibold'>Collect ID</th>\
<th class='px-3 py-2 text-left font-semibold'>Gateway</th>\
<th class='px-3 py-2 text-left font-semibold'>Order Amount</th>\
<th class='px-3 py-2 text-left font-semibold'>Transaction Amount</th>\
<th class='px-3 py-2 text-left font-semibold'>Status</th>\
<th class='px-3 py-2 text-left font-semibold'>Custom Order ID</th>\
<th class='px-3 py-2 text-left font-semibold'>Payment Time</th>\
</tr></thead><tbody>",
    );

    let cell = |value: Option<&str>| -> String {
        match value {
            Some(v) if !v.is_empty() => escape_html(v),
            _ => "-".to_string(),
        }
    };

    for tx in rows {
        html.push_str(&format!(
            r#"<tr class='border-t hover:bg-gray-50'>
    <td class='px-3 py-2 font-mono'>{}</td>
    <td class='px-3 py-2 capitalize'>{}</td>
    <td class='px-3 py-2 text-right'>{}</td>
    <td class='px-3 py-2 text-right'>{}</td>
    <td class='px-3 py-2'>{}</td>
    <td class='px-3 py-2 font-mono break-all'>{}</td>
    <td class='px-3 py-2 whitespace-nowrap'>{}</td>
</tr>"#,
            cell(Some(tx.collect_id.as_str())),
            cell(tx.gateway.as_deref()),
            format_amount(tx.order_amount),
            format_amount(tx.transaction_amount),
            cell(tx.status.as_deref()),
            cell(tx.custom_order_id.as_deref()),
            format_payment_time(tx.payment_time.as_deref()),
        ));
    }
    html.push_str("</tbody></table></div>");
    html
}
