//! Dashboard API endpoints - JSON API and HTMX list partial
//!
//! Endpoints:
//! - api_transactions: Computed view as JSON
//! - htmx_dashboard_list: Transaction table (HTML fragment)

use crate::session::require_session;
use crate::{ApiError, AppState};
use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use paydesk_client::ClientError;
use paydesk_core::query::{compute_view, QueryParams, SortField, SortOrder, ViewPage, PAGE_SIZES};
use paydesk_core::{StatusKind, Transaction};
use paydesk_utils::{escape_html, format_amount};
use serde::Serialize;
use std::collections::HashMap;

const COLUMNS: [(SortField, &str); 7] = [
    (SortField::CollectId, "Collect ID"),
    (SortField::SchoolId, "School ID"),
    (SortField::Gateway, "Gateway"),
    (SortField::OrderAmount, "Order Amount"),
    (SortField::TransactionAmount, "Transaction Amount"),
    (SortField::Status, "Status"),
    (SortField::CustomOrderId, "Custom Order ID"),
];

/// Computed view response for the JSON API
#[derive(Debug, Serialize)]
pub struct TransactionsResponse {
    pub transactions: Vec<Transaction>,
    pub total_count: usize,
    pub page: usize,
    pub page_size: usize,
}

/// Get the computed transaction view (JSON API)
pub async fn api_transactions(
    state: State<AppState>,
    params: Query<HashMap<String, String>>,
) -> Result<Json<TransactionsResponse>, ApiError> {
    let query = query_from_params(&params.0, state.config.pagination.page_size);
    match state.service.transactions().await {
        Ok(all) => {
            let view = compute_view(&all, &query);
            Ok(Json(TransactionsResponse {
                transactions: view.rows,
                total_count: view.total_count,
                page: query.page,
                page_size: query.page_size,
            }))
        }
        Err(ClientError::Server { status: 401, .. }) => Err(ApiError::Unauthorized),
        Err(err) => Err(ApiError::Upstream {
            message: err.user_message("Failed to fetch transactions"),
        }),
    }
}

/// HTMX: Transaction table - Partial page update
pub async fn htmx_dashboard_list(
    state: State<AppState>,
    params: Query<HashMap<String, String>>,
) -> Response {
    if let Err(redirect) = require_session(&state).await {
        return redirect;
    }

    let query = query_from_params(&params.0, state.config.pagination.page_size);
    match state.service.transactions().await {
        Ok(all) => {
            let view = compute_view(&all, &query);
            Html(render_table(&view, &query)).into_response()
        }
        Err(err) => {
            Html(crate::error_box(&err.user_message("Failed to fetch transactions")))
                .into_response()
        }
    }
}

/// Build query parameters from the request's query string
///
/// Unknown sort fields and page sizes fall back to the defaults; filters
/// arrive comma-separated. The order matters: setters reset the page, so
/// the explicit page index is applied last.
pub fn query_from_params(params: &HashMap<String, String>, default_page_size: usize) -> QueryParams {
    let mut query = QueryParams {
        page_size: if PAGE_SIZES.contains(&default_page_size) {
            default_page_size
        } else {
            QueryParams::default().page_size
        },
        ..QueryParams::default()
    };
    if let Some(q) = params.get("q") {
        query.set_search(q);
    }
    if let Some(csv) = params.get("status") {
        query.set_statuses(split_csv(csv));
    }
    if let Some(csv) = params.get("school") {
        query.set_schools(split_csv(csv));
    }
    if let Some(field) = params.get("sort").and_then(|s| s.parse::<SortField>().ok()) {
        query.sort_field = field;
    }
    if let Some(order) = params.get("order").and_then(|s| s.parse::<SortOrder>().ok()) {
        query.sort_order = order;
    }
    if let Some(size) = params.get("limit").and_then(|s| s.parse::<usize>().ok()) {
        query.set_page_size(size);
    }
    if let Some(page) = params.get("page").and_then(|s| s.parse::<usize>().ok()) {
        query.page = page;
    }
    query
}

fn split_csv(csv: &str) -> Vec<String> {
    csv.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// The list URL carrying the full query state, with an explicit page index
pub fn build_list_url(query: &QueryParams, page: usize) -> String {
    format!(
        "/dashboard/list?q={}&status={}&school={}&sort={}&order={}&page={}&limit={}",
        urlencoding::encode(&query.search),
        urlencoding::encode(&query.statuses.join(",")),
        urlencoding::encode(&query.schools.join(",")),
        query.sort_field,
        query.sort_order,
        page,
        query.page_size
    )
}

/// Render the table fragment: header with sort controls, rows, pagination
pub fn render_table(view: &ViewPage, query: &QueryParams) -> String {
    let mut html = String::new();

    // Keep the filter form's hidden sort state in sync with this render
    html.push_str(&format!(
        r#"<input type='hidden' name='sort' value='{}' id='sort-field' hx-swap-oob='true'>
<input type='hidden' name='order' value='{}' id='sort-order' hx-swap-oob='true'>"#,
        query.sort_field, query.sort_order
    ));

    html.push_str("<div class='overflow-x-auto'><table class='w-full text-sm'><thead class='bg-gray-100'><tr>");
    for (field, label) in COLUMNS {
        let mut toggled = query.clone();
        toggled.select_sort(field);
        let arrow = if query.sort_field == field {
            match query.sort_order {
                SortOrder::Ascending => " ▲",
                SortOrder::Descending => " ▼",
            }
        } else {
            ""
        };
        html.push_str(&format!(
            r#"<th class='px-3 py-2 text-left font-semibold cursor-pointer hover:bg-gray-200'
    hx-get='{}' hx-target='#dashboard-content'>{}{}</th>"#,
            build_list_url(&toggled, 0),
            label,
            arrow
        ));
    }
    html.push_str("</tr></thead><tbody>");

    if view.rows.is_empty() {
        let message = if view.total_count > 0 {
            "No transactions on this page."
        } else {
            "No transactions found."
        };
        html.push_str(&format!(
            r#"<tr><td colspan='7' class='px-3 py-10 text-center text-gray-500'>{}</td></tr>"#,
            message
        ));
    } else {
        for tx in &view.rows {
            html.push_str(&render_row(tx));
        }
    }
    html.push_str("</tbody></table></div>");

    html.push_str(&render_pagination(view, query));
    html
}

fn render_row(tx: &Transaction) -> String {
    let placeholder = |value: Option<&str>| -> String {
        match value {
            Some(v) if !v.is_empty() => escape_html(v),
            _ => "-".to_string(),
        }
    };

    format!(
        r#"<tr class='border-t hover:bg-gray-50'>
    <td class='px-3 py-2 font-mono'>{}</td>
    <td class='px-3 py-2'>{}</td>
    <td class='px-3 py-2 capitalize'>{}</td>
    <td class='px-3 py-2 text-right'>{}</td>
    <td class='px-3 py-2 text-right'>{}</td>
    <td class='px-3 py-2'>{}</td>
    <td class='px-3 py-2 font-mono break-all'>{}</td>
</tr>"#,
        placeholder(Some(tx.collect_id.as_str())),
        placeholder(tx.school_id.as_deref()),
        placeholder(tx.gateway.as_deref()),
        format_amount(tx.order_amount),
        format_amount(tx.transaction_amount),
        status_badge(tx),
        placeholder(tx.custom_order_id.as_deref()),
    )
}

/// Status cell: recognized values get colored badges, anything else gray
fn status_badge(tx: &Transaction) -> String {
    let (background, color) = match tx.status_kind() {
        StatusKind::Success => ("#ecfccb", "#166534"),
        StatusKind::Pending => ("#fef3c7", "#854d0e"),
        StatusKind::Failed => ("#fee2e2", "#991b1b"),
        StatusKind::Other => ("#f3f4f6", "#374151"),
    };
    format!(
        r#"<span class='px-2 py-0.5 rounded' style='background:{};color:{}'>{}</span>"#,
        background,
        color,
        escape_html(tx.status.as_deref().unwrap_or("-"))
    )
}

fn render_pagination(view: &ViewPage, query: &QueryParams) -> String {
    let total_pages = view.total_count.div_ceil(query.page_size).max(1);
    let current_page = query.page + 1;
    let last_index = total_pages - 1;

    let target = "#dashboard-content";
    let disabled = |cond: bool| if cond { "disabled" } else { "" };

    format!(
        r#"<div class='mt-4 flex items-center justify-between flex-wrap gap-4'>
    <span class='text-sm text-gray-500'>{} records, page {} of {}</span>
    <div class='flex items-center gap-2'>
        <button {} hx-get='{}' hx-target='{}' class='px-3 py-1 border rounded hover:bg-gray-100'>First</button>
        <button {} hx-get='{}' hx-target='{}' class='px-3 py-1 border rounded hover:bg-gray-100'>Prev</button>
        <button {} hx-get='{}' hx-target='{}' class='px-3 py-1 border rounded hover:bg-gray-100'>Next</button>
        <button {} hx-get='{}' hx-target='{}' class='px-3 py-1 border rounded hover:bg-gray-100'>Last</button>
    </div>
</div>
<style>button[disabled]{{cursor:not-allowed;opacity:0.5;pointer-events:none}}</style>"#,
        view.total_count,
        current_page,
        total_pages,
        disabled(query.page == 0),
        build_list_url(query, 0),
        target,
        disabled(query.page == 0),
        build_list_url(query, query.page.saturating_sub(1)),
        target,
        disabled(query.page >= last_index),
        build_list_url(query, (query.page + 1).min(last_index)),
        target,
        disabled(query.page >= last_index),
        build_list_url(query, last_index),
        target,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn tx(collect_id: &str, status: Option<&str>) -> Transaction {
        Transaction {
            collect_id: collect_id.to_string(),
            school_id: Some("S1".to_string()),
            gateway: None,
            order_amount: Some(2000.0),
            transaction_amount: None,
            status: status.map(str::to_string),
            custom_order_id: None,
            payment_time: Some("100".to_string()),
        }
    }

    #[test]
    fn test_query_from_params_full() {
        let query = query_from_params(
            &params(&[
                ("q", " edu "),
                ("status", "success, pending"),
                ("school", "S1"),
                ("sort", "gateway"),
                ("order", "asc"),
                ("page", "3"),
                ("limit", "25"),
            ]),
            10,
        );
        assert_eq!(query.search, "edu");
        assert_eq!(query.statuses, vec!["success", "pending"]);
        assert_eq!(query.schools, vec!["S1"]);
        assert_eq!(query.sort_field, SortField::Gateway);
        assert_eq!(query.sort_order, SortOrder::Ascending);
        assert_eq!(query.page, 3);
        assert_eq!(query.page_size, 25);
    }

    #[test]
    fn test_query_from_params_defaults_and_junk() {
        let query = query_from_params(
            &params(&[("sort", "bogus"), ("order", "sideways"), ("limit", "999")]),
            10,
        );
        assert_eq!(query.sort_field, SortField::PaymentTime);
        assert_eq!(query.sort_order, SortOrder::Descending);
        assert_eq!(query.page_size, 10);
        assert_eq!(query.page, 0);
    }

    #[test]
    fn test_build_list_url_encodes_search() {
        let mut query = QueryParams::default();
        query.set_search("a b&c");
        let url = build_list_url(&query, 2);
        assert!(url.contains("q=a%20b%26c"));
        assert!(url.contains("page=2"));
        assert!(url.contains("sort=payment_time"));
    }

    #[test]
    fn test_render_table_rows_and_placeholders() {
        let view = ViewPage {
            rows: vec![tx("C1", Some("success")), tx("C2", None)],
            total_count: 2,
        };
        let html = render_table(&view, &QueryParams::default());
        assert!(html.contains("C1"));
        assert!(html.contains("₹2000.00"));
        // missing transaction_amount and custom_order_id degrade to "-"
        assert!(html.contains(">-</td>"));
        assert!(html.contains("2 records, page 1 of 1"));
    }

    #[test]
    fn test_render_table_empty_states() {
        let empty = ViewPage {
            rows: vec![],
            total_count: 0,
        };
        assert!(render_table(&empty, &QueryParams::default()).contains("No transactions found."));

        let beyond = ViewPage {
            rows: vec![],
            total_count: 12,
        };
        let query = QueryParams {
            page: 9,
            ..QueryParams::default()
        };
        assert!(render_table(&beyond, &query).contains("No transactions on this page."));
    }

    #[test]
    fn test_sort_header_toggles_direction() {
        let view = ViewPage {
            rows: vec![tx("C1", Some("success"))],
            total_count: 1,
        };
        let query = QueryParams::default(); // payment_time desc
        let html = render_table(&view, &query);
        // active column re-click flips to asc; inactive column starts asc
        assert!(html.contains("sort=payment_time&order=asc&page=0"));
        assert!(html.contains("sort=gateway&order=asc&page=0"));
        assert!(html.contains("▼"));
    }

    #[test]
    fn test_status_badge_colors() {
        assert!(status_badge(&tx("C", Some("success"))).contains("#ecfccb"));
        assert!(status_badge(&tx("C", Some("FAILED"))).contains("#fee2e2"));
        assert!(status_badge(&tx("C", Some("weird"))).contains("#f3f4f6"));
    }
}
