//! Dashboard page rendering

use crate::session::require_session;
use crate::{page_response, AppState};
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse, Response};
use paydesk_core::query::PAGE_SIZES;

/// Transaction dashboard page
///
/// Renders the filter controls and an empty content area; the table itself
/// loads through /dashboard/list. Typing in the search box re-queries after
/// the keystrokes settle rather than on every key.
pub async fn page_dashboard(state: State<AppState>, headers: HeaderMap) -> Response {
    if let Err(redirect) = require_session(&state).await {
        return redirect;
    }

    let default_size = state.config.pagination.page_size;
    let size_options: String = PAGE_SIZES
        .iter()
        .map(|size| {
            format!(
                "<option value='{}'{}>{} per page</option>",
                size,
                if *size == default_size {
                    " selected"
                } else {
                    ""
                },
                size
            )
        })
        .collect();

    let content = format!(
        r#"<div class='max-w-6xl mx-auto'>
    <h2 class='text-2xl font-bold mb-4'>Transactions</h2>
    <form id='tx-filters' class='bg-white rounded-lg shadow p-4 mb-4 flex flex-wrap items-end gap-3'>
        <div class='flex-1 min-w-[200px]'>
            <label class='block text-sm font-medium mb-1'>Search</label>
            <input type='search' name='q' placeholder='Collect ID, gateway, school, order ID...'
                class='w-full p-2 border rounded-lg focus:ring-2 focus:ring-indigo-500'
                hx-get='/dashboard/list' hx-target='#dashboard-content'
                hx-trigger='keyup changed delay:450ms, search'
                hx-include='#tx-filters'>
        </div>
        <div class='min-w-[160px]'>
            <label class='block text-sm font-medium mb-1'>Status</label>
            <input type='text' name='status' placeholder='success, pending...'
                class='w-full p-2 border rounded-lg focus:ring-2 focus:ring-indigo-500'
                hx-get='/dashboard/list' hx-target='#dashboard-content'
                hx-trigger='keyup changed delay:450ms'
                hx-include='#tx-filters'>
        </div>
        <div class='min-w-[160px]'>
            <label class='block text-sm font-medium mb-1'>School</label>
            <input type='text' name='school' placeholder='School ID'
                class='w-full p-2 border rounded-lg focus:ring-2 focus:ring-indigo-500'
                hx-get='/dashboard/list' hx-target='#dashboard-content'
                hx-trigger='keyup changed delay:450ms'
                hx-include='#tx-filters'>
        </div>
        <div>
            <label class='block text-sm font-medium mb-1'>Rows</label>
            <select name='limit' class='p-2 border rounded-lg'
                hx-get='/dashboard/list' hx-target='#dashboard-content'
                hx-trigger='change' hx-include='#tx-filters'>{}</select>
        </div>
        <input type='hidden' name='sort' value='payment_time' id='sort-field'>
        <input type='hidden' name='order' value='desc' id='sort-order'>
    </form>
    <div id='dashboard-content' class='bg-white rounded-lg shadow p-4'
        hx-get='/dashboard/list' hx-trigger='load' hx-include='#tx-filters'>
        <p class='text-gray-500 text-center py-10'>Loading transactions...</p>
    </div>
</div>"#,
        size_options
    );

    Html(page_response(&headers, "Dashboard", "/dashboard", &content)).into_response()
}
