//! Per-school page rendering

use crate::session::require_session;
use crate::{page_response, AppState};
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse, Response};
use paydesk_core::query::school_options;
use paydesk_utils::escape_html;

/// Per-school transactions page
///
/// The school picker is a datalist seeded from the IDs seen in the full
/// transaction set, so any ID can still be typed freely.
pub async fn page_school_transactions(state: State<AppState>, headers: HeaderMap) -> Response {
    if let Err(redirect) = require_session(&state).await {
        return redirect;
    }

    let known_schools = match state.service.transactions().await {
        Ok(all) => school_options(&all),
        Err(err) => {
            log::warn!("could not load school options: {}", err);
            Vec::new()
        }
    };
    let datalist: String = known_schools
        .iter()
        .map(|id| format!("<option value='{}'></option>", escape_html(id)))
        .collect();

    let content = format!(
        r#"<div class='max-w-4xl mx-auto'>
    <h2 class='text-2xl font-bold mb-4'>Transactions by School</h2>
    <div class='bg-white rounded-lg shadow p-4 mb-4'>
        <label class='block text-sm font-medium mb-1'>School ID</label>
        <input type='text' name='school_id' list='school-ids' placeholder='Enter or pick a school ID'
            class='w-full p-2 border rounded-lg focus:ring-2 focus:ring-indigo-500'
            hx-get='/school-transactions/list' hx-target='#school-content'
            hx-trigger='keyup changed delay:450ms, change'>
        <datalist id='school-ids'>{}</datalist>
    </div>
    <div id='school-content' class='bg-white rounded-lg shadow p-4'>
        <p class='text-gray-500 text-center py-10'>Pick a school to see its transactions.</p>
    </div>
</div>"#,
        datalist
    );

    Html(page_response(
        &headers,
        "By School",
        "/school-transactions",
        &content,
    ))
    .into_response()
}
