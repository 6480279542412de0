//! Status check page rendering

use crate::session::require_session;
use crate::{page_response, AppState};
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse, Response};

/// Status check page
pub async fn page_status_check(state: State<AppState>, headers: HeaderMap) -> Response {
    if let Err(redirect) = require_session(&state).await {
        return redirect;
    }

    let content = r#"<div class='max-w-2xl mx-auto'>
    <h2 class='text-2xl font-bold mb-4'>Check Transaction Status</h2>
    <form class='bg-white rounded-lg shadow p-4 mb-4 flex items-end gap-3'
        hx-get='/check-status/result' hx-target='#status-content'>
        <div class='flex-1'>
            <label class='block text-sm font-medium mb-1'>Custom Order ID</label>
            <input type='text' name='custom_order_id' placeholder='e.g. test_1'
                class='w-full p-2 border rounded-lg font-mono focus:ring-2 focus:ring-indigo-500'>
        </div>
        <button type='submit'
            class='bg-indigo-600 hover:bg-indigo-700 text-white font-medium py-2 px-4 rounded-lg'>
            Check
        </button>
    </form>
    <div id='status-content'></div>
</div>"#;

    Html(page_response(&headers, "Check Status", "/check-status", content)).into_response()
}
