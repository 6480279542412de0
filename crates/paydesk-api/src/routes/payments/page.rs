//! Payment creation page rendering

use crate::session::require_session;
use crate::{error_box, page_response, AppState};
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse, Response};
use paydesk_utils::escape_html;

/// Prefilled values kept across a failed submission
#[derive(Debug, Default)]
pub struct PaymentFormValues {
    pub school_id: String,
    pub trustee_id: String,
    pub student_name: String,
    pub student_id: String,
    pub student_email: String,
    pub gateway_name: String,
    pub amount: String,
    pub callback_url: String,
}

/// Payment creation page
pub async fn page_create_payment(state: State<AppState>, headers: HeaderMap) -> Response {
    if let Err(redirect) = require_session(&state).await {
        return redirect;
    }

    let values = PaymentFormValues {
        callback_url: state.config.upstream.callback_url.clone(),
        ..PaymentFormValues::default()
    };
    let content = render_payment_form(None, &values);
    Html(page_response(&headers, "Create Payment", "/create-payment", &content)).into_response()
}

/// Render the payment form, optionally with an inline error
pub fn render_payment_form(error: Option<&str>, values: &PaymentFormValues) -> String {
    let error_html = error.map(error_box).unwrap_or_default();

    let field = |label: &str, name: &str, input_type: &str, value: &str, placeholder: &str| {
        format!(
            r#"<div>
    <label class='block text-sm font-medium mb-1'>{}</label>
    <input type='{}' name='{}' value='{}' placeholder='{}' required
        class='w-full p-2 border rounded-lg focus:ring-2 focus:ring-indigo-500'>
</div>"#,
            label,
            input_type,
            name,
            escape_html(value),
            placeholder
        )
    };

    format!(
        r#"<div class='max-w-2xl mx-auto'>
    <h2 class='text-2xl font-bold mb-4'>Create Payment</h2>
    <form method='post' action='/create-payment' class='bg-white rounded-lg shadow p-6 space-y-4'>
        <div class='grid grid-cols-1 md:grid-cols-2 gap-4'>
            {school}
            {trustee}
        </div>
        <fieldset class='border rounded-lg p-4'>
            <legend class='text-sm font-semibold px-1'>Student</legend>
            <div class='grid grid-cols-1 md:grid-cols-3 gap-4'>
                {student_name}
                {student_id}
                {student_email}
            </div>
        </fieldset>
        <div class='grid grid-cols-1 md:grid-cols-2 gap-4'>
            {gateway}
            {amount}
        </div>
        {callback}
        {error}
        <button type='submit'
            class='w-full bg-indigo-600 hover:bg-indigo-700 text-white font-medium py-3 px-4 rounded-lg'>
            Create Payment
        </button>
    </form>
</div>"#,
        school = field("School ID", "school_id", "text", &values.school_id, "School ID"),
        trustee = field("Trustee ID", "trustee_id", "text", &values.trustee_id, "Trustee ID"),
        student_name = field("Name", "student_name", "text", &values.student_name, "Student name"),
        student_id = field("ID", "student_id", "text", &values.student_id, "Student ID"),
        student_email = field("Email", "student_email", "email", &values.student_email, "student@example.com"),
        gateway = field("Gateway", "gateway_name", "text", &values.gateway_name, "e.g. PhonePe"),
        amount = field("Amount", "amount", "number", &values.amount, "Amount in INR"),
        callback = field("Callback URL", "callback_url", "url", &values.callback_url, "https://..."),
        error = error_html,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_keeps_values_and_error() {
        let values = PaymentFormValues {
            school_id: "EDU-1".to_string(),
            amount: "2000".to_string(),
            ..PaymentFormValues::default()
        };
        let html = render_payment_form(Some("Gateway rejected the request"), &values);
        assert!(html.contains("EDU-1"));
        assert!(html.contains("2000"));
        assert!(html.contains("Gateway rejected the request"));
    }

    #[test]
    fn test_form_escapes_values() {
        let values = PaymentFormValues {
            school_id: "<x>".to_string(),
            ..PaymentFormValues::default()
        };
        let html = render_payment_form(None, &values);
        assert!(html.contains("&lt;x&gt;"));
    }
}
