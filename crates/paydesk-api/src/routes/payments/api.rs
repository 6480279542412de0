//! Payment form handler

use super::page::{render_payment_form, PaymentFormValues};
use crate::session::require_session;
use crate::{page_response, AppState};
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use log::{info, warn};
use paydesk_client::{CreatePaymentRequest, StudentInfo};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PaymentForm {
    pub school_id: String,
    pub trustee_id: String,
    pub student_name: String,
    pub student_id: String,
    pub student_email: String,
    pub gateway_name: String,
    pub amount: String,
    pub callback_url: String,
}

/// Handle the payment form; the session is probed first like every other
/// protected view. Success sends the browser to the gateway's payment
/// page, failure re-renders the form with the values kept
pub async fn handle_create_payment(
    state: State<AppState>,
    headers: HeaderMap,
    form: Form<PaymentForm>,
) -> Response {
    if let Err(redirect) = require_session(&state).await {
        return redirect;
    }

    let request = CreatePaymentRequest {
        school_id: form.school_id.trim().to_string(),
        trustee_id: form.trustee_id.trim().to_string(),
        student_info: StudentInfo {
            name: form.student_name.trim().to_string(),
            id: form.student_id.trim().to_string(),
            email: form.student_email.trim().to_string(),
        },
        gateway_name: form.gateway_name.trim().to_string(),
        amount: form.amount.trim().to_string(),
        callback_url: form.callback_url.trim().to_string(),
    };

    match state.service.create_payment(&request).await {
        Ok(payment_page_url) => {
            info!(
                "payment created for school {} via {}",
                request.school_id, request.gateway_name
            );
            Redirect::to(&payment_page_url).into_response()
        }
        Err(err) => {
            warn!("payment creation failed: {}", err);
            let values = PaymentFormValues {
                school_id: form.school_id.clone(),
                trustee_id: form.trustee_id.clone(),
                student_name: form.student_name.clone(),
                student_id: form.student_id.clone(),
                student_email: form.student_email.clone(),
                gateway_name: form.gateway_name.clone(),
                amount: form.amount.clone(),
                callback_url: form.callback_url.clone(),
            };
            let message = err.user_message("Payment creation failed");
            let content = render_payment_form(Some(&message), &values);
            Html(page_response(&headers, "Create Payment", "/create-payment", &content))
                .into_response()
        }
    }
}
