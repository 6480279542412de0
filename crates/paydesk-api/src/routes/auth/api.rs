//! Auth form handlers - relay to the remote auth endpoints

use super::page::{render_login, render_register};
use crate::AppState;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use log::{info, warn};
use paydesk_client::{LoginRequest, RegisterRequest};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Handle the login form; success redirects to the dashboard
pub async fn handle_login(state: State<AppState>, form: Form<LoginForm>) -> Response {
    let request = LoginRequest {
        email: form.email.clone(),
        password: form.password.clone(),
    };
    match state.service.login(&request).await {
        Ok(()) => {
            info!("login succeeded for {}", form.email);
            Redirect::to("/dashboard").into_response()
        }
        Err(err) => {
            warn!("login failed for {}: {}", form.email, err);
            let message = err.user_message("Login failed");
            Html(render_login(None, Some(&message), &form.email)).into_response()
        }
    }
}

/// Handle the registration form; success redirects to the login page
pub async fn handle_register(state: State<AppState>, form: Form<RegisterForm>) -> Response {
    if let Some(message) = validate_registration(&form) {
        return Html(render_register(Some(message), &form.name, &form.email)).into_response();
    }

    let request = RegisterRequest {
        name: form.name.clone(),
        email: form.email.clone(),
        password: form.password.clone(),
    };
    match state.service.register(&request).await {
        Ok(()) => Redirect::to("/?registered=1").into_response(),
        Err(err) => {
            warn!("registration failed for {}: {}", form.email, err);
            let message = err.user_message("Registration failed");
            Html(render_register(Some(&message), &form.name, &form.email)).into_response()
        }
    }
}

/// Local checks applied before hitting the remote service
fn validate_registration(form: &RegisterForm) -> Option<&'static str> {
    if form.password != form.confirm_password {
        return Some("Passwords do not match");
    }
    if form.password.len() < 6 {
        return Some("Password must be at least 6 characters long");
    }
    None
}
