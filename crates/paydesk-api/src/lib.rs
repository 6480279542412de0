//! HTTP server rendering the dashboard pages and HTMX partials
//!
//! Routes are organized into modules:
//! - routes::auth: Login and registration forms
//! - routes::dashboard: Transaction table with search, filters, sort, pagination
//! - routes::schools: Per-school transaction lookup
//! - routes::status: Transaction status check
//! - routes::payments: Payment creation form
//!
//! Protected routes probe the remote service before rendering; an
//! unauthenticated request is redirected to the login page.

pub mod error;
pub mod routes;
pub mod session;

use axum::{
    routing::{get, post},
    Router,
};
use paydesk_client::TransactionService;
use paydesk_config::Config;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

pub use error::ApiError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<dyn TransactionService>,
    pub config: Config,
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    use routes::auth::{handle_login, handle_register, page_login, page_register};
    use routes::dashboard::{api_transactions, htmx_dashboard_list, page_dashboard};
    use routes::payments::{handle_create_payment, page_create_payment};
    use routes::schools::{htmx_school_list, page_school_transactions};
    use routes::status::{htmx_status_result, page_status_check};

    Router::new()
        // JSON API endpoints
        .route("/api/health", get(health_check))
        .route("/api/transactions", get(api_transactions))
        // Auth pages
        .route("/", get(page_login))
        .route("/login", post(handle_login))
        .route("/register", get(page_register))
        .route("/register", post(handle_register))
        // Protected pages
        .route("/dashboard", get(page_dashboard))
        .route("/school-transactions", get(page_school_transactions))
        .route("/check-status", get(page_status_check))
        .route("/create-payment", get(page_create_payment))
        .route("/create-payment", post(handle_create_payment))
        // HTMX partial routes
        .route("/dashboard/list", get(htmx_dashboard_list))
        .route("/school-transactions/list", get(htmx_school_list))
        .route("/check-status/result", get(htmx_status_result))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

// ==================== Template Functions ====================

/// Base HTML template
pub fn base_html(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{} - Paydesk</title>
    <script src="https://unpkg.com/htmx.org@1.9.10"></script>
    <script src="https://cdn.tailwindcss.com"></script>
    <style>
        .htmx-indicator {{ opacity: 0; transition: opacity 0.3s; }}
        .htmx-request .htmx-indicator {{ opacity: 1; }}
        .htmx-request.htmx-indicator {{ opacity: 1; }}
    </style>
</head>
<body class="bg-gray-50 text-gray-900">
    {}
</body>
</html>"#,
        title, content
    )
}

/// Navigation sidebar
pub fn nav_sidebar(current_path: &str) -> String {
    let links = [
        ("/dashboard", "Dashboard", "📋"),
        ("/school-transactions", "By School", "🏫"),
        ("/check-status", "Check Status", "🔍"),
        ("/create-payment", "Create Payment", "💳"),
    ];

    let mut nav = String::from(
        "<div class='bg-white border-r h-screen flex flex-col'><div class='p-4 border-b'><h1 class='text-xl font-bold text-indigo-600'>Paydesk</h1></div><ul class='flex-1 py-2 space-y-1 px-2'>",
    );

    for (path, label, icon) in &links {
        let active_class = if current_path.starts_with(path) {
            "bg-indigo-50 text-indigo-600"
        } else {
            "text-gray-600 hover:bg-gray-50"
        };
        nav.push_str(&format!(
            r#"<li><a href='{}' class='flex items-center gap-2 px-3 py-2 rounded-lg {}'>{}<span>{}</span></a></li>"#,
            path, active_class, icon, label
        ));
    }
    nav.push_str("</ul><div class='p-4 border-t'><a href='/' class='text-sm text-gray-500 hover:text-gray-700'>Sign out</a></div></div>");
    nav
}

/// Check if request is from HTMX (partial page update)
fn is_htmx_request(headers: &axum::http::HeaderMap) -> bool {
    headers.get("hx-request").is_some()
}

/// Wrap content for full page or HTMX partial
pub fn page_response(
    headers: &axum::http::HeaderMap,
    title: &str,
    current_path: &str,
    inner_content: &str,
) -> String {
    if is_htmx_request(headers) {
        // HTMX partial - just the content area
        format!(
            r#"<div class='flex flex-col h-screen'>
    <div class='flex flex-1 overflow-hidden'>
        <main class='flex-1 overflow-auto bg-gray-50 p-6'>{}</main>
    </div>
</div>"#,
            inner_content
        )
    } else {
        base_html(
            title,
            &format!(
                r#"<div class='flex flex-col h-screen'>
    <div class='flex flex-1 overflow-hidden'>
        <aside class='w-64 flex-shrink-0'>{}</aside>
        <main class='flex-1 overflow-auto bg-gray-50 p-6'>{}</main>
    </div>
</div>"#,
                nav_sidebar(current_path),
                inner_content
            ),
        )
    }
}

/// Inline error box rendered near the triggering control
pub fn error_box(message: &str) -> String {
    format!(
        r#"<div class='bg-rose-100 border border-rose-400 text-rose-700 px-4 py-3 rounded'>{}</div>"#,
        paydesk_utils::escape_html(message)
    )
}

/// Start the HTTP server
pub async fn start_server(config: Config, service: Arc<dyn TransactionService>) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState { service, config };

    let router = create_router(state);

    let listener = TcpListener::bind(&addr).await?;
    log::info!("Starting Paydesk server on http://{}", addr);
    log::info!("Available routes:");
    log::info!("  - / (Login)");
    log::info!("  - /register (Registration)");
    log::info!("  - /dashboard (Transaction table)");
    log::info!("  - /school-transactions (Per-school lookup)");
    log::info!("  - /check-status (Status check)");
    log::info!("  - /create-payment (Payment creation)");
    log::info!("  - /api/* (JSON API endpoints)");

    axum::serve(listener, router).await?;
    Ok(())
}
