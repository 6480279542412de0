//! Auth page rendering - Login and registration forms

use crate::base_html;
use axum::extract::Query;
use axum::response::Html;
use paydesk_utils::escape_html;
use std::collections::HashMap;

/// Login page
pub async fn page_login(params: Query<HashMap<String, String>>) -> Html<String> {
    let notice = if params.get("registered").map(|s| s.as_str()) == Some("1") {
        Some("Registration successful! Please log in.")
    } else {
        None
    };
    Html(render_login(notice, None, ""))
}

/// Registration page
pub async fn page_register() -> Html<String> {
    Html(render_register(None, "", ""))
}

/// Render the login form, optionally with a notice or an inline error
pub fn render_login(notice: Option<&str>, error: Option<&str>, email: &str) -> String {
    let notice_html = notice
        .map(|n| {
            format!(
                r#"<div class='bg-green-100 border border-green-400 text-green-700 px-4 py-3 rounded'>{}</div>"#,
                escape_html(n)
            )
        })
        .unwrap_or_default();
    let error_html = error.map(|e| crate::error_box(e)).unwrap_or_default();

    let content = format!(
        r#"<div class='min-h-screen flex items-center justify-center p-4 bg-gray-100'>
    <div class='p-8 rounded-lg shadow-lg w-full max-w-md bg-white'>
        <h1 class='text-2xl font-bold text-indigo-600 mb-6 text-center'>Welcome Back</h1>
        <form method='post' action='/login' class='space-y-4'>
            <div>
                <label class='block text-sm font-medium mb-2'>Email Address</label>
                <input type='email' name='email' value='{}' placeholder='Enter your email' required
                    class='w-full p-3 border rounded-lg focus:ring-2 focus:ring-indigo-500'>
            </div>
            <div>
                <label class='block text-sm font-medium mb-2'>Password</label>
                <input type='password' name='password' placeholder='Enter your password' required
                    class='w-full p-3 border rounded-lg focus:ring-2 focus:ring-indigo-500'>
            </div>
            {}
            {}
            <button type='submit'
                class='w-full bg-indigo-600 hover:bg-indigo-700 text-white font-medium py-3 px-4 rounded-lg'>
                Sign In
            </button>
        </form>
        <div class='mt-6 text-center'>
            <p class='text-sm'>Don't have an account?
                <a href='/register' class='text-indigo-600 hover:underline font-medium'>Create one here</a>
            </p>
        </div>
    </div>
</div>"#,
        escape_html(email),
        notice_html,
        error_html
    );

    base_html("Sign In", &content)
}

/// Render the registration form, optionally with an inline error
pub fn render_register(error: Option<&str>, name: &str, email: &str) -> String {
    let error_html = error.map(|e| crate::error_box(e)).unwrap_or_default();

    let content = format!(
        r#"<div class='min-h-screen flex items-center justify-center p-4 bg-gray-100'>
    <div class='p-8 rounded-lg shadow-lg w-full max-w-md bg-white'>
        <h1 class='text-2xl font-bold text-indigo-600 mb-6 text-center'>Create Account</h1>
        <form method='post' action='/register' class='space-y-4'>
            <div>
                <label class='block text-sm font-medium mb-2'>Full Name</label>
                <input type='text' name='name' value='{}' placeholder='Enter your full name' required
                    class='w-full p-3 border rounded-lg focus:ring-2 focus:ring-indigo-500'>
            </div>
            <div>
                <label class='block text-sm font-medium mb-2'>Email Address</label>
                <input type='email' name='email' value='{}' placeholder='Enter your email' required
                    class='w-full p-3 border rounded-lg focus:ring-2 focus:ring-indigo-500'>
            </div>
            <div>
                <label class='block text-sm font-medium mb-2'>Password</label>
                <input type='password' name='password' placeholder='Create a password (min 6 characters)'
                    required minlength='6'
                    class='w-full p-3 border rounded-lg focus:ring-2 focus:ring-indigo-500'>
            </div>
            <div>
                <label class='block text-sm font-medium mb-2'>Confirm Password</label>
                <input type='password' name='confirm_password' placeholder='Confirm your password' required
                    class='w-full p-3 border rounded-lg focus:ring-2 focus:ring-indigo-500'>
            </div>
            {}
            <button type='submit'
                class='w-full bg-indigo-600 hover:bg-indigo-700 text-white font-medium py-3 px-4 rounded-lg'>
                Create Account
            </button>
        </form>
        <div class='mt-6 text-center'>
            <p class='text-sm'>Already have an account?
                <a href='/' class='text-indigo-600 hover:underline font-medium'>Sign in here</a>
            </p>
        </div>
    </div>
</div>"#,
        escape_html(name),
        escape_html(email),
        error_html
    );

    base_html("Create Account", &content)
}
