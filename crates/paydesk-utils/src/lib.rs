//! Display helpers for paydesk pages

use chrono::{DateTime, NaiveDateTime};

/// Escape a string for safe embedding in HTML text or attribute values
pub fn escape_html(content: &str) -> String {
    content
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Format a monetary amount with the rupee prefix, or a placeholder when absent
pub fn format_amount(amount: Option<f64>) -> String {
    match amount {
        Some(value) => format!("₹{:.2}", value),
        None => "-".to_string(),
    }
}

/// Format a payment timestamp for display
///
/// Accepts RFC 3339 or `YYYY-MM-DDTHH:MM:SS`; anything else passes through
/// unchanged so odd upstream values still render.
pub fn format_payment_time(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return "-".to_string();
    };
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<script>alert("x")</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape_html("a & b"), "a &amp; b");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(Some(2000.0)), "₹2000.00");
        assert_eq!(format_amount(Some(99.5)), "₹99.50");
        assert_eq!(format_amount(None), "-");
    }

    #[test]
    fn test_format_payment_time() {
        assert_eq!(
            format_payment_time(Some("2024-06-15T10:30:00Z")),
            "2024-06-15 10:30"
        );
        assert_eq!(
            format_payment_time(Some("2024-06-15T10:30:00")),
            "2024-06-15 10:30"
        );
        assert_eq!(format_payment_time(Some("not a date")), "not a date");
        assert_eq!(format_payment_time(None), "-");
    }
}
