//! HTTP client for the remote transaction service
//!
//! The remote service owns all transaction records; this crate is the only
//! place that talks to it. Sessions are cookie-based: a successful login
//! sets a cookie in the client's jar and every later call carries it.
//! Endpoints:
//! - POST /api/auth/login, POST /api/auth/register
//! - GET  /transactions (full list; doubles as the session probe)
//! - GET  /transactions/school/{school_id}
//! - GET  /transaction-status/{custom_order_id}
//! - POST /create-payment

pub mod error;

use async_trait::async_trait;
use log::{debug, warn};
use paydesk_core::Transaction;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

pub use error::{ClientError, ClientResult};

/// Login request body
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration request body
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Student details embedded in a payment-creation request
#[derive(Debug, Clone, Serialize)]
pub struct StudentInfo {
    pub name: String,
    pub id: String,
    pub email: String,
}

/// Payment-creation request body
#[derive(Debug, Clone, Serialize)]
pub struct CreatePaymentRequest {
    pub school_id: String,
    pub trustee_id: String,
    pub student_info: StudentInfo,
    pub gateway_name: String,
    pub amount: String,
    pub callback_url: String,
}

#[derive(Debug, Deserialize)]
struct CreatePaymentResponse {
    #[serde(rename = "paymentPageUrl")]
    payment_page_url: String,
}

/// The remote transaction service contract
///
/// Views depend on this trait rather than the concrete HTTP client so they
/// can be exercised against in-memory fixtures.
#[async_trait]
pub trait TransactionService: Send + Sync {
    /// Authenticate; the session cookie is stored client-side on success
    async fn login(&self, request: &LoginRequest) -> ClientResult<()>;

    /// Create an account
    async fn register(&self, request: &RegisterRequest) -> ClientResult<()>;

    /// Fetch the full transaction list
    async fn transactions(&self) -> ClientResult<Vec<Transaction>>;

    /// Fetch transactions for one school
    async fn school_transactions(&self, school_id: &str) -> ClientResult<Vec<Transaction>>;

    /// Look up one transaction's status; the result is arbitrary JSON
    /// rendered verbatim by the caller
    async fn transaction_status(&self, custom_order_id: &str) -> ClientResult<Value>;

    /// Create a payment session; returns the payment page URL to navigate to
    async fn create_payment(&self, request: &CreatePaymentRequest) -> ClientResult<String>;

    /// Session probe: a read against a protected endpoint. Any failure,
    /// transport or auth, counts as "not authenticated".
    async fn probe_session(&self) -> bool {
        self.transactions().await.is_ok()
    }
}

/// reqwest-backed implementation of [`TransactionService`]
pub struct HttpTransactionService {
    base_url: String,
    http: reqwest::Client,
}

impl HttpTransactionService {
    /// Build a client against the given base URL
    pub fn new(base_url: &str, timeout: Duration) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Turn a non-2xx response into `ClientError::Server`, pulling the
    /// `message` field out of the body when the server sent one
    async fn expect_ok(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response
            .json::<Value>()
            .await
            .ok()
            .and_then(|body| {
                body.get("message")
                    .and_then(Value::as_str)
                    .map(str::to_string)
            })
            .unwrap_or_default();
        Err(ClientError::Server {
            status: status.as_u16(),
            message,
        })
    }

    async fn get_list(&self, path: &str) -> ClientResult<Vec<Transaction>> {
        let response = self.http.get(self.url(path)).send().await?;
        let body = Self::expect_ok(response).await?.json::<Value>().await?;
        Ok(normalize_transactions(body))
    }
}

#[async_trait]
impl TransactionService for HttpTransactionService {
    async fn login(&self, request: &LoginRequest) -> ClientResult<()> {
        debug!("login as {}", request.email);
        let response = self
            .http
            .post(self.url("/api/auth/login"))
            .json(request)
            .send()
            .await?;
        Self::expect_ok(response).await?;
        Ok(())
    }

    async fn register(&self, request: &RegisterRequest) -> ClientResult<()> {
        let response = self
            .http
            .post(self.url("/api/auth/register"))
            .json(request)
            .send()
            .await?;
        Self::expect_ok(response).await?;
        Ok(())
    }

    async fn transactions(&self) -> ClientResult<Vec<Transaction>> {
        self.get_list("/transactions").await
    }

    async fn school_transactions(&self, school_id: &str) -> ClientResult<Vec<Transaction>> {
        let path = format!("/transactions/school/{}", urlencoding::encode(school_id));
        self.get_list(&path).await
    }

    async fn transaction_status(&self, custom_order_id: &str) -> ClientResult<Value> {
        let path = format!(
            "/transaction-status/{}",
            urlencoding::encode(custom_order_id)
        );
        let response = self.http.get(self.url(&path)).send().await?;
        let body = Self::expect_ok(response).await?.json::<Value>().await?;
        Ok(body)
    }

    async fn create_payment(&self, request: &CreatePaymentRequest) -> ClientResult<String> {
        let response = self
            .http
            .post(self.url("/create-payment"))
            .json(request)
            .send()
            .await?;
        let body = Self::expect_ok(response)
            .await?
            .json::<CreatePaymentResponse>()
            .await?;
        Ok(body.payment_page_url)
    }
}

/// Normalize a list response into transactions
///
/// List endpoints return either a bare array or an object wrapping the
/// array under a `transactions` key. Anything else, and any row that fails
/// to deserialize, degrades to nothing rather than an error.
pub fn normalize_transactions(body: Value) -> Vec<Transaction> {
    let items = match body {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("transactions") {
            Some(Value::Array(items)) => items,
            _ => {
                warn!("list response was neither an array nor {{transactions: [...]}}");
                return Vec::new();
            }
        },
        _ => return Vec::new(),
    };

    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<Transaction>(item) {
            Ok(tx) => Some(tx),
            Err(err) => {
                warn!("skipping malformed transaction row: {}", err);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_bare_array() {
        let body = json!([
            {"collect_id": "A", "status": "success"},
            {"collect_id": "B", "status": "pending"}
        ]);
        let txs = normalize_transactions(body);
        assert_eq!(txs.len(), 2);
        assert_eq!(txs[0].collect_id, "A");
    }

    #[test]
    fn test_normalize_wrapped_object() {
        let body = json!({"transactions": [{"collect_id": "A"}]});
        let txs = normalize_transactions(body);
        assert_eq!(txs.len(), 1);
    }

    #[test]
    fn test_normalize_unexpected_shapes() {
        assert!(normalize_transactions(json!({"rows": []})).is_empty());
        assert!(normalize_transactions(json!("nope")).is_empty());
        assert!(normalize_transactions(json!(42)).is_empty());
    }

    #[test]
    fn test_normalize_skips_malformed_rows() {
        let body = json!([
            {"collect_id": "A"},
            "not an object",
            {"collect_id": "B", "order_amount": 100.0}
        ]);
        let txs = normalize_transactions(body);
        assert_eq!(txs.len(), 2);
        assert_eq!(txs[1].order_amount, Some(100.0));
    }

    #[test]
    fn test_create_payment_response_field_name() {
        let parsed: CreatePaymentResponse =
            serde_json::from_value(json!({"paymentPageUrl": "https://pay.example/x"})).unwrap();
        assert_eq!(parsed.payment_page_url, "https://pay.example/x");
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let service =
            HttpTransactionService::new("http://localhost:3000/", Duration::from_secs(5)).unwrap();
        assert_eq!(service.url("/transactions"), "http://localhost:3000/transactions");
    }
}
