//! Transaction model and in-memory query engine
//!
//! A full transaction set is fetched from the remote service once per view
//! and held in memory; `query::compute_view` derives the page to display
//! from it. Nothing here mutates a transaction or talks to the network.

pub mod debounce;
pub mod query;

use serde::{Deserialize, Serialize};

pub use query::{compute_view, QueryParams, SortField, SortOrder, ViewPage};

/// A single payment record as returned by the remote service
///
/// Every field except `collect_id` may be missing upstream; rendering
/// degrades to placeholders instead of failing. `collect_id` is the stable
/// row identity within one fetched set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Opaque identifier, unique within one fetched set
    #[serde(default)]
    pub collect_id: String,
    /// Owning school
    #[serde(default)]
    pub school_id: Option<String>,
    /// Payment gateway name
    #[serde(default)]
    pub gateway: Option<String>,
    /// Amount requested by the school
    #[serde(default)]
    pub order_amount: Option<f64>,
    /// Amount actually transacted
    #[serde(default)]
    pub transaction_amount: Option<f64>,
    /// Free-form status string; `success`/`pending`/`failed` get badge styling
    #[serde(default)]
    pub status: Option<String>,
    /// Alternate lookup key correlated across systems
    #[serde(default)]
    pub custom_order_id: Option<String>,
    /// Payment timestamp, the default sort key
    #[serde(default)]
    pub payment_time: Option<String>,
}

impl Transaction {
    /// Display classification for the status column
    pub fn status_kind(&self) -> StatusKind {
        StatusKind::classify(self.status.as_deref().unwrap_or(""))
    }
}

/// Recognized status categories for display treatment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Success,
    Pending,
    Failed,
    /// Any unrecognized status value
    Other,
}

impl StatusKind {
    /// Classify a raw status string, case-insensitively
    pub fn classify(status: &str) -> Self {
        match status.to_lowercase().as_str() {
            "success" => StatusKind::Success,
            "pending" => StatusKind::Pending,
            "failed" => StatusKind::Failed,
            _ => StatusKind::Other,
        }
    }
}

impl std::fmt::Display for StatusKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusKind::Success => write!(f, "success"),
            StatusKind::Pending => write!(f, "pending"),
            StatusKind::Failed => write!(f, "failed"),
            StatusKind::Other => write!(f, "other"),
        }
    }
}
