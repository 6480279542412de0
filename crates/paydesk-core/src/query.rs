//! Filtering, sorting, and pagination over an in-memory transaction set
//!
//! `compute_view` is a pure function of (transaction set, query parameters):
//! the same inputs always produce the same page. State transitions that the
//! UI triggers (sort toggles, filter edits) live on `QueryParams` so the page
//! reset policy is encoded in one place.

use crate::Transaction;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Page sizes the table offers
pub const PAGE_SIZES: [usize; 4] = [5, 10, 25, 50];

/// Default rows per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Sortable table columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    CollectId,
    SchoolId,
    Gateway,
    OrderAmount,
    TransactionAmount,
    Status,
    CustomOrderId,
    PaymentTime,
}

impl Default for SortField {
    fn default() -> Self {
        SortField::PaymentTime
    }
}

impl std::str::FromStr for SortField {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "collect_id" => Ok(SortField::CollectId),
            "school_id" => Ok(SortField::SchoolId),
            "gateway" => Ok(SortField::Gateway),
            "order_amount" => Ok(SortField::OrderAmount),
            "transaction_amount" => Ok(SortField::TransactionAmount),
            "status" => Ok(SortField::Status),
            "custom_order_id" => Ok(SortField::CustomOrderId),
            "payment_time" => Ok(SortField::PaymentTime),
            _ => Err(format!("Invalid sort field: {}", s)),
        }
    }
}

impl std::fmt::Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortField::CollectId => write!(f, "collect_id"),
            SortField::SchoolId => write!(f, "school_id"),
            SortField::Gateway => write!(f, "gateway"),
            SortField::OrderAmount => write!(f, "order_amount"),
            SortField::TransactionAmount => write!(f, "transaction_amount"),
            SortField::Status => write!(f, "status"),
            SortField::CustomOrderId => write!(f, "custom_order_id"),
            SortField::PaymentTime => write!(f, "payment_time"),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::Descending
    }
}

impl SortOrder {
    /// The opposite direction
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Ascending),
            "desc" | "descending" => Ok(SortOrder::Descending),
            _ => Err(format!("Invalid sort order: {}", s)),
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Ascending => write!(f, "asc"),
            SortOrder::Descending => write!(f, "desc"),
        }
    }
}

/// Combined filter/sort/pagination state driving `compute_view`
#[derive(Debug, Clone, PartialEq)]
pub struct QueryParams {
    /// Debounced search term; matched as a lowercase substring against
    /// collect_id, gateway, school_id, and custom_order_id
    pub search: String,
    /// Status filter values; empty means no status filtering
    pub statuses: Vec<String>,
    /// School filter values (substring match); empty means no filtering
    pub schools: Vec<String>,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
    /// Zero-based page index
    pub page: usize,
    pub page_size: usize,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            search: String::new(),
            statuses: Vec::new(),
            schools: Vec::new(),
            sort_field: SortField::default(),
            sort_order: SortOrder::default(),
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl QueryParams {
    /// Update the effective search term; trims and resets to the first page
    pub fn set_search(&mut self, term: &str) {
        self.search = term.trim().to_string();
        self.page = 0;
    }

    /// Replace the status filter set; resets to the first page
    pub fn set_statuses(&mut self, statuses: Vec<String>) {
        self.statuses = statuses;
        self.page = 0;
    }

    /// Replace the school filter set; resets to the first page
    pub fn set_schools(&mut self, schools: Vec<String>) {
        self.schools = schools;
        self.page = 0;
    }

    /// Select a sort column: toggles direction on the active column,
    /// otherwise switches to the new column ascending. Resets to page 0.
    pub fn select_sort(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_order = self.sort_order.toggled();
        } else {
            self.sort_field = field;
            self.sort_order = SortOrder::Ascending;
        }
        self.page = 0;
    }

    /// Change the page size; unknown sizes are ignored. Resets to page 0.
    pub fn set_page_size(&mut self, size: usize) {
        if PAGE_SIZES.contains(&size) {
            self.page_size = size;
            self.page = 0;
        }
    }
}

/// One derived page of the transaction table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewPage {
    /// The rows for the requested page, in display order
    pub rows: Vec<Transaction>,
    /// Matching row count before pagination
    pub total_count: usize,
}

/// Derive the page to display from the full fetched set
///
/// Filter, then stable-sort, then slice. A `page` beyond the filtered range
/// yields empty `rows` with `total_count` unchanged; it is not corrected
/// here, the caller decides whether to move the user back.
pub fn compute_view(transactions: &[Transaction], params: &QueryParams) -> ViewPage {
    let search = params.search.to_lowercase();
    let statuses: Vec<String> = params.statuses.iter().map(|s| s.to_lowercase()).collect();
    let schools: Vec<String> = params.schools.iter().map(|s| s.to_lowercase()).collect();

    let mut matched: Vec<Transaction> = transactions
        .iter()
        .filter(|tx| retained(tx, &search, &statuses, &schools))
        .cloned()
        .collect();

    // sort_by is stable, so ties keep the original fetch order
    matched.sort_by(|a, b| {
        let ordering = compare_field(a, b, params.sort_field);
        match params.sort_order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });

    let total_count = matched.len();
    let rows: Vec<Transaction> = matched
        .into_iter()
        .skip(params.page.saturating_mul(params.page_size))
        .take(params.page_size)
        .collect();

    ViewPage { rows, total_count }
}

/// Distinct lowercased status values in fetch order, for the filter dropdown
pub fn status_options(transactions: &[Transaction]) -> Vec<String> {
    let mut seen = Vec::new();
    for tx in transactions {
        if let Some(status) = &tx.status {
            let lowered = status.to_lowercase();
            if !lowered.is_empty() && !seen.contains(&lowered) {
                seen.push(lowered);
            }
        }
    }
    seen
}

/// Distinct school ids in fetch order, for the filter dropdown
pub fn school_options(transactions: &[Transaction]) -> Vec<String> {
    let mut seen = Vec::new();
    for tx in transactions {
        if let Some(school) = &tx.school_id {
            if !school.is_empty() && !seen.contains(school) {
                seen.push(school.clone());
            }
        }
    }
    seen
}

fn retained(tx: &Transaction, search: &str, statuses: &[String], schools: &[String]) -> bool {
    if !statuses.is_empty() {
        let status = tx.status.as_deref().unwrap_or("").to_lowercase();
        if !statuses.iter().any(|s| *s == status) {
            return false;
        }
    }

    if !schools.is_empty() {
        let school = tx.school_id.as_deref().unwrap_or("").to_lowercase();
        if !schools.iter().any(|s| school.contains(s.as_str())) {
            return false;
        }
    }

    if !search.is_empty() {
        let haystacks = [
            tx.collect_id.as_str(),
            tx.gateway.as_deref().unwrap_or(""),
            tx.school_id.as_deref().unwrap_or(""),
            tx.custom_order_id.as_deref().unwrap_or(""),
        ];
        if !haystacks
            .iter()
            .any(|h| h.to_lowercase().contains(search))
        {
            return false;
        }
    }

    true
}

/// Pairwise column comparator: numeric when both sides parse as numbers,
/// otherwise lowercased string order. A column mixing numeric and
/// non-numeric values therefore compares differently per pair; that quirk
/// is carried over from the source behavior on purpose.
fn compare_field(a: &Transaction, b: &Transaction, field: SortField) -> Ordering {
    let (na, nb) = (field_number(a, field), field_number(b, field));
    if let (Some(na), Some(nb)) = (na, nb) {
        return na.partial_cmp(&nb).unwrap_or(Ordering::Equal);
    }
    field_text(a, field)
        .to_lowercase()
        .cmp(&field_text(b, field).to_lowercase())
}

fn field_number(tx: &Transaction, field: SortField) -> Option<f64> {
    match field {
        SortField::OrderAmount => tx.order_amount,
        SortField::TransactionAmount => tx.transaction_amount,
        _ => field_text(tx, field).parse::<f64>().ok(),
    }
}

fn field_text(tx: &Transaction, field: SortField) -> String {
    match field {
        SortField::CollectId => tx.collect_id.clone(),
        SortField::SchoolId => tx.school_id.clone().unwrap_or_default(),
        SortField::Gateway => tx.gateway.clone().unwrap_or_default(),
        SortField::OrderAmount => tx
            .order_amount
            .map(|v| v.to_string())
            .unwrap_or_default(),
        SortField::TransactionAmount => tx
            .transaction_amount
            .map(|v| v.to_string())
            .unwrap_or_default(),
        SortField::Status => tx.status.clone().unwrap_or_default(),
        SortField::CustomOrderId => tx.custom_order_id.clone().unwrap_or_default(),
        SortField::PaymentTime => tx.payment_time.clone().unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(collect_id: &str, status: &str, school_id: &str, payment_time: &str) -> Transaction {
        Transaction {
            collect_id: collect_id.to_string(),
            school_id: Some(school_id.to_string()),
            gateway: Some("PhonePe".to_string()),
            order_amount: Some(2000.0),
            transaction_amount: Some(2200.0),
            status: Some(status.to_string()),
            custom_order_id: Some(format!("ORD-{}", collect_id)),
            payment_time: Some(payment_time.to_string()),
        }
    }

    fn sample() -> Vec<Transaction> {
        vec![
            tx("A", "success", "S1", "100"),
            tx("B", "pending", "S2", "200"),
        ]
    }

    #[test]
    fn test_compute_view_is_pure() {
        let set = sample();
        let params = QueryParams::default();
        let first = compute_view(&set, &params);
        let second = compute_view(&set, &params);
        assert_eq!(first, second);
    }

    #[test]
    fn test_status_filter_narrows() {
        let set = sample();
        let mut params = QueryParams::default();
        params.set_statuses(vec!["success".to_string()]);
        let view = compute_view(&set, &params);
        assert_eq!(view.total_count, 1);
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].collect_id, "A");
    }

    #[test]
    fn test_status_filter_case_insensitive() {
        let set = sample();
        let mut params = QueryParams::default();
        params.set_statuses(vec!["SUCCESS".to_string()]);
        assert_eq!(compute_view(&set, &params).total_count, 1);
    }

    #[test]
    fn test_school_filter_substring() {
        let mut set = sample();
        set.push(tx("C", "failed", "other-school", "300"));
        let mut params = QueryParams::default();
        params.set_schools(vec!["s1".to_string()]);
        let view = compute_view(&set, &params);
        assert_eq!(view.total_count, 1);
        assert_eq!(view.rows[0].collect_id, "A");
    }

    #[test]
    fn test_search_matches_school_id_substring() {
        let set = sample();
        let mut params = QueryParams::default();
        params.set_search("s1");
        let view = compute_view(&set, &params);
        assert_eq!(view.total_count, 1);
        assert_eq!(view.rows[0].collect_id, "A");
    }

    #[test]
    fn test_search_matches_custom_order_id() {
        let set = sample();
        let mut params = QueryParams::default();
        params.set_search("ord-b");
        let view = compute_view(&set, &params);
        assert_eq!(view.total_count, 1);
        assert_eq!(view.rows[0].collect_id, "B");
    }

    #[test]
    fn test_search_ignores_missing_fields() {
        let set = vec![Transaction {
            collect_id: "X".to_string(),
            school_id: None,
            gateway: None,
            order_amount: None,
            transaction_amount: None,
            status: None,
            custom_order_id: None,
            payment_time: None,
        }];
        let mut params = QueryParams::default();
        params.set_search("anything");
        assert_eq!(compute_view(&set, &params).total_count, 0);
        params.set_search("x");
        assert_eq!(compute_view(&set, &params).total_count, 1);
    }

    #[test]
    fn test_sort_payment_time_both_directions() {
        let set = sample();
        let mut params = QueryParams {
            sort_field: SortField::PaymentTime,
            sort_order: SortOrder::Ascending,
            ..QueryParams::default()
        };
        let view = compute_view(&set, &params);
        assert_eq!(view.rows[0].collect_id, "A");
        assert_eq!(view.rows[1].collect_id, "B");

        params.sort_order = SortOrder::Descending;
        let view = compute_view(&set, &params);
        assert_eq!(view.rows[0].collect_id, "B");
        assert_eq!(view.rows[1].collect_id, "A");
    }

    #[test]
    fn test_sort_falls_back_to_string_order() {
        let mut set = sample();
        set[0].payment_time = Some("2024-06-15T10:00:00Z".to_string());
        set[1].payment_time = Some("2024-01-02T10:00:00Z".to_string());
        let params = QueryParams {
            sort_order: SortOrder::Ascending,
            ..QueryParams::default()
        };
        let view = compute_view(&set, &params);
        assert_eq!(view.rows[0].collect_id, "B");
    }

    #[test]
    fn test_sort_stable_under_reapplication() {
        let mut set = sample();
        set.push(tx("C", "success", "S3", "100"));
        let params = QueryParams {
            sort_order: SortOrder::Ascending,
            ..QueryParams::default()
        };
        let once = compute_view(&set, &params);
        let again = compute_view(&once.rows, &params);
        assert_eq!(once.rows, again.rows);
        // ties keep fetch order
        assert_eq!(once.rows[0].collect_id, "A");
        assert_eq!(once.rows[1].collect_id, "C");
    }

    #[test]
    fn test_sort_toggle_twice_restores_order() {
        let set = sample();
        let mut params = QueryParams::default();
        let original = compute_view(&set, &params);
        params.select_sort(params.sort_field);
        params.select_sort(params.sort_field);
        assert_eq!(compute_view(&set, &params).rows, original.rows);
    }

    #[test]
    fn test_select_sort_new_column_resets_ascending_and_page() {
        let mut params = QueryParams {
            page: 3,
            sort_order: SortOrder::Descending,
            ..QueryParams::default()
        };
        params.select_sort(SortField::Gateway);
        assert_eq!(params.sort_field, SortField::Gateway);
        assert_eq!(params.sort_order, SortOrder::Ascending);
        assert_eq!(params.page, 0);
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut params = QueryParams {
            page: 2,
            ..QueryParams::default()
        };
        params.set_statuses(vec!["failed".to_string()]);
        assert_eq!(params.page, 0);

        params.page = 2;
        params.set_search("abc");
        assert_eq!(params.page, 0);
    }

    #[test]
    fn test_pagination_row_count() {
        let set: Vec<Transaction> = (0..23)
            .map(|i| tx(&format!("T{:02}", i), "success", "S1", &i.to_string()))
            .collect();
        let mut params = QueryParams {
            sort_order: SortOrder::Ascending,
            ..QueryParams::default()
        };
        // |rows| = min(page_size, max(0, total - page * page_size))
        params.page = 0;
        assert_eq!(compute_view(&set, &params).rows.len(), 10);
        params.page = 2;
        assert_eq!(compute_view(&set, &params).rows.len(), 3);
    }

    #[test]
    fn test_page_beyond_range_yields_empty_rows() {
        let set = sample();
        let params = QueryParams {
            page: 9,
            ..QueryParams::default()
        };
        let view = compute_view(&set, &params);
        assert!(view.rows.is_empty());
        assert_eq!(view.total_count, 2);
    }

    #[test]
    fn test_huge_page_index_yields_empty_rows() {
        // page arrives straight from the query string, so the skip offset
        // must saturate instead of overflowing
        let set = sample();
        let params = QueryParams {
            page: usize::MAX,
            ..QueryParams::default()
        };
        let view = compute_view(&set, &params);
        assert!(view.rows.is_empty());
        assert_eq!(view.total_count, 2);
    }

    #[test]
    fn test_set_page_size_rejects_unknown_sizes() {
        let mut params = QueryParams {
            page: 4,
            ..QueryParams::default()
        };
        params.set_page_size(7);
        assert_eq!(params.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(params.page, 4);
        params.set_page_size(25);
        assert_eq!(params.page_size, 25);
        assert_eq!(params.page, 0);
    }

    #[test]
    fn test_option_helpers_dedupe() {
        let mut set = sample();
        set.push(tx("C", "Success", "S1", "300"));
        assert_eq!(status_options(&set), vec!["success", "pending"]);
        assert_eq!(school_options(&set), vec!["S1", "S2"]);
    }

    #[test]
    fn test_sort_field_round_trip() {
        for name in [
            "collect_id",
            "school_id",
            "gateway",
            "order_amount",
            "transaction_amount",
            "status",
            "custom_order_id",
            "payment_time",
        ] {
            let field: SortField = name.parse().unwrap();
            assert_eq!(field.to_string(), name);
        }
        assert!("not_a_column".parse::<SortField>().is_err());
    }
}
