use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Path of the aggregation endpoint serving the overview dashboard
pub const OVERVIEW_PATH: &str = "/api/data/overview";

/// Key of the aggregate series inside a monthly trend point
pub const TOTAL_KEY: &str = "Total";

/// Query parameters for the overview endpoint.
///
/// Absent bounds and an empty product list are omitted from the query string,
/// `search` is always sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverviewQuery {
    /// Inclusive lower bound, "YYYY-MM-DD"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper bound, "YYYY-MM-DD"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// Comma-separated product names
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products: Option<String>,
    #[serde(default)]
    pub search: String,
}

/// Response of the overview endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewResponse {
    pub total_sales: f64,
    #[serde(default)]
    pub previous_total_sales: f64,
    pub total_units: f64,
    #[serde(default)]
    pub previous_total_units: f64,
    #[serde(default)]
    pub avg_order_value: f64,
    #[serde(default)]
    pub previous_avg_order_value: f64,
    #[serde(default)]
    pub total_orders: u64,
    /// Points ordered by month as returned by the backend
    #[serde(default)]
    pub monthly_trend: Vec<MonthlyTrendPoint>,
    /// Rows ranked by the backend, never re-sorted on the client
    #[serde(default)]
    pub product_summary: Vec<ProductSummaryRow>,
    pub date_range: DateBounds,
    /// Full product catalog for the multi-select
    #[serde(default)]
    pub products: Vec<String>,
}

impl OverviewResponse {
    /// `false` when there is nothing to chart for the current filters
    pub fn has_usable_series(&self) -> bool {
        !self.monthly_trend.is_empty() || !self.product_summary.is_empty()
    }
}

/// One month of the trend series.
///
/// Besides `Month` and `Units` the backend sends either a `Total` key or one
/// key per product, so the remaining keys are collected into `values`. A pivot
/// leaves `null` for months without sales; non-numeric entries read as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTrendPoint {
    /// Month in format "YYYY-MM"
    #[serde(rename = "Month")]
    pub month: String,
    #[serde(rename = "Units", default)]
    pub units: f64,
    #[serde(flatten)]
    pub values: BTreeMap<String, Value>,
}

impl MonthlyTrendPoint {
    /// Value of a named series, missing keys read as zero
    pub fn value(&self, key: &str) -> f64 {
        self.values
            .get(key)
            .and_then(Value::as_f64)
            .unwrap_or(0.0)
    }
}

/// Revenue of a single product over the filtered period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummaryRow {
    #[serde(rename = "Product")]
    pub product: String,
    #[serde(rename = "Total")]
    pub total: f64,
}

/// Range of dates available in the dataset, used to constrain the picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateBounds {
    pub min: NaiveDate,
    pub max: NaiveDate,
}

/// Error body returned by the backend on non-2xx responses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
