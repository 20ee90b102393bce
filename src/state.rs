use serde::{Deserialize, Serialize};

use crate::api::{DailySummaryRow, ProductSummaryRow};

/// Session configuration, read once at startup.
#[derive(Clone)]
pub struct Config {
    pub api_base: String,
    pub http_timeout_secs: u64,
    /// Optional summary filters forwarded to the backend as query parameters.
    pub store_code: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub retry_max: u32,
    pub retry_base_delay_ms: u64,
    pub retry_max_delay_ms: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_base: std::env::var("API_BASE").unwrap_or_else(|_| "http://localhost:8000".to_string()),
            http_timeout_secs: std::env::var("HTTP_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(10),
            store_code: std::env::var("STORE_CODE").ok().filter(|v| !v.is_empty()),
            start_date: std::env::var("START_DATE").ok().filter(|v| !v.is_empty()),
            end_date: std::env::var("END_DATE").ok().filter(|v| !v.is_empty()),
            retry_max: std::env::var("RETRY_MAX").ok().and_then(|v| v.parse().ok()).unwrap_or(2),
            retry_base_delay_ms: std::env::var("RETRY_BASE_MS").ok().and_then(|v| v.parse().ok()).unwrap_or(100),
            retry_max_delay_ms: std::env::var("RETRY_MAX_MS").ok().and_then(|v| v.parse().ok()).unwrap_or(2000),
        }
    }
}

/// The closed set of panes the session can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Dashboard,
    Upload,
    Analysis,
    Staff,
    Admin,
}

impl View {
    pub const ALL: [View; 5] = [
        View::Dashboard,
        View::Upload,
        View::Analysis,
        View::Staff,
        View::Admin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::Upload => "upload",
            View::Analysis => "analysis",
            View::Staff => "staff",
            View::Admin => "admin",
        }
    }

    pub fn parse(s: &str) -> Option<View> {
        match s {
            "dashboard" => Some(View::Dashboard),
            "upload" => Some(View::Upload),
            "analysis" => Some(View::Analysis),
            "staff" => Some(View::Staff),
            "admin" => Some(View::Admin),
            _ => None,
        }
    }
}

impl Default for View {
    fn default() -> Self {
        View::Dashboard
    }
}

/// All session-visible state: the active pane plus the cached summary rows
/// backing the analysis pane. Rows are replaced wholesale on a successful
/// analysis fetch, never mutated in place.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub active: View,
    pub daily: Vec<DailySummaryRow>,
    pub product: Vec<ProductSummaryRow>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_analysis(&self) -> bool {
        !self.daily.is_empty() || !self.product.is_empty()
    }

    /// Joint commit: both row sequences and the pane flip happen in one
    /// synchronous step, so no reader observes one without the other.
    pub fn commit_analysis(&mut self, daily: Vec<DailySummaryRow>, product: Vec<ProductSummaryRow>) {
        self.daily = daily;
        self.product = product;
        self.active = View::Analysis;
    }
}
