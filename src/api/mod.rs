use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::state::Config;

mod http;
mod stub;
pub mod retry;

pub use http::HttpSummaryApi;
pub use stub::StubSummaryApi;

/// One pre-aggregated day of sales for one store, as returned by
/// `GET /api/summary/daily`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummaryRow {
    pub date: String,
    pub store_code: String,
    pub total_sales: f64,
    pub gross_profit: f64,
    pub transaction_count: u64,
}

/// One pre-aggregated product line, as returned by
/// `GET /api/summary/product`. The backend also emits a `product_code`
/// field; the session has no use for it and serde drops it on the floor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummaryRow {
    pub product_name: String,
    pub total_sales: f64,
    pub total_gross_profit: f64,
    pub total_quantity: u64,
}

#[derive(Clone, Copy, Debug)]
pub enum ApiKind {
    Http,
    Stub,
}

impl ApiKind {
    pub fn from_env() -> Self {
        match std::env::var("API_MODE").unwrap_or_else(|_| "http".to_string()).as_str() {
            "stub" => ApiKind::Stub,
            _ => ApiKind::Http,
        }
    }

    pub fn build(self, cfg: Config) -> Result<Box<dyn SummaryApi + Send + Sync>> {
        match self {
            ApiKind::Http => Ok(Box::new(HttpSummaryApi::new(cfg)?)),
            ApiKind::Stub => Ok(Box::new(StubSummaryApi::default())),
        }
    }
}

/// The summary-retrieval collaborator. Everything upstream of these two
/// reads (CSV ingestion, aggregation, persistence) lives behind it.
#[async_trait]
pub trait SummaryApi {
    async fn fetch_daily(&self) -> Result<Vec<DailySummaryRow>>;
    async fn fetch_product(&self) -> Result<Vec<ProductSummaryRow>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn daily_row_tolerates_extra_backend_fields() {
        let payload = r#"{
            "date": "2024-01-01",
            "store_code": "S1",
            "total_sales": 1000.0,
            "gross_profit": 200.0,
            "transaction_count": 5,
            "store_name": "Main St"
        }"#;
        let row: DailySummaryRow = serde_json::from_str(payload).unwrap();
        assert_eq!(row.store_code, "S1");
        assert_eq!(row.transaction_count, 5);
    }

    #[test]
    fn product_row_parses_backend_shape() {
        let payload = r#"{
            "product_code": "P-001",
            "product_name": "Widget",
            "total_quantity": 10,
            "total_sales": 500.0,
            "total_gross_profit": 100.0
        }"#;
        let row: ProductSummaryRow = serde_json::from_str(payload).unwrap();
        assert_eq!(row.product_name, "Widget");
        assert_eq!(row.total_quantity, 10);
    }
}
