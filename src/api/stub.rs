use anyhow::Result;

use crate::api::{DailySummaryRow, ProductSummaryRow, SummaryApi};

/// Offline stand-in for the backend, selected with `API_MODE=stub`.
/// Returns a small fixed dataset so the session can be driven end to end
/// without a server.
#[derive(Default)]
pub struct StubSummaryApi;

impl StubSummaryApi {
    pub fn daily_rows() -> Vec<DailySummaryRow> {
        vec![
            DailySummaryRow {
                date: "2024-01-01".to_string(),
                store_code: "S1".to_string(),
                total_sales: 1000.0,
                gross_profit: 200.0,
                transaction_count: 5,
            },
            DailySummaryRow {
                date: "2024-01-02".to_string(),
                store_code: "S1".to_string(),
                total_sales: 1800.0,
                gross_profit: 350.0,
                transaction_count: 9,
            },
        ]
    }

    pub fn product_rows() -> Vec<ProductSummaryRow> {
        vec![ProductSummaryRow {
            product_name: "Widget".to_string(),
            total_sales: 500.0,
            total_gross_profit: 100.0,
            total_quantity: 10,
        }]
    }
}

#[async_trait::async_trait]
impl SummaryApi for StubSummaryApi {
    async fn fetch_daily(&self) -> Result<Vec<DailySummaryRow>> {
        Ok(Self::daily_rows())
    }

    async fn fetch_product(&self) -> Result<Vec<ProductSummaryRow>> {
        Ok(Self::product_rows())
    }
}
