use anyhow::{anyhow, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tokio::time::Duration;
use url::Url;

use crate::api::retry::{retry_async, RetryConfig};
use crate::api::{DailySummaryRow, ProductSummaryRow, SummaryApi};
use crate::state::Config;

/// Summary client against the sales backend's REST surface.
pub struct HttpSummaryApi {
    client: Client,
    base: Url,
    store_code: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
    retry: RetryConfig,
}

impl HttpSummaryApi {
    pub fn new(cfg: Config) -> Result<Self> {
        let base = Url::parse(&cfg.api_base)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(cfg.http_timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base,
            store_code: cfg.store_code.clone(),
            start_date: cfg.start_date.clone(),
            end_date: cfg.end_date.clone(),
            retry: RetryConfig::from_config(&cfg),
        })
    }

    fn summary_url(&self, leaf: &str) -> Result<Url> {
        let mut url = self.base.clone();
        // Url::join with an absolute path would drop any path prefix on
        // API_BASE (reverse-proxy mounts like http://host/sales), so extend
        // the base's own path instead.
        url.path_segments_mut()
            .map_err(|_| anyhow!("API_BASE {} cannot carry a path", self.base))?
            .pop_if_empty()
            .extend(["api", "summary", leaf]);
        {
            let mut query = url.query_pairs_mut();
            if let Some(code) = &self.store_code {
                query.append_pair("store_code", code);
            }
            if let Some(start) = &self.start_date {
                query.append_pair("start_date", start);
            }
            if let Some(end) = &self.end_date {
                query.append_pair("end_date", end);
            }
        }
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T> {
        let resp = self.client.get(url.clone()).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(anyhow!("GET {} returned {}", url, status));
        }
        Ok(resp.json().await?)
    }
}

#[async_trait::async_trait]
impl SummaryApi for HttpSummaryApi {
    async fn fetch_daily(&self) -> Result<Vec<DailySummaryRow>> {
        let url = self.summary_url("daily")?;
        retry_async(&self.retry, "fetch_daily", || self.get_json(&url)).await
    }

    async fn fetch_product(&self) -> Result<Vec<ProductSummaryRow>> {
        let url = self.summary_url("product")?;
        retry_async(&self.retry, "fetch_product", || self.get_json(&url)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_at(base: &str, store: Option<&str>, start: Option<&str>, end: Option<&str>) -> HttpSummaryApi {
        let cfg = Config {
            api_base: base.to_string(),
            http_timeout_secs: 5,
            store_code: store.map(str::to_string),
            start_date: start.map(str::to_string),
            end_date: end.map(str::to_string),
            retry_max: 0,
            retry_base_delay_ms: 1,
            retry_max_delay_ms: 1,
        };
        HttpSummaryApi::new(cfg).unwrap()
    }

    #[test]
    fn summary_url_without_filters_has_no_query() {
        let api = api_at("http://localhost:8000", None, None, None);
        let url = api.summary_url("daily").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/summary/daily");
    }

    #[test]
    fn summary_url_keeps_base_path_prefix() {
        let api = api_at("http://localhost:8000/sales", None, None, None);
        let url = api.summary_url("daily").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/sales/api/summary/daily");

        // Trailing slash on the base must not produce an empty segment.
        let api = api_at("http://localhost:8000/sales/", None, None, None);
        let url = api.summary_url("product").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/sales/api/summary/product");
    }

    #[test]
    fn summary_url_carries_filters_as_query_params() {
        let api = api_at("http://localhost:8000", Some("S1"), Some("2024-01-01"), Some("2024-01-31"));
        let url = api.summary_url("product").unwrap();
        assert_eq!(url.path(), "/api/summary/product");
        let query: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert!(query.contains(&("store_code".to_string(), "S1".to_string())));
        assert!(query.contains(&("start_date".to_string(), "2024-01-01".to_string())));
        assert!(query.contains(&("end_date".to_string(), "2024-01-31".to_string())));
    }
}
