//! Diagnostic tool: fetch both summaries once and dump them as JSON.
//!
//! Talks to whatever API_BASE/API_MODE point at, using the same client the
//! session uses, so backend problems can be reproduced outside the UI.

use anyhow::Result;
use serde_json::json;

use salesdash::api::ApiKind;
use salesdash::state::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::from_env();
    let api = ApiKind::from_env().build(cfg)?;

    let (daily, product) = tokio::join!(api.fetch_daily(), api.fetch_product());

    let report = json!({
        "daily": match &daily {
            Ok(rows) => json!({ "rows": rows.len(), "data": rows }),
            Err(e) => json!({ "error": e.to_string() }),
        },
        "product": match &product {
            Ok(rows) => json!({ "rows": rows.len(), "data": rows }),
            Err(e) => json!({ "error": e.to_string() }),
        },
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    if daily.is_err() || product.is_err() {
        std::process::exit(1);
    }
    Ok(())
}
