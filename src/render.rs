//! Text rendering of the active pane. Exactly one pane is rendered per
//! state; the analysis pane is a read-only projection of the cached rows.

use crate::state::{DashboardState, View};

pub fn render(state: &DashboardState) -> String {
    match state.active {
        View::Dashboard => render_dashboard(state),
        View::Upload => pane_header("upload", "drop a sales CSV on the backend, then enter 'uploaded'"),
        View::Analysis => render_analysis(state),
        View::Staff => pane_header("staff", "per-staff performance (served by the backend)"),
        View::Admin => pane_header("admin", "store and user administration (served by the backend)"),
    }
}

fn pane_header(name: &str, subtitle: &str) -> String {
    format!("== {} ==\n{}\n", name, subtitle)
}

fn render_dashboard(state: &DashboardState) -> String {
    let mut out = pane_header("dashboard", "sales overview");
    if state.has_analysis() {
        out.push_str(&format!(
            "cached analysis: {} daily rows, {} product rows\n",
            state.daily.len(),
            state.product.len()
        ));
    } else {
        out.push_str("no analysis fetched yet; enter 'analysis' to load summaries\n");
    }
    out
}

fn render_analysis(state: &DashboardState) -> String {
    let mut out = pane_header("analysis", "daily and product summaries");

    out.push_str(&format!(
        "{:<12} {:<8} {:>12} {:>12} {:>6}\n",
        "date", "store", "sales", "profit", "txns"
    ));
    let mut sales_total = 0.0;
    let mut profit_total = 0.0;
    let mut txn_total: u64 = 0;
    for row in &state.daily {
        out.push_str(&format!(
            "{:<12} {:<8} {:>12.2} {:>12.2} {:>6}\n",
            row.date, row.store_code, row.total_sales, row.gross_profit, row.transaction_count
        ));
        sales_total += row.total_sales;
        profit_total += row.gross_profit;
        txn_total += row.transaction_count;
    }
    out.push_str(&format!(
        "{:<12} {:<8} {:>12.2} {:>12.2} {:>6}\n\n",
        "total", "", sales_total, profit_total, txn_total
    ));

    out.push_str(&format!(
        "{:<24} {:>12} {:>12} {:>6}\n",
        "product", "sales", "profit", "qty"
    ));
    for row in &state.product {
        out.push_str(&format!(
            "{:<24} {:>12.2} {:>12.2} {:>6}\n",
            row.product_name, row.total_sales, row.total_gross_profit, row.total_quantity
        ));
    }
    if state.daily.is_empty() && state.product.is_empty() {
        out.push_str("(no rows cached)\n");
    }
    out
}
