use serde_json::json;

use crate::api::SummaryApi;
use crate::logging::{json_log, log, obj, payload_hash, v_num, v_str, Domain, Level};
use crate::state::{DashboardState, View};

/// Result of one analysis request, reported as data so the caller owns
/// display policy. The controller never partially applies a fetch pair.
#[derive(Debug)]
pub enum AnalysisOutcome {
    Applied { daily_rows: usize, product_rows: usize },
    Failed { reason: String },
}

impl AnalysisOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, AnalysisOutcome::Applied { .. })
    }
}

/// Owns the session state and mediates between navigation events and the
/// summary collaborator. Operations take `&mut self`, so the session's one
/// logical thread of control is enforced by the borrow checker: an analysis
/// request runs to completion before the next event is applied.
pub struct ViewController {
    state: DashboardState,
    api: Box<dyn SummaryApi + Send + Sync>,
}

impl ViewController {
    pub fn new(api: Box<dyn SummaryApi + Send + Sync>) -> Self {
        Self {
            state: DashboardState::new(),
            api,
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn active(&self) -> View {
        self.state.active
    }

    /// Synchronous pane switch. Rows are untouched. Callers route the
    /// analysis pane through `request_analysis` instead; a direct
    /// `select(Analysis)` still renders, against whatever rows are cached.
    pub fn select(&mut self, view: View) {
        let prev = self.state.active;
        self.state.active = view;
        log(
            Level::Debug,
            Domain::View,
            "pane_change",
            obj(&[
                ("from", v_str(prev.as_str())),
                ("to", v_str(view.as_str())),
            ]),
        );
    }

    /// Fetch both summaries concurrently and commit them jointly. On any
    /// failure the state is left exactly as it was: no pane flip, no
    /// partial row update. The failure is logged and returned as data.
    pub async fn request_analysis(&mut self) -> AnalysisOutcome {
        let (daily, product) = tokio::join!(self.api.fetch_daily(), self.api.fetch_product());

        match (daily, product) {
            (Ok(daily), Ok(product)) => {
                let hash = payload_hash(&json!({ "daily": &daily, "product": &product }));
                let outcome = AnalysisOutcome::Applied {
                    daily_rows: daily.len(),
                    product_rows: product.len(),
                };
                self.state.commit_analysis(daily, product);
                log(
                    Level::Info,
                    Domain::Audit,
                    "analysis_commit",
                    obj(&[
                        ("daily_rows", v_num(self.state.daily.len() as f64)),
                        ("product_rows", v_num(self.state.product.len() as f64)),
                        ("payload_hash", v_str(&hash)),
                    ]),
                );
                outcome
            }
            (daily, product) => {
                let reason = [
                    daily.err().map(|e| format!("daily: {}", e)),
                    product.err().map(|e| format!("product: {}", e)),
                ]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
                .join("; ");
                log(
                    Level::Error,
                    Domain::Fetch,
                    "analysis_failed",
                    obj(&[
                        ("reason", v_str(&reason)),
                        ("active", v_str(self.state.active.as_str())),
                    ]),
                );
                AnalysisOutcome::Failed { reason }
            }
        }
    }

    /// Upload collaborator callback: return to the dashboard pane. Cached
    /// rows are kept as-is; the next analysis request refreshes them.
    pub fn on_upload_complete(&mut self) {
        self.state.active = View::Dashboard;
        json_log(
            "upload",
            obj(&[("event", v_str("upload_complete")), ("pane", v_str("dashboard"))]),
        );
    }
}
