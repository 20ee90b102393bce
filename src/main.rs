use std::io::{self, BufRead, Write};

use anyhow::Result;

use salesdash::api::ApiKind;
use salesdash::controller::{AnalysisOutcome, ViewController};
use salesdash::events::UiEvent;
use salesdash::logging::{json_log, obj, v_str};
use salesdash::render::render;
use salesdash::state::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::from_env();
    let kind = ApiKind::from_env();
    let api = kind.build(cfg.clone())?;
    let mut controller = ViewController::new(api);

    json_log(
        "session",
        obj(&[
            ("event", v_str("start")),
            ("api", v_str(&format!("{:?}", kind).to_lowercase())),
            ("api_base", v_str(&cfg.api_base)),
        ]),
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{}\n[{}] > ", render(controller.state()), UiEvent::help());
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break, // EOF ends the session
        };
        let event = match UiEvent::parse(&line) {
            Some(event) => event,
            None => {
                println!("unrecognized input: {:?}", line.trim());
                continue;
            }
        };

        match event {
            UiEvent::Select(view) => controller.select(view),
            UiEvent::Analyze => {
                // Display policy: failures stay off the screen, state untouched.
                let _outcome: AnalysisOutcome = controller.request_analysis().await;
            }
            UiEvent::UploadComplete => controller.on_upload_complete(),
            UiEvent::Quit => break,
        }
    }

    json_log("session", obj(&[("event", v_str("stop"))]));
    Ok(())
}
