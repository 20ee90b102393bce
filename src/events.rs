use crate::state::View;

/// Navigation vocabulary for the terminal session. Events are consumed one
/// at a time; an `Analyze` event runs its fetches to completion before the
/// next event is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    Select(View),
    Analyze,
    UploadComplete,
    Quit,
}

impl UiEvent {
    /// Parse one input line. The analysis pane is reachable only through
    /// `Analyze`, so "analysis" maps there rather than to a bare select.
    pub fn parse(line: &str) -> Option<UiEvent> {
        let word = line.trim().to_lowercase();
        match word.as_str() {
            "" => None,
            "analysis" | "analyze" => Some(UiEvent::Analyze),
            "uploaded" | "upload-done" => Some(UiEvent::UploadComplete),
            "q" | "quit" | "exit" => Some(UiEvent::Quit),
            other => View::parse(other).map(UiEvent::Select),
        }
    }

    pub fn help() -> &'static str {
        "dashboard | staff | upload | analysis | admin | uploaded | quit"
    }
}
