use std::{fs::OpenOptions, io::Write, sync::Mutex};

use crate::trace::trace::DecisionEvent;

/// Append-only JSONL writer for classification decisions.
///
/// Opening the trace file can fail (read-only dir, bad path); when it
/// does, the logger stays usable but silently disabled, since tracing
/// must never take the analysis down with it.
pub struct DecisionLogger {
    sink: Option<Mutex<std::fs::File>>,
}

impl DecisionLogger {
    pub fn new(path: &str) -> Self {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => Self {
                sink: Some(Mutex::new(f)),
            },
            Err(e) => {
                eprintln!("Warning: could not open trace file '{}': {}", path, e);
                Self { sink: None }
            }
        }
    }

    /// A logger that drops everything, for callers that did not ask for a
    /// trace.
    pub fn disabled() -> Self {
        Self { sink: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    pub fn log(&self, event: &DecisionEvent) {
        let Some(sink) = &self.sink else {
            return;
        };

        let line = match serde_json::to_string(event) {
            Ok(j) => j,
            Err(e) => {
                eprintln!("Warning: failed to serialize decision event: {}", e);
                return;
            }
        };

        match sink.lock() {
            Ok(mut file) => {
                if let Err(e) = writeln!(file, "{}", line) {
                    eprintln!("Warning: failed to write decision event: {}", e);
                }
            }
            Err(e) => eprintln!("Warning: decision logger lock poisoned: {}", e),
        }
    }
}
