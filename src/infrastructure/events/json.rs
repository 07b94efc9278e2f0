//! JSON Event Sink
//!
//! Writes one NDJSON `selection_changed` event per selection change.

use std::io::{self, Write};

use crate::domain::ports::SelectionListener;

/// Selection listener that outputs NDJSON events
pub struct JsonSelectionSink {
    writer: Box<dyn Write>,
}

impl JsonSelectionSink {
    /// Create a sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Box::new(io::stdout()),
        }
    }

    /// Create a sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + 'static>(writer: W) -> Self {
        Self {
            writer: Box::new(writer),
        }
    }
}

impl SelectionListener for JsonSelectionSink {
    fn on_change(&mut self, selected: &[String]) {
        let event = serde_json::json!({
            "event": "selection_changed",
            "count": selected.len(),
            "selected": selected,
        });
        let _ = writeln!(self.writer, "{}", event);
        let _ = self.writer.flush();
    }
}
