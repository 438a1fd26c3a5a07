use std::sync::Arc;

use parking_lot::Mutex;

/// Append-only destination for announcement lines.
pub trait LogSink: Send + Sync {
    fn line(&self, line: &str);
}

/// Target of the events `TracingSink` emits. The binary always enables it,
/// whatever `RUST_LOG` says.
pub const OUTPUT_TARGET: &str = "fetchlog::output";

/// Forwards every line to `tracing` at info level under [`OUTPUT_TARGET`].
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn line(&self, line: &str) {
        tracing::info!(target: OUTPUT_TARGET, "{}", line);
    }
}

/// Keeps lines in memory in the order they were written.
///
/// Clones share the same buffer, so one handle can be given to a
/// `RequestLogger` while another is kept around for inspection.
#[derive(Clone, Debug, Default)]
pub struct MemorySink(Arc<Mutex<Vec<String>>>);

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.0.lock().clone()
    }

    pub fn clear(&self) {
        self.0.lock().clear();
    }
}

impl LogSink for MemorySink {
    fn line(&self, line: &str) {
        self.0.lock().push(line.to_string());
    }
}

#[test]
fn memory_sink_clones_share_buffer() {
    let sink = MemorySink::new();
    let handle = sink.clone();

    sink.line("one");
    handle.line("two");

    assert_eq!(sink.lines(), vec!["one", "two"]);

    handle.clear();
    assert!(sink.lines().is_empty());
}
