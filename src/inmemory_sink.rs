// SPDX-License-Identifier: MIT OR Apache-2.0

//! # In-Memory Sink
//!
//! A sink that keeps lines in memory instead of writing them anywhere. It is
//! meant for:
//!
//! - Unit testing code that logs through microlog
//! - Capturing output where stdout is redirected or unavailable
//! - Programmatically examining what was logged
//!
//! Install it with [`set_console_sink`](crate::set_console_sink) or
//! [`set_file_sink`](crate::set_file_sink).

use crate::Level;
use crate::sink::Sink;
use std::sync::{Mutex, MutexGuard};

/// An in-memory sink that stores each line together with its level.
///
/// # Example
///
/// ```rust
/// use microlog::InMemorySink;
/// use std::sync::Arc;
///
/// let sink = Arc::new(InMemorySink::new());
/// let original = microlog::console_sink();
/// microlog::set_console_sink(sink.clone());
///
/// microlog::log_error!("fail: {}", "disk");
///
/// let logs = sink.drain_logs();
/// assert!(logs.contains("[error]"));
/// assert!(logs.contains("fail: disk"));
///
/// microlog::set_console_sink(original);
/// ```
#[derive(Debug)]
pub struct InMemorySink {
    lines: Mutex<Vec<(Level, String)>>,
}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// - Debug: required by Sink
// - Default: empty buffer
// - Clone: NOT implemented, two handles to one buffer is what Arc is for
// - PartialEq/Eq/Hash: NOT implemented, comparing mutex contents is racy
// - Send/Sync: automatic through Mutex

impl Default for InMemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemorySink {
    /// Creates a sink with an empty buffer.
    pub fn new() -> Self {
        Self {
            lines: Mutex::new(Vec::new()),
        }
    }

    //a test that panicked while holding the lock shouldn't take the sink down with it
    fn lock(&self) -> MutexGuard<'_, Vec<(Level, String)>> {
        self.lines.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Drains all lines into a single string joined by newlines, clearing the buffer.
    ///
    /// ```rust
    /// use microlog::{InMemorySink, Level, Sink};
    ///
    /// let sink = InMemorySink::new();
    /// sink.write_line(Level::Info, "first");
    /// sink.write_line(Level::Warn, "second");
    /// assert_eq!(sink.drain_logs(), "first\nsecond");
    /// assert_eq!(sink.drain_logs(), "");
    /// ```
    pub fn drain_logs(&self) -> String {
        let mut lines = self.lock();
        let result = lines
            .iter()
            .map(|(_, line)| line.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        lines.clear();
        result
    }

    /// Drains the buffer, keeping each line's level.
    pub fn drain_lines(&self) -> Vec<(Level, String)> {
        std::mem::take(&mut *self.lock())
    }

    /// Copies the buffered lines without clearing them.
    pub fn lines(&self) -> Vec<String> {
        self.lock().iter().map(|(_, line)| line.clone()).collect()
    }

    /// The number of buffered lines.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether no lines are buffered.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl Sink for InMemorySink {
    fn write_line(&self, level: Level, line: &str) {
        self.lock().push((level, line.to_string()));
    }
}
