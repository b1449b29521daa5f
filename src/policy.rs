// SPDX-License-Identifier: MIT OR Apache-2.0

//! The process-wide sink policy.
//!
//! Exactly one policy exists per process. It holds the minimum console level,
//! the console sink and the optional file sink, and is built from
//! [`Config::from_env`] the first time any function here (or any log
//! statement) touches it. After that it changes only through the setters in
//! this module; the last write wins.
//!
//! # Thread Safety
//!
//! The policy sits behind a spinlock. A log statement holds the lock only long
//! enough to copy out the level and clone the sink `Arc`s, and writes after
//! releasing it. Replacing a sink while another thread is mid-write is
//! therefore safe: that write completes on the old sink, which is dropped
//! (closing its file) once the last clone goes away.
//!
//! # Examples
//!
//! ```
//! use microlog::Level;
//!
//! microlog::set_level(Level::Warn);
//! assert_eq!(microlog::level(), Level::Warn);
//! assert!(!microlog::log_enabled(Level::Info));
//! assert!(microlog::log_enabled(Level::Error));
//! ```
//!
//! Capturing everything that is written to the file sink:
//!
//! ```
//! use microlog::InMemorySink;
//! use std::sync::Arc;
//!
//! let audit = Arc::new(InMemorySink::new());
//! microlog::set_file_sink(Some(audit.clone()));
//! microlog::set_level(microlog::Level::Fatal);
//!
//! microlog::log_trace!("still recorded");
//! assert!(audit.drain_logs().contains("[trace] still recorded"));
//! ```

use crate::config::Config;
use crate::file_sink::FileSink;
use crate::sink::Sink;
use crate::spinlock::Spinlock;
use crate::stdout_sink::StdoutSink;
use crate::Level;
use std::path::Path;
use std::sync::{Arc, OnceLock};

#[derive(Debug, Clone)]
pub(crate) struct SinkPolicy {
    pub(crate) minimum_level: Level,
    pub(crate) console: Arc<dyn Sink>,
    pub(crate) file: Option<Arc<dyn Sink>>,
}

impl SinkPolicy {
    /// Builds a policy, silently going without a file sink if the file can't be opened.
    pub(crate) fn from_config(config: &Config) -> Self {
        Self {
            minimum_level: config.level,
            console: Arc::new(StdoutSink::new()),
            file: config.file.as_deref().and_then(open_file_sink),
        }
    }
}

fn open_file_sink(path: &Path) -> Option<Arc<dyn Sink>> {
    FileSink::open(path)
        .ok()
        .map(|sink| Arc::new(sink) as Arc<dyn Sink>)
}

static SINK_POLICY: OnceLock<Spinlock<SinkPolicy>> = OnceLock::new();

fn sink_policy() -> &'static Spinlock<SinkPolicy> {
    SINK_POLICY.get_or_init(|| Spinlock::new(SinkPolicy::from_config(&Config::from_env())))
}

/// A copy of the current policy, taken under the lock.
pub(crate) fn snapshot() -> SinkPolicy {
    sink_policy().with(|policy| policy.clone())
}

/// Sets the minimum level for console output.
///
/// The file sink is not affected; it receives every line.
pub fn set_level(level: Level) {
    sink_policy().with_mut(|policy| policy.minimum_level = level);
}

/// The current minimum console level.
pub fn level() -> Level {
    sink_policy().with(|policy| policy.minimum_level)
}

/// Whether a line at `level` would currently reach the console.
pub fn log_enabled(level: Level) -> bool {
    level >= self::level()
}

/**
Opens `path` for appending and makes it the file sink, replacing any previous one.

The previous sink is dropped, so its file stops receiving lines. If the file can't be
opened the file sink is left unset and the error is returned; log statements are
unaffected either way.

```
# let dir = tempfile::tempdir().unwrap();
let path = dir.path().join("app.log");
microlog::set_log_file(&path).unwrap();
microlog::log_info!("hello");
assert!(std::fs::read_to_string(&path).unwrap().contains("[info] hello"));
# microlog::clear_log_file();
```
*/
pub fn set_log_file(path: impl AsRef<Path>) -> std::io::Result<()> {
    let opened = FileSink::open(path.as_ref());
    let (result, sink) = match opened {
        Ok(sink) => (Ok(()), Some(Arc::new(sink) as Arc<dyn Sink>)),
        Err(e) => (Err(e), None),
    };
    drop(replace_file_sink(sink));
    result
}

/// Removes the file sink. Later lines go to the console only.
pub fn clear_log_file() {
    drop(replace_file_sink(None));
}

/// Installs any sink as the file sink, or removes it with `None`.
pub fn set_file_sink(sink: Option<Arc<dyn Sink>>) {
    drop(replace_file_sink(sink));
}

/// The current file sink, if any.
pub fn file_sink() -> Option<Arc<dyn Sink>> {
    sink_policy().with(|policy| policy.file.clone())
}

//the old sink is handed back so it drops (and closes) outside the lock
fn replace_file_sink(sink: Option<Arc<dyn Sink>>) -> Option<Arc<dyn Sink>> {
    sink_policy().with_mut(|policy| std::mem::replace(&mut policy.file, sink))
}

/// Replaces the console sink.
pub fn set_console_sink(sink: Arc<dyn Sink>) {
    let old = sink_policy().with_mut(|policy| std::mem::replace(&mut policy.console, sink));
    drop(old);
}

/// The current console sink.
pub fn console_sink() -> Arc<dyn Sink> {
    sink_policy().with(|policy| policy.console.clone())
}

/**
Applies `config` to the running policy.

The level is replaced. The file sink is replaced by the config's file, or removed if the
config names none; an unopenable file leaves it removed. The console sink is kept.
*/
pub fn configure(config: &Config) {
    let file = config.file.as_deref().and_then(open_file_sink);
    let old = sink_policy().with_mut(|policy| {
        policy.minimum_level = config.level;
        std::mem::replace(&mut policy.file, file)
    });
    drop(old);
}

/// Flushes the console and file sinks.
pub fn flush() {
    let policy = snapshot();
    policy.console.flush();
    if let Some(file) = policy.file {
        file.flush();
    }
}
