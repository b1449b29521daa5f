// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::Level;
use crate::sink::Sink;

/**
The console sink: writes each line to stdout.

On wasm32 there is no stdout, so lines go to the browser console instead.
 */
#[derive(Debug, Clone)]
pub struct StdoutSink {}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// - Copy: zero-sized, no heap allocation
// - PartialEq/Eq/Hash: all instances write to the same stream
// - Default: convenient zero-argument constructor
// - Display: NOT implemented

impl Copy for StdoutSink {}

impl PartialEq for StdoutSink {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for StdoutSink {}

impl std::hash::Hash for StdoutSink {
    fn hash<H: std::hash::Hasher>(&self, _state: &mut H) {}
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl StdoutSink {
    /// Creates the sink; every instance writes to the same stream.
    pub const fn new() -> Self {
        Self {}
    }
}

impl Sink for StdoutSink {
    #[cfg_attr(not(target_arch = "wasm32"), allow(unused_variables))]
    fn write_line(&self, level: Level, line: &str) {
        #[cfg(not(target_arch = "wasm32"))]
        {
            use std::io::Write;
            let mut buf = String::with_capacity(line.len() + 1);
            buf.push_str(line);
            buf.push('\n');
            //one write under the lock, so concurrent lines don't interleave
            let mut lock = std::io::stdout().lock();
            let _ = lock.write_all(buf.as_bytes());
            let _ = lock.flush();
        }
        #[cfg(target_arch = "wasm32")]
        {
            let msg = wasm_bindgen::JsValue::from_str(line);
            match level {
                Level::Trace => web_sys::console::trace_1(&msg),
                Level::Debug => web_sys::console::debug_1(&msg),
                Level::Info => web_sys::console::info_1(&msg),
                Level::Critical | Level::Warn => web_sys::console::warn_1(&msg),
                Level::Error | Level::Fatal => web_sys::console::error_1(&msg),
            }
        }
    }

    fn flush(&self) {
        #[cfg(not(target_arch = "wasm32"))]
        {
            use std::io::Write;
            let _ = std::io::stdout().flush();
        }
    }
}
