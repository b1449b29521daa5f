// SPDX-License-Identifier: MIT OR Apache-2.0

//! ANSI color codes for console lines.

use crate::Level;

/// Whether console lines are wrapped in ANSI color codes on this platform.
pub const ENABLED: bool = cfg!(any(target_os = "linux", target_os = "macos"));

/// Restores the terminal's default color.
pub const RESET: &str = if ENABLED { "\x1b[m" } else { "" };

/// The escape sequence that opens a line at `level`, or `""` without ANSI support.
pub const fn color(level: Level) -> &'static str {
    if !ENABLED {
        return "";
    }
    match level {
        Level::Trace => "\x1b[37m",
        Level::Debug => "\x1b[35m",
        Level::Info => "\x1b[32m",
        Level::Critical => "\x1b[34m",
        Level::Warn => "\x1b[33m",
        Level::Error => "\x1b[31m",
        Level::Fatal => "\x1b[31;1m",
    }
}

/// Wraps `line` in the color of `level`.
pub fn colorize(level: Level, line: &str) -> String {
    let color = color(level);
    let mut out = String::with_capacity(color.len() + line.len() + RESET.len());
    out.push_str(color);
    out.push_str(line);
    out.push_str(RESET);
    out
}
