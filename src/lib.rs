//SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# microlog

microlog is a tiny logger for programs that want leveled, timestamped lines with the source
location of each log statement, and nothing else.

# The API

```rust
let attempts = 3;
microlog::log_info!("connected after {} attempts", attempts);
microlog::log_error!("fail: {}", "disk");
```

prints something like

```text
2026-10-16 09:41:07.118 src/main.rs:2 [info] connected after 3 attempts
2026-10-16 09:41:07.118 src/main.rs:3 [error] fail: disk
```

There is one macro per level, plus [`log!`] for a level chosen at runtime and [`log_p!`] for
printing an expression with its value.  The macros take [`format!`] syntax and are checked at
compile time.

# Levels

| Name       | Console color  |
|------------|----------------|
| `trace`    | white          |
| `debug`    | magenta        |
| `info`     | green          |
| `critical` | blue           |
| `warn`     | yellow         |
| `error`    | red            |
| `fatal`    | bold red       |

Levels are ordered as listed.  Lines below the minimum level (default `info`) are not printed
to the console.  Colors are used on Linux and macOS only.

# Where lines go

Every line goes to stdout if its level is at or above the minimum.  If a log file is set,
every line also goes there, *whatever its level*: the file is the complete record.

Both are configured once from the environment, the first time anything is logged:

* `MICROLOG_LEVEL`: the minimum level by name.  Unknown names mean `info`.
* `MICROLOG_FILE`: a file to append to.  If it can't be opened, there is no file.

and can be changed afterwards with [`set_level`] and [`set_log_file`].

# Source locations

The location in each line is the log statement that produced it.  The entry functions are
`#[track_caller]`, so if you wrap them, make your wrapper `#[track_caller]` as well and the
location will be your caller's:

```rust
#[track_caller]
fn audit(what: &str) {
    microlog::log_at(microlog::Level::Critical, format_args!("audit: {what}"));
}
audit("login");
```

# Failure

Logging never fails.  A sink that can't be written drops the line.

# Multithreading

The level and sinks are shared process-wide behind a lock that is never held during I/O.
Each line is written with a single write, so lines from different threads don't interleave.
*/

mod ansi;
mod config;
mod dispatch;
mod entry;
mod file_sink;
mod inmemory_sink;
mod level;
mod location;
mod macros;
mod policy;
mod sink;
mod spinlock;
mod stdout_sink;

pub use ansi::colorize;
pub use config::{Config, FILE_ENV, LEVEL_ENV};
pub use dispatch::{TIMESTAMP_FORMAT, dispatch, render_line};
pub use entry::{
    log_at, log_critical, log_debug, log_error, log_fatal, log_info, log_trace, log_warn,
};
pub use file_sink::FileSink;
pub use inmemory_sink::InMemorySink;
pub use level::{Level, ParseLevelError, UNKNOWN_LEVEL_NAME};
pub use location::Located;
pub use policy::{
    clear_log_file, configure, console_sink, file_sink, flush, level, log_enabled,
    set_console_sink, set_file_sink, set_level, set_log_file,
};
pub use sink::Sink;
pub use stdout_sink::StdoutSink;

/// Unit tests that touch the process-wide policy hold this.
#[cfg(test)]
pub(crate) static TEST_POLICY_GUARD: std::sync::Mutex<()> = std::sync::Mutex::new(());
