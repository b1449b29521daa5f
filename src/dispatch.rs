// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rendering and routing of log lines.
//!
//! Every log statement ends up in [`dispatch`], which:
//!
//! 1. takes a snapshot of the sink policy;
//! 2. returns without formatting anything if neither sink wants the line;
//! 3. renders the line once, as
//!    `"<timestamp> <file>:<line> [<level>] <message>"`;
//! 4. writes it to the file sink, if there is one, whatever the level;
//! 5. writes it, colored, to the console sink if the level is at or above
//!    the minimum.
//!
//! Sinks swallow their own I/O errors, so a log statement never fails. A
//! `Display` impl that returns an error is a bug in the calling code and
//! panics while rendering, before either sink has been written to.

use crate::Level;
use crate::location::Located;
use crate::policy;
use std::fmt::Write;

/// `strftime` format of the timestamp that starts each line.
///
/// Fixed width, so lines from one process sort by time.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/**
Renders a line without coloring it.

```
use microlog::{Level, Located, render_line};

let line = render_line(Level::Debug, Located::new(format_args!("x={}", 5)));
assert!(line.ends_with(&format!("{}:{} [debug] x=5", file!(), line!() - 1)));
```
*/
pub fn render_line(level: Level, located: Located<'_>) -> String {
    let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT);
    let mut line = String::with_capacity(64);
    //writing to a String only fails if a Display impl does, which is a caller bug
    if write!(
        line,
        "{} {}:{} [{}] {}",
        timestamp,
        located.file(),
        located.line(),
        level,
        located.args()
    )
    .is_err()
    {
        panic!("a Display implementation returned an error while rendering a log line");
    }
    line
}

/**
Routes one log statement through the sink policy.

This is what the `log_*` functions and macros call. It is public so wrappers can route a
[`Located`] they captured themselves.
*/
pub fn dispatch(level: Level, located: Located<'_>) {
    let policy = policy::snapshot();
    let to_console = level >= policy.minimum_level;
    if !to_console && policy.file.is_none() {
        return;
    }
    let line = render_line(level, located);
    if let Some(file) = &policy.file {
        file.write_line(level, &line);
    }
    if to_console {
        policy
            .console
            .write_line(level, &crate::ansi::colorize(level, &line));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inmemory_sink::InMemorySink;
    use std::sync::Arc;

    struct Fails;

    impl std::fmt::Display for Fails {
        fn fmt(&self, _f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            Err(std::fmt::Error)
        }
    }

    #[test]
    fn line_shape() {
        let line = render_line(Level::Warn, Located::new(format_args!("{}-{}", 1, "two")));
        let expected_tail = format!(" {}:{} [warn] 1-two", file!(), line!() - 1);
        assert!(line.ends_with(&expected_tail), "{line}");
        let timestamp = &line[..line.len() - expected_tail.len()];
        assert!(chrono::NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT).is_ok(), "{timestamp}");
    }

    /// Swaps in in-memory sinks and a level, putting the previous policy back on drop.
    struct Swapped {
        console: Arc<InMemorySink>,
        file: Arc<InMemorySink>,
        original_console: Arc<dyn crate::Sink>,
        original_file: Option<Arc<dyn crate::Sink>>,
        original_level: Level,
    }

    impl Swapped {
        fn install(level: Level, with_file: bool) -> Self {
            let console = Arc::new(InMemorySink::new());
            let file = Arc::new(InMemorySink::new());
            let original_console = policy::console_sink();
            let original_file = policy::file_sink();
            let original_level = policy::level();
            policy::set_console_sink(console.clone());
            policy::set_file_sink(with_file.then(|| file.clone() as Arc<dyn crate::Sink>));
            policy::set_level(level);
            Self {
                console,
                file,
                original_console,
                original_file,
                original_level,
            }
        }
    }

    impl Drop for Swapped {
        fn drop(&mut self) {
            policy::set_console_sink(self.original_console.clone());
            policy::set_file_sink(self.original_file.clone());
            policy::set_level(self.original_level);
        }
    }

    #[test]
    fn below_minimum_without_file_renders_nothing() {
        let _guard = crate::TEST_POLICY_GUARD.lock().unwrap_or_else(|e| e.into_inner());
        let swapped = Swapped::install(Level::Error, false);

        //a Display that fails would panic if it were rendered
        dispatch(Level::Info, Located::new(format_args!("{}", Fails)));
        assert!(swapped.console.is_empty());
    }

    #[test]
    fn failing_display_panics_before_writing() {
        let _guard = crate::TEST_POLICY_GUARD.lock().unwrap_or_else(|e| e.into_inner());
        let swapped = Swapped::install(Level::Info, true);

        let result = std::panic::catch_unwind(|| {
            dispatch(Level::Error, Located::new(format_args!("{}", Fails)));
        });
        assert!(result.is_err());
        assert!(swapped.console.is_empty());
        assert!(swapped.file.is_empty());
    }

    #[test]
    fn console_is_filtered_and_file_is_not() {
        let _guard = crate::TEST_POLICY_GUARD.lock().unwrap_or_else(|e| e.into_inner());
        let swapped = Swapped::install(Level::Trace, true);

        //raising the threshold only ever removes console lines
        let mut previous = usize::MAX;
        for minimum in Level::ALL {
            policy::set_level(minimum);
            for level in Level::ALL {
                dispatch(level, Located::new(format_args!("m")));
            }
            let printed = swapped.console.drain_lines();
            assert!(printed.len() <= previous);
            assert!(printed.iter().all(|(level, _)| *level >= minimum));
            previous = printed.len();
            assert_eq!(swapped.file.drain_lines().len(), Level::ALL.len());
        }
    }

    #[test]
    fn console_line_is_colored_file_line_is_plain() {
        let _guard = crate::TEST_POLICY_GUARD.lock().unwrap_or_else(|e| e.into_inner());
        let swapped = Swapped::install(Level::Info, true);

        dispatch(Level::Error, Located::new(format_args!("boom")));
        let file_line = swapped.file.drain_logs();
        let console_line = swapped.console.drain_logs();
        assert_eq!(console_line, crate::ansi::colorize(Level::Error, &file_line));
    }
}
