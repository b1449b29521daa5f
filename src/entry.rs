// SPDX-License-Identifier: MIT OR Apache-2.0

//! One entry point per level.
//!
//! These are `#[track_caller]`, so the location recorded for a line is the
//! expression that called them. The `log_*!` macros expand to a call of the
//! matching function here, which makes the macro invocation that location.
//! Wrappers that forward to these functions must be `#[track_caller]` too, or
//! every line will report the wrapper.

use crate::Level;
use crate::dispatch::dispatch;
use crate::location::Located;
use std::fmt::Arguments;

/**
Logs `args` at `level`.

```
microlog::log_at(microlog::Level::Warn, format_args!("disk {}% full", 91));
```
*/
#[track_caller]
pub fn log_at(level: Level, args: Arguments<'_>) {
    dispatch(level, Located::new(args));
}

macro_rules! entry_points {
    ($($name:ident => $level:ident),* $(,)?) => {
        $(
            #[doc = concat!("Logs `args` at [`Level::", stringify!($level), "`].")]
            ///
            /// Prefer the macro of the same name, which takes `format!` syntax directly.
            #[track_caller]
            pub fn $name(args: Arguments<'_>) {
                dispatch(Level::$level, Located::new(args));
            }
        )*
    };
}

entry_points! {
    log_trace => Trace,
    log_debug => Debug,
    log_info => Info,
    log_critical => Critical,
    log_warn => Warn,
    log_error => Error,
    log_fatal => Fatal,
}
