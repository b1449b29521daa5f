// SPDX-License-Identifier: MIT OR Apache-2.0

//! Logging macros.
//!
//! Each macro takes the same arguments as [`format!`] and is checked the same
//! way at compile time: a placeholder without an argument, or an argument
//! without a placeholder, does not build. The message is not formatted unless
//! a sink is going to receive it.
//!
//! ```
//! let x = 5;
//! microlog::log_debug!("x={}", x);
//! microlog::log_info!("x={x}");
//! microlog::log!(microlog::Level::Critical, "x={:>3}", x);
//! ```
//!
//! ```compile_fail
//! microlog::log_info!("{} and {}", 1);
//! ```

/// Logs at a level chosen at runtime.
#[macro_export]
macro_rules! log {
    ($level:expr, $($arg:tt)+) => {
        $crate::log_at($level, ::std::format_args!($($arg)+))
    };
}

/// Logs at [`Level::Trace`](crate::Level::Trace).
#[macro_export]
macro_rules! log_trace {
    ($($arg:tt)+) => {
        $crate::log_trace(::std::format_args!($($arg)+))
    };
}

/// Logs at [`Level::Debug`](crate::Level::Debug).
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)+) => {
        $crate::log_debug(::std::format_args!($($arg)+))
    };
}

/// Logs at [`Level::Info`](crate::Level::Info).
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)+) => {
        $crate::log_info(::std::format_args!($($arg)+))
    };
}

/// Logs at [`Level::Critical`](crate::Level::Critical).
#[macro_export]
macro_rules! log_critical {
    ($($arg:tt)+) => {
        $crate::log_critical(::std::format_args!($($arg)+))
    };
}

/// Logs at [`Level::Warn`](crate::Level::Warn).
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)+) => {
        $crate::log_warn(::std::format_args!($($arg)+))
    };
}

/// Logs at [`Level::Error`](crate::Level::Error).
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)+) => {
        $crate::log_error(::std::format_args!($($arg)+))
    };
}

/// Logs at [`Level::Fatal`](crate::Level::Fatal).
#[macro_export]
macro_rules! log_fatal {
    ($($arg:tt)+) => {
        $crate::log_fatal(::std::format_args!($($arg)+))
    };
}

/**
Logs an expression and its value at [`Level::Debug`](crate::Level::Debug).

The line reads `<expression>=<value>`, using the value's `Display`.

```
let retries = 3;
microlog::log_p!(retries);
microlog::log_p!(retries * 2);
```
*/
#[macro_export]
macro_rules! log_p {
    ($e:expr) => {
        $crate::log_debug(::std::format_args!(
            "{}={}",
            ::std::stringify!($e),
            $e
        ))
    };
}
