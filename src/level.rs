// SPDX-License-Identifier: MIT OR Apache-2.0

//! Severity levels.
//!
//! Levels are ordered by declaration, from least to most severe. The
//! lowercase name of each level is part of the public contract: it is what
//! `MICROLOG_LEVEL` accepts and what appears in the bracketed tag of every
//! line.

use std::fmt::Display;
use std::str::FromStr;

/// Returned by [`Level::name_of`] for an ordinal outside the declared set.
pub const UNKNOWN_LEVEL_NAME: &str = "unknown";

/// The severity of a log line.
///
/// ```
/// use microlog::Level;
/// assert!(Level::Debug < Level::Info);
/// assert_eq!(Level::Warn.name(), "warn");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Level {
    /// Step-by-step detail
    Trace,
    /// Print-style debugging
    Debug,
    /// Normal operation
    #[default]
    Info,
    /// Noteworthy, but less severe than a warning
    Critical,
    /// Suspicious condition
    Warn,
    /// Runtime error
    Error,
    /// The program cannot continue
    Fatal,
}

impl Level {
    /// Every level, in declaration order.
    pub const ALL: [Level; 7] = [
        Level::Trace,
        Level::Debug,
        Level::Info,
        Level::Critical,
        Level::Warn,
        Level::Error,
        Level::Fatal,
    ];

    /// The display name of the level.
    pub const fn name(self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Critical => "critical",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Fatal => "fatal",
        }
    }

    /// The level's position in declaration order.
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// The level at `ordinal` in declaration order, if there is one.
    pub fn from_ordinal(ordinal: u8) -> Option<Level> {
        Level::ALL.get(ordinal as usize).copied()
    }

    /**
    Names the level with the given ordinal.

    Ordinals outside the declared set produce [`UNKNOWN_LEVEL_NAME`] rather than an error.

    ```
    use microlog::Level;
    assert_eq!(Level::name_of(Level::Error.ordinal()), "error");
    assert_eq!(Level::name_of(42), "unknown");
    ```
    */
    pub fn name_of(ordinal: u8) -> &'static str {
        match Level::from_ordinal(ordinal) {
            Some(level) => level.name(),
            None => UNKNOWN_LEVEL_NAME,
        }
    }

    /**
    Looks a level up by name.

    The match is case-sensitive. Any name that is not a level resolves to
    [`Level::Info`], which keeps a typo in the environment from disabling logging.
    Use [`str::parse`] when an unknown name should be an error.

    ```
    use microlog::Level;
    assert_eq!(Level::level_of("error"), Level::Error);
    assert_eq!(Level::level_of("ERROR"), Level::Info);
    assert_eq!(Level::level_of("verbose"), Level::Info);
    ```
    */
    pub fn level_of(name: &str) -> Level {
        name.parse().unwrap_or_default()
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .iter()
            .copied()
            .find(|level| level.name() == s)
            .ok_or_else(|| ParseLevelError { name: s.to_string() })
    }
}

/// The name passed to [`Level::from_str`] is not a level.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParseLevelError {
    name: String,
}

impl ParseLevelError {
    /// The name that failed to parse.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Display for ParseLevelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown log level {:?}", self.name)
    }
}

impl std::error::Error for ParseLevelError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for level in Level::ALL {
            assert_eq!(Level::level_of(level.name()), level);
            assert_eq!(Level::name_of(level.ordinal()), level.name());
            assert_ne!(level.name(), UNKNOWN_LEVEL_NAME);
        }
    }

    #[test]
    fn names_are_unique() {
        for (i, a) in Level::ALL.iter().enumerate() {
            for b in &Level::ALL[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
    }

    #[test]
    fn unknown_names_fall_back_to_info() {
        for name in ["verbose", "", "Info", "warning", " info"] {
            assert_eq!(Level::level_of(name), Level::Info, "{name:?}");
        }
    }

    #[test]
    fn strict_parse_reports_the_name() {
        let err = "warning".parse::<Level>().unwrap_err();
        assert_eq!(err.name(), "warning");
        assert_eq!(err.to_string(), "unknown log level \"warning\"");
        assert_eq!("fatal".parse::<Level>(), Ok(Level::Fatal));
    }

    #[test]
    fn out_of_range_ordinal_is_unknown() {
        assert_eq!(Level::name_of(Level::ALL.len() as u8), UNKNOWN_LEVEL_NAME);
        assert_eq!(Level::name_of(u8::MAX), UNKNOWN_LEVEL_NAME);
        assert_eq!(Level::from_ordinal(u8::MAX), None);
    }

    #[test]
    fn declaration_order_is_severity_order() {
        for window in Level::ALL.windows(2) {
            assert!(window[0] < window[1]);
            assert!(window[0].ordinal() < window[1].ordinal());
        }
        assert_eq!(Level::default(), Level::Info);
    }
}
