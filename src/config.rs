// SPDX-License-Identifier: MIT OR Apache-2.0

//! Startup configuration.
//!
//! The sink policy is built from a [`Config`] the first time anything logs.
//! By default that config comes from the environment:
//!
//! | Variable          | Meaning                                   | Absent / invalid       |
//! |-------------------|-------------------------------------------|------------------------|
//! | `MICROLOG_LEVEL`  | minimum console level, e.g. `warn`        | `info`                 |
//! | `MICROLOG_FILE`   | path of a log file, opened for appending  | console only           |
//!
//! Level names are case-sensitive, see [`Level::level_of`].

use crate::Level;
use std::ffi::OsString;
use std::path::PathBuf;

/// Names the minimum console level.
pub const LEVEL_ENV: &str = "MICROLOG_LEVEL";
/// Names a file that receives every line, whatever its level.
pub const FILE_ENV: &str = "MICROLOG_FILE";

/// The settings the sink policy starts from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    /// Lines below this level are not printed to the console.
    pub level: Level,
    /// Where to append a copy of every line, if anywhere.
    pub file: Option<PathBuf>,
}

impl Config {
    /// Reads [`LEVEL_ENV`] and [`FILE_ENV`] from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    /**
    Builds a config from any key lookup.

    Values are taken as `OsString`s so a file path reaches the filesystem byte for byte.
    A level that is not valid UTF-8 is no level name, so it means `info`.

    ```
    use microlog::{Config, Level};
    use std::ffi::OsString;

    let config = Config::from_lookup(|key| match key {
        "MICROLOG_LEVEL" => Some(OsString::from("verbose")),
        _ => None,
    });
    assert_eq!(config.level, Level::Info);
    assert_eq!(config.file, None);
    ```
    */
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<OsString>) -> Self {
        let level = lookup(LEVEL_ENV)
            .and_then(|name| name.to_str().map(Level::level_of))
            .unwrap_or_default();
        let file = lookup(FILE_ENV)
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);
        Self { level, file }
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<OsString> {
        let vars: HashMap<String, OsString> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), OsString::from(v)))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn empty_environment_is_default() {
        assert_eq!(Config::from_lookup(lookup(&[])), Config::default());
    }

    #[test]
    fn reads_level_and_file() {
        let config = Config::from_lookup(lookup(&[
            (LEVEL_ENV, "error"),
            (FILE_ENV, "/tmp/app.log"),
        ]));
        assert_eq!(config.level, Level::Error);
        assert_eq!(config.file, Some(PathBuf::from("/tmp/app.log")));
    }

    #[test]
    fn unknown_level_is_info() {
        for name in ["verbose", "WARN", ""] {
            let config = Config::from_lookup(lookup(&[(LEVEL_ENV, name)]));
            assert_eq!(config.level, Level::Info, "{name:?}");
        }
    }

    #[test]
    fn empty_file_means_console_only() {
        let config = Config::from_lookup(lookup(&[(FILE_ENV, "")]));
        assert_eq!(config.file, None);
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_file_path_is_kept_exactly() {
        use std::os::unix::ffi::OsStringExt;

        let raw = OsString::from_vec(b"/tmp/app-\xFF.log".to_vec());
        let expected = raw.clone();
        let config = Config::from_lookup(move |key| (key == FILE_ENV).then(|| raw.clone()));
        assert_eq!(config.file, Some(PathBuf::from(expected)));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_level_is_info() {
        use std::os::unix::ffi::OsStringExt;

        let config = Config::from_lookup(|key| {
            (key == LEVEL_ENV).then(|| OsString::from_vec(b"err\xFFor".to_vec()))
        });
        assert_eq!(config.level, Level::Info);
    }

    #[test]
    fn builders() {
        let config = Config::default().with_level(Level::Trace).with_file("x.log");
        assert_eq!(config.level, Level::Trace);
        assert_eq!(config.file, Some(PathBuf::from("x.log")));
    }
}
