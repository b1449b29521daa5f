// SPDX-License-Identifier: MIT OR Apache-2.0

//! The secondary sink: an append-mode log file.

use crate::Level;
use crate::sink::Sink;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/**
Appends each line to a file.

The file is opened with `O_APPEND` and every line goes out in a single unbuffered
write, so lines from concurrent writers land whole and nothing is lost at exit.
The handle closes when the last reference to the sink is dropped.

```
# let dir = tempfile::tempdir().unwrap();
use microlog::{FileSink, Level, Sink};

let path = dir.path().join("app.log");
let sink = FileSink::open(&path).unwrap();
sink.write_line(Level::Info, "hello");
assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello\n");
```
*/
#[derive(Debug)]
pub struct FileSink {
    file: File,
    path: PathBuf,
}

impl FileSink {
    /// Opens `path` for appending, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }

    /// The path the sink was opened with.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn write_line(&self, _level: Level, line: &str) {
        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');
        let _ = (&self.file).write_all(buf.as_bytes());
    }

    fn flush(&self) {
        let _ = (&self.file).flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_to_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("existing.log");
        std::fs::write(&path, "earlier\n").unwrap();

        let sink = FileSink::open(&path).unwrap();
        sink.write_line(Level::Debug, "later");
        assert_eq!(sink.path(), path.as_path());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "earlier\nlater\n");
    }

    #[test]
    fn missing_directory_fails_to_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no/such/dir/app.log");
        assert!(FileSink::open(&path).is_err());
    }
}
