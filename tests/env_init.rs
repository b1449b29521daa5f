// SPDX-License-Identifier: MIT OR Apache-2.0

//! The policy is built from the process environment on first use.
//!
//! This binary holds a single test so nothing touches microlog before the
//! variables are set.

use microlog::Level;
use std::ffi::OsString;
use std::path::PathBuf;

//a name that is not valid UTF-8 where the platform allows one
fn log_file_name() -> OsString {
    #[cfg(unix)]
    {
        use std::os::unix::ffi::OsStringExt;
        OsString::from_vec(b"env-\xFF.log".to_vec())
    }
    #[cfg(not(unix))]
    {
        OsString::from("env.log")
    }
}

#[test]
fn first_log_reads_level_and_file_from_environment() {
    let dir = tempfile::tempdir().unwrap();
    let path: PathBuf = dir.path().join(log_file_name());
    // SAFETY: this is the only test in the binary and it sets the variables before
    // any other thread could read the environment
    unsafe {
        std::env::set_var(microlog::LEVEL_ENV, "verbose");
        std::env::set_var(microlog::FILE_ENV, &path);
    }

    assert_eq!(microlog::level(), Level::Info);
    assert!(microlog::file_sink().is_some());

    microlog::log_debug!("x={}", 5);
    let debug_line = line!() - 1;
    microlog::clear_log_file();

    //the file was created under exactly the name given, not a lossy copy of it
    let names: Vec<OsString> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_eq!(names, vec![log_file_name()]);

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(
        content.contains(&format!("{}:{} [debug] x=5", file!(), debug_line)),
        "{content}"
    );
}
