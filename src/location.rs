// SPDX-License-Identifier: MIT OR Apache-2.0

//! Call-site capture.
//!
//! A [`Located`] binds not-yet-rendered format arguments to the source
//! location of the log statement that produced them. The location comes from
//! [`Location::caller`] inside `#[track_caller]` functions, so as long as
//! every function between the user's call and [`Located::new`] is also
//! `#[track_caller]`, the recorded position is the user's call expression
//! rather than anything inside this crate.

use std::fmt;
use std::panic::Location;

/**
Format arguments paired with the location of the call that supplied them.

The arguments are borrowed, so a `Located` lives no longer than the log statement.

```
use microlog::Located;

fn describe(located: Located<'_>) -> (String, u32) {
    (located.to_string(), located.line())
}

let (message, line) = describe(Located::new(format_args!("x={}", 5)));
assert_eq!(message, "x=5");
assert_eq!(line, line!() - 2);
```
*/
#[derive(Clone, Copy)]
pub struct Located<'a> {
    args: fmt::Arguments<'a>,
    location: &'static Location<'static>,
}

impl<'a> Located<'a> {
    /// Captures the caller's location.
    #[track_caller]
    #[inline]
    pub fn new(args: fmt::Arguments<'a>) -> Self {
        Self::at(args, Location::caller())
    }

    /// Binds the arguments to an explicit location.
    #[inline]
    pub fn at(args: fmt::Arguments<'a>, location: &'static Location<'static>) -> Self {
        Self { args, location }
    }

    #[inline]
    pub fn args(&self) -> fmt::Arguments<'a> {
        self.args
    }

    #[inline]
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    #[inline]
    pub fn file(&self) -> &'static str {
        self.location.file()
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.location.line()
    }

    #[inline]
    pub fn column(&self) -> u32 {
        self.location.column()
    }
}

impl fmt::Display for Located<'_> {
    /// Renders the message only; the location is not included.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(self.args)
    }
}

impl fmt::Debug for Located<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Located")
            .field("args", &self.args)
            .field("location", &self.location)
            .finish()
    }
}
