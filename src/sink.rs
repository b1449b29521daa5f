//SPDX-License-Identifier: MIT OR Apache-2.0
use crate::Level;
use std::fmt::Debug;

/**
A destination for rendered log lines.

Sinks receive one complete line per call, without the trailing newline. They must
not panic or report failures: a line that cannot be written is dropped.
*/
pub trait Sink: Debug + Send + Sync {
    /**
        Writes one line.

        `level` is the level the line was logged at. Console sinks receive the line already
        wrapped in color codes; the level lets sinks that do their own presentation pick one.
    */
    fn write_line(&self, level: Level, line: &str);

    /**
    Flush any buffered output.

    The default does nothing, which suits unbuffered sinks.
    */
    fn flush(&self) {}
}

/*
Boilerplate notes.

# Sink

Clone on Sink doesn't make sense for sinks that own a file handle, so copy's out.
PartialEq/Eq would have to mean "same destination", which we can't know in general.  Not implemented.
Ord makes no sense
Default is not sensible, a file sink needs a path.
Display is not very sensible.
Send/Sync is required since the policy shares sinks across threads.
*/
