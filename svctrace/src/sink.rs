// SPDX-License-Identifier: MIT OR Apache-2.0

//! Where traced output goes.
//!
//! Syscall records, follow lifecycle lines, and fault reports are the
//! product of the tracer and flow through [`LogSink`]; operator diagnostics
//! stay on the `log` crate.

use std::io::{self, Write};

use parking_lot::Mutex;

pub trait LogSink: Send + Sync {
    fn line(&self, line: &str);
}

/// Line-buffered sink over any writer. Output failures are swallowed; a
/// tracer must never take its process down over a closed pipe.
pub struct WriterSink<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }
}

impl WriterSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> LogSink for WriterSink<W> {
    fn line(&self, line: &str) {
        let mut writer = self.writer.lock();
        let _ = writeln!(writer, "{line}");
    }
}
