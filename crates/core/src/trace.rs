// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic traces for the cause attached to a notification.

use std::error::Error;
use std::fmt;
use std::io::Write;

/// Render `err` and its `source()` chain, outermost first.
pub fn render_trace(err: &(dyn Error + 'static)) -> String {
    let mut out = err.to_string();
    let mut sources = std::iter::successors(err.source(), |&e| e.source()).peekable();
    if sources.peek().is_some() {
        out.push_str("\n\nCaused by:");
        for (i, source) in sources.enumerate() {
            out.push_str(&format!("\n    {i}: {source}"));
        }
    }
    out.push('\n');
    out
}

/// Write the trace of `err` to `w` in one write.
///
/// Best-effort: I/O failures are swallowed so the caller's path continues.
pub fn write_trace(w: &mut impl Write, err: &(dyn Error + 'static)) {
    let rendered = render_trace(err);
    let _ = w.write_all(rendered.as_bytes());
    let _ = w.flush();
}

/// Error chain assembled from plain messages, e.g. from command-line input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CauseChain {
    message: String,
    source: Option<Box<CauseChain>>,
}

impl CauseChain {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), source: None }
    }

    /// Build a chain from messages ordered outermost first.
    /// Returns `None` when there are no messages.
    pub fn from_messages<I, S>(messages: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        I::IntoIter: DoubleEndedIterator,
        S: Into<String>,
    {
        messages.into_iter().rev().fold(None, |inner, message| {
            Some(Self { message: message.into(), source: inner.map(Box::new) })
        })
    }
}

impl fmt::Display for CauseChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CauseChain {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_deref().map(|e| e as &(dyn Error + 'static))
    }
}

#[cfg(test)]
#[path = "trace_tests.rs"]
mod tests;
