// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! What a notification shows: severity, title and message body.

use std::fmt;

use crate::i18n::Localizer;

/// Exit status used by fatal notifications when the caller gives none
pub const DEFAULT_EXIT_CODE: i32 = 1;

/// Dialog style, and which default title a report falls back to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Localization key for the title shown when the caller supplies none.
    pub fn default_title_key(self) -> &'static str {
        match self {
            Severity::Info => "Message",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "{s}")
    }
}

/// A single notification, consumed once by the notifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub severity: Severity,
    pub title: Option<String>,
    pub message: String,
}

impl Report {
    pub fn new(severity: Severity, title: Option<&str>, message: impl Into<String>) -> Self {
        Self { severity, title: title.map(str::to_string), message: message.into() }
    }

    pub fn error(title: Option<&str>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, title, message)
    }

    pub fn warning(title: Option<&str>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, title, message)
    }

    pub fn info(title: Option<&str>, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, title, message)
    }

    /// Title to display. Absent and empty titles both resolve to the
    /// localized default for the severity.
    pub fn resolved_title(&self, localizer: &impl Localizer) -> String {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title.to_string(),
            _ => localizer.tr(self.severity.default_title_key()),
        }
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
