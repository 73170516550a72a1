// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use gn_core::Severity;
use native_dialog::{DialogBuilder, MessageLevel};
use thiserror::Error;

use crate::env;

/// Errors from dialog operations
#[derive(Debug, Error)]
pub enum DialogError {
    #[error("dialog unavailable: {0}")]
    Unavailable(String),
    #[error("console write failed: {0}")]
    Write(#[from] std::io::Error),
}

/// Adapter for presenting a modal dialog
pub trait DialogAdapter {
    /// Show a dialog and block until the user dismisses it
    fn show(&self, severity: Severity, title: &str, message: &str) -> Result<(), DialogError>;
}

impl<T: DialogAdapter + ?Sized> DialogAdapter for Box<T> {
    fn show(&self, severity: Severity, title: &str, message: &str) -> Result<(), DialogError> {
        (**self).show(severity, title, message)
    }
}

/// Native dialog adapter using native-dialog.
///
/// On Linux the dialog is drawn by `zenity` or `kdialog`. native-dialog maps a
/// non-zero exit of those tools to a plain dismissal, so a missing display is
/// detected up front and reported as `Unavailable`, as is a missing backend.
#[derive(Clone, Copy, Debug, Default)]
pub struct NativeDialogAdapter;

impl NativeDialogAdapter {
    pub fn new() -> Self {
        Self
    }
}

fn message_level(severity: Severity) -> MessageLevel {
    match severity {
        Severity::Info => MessageLevel::Info,
        Severity::Warning => MessageLevel::Warning,
        Severity::Error => MessageLevel::Error,
    }
}

impl DialogAdapter for NativeDialogAdapter {
    fn show(&self, severity: Severity, title: &str, message: &str) -> Result<(), DialogError> {
        if !env::has_display() {
            return Err(DialogError::Unavailable(
                "no DISPLAY or WAYLAND_DISPLAY set".to_string(),
            ));
        }
        tracing::info!(%severity, %title, "showing native dialog");
        DialogBuilder::message()
            .set_level(message_level(severity))
            .set_title(title)
            .set_text(message)
            .alert()
            .show()
            .map_err(|e| DialogError::Unavailable(e.to_string()))?;
        tracing::info!(%title, "native dialog dismissed");
        Ok(())
    }
}

/// Renders dialogs as text on stderr, for headless environments
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleDialogAdapter;

impl ConsoleDialogAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Text block written in place of a dialog
    pub fn render(severity: Severity, title: &str, message: &str) -> String {
        format!("{severity}: {title}\n{message}\n")
    }
}

impl DialogAdapter for ConsoleDialogAdapter {
    fn show(&self, severity: Severity, title: &str, message: &str) -> Result<(), DialogError> {
        let mut stderr = std::io::stderr().lock();
        stderr.write_all(Self::render(severity, title, message).as_bytes())?;
        stderr.flush()?;
        Ok(())
    }
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::{DialogAdapter, DialogError};
    use gn_core::Severity;
    use parking_lot::Mutex;
    use std::sync::Arc;

    /// Recorded dialog
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct DialogCall {
        pub severity: Severity,
        pub title: String,
        pub message: String,
    }

    struct FakeDialogState {
        calls: Vec<DialogCall>,
        unavailable: bool,
    }

    /// Fake dialog adapter for testing
    #[derive(Clone)]
    pub struct FakeDialogAdapter {
        inner: Arc<Mutex<FakeDialogState>>,
    }

    impl Default for FakeDialogAdapter {
        fn default() -> Self {
            Self {
                inner: Arc::new(Mutex::new(FakeDialogState { calls: Vec::new(), unavailable: false })),
            }
        }
    }

    impl FakeDialogAdapter {
        pub fn new() -> Self {
            Self::default()
        }

        /// A fake that behaves like a machine without a display
        pub fn unavailable() -> Self {
            let fake = Self::default();
            fake.inner.lock().unavailable = true;
            fake
        }

        /// Get all recorded dialogs
        pub fn calls(&self) -> Vec<DialogCall> {
            self.inner.lock().calls.clone()
        }
    }

    impl DialogAdapter for FakeDialogAdapter {
        fn show(&self, severity: Severity, title: &str, message: &str) -> Result<(), DialogError> {
            let mut inner = self.inner.lock();
            inner.calls.push(DialogCall {
                severity,
                title: title.to_string(),
                message: message.to_string(),
            });
            if inner.unavailable {
                return Err(DialogError::Unavailable("no display".to_string()));
            }
            Ok(())
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::{DialogCall, FakeDialogAdapter};

#[cfg(test)]
#[path = "dialog_tests.rs"]
mod tests;
