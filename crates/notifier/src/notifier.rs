// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::error::Error;
use std::io::Write;

use gn_adapters::{ConsoleDialogAdapter, DialogAdapter, NativeDialogAdapter};
use gn_core::{write_trace, Localizer, Report, Untranslated, DEFAULT_EXIT_CODE};

/// Shows messages, warnings and fatal errors to the user
pub trait UserNotifier {
    /// Informational dialog. Returns once dismissed.
    fn show_message(&self, title: Option<&str>, message: &str);

    /// Warning dialog for errors the application survives. The cause trace,
    /// if any, goes to stderr.
    fn show_warning(&self, title: Option<&str>, message: &str, cause: Option<&(dyn Error + 'static)>);

    /// Fatal error dialog, then exit with status 1.
    fn show_error(&self, title: Option<&str>, message: &str, cause: Option<&(dyn Error + 'static)>) -> ! {
        self.show_error_with_code(title, message, cause, DEFAULT_EXIT_CODE)
    }

    /// Fatal error dialog, then exit with `exit_code`. Never returns.
    fn show_error_with_code(
        &self,
        title: Option<&str>,
        message: &str,
        cause: Option<&(dyn Error + 'static)>,
        exit_code: i32,
    ) -> !;
}

/// Notifier backed by a dialog adapter, falling back to another adapter
/// (stderr by default) when the dialog cannot be shown.
pub struct GuiNotifier<D, L> {
    dialog: D,
    localizer: L,
    fallback: Option<Box<dyn DialogAdapter>>,
}

impl<D: DialogAdapter, L: Localizer> GuiNotifier<D, L> {
    pub fn new(dialog: D, localizer: L) -> Self {
        Self { dialog, localizer, fallback: Some(Box::new(ConsoleDialogAdapter::new())) }
    }

    /// Replace the adapter used when `dialog` fails
    pub fn with_fallback(mut self, fallback: impl DialogAdapter + 'static) -> Self {
        self.fallback = Some(Box::new(fallback));
        self
    }

    /// Drop the fallback, for when `dialog` already is the console
    pub fn without_fallback(mut self) -> Self {
        self.fallback = None;
        self
    }

    pub fn has_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    /// Show `report`, then write the cause trace to `diag`.
    pub fn present(&self, report: &Report, cause: Option<&(dyn Error + 'static)>, diag: &mut impl Write) {
        let title = report.resolved_title(&self.localizer);
        if let Err(e) = self.dialog.show(report.severity, &title, &report.message) {
            match &self.fallback {
                Some(fallback) => {
                    tracing::warn!(error = %e, %title, "dialog failed, reporting on console");
                    if let Err(e) = fallback.show(report.severity, &title, &report.message) {
                        tracing::warn!(error = %e, %title, "console fallback failed");
                    }
                }
                None => tracing::warn!(error = %e, %title, "dialog failed"),
            }
        }
        if let Some(cause) = cause {
            write_trace(diag, cause);
        }
    }

    /// Everything the fatal path does before exiting. Returns the status to exit with.
    pub fn present_fatal(
        &self,
        title: Option<&str>,
        message: &str,
        cause: Option<&(dyn Error + 'static)>,
        exit_code: i32,
        diag: &mut impl Write,
    ) -> i32 {
        tracing::error!(title = title.unwrap_or_default(), body = message, exit_code, "fatal error");
        self.present(&Report::error(title, message), cause, diag);
        exit_code
    }
}

impl<D: DialogAdapter, L: Localizer> UserNotifier for GuiNotifier<D, L> {
    fn show_message(&self, title: Option<&str>, message: &str) {
        self.present(&Report::info(title, message), None, &mut std::io::stderr());
    }

    fn show_warning(&self, title: Option<&str>, message: &str, cause: Option<&(dyn Error + 'static)>) {
        tracing::warn!(title = title.unwrap_or_default(), body = message, "warning");
        self.present(&Report::warning(title, message), cause, &mut std::io::stderr());
    }

    fn show_error_with_code(
        &self,
        title: Option<&str>,
        message: &str,
        cause: Option<&(dyn Error + 'static)>,
        exit_code: i32,
    ) -> ! {
        let code = self.present_fatal(title, message, cause, exit_code, &mut std::io::stderr());
        std::process::exit(code)
    }
}

/// Show a native error dialog and terminate the process with `exit_code`.
pub fn notify_fatal_error(
    title: Option<&str>,
    message: &str,
    cause: Option<&(dyn Error + 'static)>,
    exit_code: i32,
) -> ! {
    GuiNotifier::new(NativeDialogAdapter::new(), Untranslated).show_error_with_code(
        title, message, cause, exit_code,
    )
}

#[cfg(test)]
#[path = "notifier_tests.rs"]
mod tests;
