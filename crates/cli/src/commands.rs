// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::error::Error;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use gn_adapters::{ConsoleDialogAdapter, DialogAdapter, NativeDialogAdapter};
use gn_core::{write_trace, Catalog, CauseChain, DEFAULT_EXIT_CODE};
use gn_notifier::{GuiNotifier, UserNotifier};

use crate::env;

#[derive(Parser, Debug)]
#[command(name = "gn", version, about = "Show notification dialogs; `gn error` exits the process")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Show a fatal error dialog, then exit with the given status
    Error {
        /// Dialog title (defaults to the localized "Error")
        #[arg(long)]
        title: Option<String>,
        /// Process exit status
        #[arg(long, default_value_t = DEFAULT_EXIT_CODE, allow_negative_numbers = true)]
        exit_code: i32,
        /// Cause message written as a trace to stderr; repeat for a chain, outermost first
        #[arg(long)]
        cause: Vec<String>,
        /// Dialog body, shown verbatim
        message: String,
    },
    /// Show a warning dialog and exit normally
    Warning {
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        cause: Vec<String>,
        message: String,
    },
    /// Show an informational dialog and exit normally
    Message {
        #[arg(long)]
        title: Option<String>,
        message: String,
    },
}

pub type CliNotifier = GuiNotifier<Box<dyn DialogAdapter>, Catalog>;

/// Native dialogs with a console fallback, or the console alone when headless
fn build_notifier(headless: bool, catalog: Catalog) -> CliNotifier {
    if headless {
        let dialog: Box<dyn DialogAdapter> = Box::new(ConsoleDialogAdapter::new());
        GuiNotifier::new(dialog, catalog).without_fallback()
    } else {
        let dialog: Box<dyn DialogAdapter> = Box::new(NativeDialogAdapter::new());
        GuiNotifier::new(dialog, catalog)
    }
}

fn load_catalog() -> anyhow::Result<Catalog> {
    match env::catalog_path() {
        Some(path) => Catalog::load(&path)
            .with_context(|| format!("failed to load catalog from GN_CATALOG ({})", path.display())),
        None => Ok(Catalog::default()),
    }
}

/// Build the notifier from the environment. A bad catalog is reported
/// and replaced by untranslated labels.
pub fn notifier() -> CliNotifier {
    let catalog = load_catalog().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "using untranslated labels");
        let cause: &(dyn Error + 'static) = e.as_ref();
        write_trace(&mut std::io::stderr(), cause);
        Catalog::default()
    });
    build_notifier(env::headless(), catalog)
}

fn as_cause(chain: &Option<CauseChain>) -> Option<&(dyn Error + 'static)> {
    chain.as_ref().map(|c| c as &(dyn Error + 'static))
}

pub fn run(cli: Cli) {
    let notifier = notifier();
    match cli.command {
        Command::Error { title, exit_code, cause, message } => {
            let cause = CauseChain::from_messages(cause);
            notifier.show_error_with_code(title.as_deref(), &message, as_cause(&cause), exit_code)
        }
        Command::Warning { title, cause, message } => {
            let cause = CauseChain::from_messages(cause);
            notifier.show_warning(title.as_deref(), &message, as_cause(&cause));
        }
        Command::Message { title, message } => {
            notifier.show_message(title.as_deref(), &message);
        }
    }
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
