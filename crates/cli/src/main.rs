// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gn: show a notification dialog from the command line

mod commands;
mod env;
mod logging;

use clap::Parser;

fn main() {
    logging::init();
    let cli = commands::Cli::parse();
    commands::run(cli);
}
