// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use tracing_subscriber::EnvFilter;

use crate::env;

/// Install a stderr subscriber when `GN_LOG` is set.
///
/// Without it stderr carries only the report and the cause trace.
pub fn init() {
    let Some(filter) = env::log_filter() else {
        return;
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
