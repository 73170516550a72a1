// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the gn binary.

use std::path::PathBuf;

/// Force console output instead of native dialogs (`GN_HEADLESS`)
pub fn headless() -> bool {
    std::env::var("GN_HEADLESS").map(|s| is_truthy(&s)).unwrap_or(false)
}

/// TOML catalog for default dialog titles (`GN_CATALOG`)
pub fn catalog_path() -> Option<PathBuf> {
    std::env::var("GN_CATALOG").ok().filter(|s| !s.is_empty()).map(PathBuf::from)
}

/// Tracing filter directive (`GN_LOG`). Unset means no log output.
pub fn log_filter() -> Option<String> {
    std::env::var("GN_LOG").ok().filter(|s| !s.is_empty())
}

fn is_truthy(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
