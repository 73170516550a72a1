// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Environment variable access for the dialog adapters.

fn is_set(name: &str) -> bool {
    std::env::var_os(name).is_some_and(|v| !v.is_empty())
}

/// Whether a graphical session is reachable.
///
/// On Linux and the BSDs this needs `DISPLAY` (X11) or `WAYLAND_DISPLAY`.
/// Other platforms always have a window server.
pub fn has_display() -> bool {
    if cfg!(all(unix, not(target_os = "macos"))) {
        is_set("DISPLAY") || is_set("WAYLAND_DISPLAY")
    } else {
        true
    }
}

#[cfg(test)]
#[path = "env_tests.rs"]
pub(crate) mod tests;
