// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gn-notifier: User-facing notifications, including the fatal error path.
//!
//! Every process exit caused by a fatal error goes through
//! [`UserNotifier::show_error_with_code`]; grep for it to audit fatal call sites.

mod notifier;

pub use notifier::{notify_fatal_error, GuiNotifier, UserNotifier};
