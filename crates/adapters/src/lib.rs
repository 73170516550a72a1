// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gn-adapters: Dialog backends for the gn notifier

pub mod dialog;
pub mod env;

pub use dialog::{ConsoleDialogAdapter, DialogAdapter, DialogError, NativeDialogAdapter};

#[cfg(any(test, feature = "test-support"))]
pub use dialog::{DialogCall, FakeDialogAdapter};
