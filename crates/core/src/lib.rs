// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gn-core: Report model, localization seam and diagnostic traces for the gn notifier

pub mod i18n;
pub mod report;
pub mod trace;

pub use i18n::{Catalog, CatalogError, Localizer, Untranslated};
pub use report::{Report, Severity, DEFAULT_EXIT_CODE};
pub use trace::{render_trace, write_trace, CauseChain};
