// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Shared error-notification hook: log once, then the error propagates
//! to the caller unchanged.

use crate::error::WitError;
use tracing::error;

/// Invoked exactly once per failed network operation
pub trait ErrorNotifier: Send + Sync {
    fn notify(&self, message: &str, error: &WitError);
}

/// Default notifier, reports through tracing
pub struct LogNotifier;

impl ErrorNotifier for LogNotifier {
    fn notify(&self, message: &str, error: &WitError) {
        error!(error = %error, "{}", message);
    }
}
