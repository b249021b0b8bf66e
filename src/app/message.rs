// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::toast;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Forwarded to the toast manager.
    Toast(toast::Message),
    /// Start a simulated background job that reports back with a toast.
    StartBackgroundJob,
    /// A background job posted its toast request through a queue handle.
    BackgroundJobPosted,
    /// Periodic tick used to apply requests posted from other threads.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Queue capacity override (`--capacity`). Takes precedence over settings.toml.
    pub capacity: Option<usize>,
    /// Write the effective queue capacity back to settings.toml (`--save-config`).
    pub save_config: bool,
}
