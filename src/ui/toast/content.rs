// SPDX-License-Identifier: MPL-2.0
//! Toast identity and content.
//!
//! This module defines the `Toast` struct, its `Severity`, and the
//! `ToastId` each presentation site uses to talk to the queue.

use crate::config::{ToastConfig, DEFAULT_INFO_SECS, DEFAULT_SUCCESS_SECS, DEFAULT_WARNING_SECS};
use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::Duration;

/// Unique identifier for a toast request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines display duration and visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed successfully (green, 3s duration).
    #[default]
    Success,
    /// Informational message (blue, 3s duration).
    Info,
    /// Warning that doesn't block operation (orange, 5s duration).
    Warning,
    /// Error requiring attention (red, manual dismiss).
    Error,
}

impl Severity {
    /// Returns the accent color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Returns the glyph shown at the start of the toast.
    #[must_use]
    pub fn icon(&self) -> char {
        match self {
            Severity::Success => '✓',
            Severity::Info => 'i',
            Severity::Warning | Severity::Error => '!',
        }
    }

    /// Returns the auto-dismiss duration for this severity.
    /// Returns `None` for errors (manual dismiss required).
    #[must_use]
    pub fn auto_dismiss_duration(&self) -> Option<Duration> {
        let secs = match self {
            Severity::Success => DEFAULT_SUCCESS_SECS,
            Severity::Info => DEFAULT_INFO_SECS,
            Severity::Warning => DEFAULT_WARNING_SECS,
            Severity::Error => return None,
        };
        Some(Duration::from_secs(u64::from(secs)))
    }

    /// Returns the auto-dismiss duration, honoring configured overrides.
    #[must_use]
    pub fn configured_duration(&self, config: &ToastConfig) -> Option<Duration> {
        let configured = match self {
            Severity::Success => config.success_secs,
            Severity::Info => config.info_secs,
            Severity::Warning => config.warning_secs,
            Severity::Error => None,
        };
        configured
            .map(ToastConfig::clamp_secs)
            .or_else(|| self.auto_dismiss_duration())
    }
}

/// A message to be shown as a toast.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    severity: Severity,
    message: String,
    /// Custom auto-dismiss duration (overrides severity default).
    custom_duration: Option<Duration>,
}

impl Toast {
    /// Creates a new toast with the given severity and message.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            custom_duration: None,
        }
    }

    /// Creates a success toast.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    /// Creates an info toast.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    /// Creates a warning toast.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Creates an error toast.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Sets a custom auto-dismiss duration, overriding the severity default.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.custom_duration = Some(duration);
        self
    }

    /// Returns the severity level.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns how long the toast stays on screen once shown.
    ///
    /// `None` means the toast waits for a manual dismiss.
    #[must_use]
    pub fn display_duration(&self, config: &ToastConfig) -> Option<Duration> {
        self.custom_duration
            .or_else(|| self.severity.configured_duration(config))
    }
}
