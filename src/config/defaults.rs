// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Queue**: Pending toast capacity bounds
//! - **Toast**: Display durations per severity

// ==========================================================================
// Queue Defaults
// ==========================================================================

/// Default number of toasts allowed to wait behind the current one.
pub const DEFAULT_QUEUE_CAPACITY: usize = 10;

/// Minimum queue capacity.
pub const MIN_QUEUE_CAPACITY: usize = 1;

/// Maximum queue capacity.
pub const MAX_QUEUE_CAPACITY: usize = 1000;

// ==========================================================================
// Toast Duration Defaults
// ==========================================================================

/// Display time for success toasts (in seconds).
pub const DEFAULT_SUCCESS_SECS: u32 = 3;

/// Display time for info toasts (in seconds).
pub const DEFAULT_INFO_SECS: u32 = 3;

/// Display time for warning toasts (in seconds).
pub const DEFAULT_WARNING_SECS: u32 = 5;

/// Minimum configurable display time (in seconds).
pub const MIN_TOAST_SECS: u32 = 1;

/// Maximum configurable display time (in seconds).
pub const MAX_TOAST_SECS: u32 = 60;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_QUEUE_CAPACITY > 0);
    assert!(MAX_QUEUE_CAPACITY >= MIN_QUEUE_CAPACITY);
    assert!(DEFAULT_QUEUE_CAPACITY >= MIN_QUEUE_CAPACITY);
    assert!(DEFAULT_QUEUE_CAPACITY <= MAX_QUEUE_CAPACITY);

    assert!(MIN_TOAST_SECS > 0);
    assert!(MAX_TOAST_SECS >= MIN_TOAST_SECS);
    assert!(DEFAULT_SUCCESS_SECS >= MIN_TOAST_SECS);
    assert!(DEFAULT_INFO_SECS >= MIN_TOAST_SECS);
    assert!(DEFAULT_WARNING_SECS > DEFAULT_SUCCESS_SECS);
    assert!(DEFAULT_WARNING_SECS <= MAX_TOAST_SECS);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_defaults_are_valid() {
        assert_eq!(DEFAULT_QUEUE_CAPACITY, 10);
        assert!(DEFAULT_QUEUE_CAPACITY >= MIN_QUEUE_CAPACITY);
        assert!(DEFAULT_QUEUE_CAPACITY <= MAX_QUEUE_CAPACITY);
    }

    #[test]
    fn toast_duration_defaults_are_valid() {
        assert_eq!(DEFAULT_SUCCESS_SECS, DEFAULT_INFO_SECS);
        assert!(DEFAULT_WARNING_SECS > DEFAULT_SUCCESS_SECS);
        assert!(DEFAULT_WARNING_SECS <= MAX_TOAST_SECS);
    }
}
