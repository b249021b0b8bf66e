// SPDX-License-Identifier: MPL-2.0
//! Pending-queue capacity newtype.

use crate::config::{DEFAULT_QUEUE_CAPACITY, MAX_QUEUE_CAPACITY, MIN_QUEUE_CAPACITY};

/// Upper bound on the number of toasts waiting behind the current one.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (1–1000 entries).
///
/// # Example
///
/// ```
/// use iced_toast::queue::QueueCapacity;
///
/// let capacity = QueueCapacity::new(3);
/// assert_eq!(capacity.value(), 3);
///
/// // Zero is not a usable bound and is clamped up
/// assert_eq!(QueueCapacity::new(0).value(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QueueCapacity(usize);

impl QueueCapacity {
    /// Creates a new queue capacity, clamping to valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(MIN_QUEUE_CAPACITY, MAX_QUEUE_CAPACITY))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for QueueCapacity {
    fn default() -> Self {
        Self(DEFAULT_QUEUE_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_valid_range() {
        assert_eq!(QueueCapacity::new(0).value(), MIN_QUEUE_CAPACITY);
        assert_eq!(QueueCapacity::new(1_000_000).value(), MAX_QUEUE_CAPACITY);
    }

    #[test]
    fn new_accepts_valid_values() {
        assert_eq!(QueueCapacity::new(1).value(), 1);
        assert_eq!(QueueCapacity::new(3).value(), 3);
        assert_eq!(QueueCapacity::new(250).value(), 250);
    }

    #[test]
    fn default_is_ten() {
        assert_eq!(QueueCapacity::default().value(), 10);
    }
}
