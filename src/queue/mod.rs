// SPDX-License-Identifier: MPL-2.0
//! Toast queue coordination.
//!
//! One [`ToastQueue`] is created at application start and shared by every
//! place in the UI that wants to show a toast. It guarantees at most one toast
//! is current at a time and hands out the rest in request order.
//!
//! # Components
//!
//! - [`ToastQueue`] - The sequencer: `enqueue`, `dequeue`, observable `current`
//! - [`Observable`] - Value plus synchronous change listeners
//! - [`QueueHandle`] - Cloneable, thread-safe request poster
//! - [`QueueCapacity`] - Bound on the number of waiting toasts
//!
//! # Usage
//!
//! ```
//! use iced_toast::queue::{QueueCapacity, ToastQueue};
//!
//! let mut queue = ToastQueue::new(QueueCapacity::new(10));
//! queue.enqueue("saved");
//! queue.enqueue("uploaded");
//! assert_eq!(queue.current(), Some(&"saved"));
//!
//! queue.dequeue("saved");
//! assert_eq!(queue.current(), Some(&"uploaded"));
//! ```
//!
//! # Threading
//!
//! Mutation requires `&mut ToastQueue`, so only its owner can change it.
//! Other threads post requests through a [`QueueHandle`] and the owner
//! applies them with [`ToastQueue::process_pending`].

mod capacity;
mod coordinator;
mod handle;
mod observable;

pub use capacity::QueueCapacity;
pub use coordinator::{ToastQueue, ToastStatus};
pub use handle::{QueueHandle, Request};
pub use observable::{ListenerId, Observable};
