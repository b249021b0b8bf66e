// SPDX-License-Identifier: MPL-2.0
//! Toast presentation sites.
//!
//! This module is the UI side of the toast system. Each [`ToastSite`] is one
//! place that wants to show a toast; sites share a single
//! [`ToastQueue`](crate::queue::ToastQueue) so only one of them is on screen
//! at a time.
//!
//! # Components
//!
//! - [`content`] - `Toast`, `Severity` and `ToastId`
//! - [`site`] - `ToastSite` visibility and auto-dismiss timer state
//! - [`manager`] - `Manager` replaying queue transitions to a set of sites
//! - [`view`] - Toast card and overlay rendering
//!
//! # Usage
//!
//! ```ignore
//! use crate::queue::ToastQueue;
//! use crate::ui::toast::{Manager, Message, Toast};
//!
//! let mut queue = ToastQueue::default();
//! let mut toasts = Manager::new(&mut queue, config.toast.clone());
//! let saved = toasts.add_site(Toast::success("Image saved"));
//!
//! toasts.handle_message(&Message::Present(saved), &mut queue);
//! let timers = toasts.sync(&queue); // start/abort auto-dismiss timers
//!
//! // In your view function
//! let overlay = toast::view::overlay(&toasts).map(AppMessage::Toast);
//! ```
//!
//! # Design Considerations
//!
//! - Toast duration: ~3s for success/info, ~5s for warnings, manual dismiss for errors
//! - Max visible toasts: 1 (others wait in the queue)
//! - Position: top or bottom edge, centered

pub mod content;
pub mod manager;
pub mod site;
pub mod view;

pub use content::{Severity, Toast, ToastId};
pub use manager::{Manager, Message, SyncOutcome};
pub use site::{DismissArm, DismissTimer, ToastSite, Visibility};
