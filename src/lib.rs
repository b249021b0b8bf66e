// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` coordinates transient toast notifications so that at most
//! one is on screen at a time.
//!
//! The [`queue`] module holds the coordinator: a bounded FIFO of waiting
//! toast ids plus an observable "current" slot. The [`ui::toast`] module
//! binds presentation sites to that queue and renders them with Iced, and
//! [`app`] wires both into a small demo application.

#![doc(html_root_url = "https://docs.rs/iced_toast/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod queue;
pub mod ui;
