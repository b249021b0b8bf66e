// SPDX-License-Identifier: MPL-2.0
//! Presentation sites.
//!
//! A `ToastSite` is one place in the UI that wants to show a toast. It owns
//! its own `ToastId`, asks the shared queue for a turn, and decides whether it
//! is visible by comparing the queue's current id with its own.
//!
//! Auto-dismiss timing lives here, not in the queue. Every time the site
//! becomes visible it arms a new timer generation; dismissing or hiding the
//! site cancels it, so a timer that fires late is ignored.

use super::content::{Toast, ToastId};
use crate::config::ToastConfig;
use crate::queue::ToastQueue;
use std::time::Duration;

/// Generation-counted, cancelable one-shot timer state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DismissTimer {
    generation: u64,
    armed: bool,
}

impl DismissTimer {
    /// Starts a new generation, invalidating any earlier one.
    pub fn arm(&mut self) -> u64 {
        self.generation += 1;
        self.armed = true;
        self.generation
    }

    /// Cancels the armed generation, if any.
    pub fn cancel(&mut self) {
        self.armed = false;
    }

    /// Consumes a timer expiry. Returns `true` only for the live generation.
    pub fn fire(&mut self, generation: u64) -> bool {
        if self.armed && generation == self.generation {
            self.armed = false;
            true
        } else {
            false
        }
    }

    /// Returns whether a generation is waiting to fire.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed
    }
}

/// A timer the host should start for a site that just became visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissArm {
    pub generation: u64,
    pub delay: Duration,
}

/// Outcome of comparing a site with the queue's current id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// The site just became visible; start the timer if one is given.
    Shown(Option<DismissArm>),
    /// The site was visible and no longer is.
    Hidden,
    /// Nothing changed for this site.
    Unchanged,
}

/// One place in the UI that can show a toast.
#[derive(Debug, Clone)]
pub struct ToastSite {
    id: ToastId,
    toast: Toast,
    requested: bool,
    visible: bool,
    timer: DismissTimer,
}

impl ToastSite {
    /// Creates a site with a fresh id.
    pub fn new(toast: Toast) -> Self {
        Self {
            id: ToastId::new(),
            toast,
            requested: false,
            visible: false,
            timer: DismissTimer::default(),
        }
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn toast(&self) -> &Toast {
        &self.toast
    }

    /// Whether the site has asked to be shown and not yet been dismissed.
    #[must_use]
    pub fn is_requested(&self) -> bool {
        self.requested
    }

    /// Whether the site is the one currently on screen.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether an auto-dismiss timer is running for this site.
    #[must_use]
    pub fn has_timer(&self) -> bool {
        self.timer.is_armed()
    }

    /// Asks the queue for a turn on screen.
    pub fn present(&mut self, queue: &mut ToastQueue<ToastId>) {
        self.requested = true;
        queue.enqueue(self.id);
    }

    /// Withdraws the toast, whether visible or waiting.
    pub fn dismiss(&mut self, queue: &mut ToastQueue<ToastId>) {
        self.requested = false;
        self.timer.cancel();
        queue.dequeue(&self.id);
    }

    /// Handles an auto-dismiss timer expiry. Stale generations are ignored.
    ///
    /// Returns `true` if the site was dismissed.
    pub fn timer_elapsed(&mut self, generation: u64, queue: &mut ToastQueue<ToastId>) -> bool {
        if self.timer.fire(generation) {
            tracing::debug!(id = ?self.id, "toast auto-dismissed");
            self.dismiss(queue);
            true
        } else {
            false
        }
    }

    /// Clears the request of a waiting site that the queue no longer holds.
    ///
    /// Covers withdrawals made behind the site's back, e.g. a `dequeue`
    /// posted through a queue handle. Returns `true` if the flag changed.
    pub fn reconcile(&mut self, queue: &ToastQueue<ToastId>) -> bool {
        if self.requested && !queue.contains(&self.id) {
            self.requested = false;
            true
        } else {
            false
        }
    }

    /// Reacts to a new value of the queue's current id.
    pub fn sync(&mut self, current: Option<&ToastId>, config: &ToastConfig) -> Visibility {
        let now_visible = current == Some(&self.id);
        if now_visible == self.visible {
            return Visibility::Unchanged;
        }
        self.visible = now_visible;

        if now_visible {
            let arm = self.toast.display_duration(config).map(|delay| DismissArm {
                generation: self.timer.arm(),
                delay,
            });
            Visibility::Shown(arm)
        } else {
            // The turn is over, whoever ended it.
            self.requested = false;
            self.timer.cancel();
            Visibility::Hidden
        }
    }
}
