// SPDX-License-Identifier: MPL-2.0
//! Cross-thread access to the toast queue.
//!
//! The queue itself is owned by one execution context (the UI update loop).
//! Code running elsewhere (background tasks, timer threads) gets a
//! [`QueueHandle`] instead. The handle never touches queue state: it posts
//! requests onto a channel, and the owner applies them in arrival order when
//! it calls [`ToastQueue::process_pending`](super::ToastQueue::process_pending).

use crossbeam_channel::Sender;

/// A queue mutation waiting to be applied by the owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request<Id> {
    /// Apply `enqueue(id)`.
    Enqueue(Id),
    /// Apply `dequeue(id)`.
    Dequeue(Id),
}

/// Handle for posting requests to a [`ToastQueue`](super::ToastQueue).
///
/// This handle is cheap to clone and can be shared across threads.
/// Requests are applied in the order they were posted.
#[derive(Debug)]
pub struct QueueHandle<Id> {
    request_tx: Sender<Request<Id>>,
}

impl<Id> Clone for QueueHandle<Id> {
    fn clone(&self) -> Self {
        Self {
            request_tx: self.request_tx.clone(),
        }
    }
}

impl<Id: std::fmt::Debug> QueueHandle<Id> {
    pub(super) fn new(request_tx: Sender<Request<Id>>) -> Self {
        Self { request_tx }
    }

    /// Requests that `id` become visible once possible.
    pub fn enqueue(&self, id: Id) {
        self.post(Request::Enqueue(id));
    }

    /// Requests that `id` stop being visible or stop waiting.
    pub fn dequeue(&self, id: Id) {
        self.post(Request::Dequeue(id));
    }

    fn post(&self, request: Request<Id>) {
        // The queue outlives the UI; a closed channel only happens at teardown.
        if let Err(err) = self.request_tx.send(request) {
            tracing::trace!(request = ?err.into_inner(), "toast queue gone, request ignored");
        }
    }
}
