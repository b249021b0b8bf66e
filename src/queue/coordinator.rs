// SPDX-License-Identifier: MPL-2.0
//! The toast sequencer.
//!
//! [`ToastQueue`] keeps one "current" toast id and a FIFO of pending ids.
//! Presentation sites enqueue their id when they want to be shown and
//! dequeue it when dismissed; each site watches [`ToastQueue::current`] to
//! find out whether it is the one on screen.

use super::capacity::QueueCapacity;
use super::handle::{QueueHandle, Request};
use super::observable::{ListenerId, Observable};
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::borrow::Borrow;
use std::collections::VecDeque;
use std::fmt::Debug;

/// Where an id stands from the queue's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastStatus {
    /// The queue has never seen the id, or has already let it go.
    NotKnown,
    /// Waiting in line; `position` 0 is next to be promoted.
    Pending { position: usize },
    /// The id is the one currently eligible for display.
    Current,
}

/// Serializes toast presentation so at most one toast is current.
///
/// Invariants, after every call:
/// - the current id never appears in the pending queue
/// - the pending queue holds no duplicates
/// - the pending queue never exceeds its capacity
/// - if the pending queue is non-empty, there is a current id
pub struct ToastQueue<Id> {
    current: Observable<Option<Id>>,
    pending: VecDeque<Id>,
    capacity: QueueCapacity,
    request_tx: Sender<Request<Id>>,
    request_rx: Receiver<Request<Id>>,
}

impl<Id> ToastQueue<Id>
where
    Id: Eq + Clone + Debug + Send + 'static,
{
    /// Creates an empty queue with a fixed pending capacity.
    #[must_use]
    pub fn new(capacity: QueueCapacity) -> Self {
        let (request_tx, request_rx) = unbounded();
        Self {
            current: Observable::new(None),
            pending: VecDeque::with_capacity(capacity.value()),
            capacity,
            request_tx,
            request_rx,
        }
    }

    /// Asks for `id` to be shown once every toast ahead of it is gone.
    ///
    /// Ids that are already current or pending are ignored, and so is any
    /// request arriving while the pending queue is full.
    pub fn enqueue(&mut self, id: Id) {
        if self.current.get().as_ref() == Some(&id) || self.pending.contains(&id) {
            tracing::trace!(?id, "toast already queued");
            return;
        }
        if self.pending.len() >= self.capacity.value() {
            tracing::debug!(?id, capacity = self.capacity.value(), "toast queue full, request dropped");
            return;
        }

        tracing::trace!(?id, "toast enqueued");
        self.pending.push_back(id);
        if self.current.get().is_none() {
            self.promote();
        }
    }

    /// Withdraws `id`, whether it is on screen or still waiting.
    ///
    /// Dismissing the current toast promotes the next pending one. Removing
    /// a pending toast keeps the order of the others. Unknown ids are ignored.
    pub fn dequeue<Q>(&mut self, id: &Q)
    where
        Id: Borrow<Q>,
        Q: PartialEq + Debug + ?Sized,
    {
        if self.is_current(id) {
            tracing::trace!(?id, "current toast dismissed");
            self.promote();
        } else if let Some(position) = self.pending.iter().position(|p| matches(p, id)) {
            tracing::trace!(?id, position, "pending toast withdrawn");
            self.pending.remove(position);
        }
    }

    /// Moves the head of the pending queue into the current slot.
    ///
    /// Clearing and refilling happen in one step, so listeners see a single
    /// transition from the old current id to the new one.
    fn promote(&mut self) {
        let next = self.pending.pop_front();
        if let Some(id) = &next {
            tracing::debug!(?id, waiting = self.pending.len(), "toast promoted");
        }
        self.current.set(next);
    }

    /// Returns the id currently eligible for display.
    pub fn current(&self) -> Option<&Id> {
        self.current.get().as_ref()
    }

    /// Returns true if `id` is the current toast.
    pub fn is_current<Q>(&self, id: &Q) -> bool
    where
        Id: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.current().is_some_and(|current| matches(current, id))
    }

    /// Returns true if `id` is current or pending.
    pub fn contains<Q>(&self, id: &Q) -> bool
    where
        Id: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.status(id) != ToastStatus::NotKnown
    }

    /// Reports where `id` stands in the queue.
    pub fn status<Q>(&self, id: &Q) -> ToastStatus
    where
        Id: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        if self.is_current(id) {
            return ToastStatus::Current;
        }
        self.pending
            .iter()
            .position(|p| matches(p, id))
            .map_or(ToastStatus::NotKnown, |position| ToastStatus::Pending { position })
    }

    /// Returns the waiting ids, next to be promoted first.
    pub fn pending(&self) -> impl Iterator<Item = &Id> {
        self.pending.iter()
    }

    /// Returns the number of waiting ids.
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Returns the fixed pending capacity.
    #[must_use]
    pub fn capacity(&self) -> QueueCapacity {
        self.capacity
    }

    /// Returns true when nothing is current (and therefore nothing waits).
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.current.get().is_none()
    }

    /// Registers a callback invoked synchronously whenever the current id
    /// changes, with the new value.
    pub fn subscribe(
        &mut self,
        callback: impl FnMut(&Option<Id>) + Send + 'static,
    ) -> ListenerId {
        self.current.subscribe(callback)
    }

    /// Removes a callback registered with [`Self::subscribe`].
    pub fn unsubscribe(&mut self, listener: ListenerId) -> bool {
        self.current.unsubscribe(listener)
    }

    /// Returns a receiver that gets every future value of the current id,
    /// in order.
    pub fn watch(&mut self) -> Receiver<Option<Id>> {
        self.current.watch()
    }

    /// Creates a handle for posting requests from other threads.
    #[must_use]
    pub fn handle(&self) -> QueueHandle<Id> {
        QueueHandle::new(self.request_tx.clone())
    }

    /// Applies every request posted through a [`QueueHandle`], in order.
    ///
    /// Call this from the owning context (e.g., on each UI tick). Returns
    /// the number of requests applied.
    pub fn process_pending(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(request) = self.request_rx.try_recv() {
            match request {
                Request::Enqueue(id) => self.enqueue(id),
                Request::Dequeue(id) => self.dequeue(&id),
            }
            applied += 1;
        }
        applied
    }

    /// Returns true if handles have posted requests not yet applied.
    #[must_use]
    pub fn has_pending_requests(&self) -> bool {
        !self.request_rx.is_empty()
    }
}

fn matches<Id, Q>(candidate: &Id, id: &Q) -> bool
where
    Id: Borrow<Q>,
    Q: PartialEq + ?Sized,
{
    <Id as Borrow<Q>>::borrow(candidate) == id
}

impl<Id> Default for ToastQueue<Id>
where
    Id: Eq + Clone + Debug + Send + 'static,
{
    fn default() -> Self {
        Self::new(QueueCapacity::default())
    }
}

impl<Id: Debug> Debug for ToastQueue<Id> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToastQueue")
            .field("current", self.current.get())
            .field("pending", &self.pending)
            .field("capacity", &self.capacity)
            .finish()
    }
}
