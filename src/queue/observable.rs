// SPDX-License-Identifier: MPL-2.0
//! Observable scalar with synchronous change notification.
//!
//! An [`Observable`] holds one value and a list of listeners. Listeners are
//! called in registration order, inside [`Observable::set`], every time the
//! value changes. Setting an equal value notifies nobody.
//!
//! Two kinds of listeners are supported:
//! - callbacks registered with [`Observable::subscribe`]
//! - channel receivers created with [`Observable::watch`], which receive a
//!   clone of every new value in order and never coalesce transitions

use crossbeam_channel::{unbounded, Receiver, Sender};

/// Identifies a registered listener so it can be removed later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Callback<T> = Box<dyn FnMut(&T) + Send>;

enum Listener<T> {
    Callback(Callback<T>),
    Channel(Sender<T>),
}

/// A value plus the listeners interested in its changes.
pub struct Observable<T> {
    value: T,
    listeners: Vec<(ListenerId, Listener<T>)>,
    next_listener: u64,
}

impl<T> Observable<T> {
    /// Creates an observable with an initial value and no listeners.
    pub fn new(value: T) -> Self {
        Self {
            value,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    /// Returns the current value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Registers a callback invoked with each new value.
    pub fn subscribe(&mut self, callback: impl FnMut(&T) + Send + 'static) -> ListenerId {
        self.register(Listener::Callback(Box::new(callback)))
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() < before
    }

    /// Returns the number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn register(&mut self, listener: Listener<T>) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, listener));
        id
    }
}

impl<T: PartialEq + Clone + Send + 'static> Observable<T> {
    /// Creates a receiver that gets a clone of every future value.
    ///
    /// Dropping the receiver unregisters it on the next notification.
    pub fn watch(&mut self) -> Receiver<T> {
        let (tx, rx) = unbounded();
        self.register(Listener::Channel(tx));
        rx
    }

    /// Replaces the value, notifying listeners when it actually changed.
    ///
    /// Returns `true` if listeners were notified.
    pub fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;

        let current = &self.value;
        self.listeners.retain_mut(|(_, listener)| match listener {
            Listener::Callback(callback) => {
                callback(current);
                true
            }
            Listener::Channel(tx) => tx.send(current.clone()).is_ok(),
        });
        true
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observable")
            .field("value", &self.value)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl<T: Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
