// SPDX-License-Identifier: MPL-2.0
//! Bookkeeping for a set of presentation sites.
//!
//! The `Manager` owns the sites of one UI surface and a receiver watching
//! the queue's current id. After any queue mutation, [`Manager::sync`]
//! replays every transition to every site and reports which auto-dismiss
//! timers the host should start or abort.

use super::content::{Toast, ToastId};
use super::site::{DismissArm, ToastSite, Visibility};
use crate::config::ToastConfig;
use crate::queue::ToastQueue;
use crossbeam_channel::Receiver;
use std::collections::HashMap;

/// Messages for toast state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Ask for a site's toast to be shown.
    Present(ToastId),
    /// Dismiss a site's toast (tap, or external cancellation).
    Dismiss(ToastId),
    /// An auto-dismiss timer elapsed.
    TimerElapsed { id: ToastId, generation: u64 },
}

/// Timer work resulting from a [`Manager::sync`] call.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SyncOutcome {
    /// Timers to start, keyed by the site that became visible.
    pub start: Vec<(ToastId, DismissArm)>,
    /// Sites whose running timer should be aborted.
    pub stop: Vec<ToastId>,
}

impl SyncOutcome {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start.is_empty() && self.stop.is_empty()
    }
}

/// Manages the presentation sites of one UI surface.
#[derive(Debug)]
pub struct Manager {
    sites: Vec<ToastSite>,
    transitions: Receiver<Option<ToastId>>,
    config: ToastConfig,
}

impl Manager {
    /// Creates a manager observing `queue`.
    pub fn new(queue: &mut ToastQueue<ToastId>, config: ToastConfig) -> Self {
        Self {
            sites: Vec::new(),
            transitions: queue.watch(),
            config,
        }
    }

    /// Registers a new presentation site and returns its id.
    pub fn add_site(&mut self, toast: Toast) -> ToastId {
        let site = ToastSite::new(toast);
        let id = site.id();
        self.sites.push(site);
        id
    }

    /// Returns the site with the given id.
    #[must_use]
    pub fn site(&self, id: ToastId) -> Option<&ToastSite> {
        self.sites.iter().find(|site| site.id() == id)
    }

    fn site_mut(&mut self, id: ToastId) -> Option<&mut ToastSite> {
        self.sites.iter_mut().find(|site| site.id() == id)
    }

    /// Returns all registered sites in registration order.
    pub fn sites(&self) -> impl Iterator<Item = &ToastSite> {
        self.sites.iter()
    }

    /// Returns the site currently on screen, if any.
    #[must_use]
    pub fn visible(&self) -> Option<&ToastSite> {
        self.sites.iter().find(|site| site.is_visible())
    }

    /// Returns the toast presentation settings.
    #[must_use]
    pub fn config(&self) -> &ToastConfig {
        &self.config
    }

    /// Applies a toast message to its site.
    ///
    /// Messages for unknown sites are ignored.
    pub fn handle_message(&mut self, message: &Message, queue: &mut ToastQueue<ToastId>) {
        match *message {
            Message::Present(id) => {
                if let Some(site) = self.site_mut(id) {
                    site.present(queue);
                }
            }
            Message::Dismiss(id) => {
                if let Some(site) = self.site_mut(id) {
                    site.dismiss(queue);
                }
            }
            Message::TimerElapsed { id, generation } => {
                if let Some(site) = self.site_mut(id) {
                    site.timer_elapsed(generation, queue);
                }
            }
        }
    }

    /// Replays queue transitions observed since the last call.
    ///
    /// Every transition is shown to every site, oldest first. A site that was
    /// shown and hidden again within one batch ends up in `stop` only.
    /// Waiting sites that `queue` no longer holds drop their request.
    pub fn sync(&mut self, queue: &ToastQueue<ToastId>) -> SyncOutcome {
        let mut start: HashMap<ToastId, DismissArm> = HashMap::new();
        let mut stop = Vec::new();

        while let Ok(current) = self.transitions.try_recv() {
            for site in &mut self.sites {
                match site.sync(current.as_ref(), &self.config) {
                    Visibility::Shown(Some(arm)) => {
                        start.insert(site.id(), arm);
                    }
                    Visibility::Hidden => {
                        if start.remove(&site.id()).is_none() {
                            stop.push(site.id());
                        }
                    }
                    Visibility::Shown(None) | Visibility::Unchanged => {}
                }
            }
        }

        for site in &mut self.sites {
            site.reconcile(queue);
        }

        let mut start: Vec<_> = start.into_iter().collect();
        start.sort_by_key(|(_, arm)| arm.generation);
        SyncOutcome { start, stop }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn setup() -> (ToastQueue<ToastId>, Manager) {
        let mut queue = ToastQueue::default();
        let manager = Manager::new(&mut queue, ToastConfig::default());
        (queue, manager)
    }

    #[test]
    fn present_shows_site_and_requests_timer() {
        let (mut queue, mut manager) = setup();
        let id = manager.add_site(Toast::success("saved"));

        manager.handle_message(&Message::Present(id), &mut queue);
        let outcome = manager.sync(&queue);

        assert_eq!(outcome.start.len(), 1);
        assert_eq!(outcome.start[0].0, id);
        assert_eq!(outcome.start[0].1.delay, Duration::from_secs(3));
        assert_eq!(manager.visible().map(ToastSite::id), Some(id));
    }

    #[test]
    fn only_one_site_is_visible_at_a_time() {
        let (mut queue, mut manager) = setup();
        let ids: Vec<_> = (0..3)
            .map(|n| manager.add_site(Toast::info(format!("toast {n}"))))
            .collect();

        for id in &ids {
            manager.handle_message(&Message::Present(*id), &mut queue);
        }
        manager.sync(&queue);

        assert_eq!(manager.sites().filter(|site| site.is_visible()).count(), 1);
        assert_eq!(manager.visible().map(ToastSite::id), Some(ids[0]));
    }

    #[test]
    fn dismiss_promotes_next_site_and_stops_old_timer() {
        let (mut queue, mut manager) = setup();
        let first = manager.add_site(Toast::success("one"));
        let second = manager.add_site(Toast::warning("two"));
        manager.handle_message(&Message::Present(first), &mut queue);
        manager.handle_message(&Message::Present(second), &mut queue);
        manager.sync(&queue);

        manager.handle_message(&Message::Dismiss(first), &mut queue);
        let outcome = manager.sync(&queue);

        assert_eq!(outcome.stop, vec![first]);
        assert_eq!(outcome.start.len(), 1);
        assert_eq!(outcome.start[0].0, second);
        assert_eq!(outcome.start[0].1.delay, Duration::from_secs(5));
    }

    #[test]
    fn shown_and_hidden_in_one_batch_starts_nothing() {
        let (mut queue, mut manager) = setup();
        let id = manager.add_site(Toast::info("blink"));

        manager.handle_message(&Message::Present(id), &mut queue);
        manager.handle_message(&Message::Dismiss(id), &mut queue);
        let outcome = manager.sync(&queue);

        assert!(outcome.is_empty());
        assert!(manager.visible().is_none());
    }

    #[test]
    fn timer_elapsed_dismisses_visible_site() {
        let (mut queue, mut manager) = setup();
        let id = manager.add_site(Toast::success("saved"));
        manager.handle_message(&Message::Present(id), &mut queue);
        let outcome = manager.sync(&queue);
        let generation = outcome.start[0].1.generation;

        manager.handle_message(&Message::TimerElapsed { id, generation }, &mut queue);
        manager.sync(&queue);

        assert!(queue.is_idle());
        assert!(manager.visible().is_none());
    }

    #[test]
    fn request_withdrawn_through_handle_is_cleared() {
        let (mut queue, mut manager) = setup();
        let first = manager.add_site(Toast::info("first"));
        let second = manager.add_site(Toast::info("second"));
        manager.handle_message(&Message::Present(first), &mut queue);
        manager.handle_message(&Message::Present(second), &mut queue);
        manager.sync(&queue);

        queue.handle().dequeue(second);
        queue.process_pending();
        let outcome = manager.sync(&queue);

        assert!(outcome.is_empty());
        assert!(manager.site(first).is_some_and(ToastSite::is_requested));
        assert!(!manager.site(second).is_some_and(ToastSite::is_requested));
    }

    #[test]
    fn messages_for_unknown_sites_are_ignored() {
        let (mut queue, mut manager) = setup();
        manager.handle_message(&Message::Dismiss(ToastId::new()), &mut queue);
        assert!(manager.sync(&queue).is_empty());
        assert!(queue.is_idle());
    }
}
