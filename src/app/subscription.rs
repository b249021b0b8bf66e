// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// How often requests posted through a queue handle are applied.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Creates a periodic tick subscription for draining queue handle requests.
///
/// The tick only runs while background work may still post requests.
pub fn create_tick_subscription(awaiting_requests: bool) -> Subscription<Message> {
    if awaiting_requests {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
