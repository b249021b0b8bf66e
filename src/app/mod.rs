// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! The `App` struct owns the single toast queue and the presentation sites
//! of the demo surface. It turns site messages into queue operations and
//! queue transitions into auto-dismiss timer tasks. Background work never
//! touches the queue directly: it posts through a `QueueHandle`, and the
//! periodic tick applies those requests here, on the update loop.

mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::queue::{QueueCapacity, ToastQueue};
use crate::ui::toast::{self, Toast, ToastId};
use iced::{task, window, Element, Subscription, Task, Theme};
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// How long the simulated background job runs before reporting back.
const BACKGROUND_JOB_DURATION: Duration = Duration::from_millis(1500);

pub const WINDOW_DEFAULT_HEIGHT: u32 = 480;
pub const WINDOW_DEFAULT_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 360;
pub const MIN_WINDOW_WIDTH: u32 = 400;

/// Root Iced application state.
pub struct App {
    queue: ToastQueue<ToastId>,
    toasts: toast::Manager,
    /// Sites with a button on the demo surface.
    demo_sites: Vec<ToastId>,
    /// Site whose toast is requested from a background task.
    background_site: ToastId,
    /// Abort handles of running auto-dismiss timers.
    timers: HashMap<ToastId, task::Handle>,
    jobs_in_flight: usize,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("queue", &self.queue)
            .field("timers", &self.timers.len())
            .field("jobs_in_flight", &self.jobs_in_flight)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires a Fn boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Stores `capacity` in `config` and writes it to settings.toml.
fn remember_capacity(
    config: &mut Config,
    capacity: QueueCapacity,
    base_dir: Option<PathBuf>,
) -> crate::error::Result<()> {
    config.queue.capacity = capacity.value();
    config::save_with_override(config, base_dir)
}

impl App {
    /// Loads settings and builds the initial state.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (mut config, mut config_warning) = config::load();
        let capacity = flags
            .capacity
            .map_or_else(|| config.queue_capacity(), QueueCapacity::new);

        if flags.save_config {
            match remember_capacity(&mut config, capacity, None) {
                Ok(()) => tracing::info!(capacity = capacity.value(), "settings saved"),
                Err(err) => {
                    config_warning = Some(format!("Settings could not be saved ({err})"));
                }
            }
        }

        Self::with_config(&config, capacity, config_warning)
    }

    /// Builds the application from already-loaded settings.
    ///
    /// A settings warning is shown as the first toast.
    pub fn with_config(
        config: &Config,
        capacity: QueueCapacity,
        config_warning: Option<String>,
    ) -> (Self, Task<Message>) {
        let mut queue = ToastQueue::new(capacity);
        let mut toasts = toast::Manager::new(&mut queue, config.toast.clone());

        let demo_sites = vec![
            toasts.add_site(Toast::success("Image saved")),
            toasts.add_site(Toast::info("3 new files found")),
            toasts.add_site(Toast::warning("Disk space is running low")),
            toasts.add_site(Toast::error("Upload failed")),
        ];
        let background_site = toasts.add_site(Toast::info("Background export finished"));

        tracing::info!(capacity = capacity.value(), "toast queue ready");

        let mut app = Self {
            queue,
            toasts,
            demo_sites,
            background_site,
            timers: HashMap::new(),
            jobs_in_flight: 0,
        };

        let task = match config_warning {
            Some(warning) => {
                tracing::warn!(%warning, "settings not loaded");
                let id = app.toasts.add_site(Toast::warning(warning));
                app.apply(toast::Message::Present(id))
            }
            None => Task::none(),
        };
        (app, task)
    }

    fn title(&self) -> String {
        match self.toasts.visible() {
            Some(site) => format!("{} - Iced Toast", site.toast().message()),
            None => "Iced Toast".to_string(),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(
            self.jobs_in_flight > 0 || self.queue.has_pending_requests(),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Toast(toast_message) => self.apply(toast_message),
            Message::StartBackgroundJob => {
                self.jobs_in_flight += 1;
                let handle = self.queue.handle();
                let id = self.background_site;
                Task::perform(
                    async move {
                        tokio::time::sleep(BACKGROUND_JOB_DURATION).await;
                        handle.enqueue(id);
                    },
                    |()| Message::BackgroundJobPosted,
                )
            }
            Message::BackgroundJobPosted => {
                self.jobs_in_flight = self.jobs_in_flight.saturating_sub(1);
                Task::none()
            }
            Message::Tick(_instant) => {
                let applied = self.queue.process_pending();
                if applied > 0 {
                    tracing::debug!(applied, "applied queued toast requests");
                }
                self.sync_timers()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            toasts: &self.toasts,
            queue: &self.queue,
            demo_sites: &self.demo_sites,
            jobs_in_flight: self.jobs_in_flight,
        })
    }

    /// Applies a toast message, then reconciles timers with the new state.
    fn apply(&mut self, message: toast::Message) -> Task<Message> {
        self.toasts.handle_message(&message, &mut self.queue);
        self.sync_timers()
    }

    /// Starts timers for sites that became visible and aborts the timers of
    /// sites that were hidden.
    fn sync_timers(&mut self) -> Task<Message> {
        let outcome = self.toasts.sync(&self.queue);

        for id in outcome.stop {
            if let Some(handle) = self.timers.remove(&id) {
                handle.abort();
            }
        }

        let tasks: Vec<Task<Message>> = outcome
            .start
            .into_iter()
            .map(|(id, arm)| {
                let (task, handle) = Task::perform(
                    async move { tokio::time::sleep(arm.delay).await },
                    move |()| {
                        Message::Toast(toast::Message::TimerElapsed {
                            id,
                            generation: arm.generation,
                        })
                    },
                )
                .abortable();
                if let Some(previous) = self.timers.insert(id, handle) {
                    previous.abort();
                }
                task
            })
            .collect();

        Task::batch(tasks)
    }
}
