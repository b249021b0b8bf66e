// SPDX-License-Identifier: MPL-2.0
use iced_toast::config::{self, Config, QueueConfig, ToastConfig, ToastPosition};
use iced_toast::queue::{QueueCapacity, ToastQueue, ToastStatus};
use iced_toast::ui::toast::{Manager, Message, Toast};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::tempdir;

fn recorded(queue: &mut ToastQueue<String>) -> Arc<Mutex<Vec<Option<String>>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    queue.subscribe(move |current| sink.lock().unwrap().push(current.clone()));
    seen
}

#[test]
fn toasts_are_shown_one_at_a_time_in_arrival_order() {
    let mut queue = ToastQueue::new(QueueCapacity::new(3));
    let seen = recorded(&mut queue);

    for id in ["saved", "synced", "uploaded"] {
        queue.enqueue(id.to_string());
    }
    assert_eq!(queue.current().map(String::as_str), Some("saved"));
    assert_eq!(queue.status("uploaded"), ToastStatus::Pending { position: 1 });

    queue.dequeue("saved");
    queue.dequeue("synced");
    queue.dequeue("uploaded");

    assert!(queue.is_idle());
    assert_eq!(
        *seen.lock().unwrap(),
        vec![
            Some("saved".to_string()),
            Some("synced".to_string()),
            Some("uploaded".to_string()),
            None,
        ]
    );
}

#[test]
fn full_queue_drops_newest_request_silently() {
    let mut queue = ToastQueue::new(QueueCapacity::new(1));
    queue.enqueue("a".to_string());
    queue.enqueue("b".to_string());
    queue.enqueue("c".to_string());

    assert_eq!(queue.pending_len(), 1);
    assert!(queue.contains("b"));
    assert!(!queue.contains("c"));
}

#[test]
fn cancelling_a_waiting_toast_keeps_the_visible_one() {
    let mut queue = ToastQueue::new(QueueCapacity::default());
    let seen = recorded(&mut queue);
    queue.enqueue("a".to_string());
    queue.enqueue("b".to_string());
    queue.enqueue("c".to_string());

    queue.dequeue("b");

    assert_eq!(queue.current().map(String::as_str), Some("a"));
    assert_eq!(queue.pending().cloned().collect::<Vec<_>>(), vec!["c"]);
    assert_eq!(seen.lock().unwrap().len(), 1);
}

#[test]
fn unknown_dequeue_and_duplicate_enqueue_are_ignored() {
    let mut queue = ToastQueue::new(QueueCapacity::default());
    let seen = recorded(&mut queue);

    queue.dequeue("ghost");
    queue.enqueue("a".to_string());
    queue.enqueue("a".to_string());

    assert_eq!(queue.pending_len(), 0);
    assert_eq!(seen.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn requests_from_spawned_tasks_are_applied_on_drain() {
    let mut queue = ToastQueue::new(QueueCapacity::default());
    let handle = queue.handle();

    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(5)).await;
        handle.enqueue("export".to_string());
        handle.enqueue("import".to_string());
        handle.dequeue("export".to_string());
    })
    .await
    .expect("task should finish");

    assert!(queue.is_idle());
    assert_eq!(queue.process_pending(), 3);
    assert_eq!(queue.current().map(String::as_str), Some("import"));
}

#[test]
fn manager_keeps_a_single_site_visible() {
    let mut queue = ToastQueue::new(QueueCapacity::default());
    let mut manager = Manager::new(&mut queue, ToastConfig::default());
    let saved = manager.add_site(Toast::success("Saved"));
    let failed = manager.add_site(Toast::error("Failed"));

    manager.handle_message(&Message::Present(saved), &mut queue);
    manager.handle_message(&Message::Present(failed), &mut queue);
    let outcome = manager.sync(&queue);

    assert_eq!(manager.visible().map(|site| site.id()), Some(saved));
    assert_eq!(outcome.start.len(), 1);
    assert_eq!(outcome.start[0].0, saved);
    assert_eq!(outcome.start[0].1.delay, Duration::from_secs(3));

    manager.handle_message(&Message::Dismiss(saved), &mut queue);
    let outcome = manager.sync(&queue);

    assert_eq!(manager.visible().map(|site| site.id()), Some(failed));
    assert_eq!(outcome.stop, vec![saved]);
    // Error toasts wait for the user.
    assert!(outcome.start.is_empty());
}

#[test]
fn config_round_trip_through_settings_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let config = Config {
        queue: QueueConfig { capacity: 4 },
        toast: ToastConfig {
            position: ToastPosition::Top,
            success_secs: Some(2),
            info_secs: None,
            warning_secs: Some(120),
        },
    };
    config::save_to_path(&config, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config from path");
    assert_eq!(loaded, config);
    assert_eq!(loaded.queue_capacity().value(), 4);

    let warning = Toast::warning("low disk").display_duration(&loaded.toast);
    assert_eq!(warning, Some(Duration::from_secs(60)));

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn unreadable_settings_fall_back_to_defaults_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "queue = 12").expect("write");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(config, Config::default());
    assert!(warning.is_some());
}
