//! Corrupt or missing stores must never take the runtime down.

use std::fs;

use match_core::Settings;
use runtime::repository::{FileHistoryRepository, FileSettingsRepository};
use runtime::{Event, MatchEvent, Runtime, RuntimeConfig, Topic};

#[tokio::test]
async fn corrupt_settings_fall_back_to_defaults_with_a_notice() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("settings.json"), "{ definitely not json").unwrap();

    let runtime = Runtime::new(
        Box::new(FileSettingsRepository::new(dir.path()).unwrap()),
        Box::new(FileHistoryRepository::new(dir.path()).unwrap()),
        RuntimeConfig::default(),
    );
    let handle = runtime.handle();
    let mut match_rx = handle.subscribe(Topic::Match);
    tokio::spawn(runtime.run());

    assert_eq!(handle.query_settings().await.unwrap(), Settings::default());

    let event = match_rx.recv().await.unwrap();
    match event {
        Event::Match(MatchEvent::Notice { text }) => {
            assert_eq!(text, "Failed to load settings")
        }
        other => panic!("expected a load notice, got {other:?}"),
    }
}

#[tokio::test]
async fn corrupt_history_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("match_history.json"), "[{\"id\": 42]").unwrap();

    let runtime = Runtime::new(
        Box::new(FileSettingsRepository::new(dir.path()).unwrap()),
        Box::new(FileHistoryRepository::new(dir.path()).unwrap()),
        RuntimeConfig::default(),
    );
    let handle = runtime.handle();
    tokio::spawn(runtime.run());

    assert!(handle.query_history().await.unwrap().is_empty());
}

#[tokio::test]
async fn settings_written_by_one_runtime_are_read_by_the_next() {
    let dir = tempfile::tempdir().unwrap();

    let settings = Settings {
        timer_duration: 90,
        vibration_enabled: false,
        ..Settings::default()
    };

    {
        let runtime = Runtime::new(
            Box::new(FileSettingsRepository::new(dir.path()).unwrap()),
            Box::new(FileHistoryRepository::new(dir.path()).unwrap()),
            RuntimeConfig::default(),
        );
        let handle = runtime.handle();
        tokio::spawn(runtime.run());
        handle.update_settings(settings.clone()).await.unwrap();
        // A query round-trip guarantees the update was processed before the
        // worker shuts down.
        assert_eq!(handle.query_settings().await.unwrap(), settings);
        // Dropping the handle stops the worker.
    }

    let runtime = Runtime::new(
        Box::new(FileSettingsRepository::new(dir.path()).unwrap()),
        Box::new(FileHistoryRepository::new(dir.path()).unwrap()),
        RuntimeConfig::default(),
    );
    let handle = runtime.handle();
    tokio::spawn(runtime.run());

    assert_eq!(handle.query_settings().await.unwrap(), settings);
}
