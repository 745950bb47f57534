use photokik_app::platform::logging::LogDestination;
use photokik_app::platform::settings::{self, Settings};
use photokik_core::DEFAULT_THRESHOLD_RATIO;
use tempfile::TempDir;

fn init_logging() {
    kik_logging::initialize_for_tests();
}

#[test]
fn missing_file_yields_defaults() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let settings = settings::load(&temp.path().join("nope.ron"));
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.swipe_threshold_ratio, DEFAULT_THRESHOLD_RATIO);
    assert_eq!(settings.log_destination, LogDestination::File);
}

#[test]
fn save_then_load_round_trips() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(".photokik_settings.ron");
    let settings = Settings {
        swipe_threshold_ratio: 0.25,
        log_destination: LogDestination::Terminal,
    };

    settings::save(&path, &settings);
    assert!(path.exists());
    assert_eq!(settings::load(&path), settings);
}

#[test]
fn save_replaces_an_existing_file() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(".photokik_settings.ron");

    settings::save(
        &path,
        &Settings {
            swipe_threshold_ratio: 0.25,
            log_destination: LogDestination::File,
        },
    );
    settings::save(
        &path,
        &Settings {
            swipe_threshold_ratio: 0.75,
            log_destination: LogDestination::Both,
        },
    );

    let loaded = settings::load(&path);
    assert_eq!(loaded.swipe_threshold_ratio, 0.75);
    assert_eq!(loaded.log_destination, LogDestination::Both);
}

#[test]
fn ratio_only_file_defaults_the_log_destination() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(".photokik_settings.ron");
    // Settings written before the log destination existed.
    std::fs::write(&path, "(swipe_threshold_ratio: 0.5)").unwrap();

    let loaded = settings::load(&path);
    assert_eq!(loaded.swipe_threshold_ratio, 0.5);
    assert_eq!(loaded.log_destination, LogDestination::File);
}

#[test]
fn unparseable_file_degrades_to_defaults() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(".photokik_settings.ron");
    std::fs::write(&path, "not ron at all {{{").unwrap();

    assert_eq!(settings::load(&path), Settings::default());
}

#[test]
fn out_of_range_ratio_keeps_the_rest_of_the_settings() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(".photokik_settings.ron");
    std::fs::write(
        &path,
        "(swipe_threshold_ratio: -2.0, log_destination: Terminal)",
    )
    .unwrap();

    let loaded = settings::load(&path);
    assert_eq!(loaded.swipe_threshold_ratio, DEFAULT_THRESHOLD_RATIO);
    assert_eq!(loaded.log_destination, LogDestination::Terminal);
}
