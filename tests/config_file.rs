//! Config file creation and round-trip through TOML

use hnsearch::config::{load_or_create_config_at, save_config_at, Config, DebugLogRotation};
use tempfile::TempDir;

#[test]
fn test_missing_file_is_created_with_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let config = load_or_create_config_at(&path).unwrap();
    assert_eq!(config, Config::default());
    assert!(path.exists());

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("api_base = \"https://hn.algolia.com/api/v1/search?\""));
}

#[test]
fn test_saved_config_reloads_unchanged() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    let config = Config {
        api_base: "http://localhost:8080/search?".to_string(),
        request_timeout_secs: 3,
        tick_rate_ms: 50,
        debug: true,
        debug_log_path: Some("~/logs/".to_string()),
        debug_log_rotation: Some(DebugLogRotation::Daily),
        debug_log_keep: Some(3),
    };
    save_config_at(&config, &path).unwrap();

    assert_eq!(load_or_create_config_at(&path).unwrap(), config);
}

#[test]
fn test_invalid_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "request_timeout_secs = \"soon\"").unwrap();

    let err = load_or_create_config_at(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}
