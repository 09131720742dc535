// Config loading and validation tests

use metrics_condenser::config::AppConfig;

const VALID_CONFIG: &str = r#"
[server]
port = 8081
host = "0.0.0.0"

[engine]
window_capacity = 50
default_target_points = 300
max_target_points = 2000
"#;

#[test]
fn test_config_loads_from_str() {
    let config = AppConfig::load_from_str(VALID_CONFIG).expect("load_from_str");
    assert_eq!(config.server.port, 8081);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.engine.window_capacity, 50);
    assert_eq!(config.engine.default_target_points, 300);
    assert_eq!(config.engine.max_target_points, 2000);
}

#[test]
fn test_config_engine_defaults_when_omitted() {
    let config = AppConfig::load_from_str(
        r#"
[server]
port = 8081
host = "127.0.0.1"
"#,
    )
    .expect("valid");
    assert_eq!(config.engine.window_capacity, 100);
    assert_eq!(config.engine.default_target_points, 500);
    assert_eq!(config.engine.max_target_points, 10_000);
}

#[test]
fn test_config_validation_rejects_invalid_port() {
    let bad = VALID_CONFIG.replace("port = 8081", "port = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("server.port"));
}

#[test]
fn test_config_validation_rejects_empty_host() {
    let bad = VALID_CONFIG.replace("host = \"0.0.0.0\"", "host = \"\"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("server.host"));
}

#[test]
fn test_config_validation_rejects_window_capacity_zero() {
    let bad = VALID_CONFIG.replace("window_capacity = 50", "window_capacity = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("window_capacity"));
}

#[test]
fn test_config_validation_rejects_default_target_below_two() {
    let bad = VALID_CONFIG.replace("default_target_points = 300", "default_target_points = 1");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("default_target_points"));
}

#[test]
fn test_config_validation_rejects_max_below_default() {
    let bad = VALID_CONFIG.replace("max_target_points = 2000", "max_target_points = 100");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("max_target_points"));
}

#[test]
fn test_config_validation_rejects_invalid_toml() {
    let err = AppConfig::load_from_str("not valid toml [[[").unwrap_err();
    assert!(!err.to_string().is_empty());
}

#[test]
fn test_config_load_from_file_via_env() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, VALID_CONFIG).unwrap();
    unsafe { std::env::set_var("CONFIG_FILE", path.to_str().unwrap()) };
    let result = AppConfig::load();
    unsafe { std::env::remove_var("CONFIG_FILE") };
    let config = result.expect("load from CONFIG_FILE");
    assert_eq!(config.server.port, 8081);
    assert_eq!(config.engine.window_capacity, 50);
}
