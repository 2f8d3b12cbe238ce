// ==========================================
// ConfigManager 集成测试
// ==========================================
// 测试目标: 配置文件加载、写出、校验
// ==========================================


use oee_calculator::config::{ConfigError, ConfigManager};
use oee_calculator::{logging, CalculatorConfig, FactorApplicationMode};
use test_helpers::{temp_config_path, write_config_json};

#[test]
fn test_missing_file_yields_defaults() {
    let (_dir, path) = temp_config_path();
    let manager = ConfigManager::new(Some(&path));

    let config = manager.load().expect("missing file should fall back to defaults");
    assert_eq!(config.defaults, CalculatorConfig::default().defaults);
    assert_eq!(config.thresholds, CalculatorConfig::default().thresholds);
}

#[test]
fn test_save_then_load() {
    logging::init_test();
    let (_dir, path) = temp_config_path();
    let manager = ConfigManager::new(Some(&path));

    let mut config = CalculatorConfig::default();
    config.defaults.planned_time_min = 600.0;
    config.defaults.factor_application_mode = FactorApplicationMode::MultiplyOee;
    config.thresholds.good = 0.9;

    manager.save(&config, false).expect("save should create parent dirs");
    assert!(path.exists());

    let loaded = manager.load().unwrap();
    assert_eq!(loaded.defaults.planned_time_min, 600.0);
    assert_eq!(
        loaded.defaults.factor_application_mode,
        FactorApplicationMode::MultiplyOee
    );
    assert_eq!(loaded.thresholds.good, 0.9);
}

#[test]
fn test_save_refuses_overwrite_without_force() {
    let (_dir, path) = temp_config_path();
    let manager = ConfigManager::new(Some(&path));
    let config = CalculatorConfig::default();

    manager.save(&config, false).unwrap();
    let err = manager.save(&config, false).unwrap_err();
    assert!(matches!(err, ConfigError::AlreadyExists(_)));

    manager.save(&config, true).expect("force overwrite");
}

#[test]
fn test_partial_file_merges_with_defaults() {
    let (_dir, path) = write_config_json(r#"{ "limits": { "factor_min_penalize": 0.2 } }"#);
    let config = ConfigManager::new(Some(&path)).load().unwrap();

    assert_eq!(config.limits.factor_min_penalize, 0.2);
    assert_eq!(config.limits.factor_min_other, 0.0);
    assert_eq!(config.defaults.total_units, 18_000);
}

#[test]
fn test_malformed_file_is_parse_error() {
    let (_dir, path) = write_config_json("{ not json");
    let err = ConfigManager::new(Some(&path)).load().unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn test_invalid_thresholds_rejected_at_load() {
    let (_dir, path) = write_config_json(r#"{ "thresholds": { "good": 0.5, "medium": 0.6 } }"#);
    let err = ConfigManager::new(Some(&path)).load().unwrap_err();
    match err {
        ConfigError::InvalidValue { key, .. } => assert_eq!(key, "thresholds"),
        other => panic!("unexpected: {:?}", other),
    }
}

#[test]
fn test_unknown_mode_rejected() {
    let (_dir, path) =
        write_config_json(r#"{ "defaults": { "factor_application_mode": "FACTOR_ON_QUALITY" } }"#);
    assert!(ConfigManager::new(Some(&path)).load().is_err());
}
