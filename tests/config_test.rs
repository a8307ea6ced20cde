// ==========================================
// RiskConfig 集成测试
// ==========================================
// 测试目标: 验证配置文件加载、默认值回落与校验
// ==========================================

mod test_helpers;

use infrawatch_risk::config::ConfigError;
use infrawatch_risk::{RiskCategory, RiskConfig, RiskEngine, RiskError};
use test_helpers::{eval_date, write_temp_config, AssetBuilder};

#[test]
fn test_load_config_from_file() {
    let (_temp_file, path) = write_temp_config(
        r#"{
            "thresholds": {"high": 90, "medium": 60},
            "repair": {"safe_fpi": 10, "default_budget": 1}
        }"#,
    )
    .expect("Failed to write temp config");

    let config = RiskConfig::from_file(&path).expect("Failed to load config");
    assert_eq!(config.thresholds.high, 90.0);
    assert_eq!(config.thresholds.medium, 60.0);
    assert_eq!(config.repair.safe_fpi, 10.0);
    assert_eq!(config.repair.default_budget, 1);
    // 未出现的键保持默认
    assert_eq!(config.weights.structural.maintenance_gap, 0.20);
    assert_eq!(config.explanation.flood_exposure_index, 60.0);
}

#[test]
fn test_engine_uses_loaded_config() {
    let (_temp_file, path) = write_temp_config(
        r#"{"thresholds": {"high": 90, "medium": 60}, "repair": {"default_budget": 1}}"#,
    )
    .expect("Failed to write temp config");

    let config = RiskConfig::from_file(&path).unwrap();
    let engine = RiskEngine::with_config(config).unwrap();

    // 50 分在默认阈值下为 medium, 此处为 low
    let asset = AssetBuilder::new("M").incidents(1).build();
    let result = engine.score(&asset, eval_date());
    assert_eq!(result.fpi, 50.0);
    assert_eq!(result.risk_category, RiskCategory::Low);

    let assets = vec![asset, AssetBuilder::new("L").age(2.0).build()];
    let plan = engine.recommend_repairs_default(&assets, eval_date()).unwrap();
    assert_eq!(plan.recommended_repairs.len(), 1);
    assert!(plan.message.starts_with("Fix 1 assets"));
}

#[test]
fn test_custom_explanation_thresholds() {
    let config =
        RiskConfig::from_json_str(r#"{"explanation": {"incident_reports_count": 0}}"#).unwrap();
    let engine = RiskEngine::with_config(config).unwrap();

    let asset = AssetBuilder::new("I").incidents(1).build();
    assert_eq!(
        engine.explain_reasons(&asset, eval_date()),
        vec!["Multiple incident reports".to_string()]
    );
}

#[test]
fn test_missing_config_file() {
    let err = RiskConfig::from_file("/nonexistent/infrawatch/config.json").unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_invalid_config_file() {
    let (_temp_file, path) =
        write_temp_config(r#"{"weights": {"structural": {"age": -1}}}"#).unwrap();

    let err = RiskConfig::from_file(&path).unwrap_err();
    match err {
        ConfigError::Invalid { key, .. } => assert_eq!(key, "weights.structural.age"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_invalid_config_rejected_by_engine() {
    let mut config = RiskConfig::default();
    config.thresholds.medium = 80.0;

    let err = RiskEngine::with_config(config).unwrap_err();
    assert!(matches!(err, RiskError::Config(ConfigError::Invalid { .. })));
}
