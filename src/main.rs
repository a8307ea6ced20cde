// ==========================================
// InfraWatch 风险引擎 - 演示程序入口
// ==========================================
// 用法: infrawatch-risk [assets.json]
// - 未指定文件时使用内置示例资产
// - INFRAWATCH_CONFIG: 可选配置文件路径
// - INFRAWATCH_LOG_FORMAT=json: 结构化日志
// ==========================================

use anyhow::Context;
use chrono::Local;
use infrawatch_risk::config::CONFIG_PATH_ENV;
use infrawatch_risk::domain::sample::sample_assets;
use infrawatch_risk::{logging, Asset, RiskConfig, RiskEngine};

fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    if std::env::var("INFRAWATCH_LOG_FORMAT").as_deref() == Ok("json") {
        logging::init_json();
    } else {
        logging::init();
    }

    tracing::info!("{} v{}", infrawatch_risk::APP_NAME, infrawatch_risk::VERSION);

    // 加载配置
    let config = match std::env::var(CONFIG_PATH_ENV) {
        Ok(path) => RiskConfig::from_file(&path)
            .with_context(|| format!("无法加载配置文件: {}", path))?,
        Err(_) => RiskConfig::default(),
    };
    let engine = RiskEngine::with_config(config)?;

    // 加载资产
    let assets = match std::env::args().nth(1) {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("无法读取资产文件: {}", path))?;
            Asset::list_from_json_str(&raw)
                .with_context(|| format!("资产文件解析失败: {}", path))?
        }
        None => sample_assets(),
    };
    tracing::info!(asset_count = assets.len(), "资产加载完成");

    // 评估日期在入口处读取一次,向下显式传递
    let now = Local::now().date_naive();

    for scored in engine.rank(&assets, now) {
        println!(
            "{} {} | FPI {:.1} ({})",
            scored.asset.id, scored.asset.name, scored.risk.fpi, scored.risk.risk_category
        );
        println!("    {}", engine.explain(&scored.asset, &scored.risk, now));
    }

    let summary = engine.summarize(&assets, now);
    println!(
        "high={} medium={} low={} average_fpi={:.1}",
        summary.high, summary.medium, summary.low, summary.average_fpi
    );

    let plan = engine.recommend_repairs_default(&assets, now)?;
    println!("{}", plan.message);
    println!("{}", serde_json::to_string_pretty(&plan)?);

    Ok(())
}
