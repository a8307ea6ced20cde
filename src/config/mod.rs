// ==========================================
// InfraWatch 风险引擎 - 配置层
// ==========================================
// 职责: 引擎参数 (权重/阈值/维修策略) 加载与校验
// 存储: 内置默认值 + 可选 JSON 覆写
// ==========================================

pub mod error;
pub mod risk_config;

// 重导出核心配置类型
pub use error::ConfigError;
pub use risk_config::{
    CategoryThresholds, EnvironmentalWeights, ExplanationThresholds, RepairPolicy, RiskConfig,
    RiskWeights, StructuralWeights, UsageWeights,
};

/// 配置文件路径环境变量
pub const CONFIG_PATH_ENV: &str = "INFRAWATCH_CONFIG";
