// ==========================================
// InfraWatch 风险引擎 - 核心库
// ==========================================
// 职责: 基础设施资产失效概率指数 (FPI) 评分、
//       风险分级、排序与维修推荐
// 系统定位: 纯计算引擎 (无持久化、无 I/O、无全局可变状态)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 评分规则
pub mod engine;

// 配置层 - 权重与阈值
pub mod config;

// 错误类型
pub mod error;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域实体
pub use domain::{
    Asset, ComponentScores, GeoLocation, RawAssetRecord, RepairPlan, RiskCategory, RiskResult,
    RiskSummary, ScoredAsset,
};

// 引擎
pub use engine::RiskEngine;

// 配置
pub use config::{ConfigError, RiskConfig};

// 错误
pub use error::{EngineResult, RiskError};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "InfraWatch FPI 风险引擎";
