// ==========================================
// InfraWatch 风险引擎 - 领域模型层
// ==========================================
// 职责: 定义资产实体、风险结果、领域类型
// 红线: 不含评分逻辑
// ==========================================

pub mod asset;
pub mod risk;
pub mod sample;
pub mod types;

// 重导出核心类型
pub use asset::{Asset, GeoLocation, RawAssetRecord};
pub use risk::{ComponentScores, RepairPlan, RiskResult, RiskSummary, ScoredAsset};
pub use types::RiskCategory;
