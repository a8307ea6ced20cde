// ==========================================
// InfraWatch 风险引擎 - 引擎层
// ==========================================
// 职责: 评分规则实现, 纯计算
// 红线: 所有评分必须可解释 (输出 reason)
// ==========================================

pub mod risk;

// 重导出核心引擎
pub use risk::{maintenance_gap_years, round1, NormalizedFactors, RiskEngine};
