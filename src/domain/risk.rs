// ==========================================
// InfraWatch 风险引擎 - 风险结果领域模型
// ==========================================
// 职责: 评分结果 / 排序结果 / 维修方案 / 风险分布
// 生命周期: 派生值,每次调用重新计算,不持久化
// ==========================================

use crate::domain::asset::Asset;
use crate::domain::types::RiskCategory;
use serde::{Deserialize, Serialize};

// ==========================================
// ComponentScores - 三大类分项得分
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentScores {
    pub structural: f64,    // 结构类
    pub usage: f64,         // 使用类
    pub environmental: f64, // 环境类
}

impl ComponentScores {
    /// 分项合计 (即截断前的 FPI)
    pub fn total(&self) -> f64 {
        self.structural + self.usage + self.environmental
    }
}

// ==========================================
// RiskResult - 单资产评分结果
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskResult {
    pub fpi: f64,                          // 失效概率指数 [0, 100], 保留 1 位小数
    pub risk_category: RiskCategory,       // 风险等级
    pub component_scores: ComponentScores, // 分项得分, 保留 1 位小数
}

// ==========================================
// ScoredAsset - 已评分资产
// ==========================================
// position: 资产在输入列表中的原始序号 (身份标识,不依赖值相等)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredAsset {
    pub position: usize,
    pub asset: Asset,
    pub risk: RiskResult,
}

// ==========================================
// RepairPlan - 维修推荐方案
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepairPlan {
    pub recommended_repairs: Vec<ScoredAsset>, // 按 FPI 降序, 长度 = min(budget, 资产数)
    pub current_total_risk: f64,               // 维修前总风险
    pub new_total_risk: f64,                   // 维修后总风险 (模拟)
    pub risk_reduction: f64,                   // 风险降低百分比
    pub message: String,                       // 提示文案
}

// ==========================================
// RiskSummary - 风险分布 (驾驶舱指标)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RiskSummary {
    pub total_assets: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub average_fpi: f64,
}
