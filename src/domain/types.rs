// ==========================================
// InfraWatch 风险引擎 - 领域类型定义
// ==========================================

use crate::config::CategoryThresholds;
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 风险等级 (Risk Category)
// ==========================================
// 由 FPI 按固定阈值判定,序列化为小写
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskCategory {
    Low,    // 低风险
    Medium, // 中风险
    High,   // 高风险
}

impl RiskCategory {
    /// 按阈值判定风险等级
    ///
    /// - fpi >= high -> High
    /// - medium <= fpi < high -> Medium
    /// - fpi < medium -> Low
    pub fn from_fpi(fpi: f64, thresholds: &CategoryThresholds) -> Self {
        if fpi >= thresholds.high {
            RiskCategory::High
        } else if fpi >= thresholds.medium {
            RiskCategory::Medium
        } else {
            RiskCategory::Low
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskCategory::Low => write!(f, "low"),
            RiskCategory::Medium => write!(f, "medium"),
            RiskCategory::High => write!(f, "high"),
        }
    }
}
