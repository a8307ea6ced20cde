// ==========================================
// InfraWatch 风险引擎 - 引擎配置
// ==========================================
// 职责: 因子权重 / 风险等级阈值 / 维修策略 / 解释阈值
// 存储: JSON (可选), 缺省键回落到内置默认值
// ==========================================
// 红线: 配置在引擎构造后只读,运行期不允许修改
// ==========================================

use crate::config::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ==========================================
// RiskConfig - 引擎总配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RiskConfig {
    /// 因子权重
    pub weights: RiskWeights,

    /// 风险等级阈值
    pub thresholds: CategoryThresholds,

    /// 维修推荐策略
    pub repair: RepairPolicy,

    /// 解释生成阈值 (作用于原始字段)
    pub explanation: ExplanationThresholds,
}

impl RiskConfig {
    /// 从 JSON 字符串加载配置
    ///
    /// 未出现的键使用默认值,加载后立即校验
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: RiskConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// 从 JSON 文件加载配置
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let config = Self::from_json_str(&raw)?;
        tracing::info!(path = %path.display(), "风险引擎配置已加载");
        Ok(config)
    }

    /// 校验配置
    ///
    /// # 规则
    /// - 所有权重有限且非负
    /// - 阈值有限, high > medium
    /// - 安全水位在 [0, 100] 内
    /// - 解释阈值有限
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in self.weights.entries() {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(key, format!("权重必须为有限非负数,实际 {}", value)));
            }
        }

        let CategoryThresholds { high, medium } = self.thresholds;
        if !high.is_finite() || !medium.is_finite() {
            return Err(invalid("thresholds", "阈值必须为有限数"));
        }
        if high <= medium {
            return Err(invalid(
                "thresholds.high",
                format!("high({}) 必须大于 medium({})", high, medium),
            ));
        }

        let safe = self.repair.safe_fpi;
        if !safe.is_finite() || !(0.0..=100.0).contains(&safe) {
            return Err(invalid(
                "repair.safe_fpi",
                format!("安全水位必须在 [0, 100] 内,实际 {}", safe),
            ));
        }

        for (key, value) in self.explanation.entries() {
            if !value.is_finite() {
                return Err(invalid(key, "解释阈值必须为有限数"));
            }
        }

        Ok(())
    }
}

fn invalid(key: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        key: key.to_string(),
        message: message.into(),
    }
}

// ==========================================
// RiskWeights - 因子权重 (三大类)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RiskWeights {
    pub structural: StructuralWeights,
    pub usage: UsageWeights,
    pub environmental: EnvironmentalWeights,
}

impl RiskWeights {
    /// 展开为 (配置键, 权重) 列表,用于校验与日志
    pub fn entries(&self) -> [(&'static str, f64); 8] {
        [
            ("weights.structural.age", self.structural.age),
            ("weights.structural.maintenance_gap", self.structural.maintenance_gap),
            ("weights.structural.incidents", self.structural.incidents),
            ("weights.usage.traffic_load", self.usage.traffic_load),
            ("weights.usage.heavy_vehicles", self.usage.heavy_vehicles),
            ("weights.environmental.flood", self.environmental.flood),
            ("weights.environmental.heat", self.environmental.heat),
            ("weights.environmental.earthquake", self.environmental.earthquake),
        ]
    }
}

/// 结构类权重 (合计 0.45)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructuralWeights {
    pub age: f64,
    pub maintenance_gap: f64,
    pub incidents: f64,
}

impl Default for StructuralWeights {
    fn default() -> Self {
        Self {
            age: 0.15,
            maintenance_gap: 0.20,
            incidents: 0.10,
        }
    }
}

/// 使用类权重 (合计 0.25)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageWeights {
    pub traffic_load: f64,
    pub heavy_vehicles: f64,
}

impl Default for UsageWeights {
    fn default() -> Self {
        Self {
            traffic_load: 0.15,
            heavy_vehicles: 0.10,
        }
    }
}

/// 环境类权重 (合计 0.30)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentalWeights {
    pub flood: f64,
    pub heat: f64,
    pub earthquake: f64,
}

impl Default for EnvironmentalWeights {
    fn default() -> Self {
        Self {
            flood: 0.10,
            heat: 0.10,
            earthquake: 0.10,
        }
    }
}

// ==========================================
// CategoryThresholds - 风险等级阈值
// ==========================================
// fpi >= high -> 高; medium <= fpi < high -> 中; 其余 -> 低
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryThresholds {
    pub high: f64,
    pub medium: f64,
}

impl Default for CategoryThresholds {
    fn default() -> Self {
        Self {
            high: 70.0,
            medium: 40.0,
        }
    }
}

// ==========================================
// RepairPolicy - 维修推荐策略
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepairPolicy {
    /// 维修后 FPI (与原分值无关,一律置为该值)
    pub safe_fpi: f64,

    /// 默认维修数量
    pub default_budget: usize,
}

impl Default for RepairPolicy {
    fn default() -> Self {
        Self {
            safe_fpi: 20.0,
            default_budget: 3,
        }
    }
}

// ==========================================
// ExplanationThresholds - 解释触发阈值
// ==========================================
// 全部为严格大于判定
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplanationThresholds {
    pub age_years: f64,
    pub maintenance_gap_years: f64,
    pub traffic_load_index: f64,
    pub heavy_vehicle_percentage: f64,
    pub incident_reports_count: u32,
    pub flood_exposure_index: f64,
    pub heat_stress_index: f64,
    pub earthquake_zone_index: f64,
}

impl ExplanationThresholds {
    fn entries(&self) -> [(&'static str, f64); 7] {
        [
            ("explanation.age_years", self.age_years),
            ("explanation.maintenance_gap_years", self.maintenance_gap_years),
            ("explanation.traffic_load_index", self.traffic_load_index),
            ("explanation.heavy_vehicle_percentage", self.heavy_vehicle_percentage),
            ("explanation.flood_exposure_index", self.flood_exposure_index),
            ("explanation.heat_stress_index", self.heat_stress_index),
            ("explanation.earthquake_zone_index", self.earthquake_zone_index),
        ]
    }
}

impl Default for ExplanationThresholds {
    fn default() -> Self {
        Self {
            age_years: 40.0,
            maintenance_gap_years: 5.0,
            traffic_load_index: 70.0,
            heavy_vehicle_percentage: 20.0,
            incident_reports_count: 10,
            flood_exposure_index: 60.0,
            heat_stress_index: 70.0,
            earthquake_zone_index: 50.0,
        }
    }
}
