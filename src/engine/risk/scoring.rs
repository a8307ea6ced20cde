use super::factors::{normalize, NormalizedFactors};
use super::RiskEngine;
use crate::domain::asset::Asset;
use crate::domain::risk::{ComponentScores, RiskResult};
use crate::domain::types::RiskCategory;
use chrono::NaiveDate;

/// 加权和放大倍数
///
/// 因子已是 0-100 量纲,加权后再乘 100;与参考输出逐位一致,不可化简
const CATEGORY_SCALE: f64 = 100.0;

const FPI_MIN: f64 = 0.0;
const FPI_MAX: f64 = 100.0;

/// 保留 1 位小数
///
/// 对二进制精确值做"四舍六入五成双": 1.25 → 1.2, 2.25 → 2.2;
/// 0.15 实际略小于 0.15,得 0.1
pub fn round1(value: f64) -> f64 {
    // 定点格式化按精确值舍入且平局取偶,回读不会失败
    format!("{:.1}", value).parse().unwrap_or(value)
}

impl RiskEngine {
    /// 计算资产 FPI
    ///
    /// 流程:
    /// 1) 8 因子归一化
    /// 2) 结构/使用/环境三类加权 (×100)
    /// 3) 合计后截断到 [0, 100]
    /// 4) 按截断后、取整前的 FPI 判定风险等级
    ///
    /// # 参数
    /// - `asset`: 资产
    /// - `now`: 评估日期
    ///
    /// # 返回
    /// RiskResult (fpi 与分项得分均保留 1 位小数)
    pub fn score(&self, asset: &Asset, now: NaiveDate) -> RiskResult {
        let factors = normalize(asset, now);
        let scores = self.component_scores(&factors);

        let fpi = scores.total().max(FPI_MIN).min(FPI_MAX);
        let risk_category = RiskCategory::from_fpi(fpi, &self.config.thresholds);

        tracing::debug!(
            asset_id = %asset.id,
            structural = scores.structural,
            usage = scores.usage,
            environmental = scores.environmental,
            fpi,
            category = %risk_category,
            "资产评分完成"
        );

        RiskResult {
            fpi: round1(fpi),
            risk_category,
            component_scores: ComponentScores {
                structural: round1(scores.structural),
                usage: round1(scores.usage),
                environmental: round1(scores.environmental),
            },
        }
    }

    /// 归一化因子 (不加权)
    pub fn factors(&self, asset: &Asset, now: NaiveDate) -> NormalizedFactors {
        normalize(asset, now)
    }

    /// 三大类加权得分 (未取整、未截断)
    fn component_scores(&self, f: &NormalizedFactors) -> ComponentScores {
        let w = &self.config.weights;

        let structural = (f.age * w.structural.age
            + f.maintenance_gap * w.structural.maintenance_gap
            + f.incidents * w.structural.incidents)
            * CATEGORY_SCALE;

        let usage = (f.traffic_load * w.usage.traffic_load
            + f.heavy_vehicles * w.usage.heavy_vehicles)
            * CATEGORY_SCALE;

        let environmental = (f.flood * w.environmental.flood
            + f.heat * w.environmental.heat
            + f.earthquake * w.environmental.earthquake)
            * CATEGORY_SCALE;

        ComponentScores {
            structural,
            usage,
            environmental,
        }
    }
}
