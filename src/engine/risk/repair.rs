use super::scoring::round1;
use super::RiskEngine;
use crate::domain::asset::Asset;
use crate::domain::risk::{RepairPlan, RiskSummary, ScoredAsset};
use crate::domain::types::RiskCategory;
use crate::error::{EngineResult, RiskError};
use chrono::NaiveDate;

impl RiskEngine {
    /// 评分并按 FPI 降序排列
    ///
    /// 稳定排序: 同分资产保持输入顺序
    pub fn rank(&self, assets: &[Asset], now: NaiveDate) -> Vec<ScoredAsset> {
        let mut scored: Vec<ScoredAsset> = assets
            .iter()
            .enumerate()
            .map(|(position, asset)| ScoredAsset {
                position,
                asset: asset.clone(),
                risk: self.score(asset, now),
            })
            .collect();

        scored.sort_by(|a, b| b.risk.fpi.total_cmp(&a.risk.fpi));
        scored
    }

    /// 推荐维修方案 (贪心 Top-K)
    ///
    /// 规则:
    /// 1) 全量评分并按 FPI 降序 (稳定排序)
    /// 2) 取前 budget 个 (不足则全取)
    /// 3) 入选资产 FPI 一律置为安全水位 (即使原分值更低)
    /// 4) risk_reduction = (维修前 - 维修后) / 维修前 × 100
    ///
    /// 入选判定按排序位置,不按值相等;结构相同的两条资产互不影响
    ///
    /// # 参数
    /// - `assets`: 资产列表
    /// - `budget`: 维修数量
    /// - `now`: 评估日期
    ///
    /// # 返回
    /// - Ok(RepairPlan)
    /// - Err(RiskError::DivisionByZero): 维修前总风险为 0 (空列表或全零分)
    pub fn recommend_repairs(
        &self,
        assets: &[Asset],
        budget: usize,
        now: NaiveDate,
    ) -> EngineResult<RepairPlan> {
        let ranked = self.rank(assets, now);
        let selected = budget.min(ranked.len());
        let safe_fpi = self.config.repair.safe_fpi;

        let current_total_risk: f64 = ranked.iter().map(|s| s.risk.fpi).sum();
        let new_total_risk: f64 = ranked
            .iter()
            .enumerate()
            .map(|(rank, s)| if rank < selected { safe_fpi } else { s.risk.fpi })
            .sum();

        if current_total_risk == 0.0 {
            tracing::warn!(
                asset_count = ranked.len(),
                budget,
                "维修前总风险为 0,无法计算风险降低比例"
            );
            return Err(RiskError::DivisionByZero {
                context: format!(
                    "current_total_risk = 0 (资产数 {}),无法计算 risk_reduction",
                    ranked.len()
                ),
            });
        }

        let risk_reduction =
            round1((current_total_risk - new_total_risk) / current_total_risk * 100.0);

        tracing::info!(
            asset_count = ranked.len(),
            budget,
            selected,
            current_total_risk,
            new_total_risk,
            risk_reduction,
            "维修方案生成完成"
        );

        let recommended_repairs: Vec<ScoredAsset> = ranked.into_iter().take(selected).collect();

        Ok(RepairPlan {
            recommended_repairs,
            current_total_risk: round1(current_total_risk),
            new_total_risk: round1(new_total_risk),
            risk_reduction,
            message: format!(
                "Fix {} assets to reduce total risk by {:.1}%",
                budget, risk_reduction
            ),
        })
    }

    /// 使用配置的默认维修数量推荐方案
    pub fn recommend_repairs_default(
        &self,
        assets: &[Asset],
        now: NaiveDate,
    ) -> EngineResult<RepairPlan> {
        self.recommend_repairs(assets, self.config.repair.default_budget, now)
    }

    /// 风险分布统计
    ///
    /// 空列表返回全零 (不做除法)
    pub fn summarize(&self, assets: &[Asset], now: NaiveDate) -> RiskSummary {
        let mut summary = RiskSummary {
            total_assets: assets.len(),
            ..RiskSummary::default()
        };

        let mut fpi_total = 0.0;
        for asset in assets {
            let risk = self.score(asset, now);
            fpi_total += risk.fpi;

            match risk.risk_category {
                RiskCategory::High => summary.high += 1,
                RiskCategory::Medium => summary.medium += 1,
                RiskCategory::Low => summary.low += 1,
            }
        }

        if !assets.is_empty() {
            summary.average_fpi = round1(fpi_total / assets.len() as f64);
        }

        summary
    }
}
