use super::factors::maintenance_gap_years;
use super::RiskEngine;
use crate::domain::asset::Asset;
use crate::domain::risk::RiskResult;
use chrono::NaiveDate;

const EXPLANATION_PREFIX: &str = "High risk due to: ";
const EXPLANATION_NONE: &str = "Risk factors are within acceptable ranges";

impl RiskEngine {
    /// 生成触发原因列表
    ///
    /// 基于原始字段 (非归一化因子) 逐项判定,顺序固定,与严重程度无关:
    /// 年限 → 维修间隔 → 交通负荷 → 重载 → 事故 → 洪水 → 高温 → 地震
    pub fn explain_reasons(&self, asset: &Asset, now: NaiveDate) -> Vec<String> {
        let t = &self.config.explanation;
        let mut reasons = Vec::new();

        if asset.age_years > t.age_years {
            reasons.push(format!("Age ({} years)", age_text(asset)));
        }

        let gap_years = maintenance_gap_years(asset.last_maintenance_date, now);
        if gap_years > t.maintenance_gap_years {
            reasons.push(format!("{:.1}-year maintenance gap", gap_years));
        }

        if asset.traffic_load_index > t.traffic_load_index {
            reasons.push("High traffic load".to_string());
        }

        if asset.heavy_vehicle_percentage > t.heavy_vehicle_percentage {
            reasons.push("Heavy vehicle usage".to_string());
        }

        if asset.incident_reports_count > t.incident_reports_count {
            reasons.push("Multiple incident reports".to_string());
        }

        if asset.flood_exposure_index > t.flood_exposure_index {
            reasons.push("Flood-prone area".to_string());
        }

        if asset.heat_stress_index > t.heat_stress_index {
            reasons.push("Heat stress exposure".to_string());
        }

        if asset.earthquake_zone_index > t.earthquake_zone_index {
            reasons.push("Seismic risk zone".to_string());
        }

        reasons
    }

    /// 生成可读解释
    ///
    /// `_result` 仅保留接口形状,不参与判定
    pub fn explain(&self, asset: &Asset, _result: &RiskResult, now: NaiveDate) -> String {
        let reasons = self.explain_reasons(asset, now);

        if reasons.is_empty() {
            EXPLANATION_NONE.to_string()
        } else {
            format!("{}{}", EXPLANATION_PREFIX, reasons.join(", "))
        }
    }
}

/// 年限文案沿用输入写法: 45 → "45", 45.0 → "45.0"
fn age_text(asset: &Asset) -> String {
    if asset.age_written_as_float && asset.age_years.fract() == 0.0 {
        format!("{:.1}", asset.age_years)
    } else {
        asset.age_years.to_string()
    }
}
