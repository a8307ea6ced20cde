use crate::domain::asset::Asset;
use chrono::NaiveDate;
use serde::Serialize;

/// 每年天数 (含闰年均摊)
const DAYS_PER_YEAR: f64 = 365.25;

/// 维修间隔满分对应年数
const MAINTENANCE_GAP_FULL_YEARS: f64 = 20.0;

/// 每条事故报告折算分值
const POINTS_PER_INCIDENT: u64 = 5;

/// 因子上限
const FACTOR_CAP: f64 = 100.0;

/// 归一化后的 8 个风险因子 (常规 0-100)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormalizedFactors {
    pub age: f64,
    pub maintenance_gap: f64,
    pub traffic_load: f64,
    pub heavy_vehicles: f64,
    pub incidents: f64,
    pub flood: f64,
    pub heat: f64,
    pub earthquake: f64,
}

/// 距最近维修的年数
///
/// 按整天差计算后除以 365.25;维修日期晚于 now 时为负值
pub fn maintenance_gap_years(last_maintenance_date: NaiveDate, now: NaiveDate) -> f64 {
    let days = (now - last_maintenance_date).num_days();
    days as f64 / DAYS_PER_YEAR
}

pub(super) fn normalize(asset: &Asset, now: NaiveDate) -> NormalizedFactors {
    let gap_years = maintenance_gap_years(asset.last_maintenance_date, now);
    let incidents = (u64::from(asset.incident_reports_count) * POINTS_PER_INCIDENT) as f64;

    NormalizedFactors {
        age: asset.age_years.clamp(0.0, FACTOR_CAP),
        // 负间隔不做下限截断
        maintenance_gap: (gap_years / MAINTENANCE_GAP_FULL_YEARS * 100.0).min(FACTOR_CAP),
        // 指数类字段原样透传,不做二次截断
        traffic_load: asset.traffic_load_index,
        heavy_vehicles: asset.heavy_vehicle_percentage,
        incidents: incidents.min(FACTOR_CAP),
        flood: asset.flood_exposure_index,
        heat: asset.heat_stress_index,
        earthquake: asset.earthquake_zone_index,
    }
}
