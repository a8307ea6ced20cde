// ==========================================
// InfraWatch 风险引擎 - 示例资产
// ==========================================
// 用途: 演示程序与集成测试的基准数据
// ==========================================

use crate::domain::asset::{Asset, GeoLocation};
use chrono::NaiveDate;

/// 内置示例资产 (两座桥梁)
pub fn sample_assets() -> Vec<Asset> {
    vec![
        Asset {
            id: "B-101".to_string(),
            name: "Downtown Artery Bridge".to_string(),
            age_years: 45.0,
            age_written_as_float: false,
            last_maintenance_date: date(2015, 3, 15),
            incident_reports_count: 17,
            traffic_load_index: 88.0,
            heavy_vehicle_percentage: 32.0,
            flood_exposure_index: 75.0,
            heat_stress_index: 65.0,
            earthquake_zone_index: 40.0,
            area: Some("Central District".to_string()),
            location: Some(GeoLocation {
                lat: 40.7128,
                lng: -74.0060,
            }),
            maintenance_frequency: Some(84),
        },
        Asset {
            id: "B-102".to_string(),
            name: "Northside Overpass".to_string(),
            age_years: 38.0,
            age_written_as_float: false,
            last_maintenance_date: date(2013, 8, 22),
            incident_reports_count: 23,
            traffic_load_index: 95.0,
            heavy_vehicle_percentage: 28.0,
            flood_exposure_index: 30.0,
            heat_stress_index: 85.0,
            earthquake_zone_index: 25.0,
            area: Some("North Industrial Area".to_string()),
            location: Some(GeoLocation {
                lat: 40.7589,
                lng: -73.9851,
            }),
            maintenance_frequency: Some(120),
        },
    ]
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("示例资产日期非法")
}
