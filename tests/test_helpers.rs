// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 资产构建器、固定评估日期、临时配置文件
// ==========================================
#![allow(dead_code)]

use chrono::NaiveDate;
use infrawatch_risk::Asset;
use std::error::Error;
use std::io::Write;
use tempfile::NamedTempFile;

/// 固定评估日期 (所有集成测试统一使用)
pub fn eval_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// 写入临时 JSON 配置文件
///
/// # 返回
/// - NamedTempFile: 临时文件（需要保持存活）
/// - String: 文件路径
pub fn write_temp_config(json: &str) -> Result<(NamedTempFile, String), Box<dyn Error>> {
    let mut temp_file = NamedTempFile::new()?;
    temp_file.write_all(json.as_bytes())?;
    temp_file.flush()?;

    let path = temp_file.path().to_string_lossy().to_string();
    Ok((temp_file, path))
}

// ==========================================
// Asset 构建器
// ==========================================
// 默认: 全零因子, 评估当日刚维修 → FPI = 0
pub struct AssetBuilder {
    asset: Asset,
}

impl AssetBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            asset: Asset {
                id: id.to_string(),
                name: format!("Asset {}", id),
                age_years: 0.0,
                age_written_as_float: false,
                last_maintenance_date: eval_date(),
                incident_reports_count: 0,
                traffic_load_index: 0.0,
                heavy_vehicle_percentage: 0.0,
                flood_exposure_index: 0.0,
                heat_stress_index: 0.0,
                earthquake_zone_index: 0.0,
                area: None,
                location: None,
                maintenance_frequency: None,
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.asset.name = name.to_string();
        self
    }

    pub fn age(mut self, years: f64) -> Self {
        self.asset.age_years = years;
        self
    }

    pub fn maintained_on(mut self, date: NaiveDate) -> Self {
        self.asset.last_maintenance_date = date;
        self
    }

    pub fn incidents(mut self, count: u32) -> Self {
        self.asset.incident_reports_count = count;
        self
    }

    pub fn traffic(mut self, index: f64) -> Self {
        self.asset.traffic_load_index = index;
        self
    }

    pub fn heavy_vehicles(mut self, pct: f64) -> Self {
        self.asset.heavy_vehicle_percentage = pct;
        self
    }

    pub fn flood(mut self, index: f64) -> Self {
        self.asset.flood_exposure_index = index;
        self
    }

    pub fn heat(mut self, index: f64) -> Self {
        self.asset.heat_stress_index = index;
        self
    }

    pub fn earthquake(mut self, index: f64) -> Self {
        self.asset.earthquake_zone_index = index;
        self
    }

    pub fn build(self) -> Asset {
        self.asset
    }
}

/// 基准资产 (Downtown Bridge)
pub fn downtown_bridge() -> Asset {
    AssetBuilder::new("B-101")
        .name("Downtown Bridge")
        .age(45.0)
        .maintained_on(date(2015, 3, 15))
        .traffic(88.0)
        .heavy_vehicles(32.0)
        .incidents(17)
        .flood(75.0)
        .heat(65.0)
        .earthquake(40.0)
        .build()
}
