// ==========================================
// InfraWatch 风险引擎 - 资产领域模型
// ==========================================
// 职责: 资产实体 + 解码中间结构 + 字段校验
// ==========================================

use crate::error::{EngineResult, RiskError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 日期字段格式
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// 常规指数上限 (超出只告警,不截断)
const INDEX_SCALE_MAX: f64 = 100.0;

// ==========================================
// Asset - 基础设施资产
// ==========================================
// 用途: 评分输入,字段均已类型转换并校验
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Asset {
    // ===== 标识 =====
    pub id: String,   // 资产编号 (如 B-101)
    pub name: String, // 资产名称

    // ===== 结构因子 =====
    pub age_years: f64,                   // 服役年限 (>=0)
    #[serde(skip)]
    pub age_written_as_float: bool,       // 输入写法为浮点 (45.0), 影响解释文案
    pub last_maintenance_date: NaiveDate, // 最近一次维修日期
    pub incident_reports_count: u32,      // 事故/异常报告数

    // ===== 使用因子 (0-100) =====
    pub traffic_load_index: f64,       // 交通负荷指数
    pub heavy_vehicle_percentage: f64, // 重型车辆占比

    // ===== 环境因子 (0-100) =====
    pub flood_exposure_index: f64,  // 洪水暴露指数
    pub heat_stress_index: f64,     // 高温应力指数
    pub earthquake_zone_index: f64, // 地震分区指数

    // ===== 元数据 (不参与评分) =====
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<String>, // 所属片区
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoLocation>, // 坐标
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_frequency: Option<u32>, // 计划维修周期 (月)
}

impl Asset {
    /// 解码单个资产 (JSON 对象)
    pub fn from_json_str(raw: &str) -> EngineResult<Self> {
        let record: RawAssetRecord = serde_json::from_str(raw)?;
        Asset::try_from(record)
    }

    /// 解码资产列表 (JSON 数组)
    ///
    /// 遇到第一条无效记录即失败,错误中携带该记录序号
    pub fn list_from_json_str(raw: &str) -> EngineResult<Vec<Self>> {
        let records: Vec<RawAssetRecord> = serde_json::from_str(raw)?;

        records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                Asset::try_from(record).map_err(|e| RiskError::InvalidRecord {
                    index,
                    source: Box::new(e),
                })
            })
            .collect()
    }

    /// 按资产编号查找
    pub fn find_by_id<'a>(assets: &'a [Asset], id: &str) -> EngineResult<&'a Asset> {
        assets
            .iter()
            .find(|asset| asset.id == id)
            .ok_or_else(|| RiskError::NotFound { id: id.to_string() })
    }
}

// ==========================================
// GeoLocation - 坐标
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lng: f64,
}

// ==========================================
// RawAssetRecord - 解码中间结构体
// ==========================================
// 用途: JSON → 此结构 → Asset
// 所有字段可缺省,缺失/格式错误在转换时报告
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawAssetRecord {
    pub id: Option<String>,
    pub name: Option<String>,
    pub age_years: Option<serde_json::Number>,
    pub last_maintenance_date: Option<String>,
    pub traffic_load_index: Option<f64>,
    pub heavy_vehicle_percentage: Option<f64>,
    pub incident_reports_count: Option<f64>,
    pub flood_exposure_index: Option<f64>,
    pub heat_stress_index: Option<f64>,
    pub earthquake_zone_index: Option<f64>,

    // 元信息
    pub area: Option<String>,
    pub location: Option<GeoLocation>,
    pub maintenance_frequency: Option<u32>,
}

impl TryFrom<RawAssetRecord> for Asset {
    type Error = RiskError;

    fn try_from(raw: RawAssetRecord) -> Result<Self, Self::Error> {
        let id = required(raw.id, "id")?;
        let name = required(raw.name, "name")?;

        let age_raw = required(raw.age_years, "age_years")?;
        let age_written_as_float = age_raw.is_f64();
        let age_years = age_raw
            .as_f64()
            .ok_or_else(|| RiskError::invalid("age_years", format!("无法表示为浮点数: {}", age_raw)))?;
        if !age_years.is_finite() || age_years < 0.0 {
            return Err(RiskError::invalid(
                "age_years",
                format!("服役年限必须为非负有限数,实际 {}", age_years),
            ));
        }

        let date_raw = required(raw.last_maintenance_date, "last_maintenance_date")?;
        let last_maintenance_date = parse_date("last_maintenance_date", &date_raw)?;

        let incidents = required(raw.incident_reports_count, "incident_reports_count")?;
        let incident_reports_count = whole_count(incidents).ok_or_else(|| {
            RiskError::invalid(
                "incident_reports_count",
                format!("报告数必须为非负整数,实际 {}", incidents),
            )
        })?;

        let traffic_load_index = index(&id, raw.traffic_load_index, "traffic_load_index")?;
        let heavy_vehicle_percentage =
            index(&id, raw.heavy_vehicle_percentage, "heavy_vehicle_percentage")?;
        let flood_exposure_index = index(&id, raw.flood_exposure_index, "flood_exposure_index")?;
        let heat_stress_index = index(&id, raw.heat_stress_index, "heat_stress_index")?;
        let earthquake_zone_index =
            index(&id, raw.earthquake_zone_index, "earthquake_zone_index")?;

        Ok(Asset {
            id,
            name,
            age_years,
            age_written_as_float,
            last_maintenance_date,
            incident_reports_count,
            traffic_load_index,
            heavy_vehicle_percentage,
            flood_exposure_index,
            heat_stress_index,
            earthquake_zone_index,
            area: raw.area,
            location: raw.location,
            maintenance_frequency: raw.maintenance_frequency,
        })
    }
}

// ==========================================
// 字段辅助函数
// ==========================================

fn required<T>(value: Option<T>, field: &str) -> EngineResult<T> {
    value.ok_or_else(|| RiskError::missing(field))
}

/// 解析日期字段 (YYYY-MM-DD)
pub fn parse_date(field: &str, value: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| RiskError::DateParse {
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// 计数字段: 接受 17 与 17.0,拒绝负数、小数与超出 u32 的值
fn whole_count(value: f64) -> Option<u32> {
    let in_range = (0.0..=f64::from(u32::MAX)).contains(&value);
    (in_range && value.fract() == 0.0).then(|| value as u32)
}

/// 校验指数字段: 必须有限; 超出 0-100 仅告警
fn index(asset_id: &str, value: Option<f64>, field: &str) -> EngineResult<f64> {
    let value = required(value, field)?;
    if !value.is_finite() {
        return Err(RiskError::invalid(field, "指数必须为有限数"));
    }
    if !(0.0..=INDEX_SCALE_MAX).contains(&value) {
        tracing::warn!(asset_id, field, value, "指数超出常规范围 [0, 100]");
    }
    Ok(value)
}
