// ==========================================
// InfraWatch 风险引擎 - 错误类型
// ==========================================
// 工具: thiserror 派生宏
// 职责: 资产解码错误 + 引擎计算错误
// ==========================================

use crate::config::ConfigError;
use thiserror::Error;

/// 引擎错误类型
///
/// 所有错误只作用于单次调用 (单资产或单批次),无部分成功语义
#[derive(Error, Debug)]
pub enum RiskError {
    // ===== 资产数据错误 =====
    #[error("必填字段缺失: {field}")]
    MissingField { field: String },

    #[error("日期格式错误 (字段 {field}): 期望 YYYY-MM-DD，实际 {value}")]
    DateParse { field: String, value: String },

    #[error("字段值错误 (field={field}): {message}")]
    InvalidField { field: String, message: String },

    #[error("资产记录无效 (序号 {index}): {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: Box<RiskError>,
    },

    // ===== 计算错误 =====
    #[error("除零错误: {context}")]
    DivisionByZero { context: String },

    // ===== 查询错误 =====
    #[error("资产未找到: id={id}")]
    NotFound { id: String },

    // ===== 外部错误 =====
    #[error("JSON 解析失败: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl RiskError {
    pub(crate) fn missing(field: &str) -> Self {
        RiskError::MissingField {
            field: field.to_string(),
        }
    }

    pub(crate) fn invalid(field: &str, message: impl Into<String>) -> Self {
        RiskError::InvalidField {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, RiskError>;
