// ==========================================
// InfraWatch 风险引擎 - FPI 风险引擎
// ==========================================
// 职责: 资产失效概率指数评分、排序、维修推荐、可解释性
// 输入: 资产列表 + 评估日期 (now, 显式注入)
// 输出: RiskResult / RepairPlan / 解释文案
// ==========================================
// 红线: 纯计算,不读系统时钟,不持有可变状态
// ==========================================

mod explain;
mod factors;
mod repair;
mod scoring;


pub use factors::{maintenance_gap_years, NormalizedFactors};
pub use scoring::round1;

use crate::config::RiskConfig;
use crate::error::EngineResult;

// ==========================================
// RiskEngine - FPI 风险引擎
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct RiskEngine {
    // 构造后只读
    config: RiskConfig,
}

impl RiskEngine {
    /// 构造函数 (默认权重/阈值)
    ///
    /// # 返回
    /// 新的 RiskEngine 实例
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用自定义配置构造
    ///
    /// # 参数
    /// - `config`: 引擎配置,构造前校验
    ///
    /// # 返回
    /// - Ok(RiskEngine)
    /// - Err(RiskError::Config): 配置无效
    pub fn with_config(config: RiskConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// 当前配置 (只读)
    pub fn config(&self) -> &RiskConfig {
        &self.config
    }
}
