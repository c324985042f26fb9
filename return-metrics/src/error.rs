//! Error 错误模块
//!
//! 本模块定义了统计库可能产生的所有错误类型。
//!
//! 数值上的退化情况（例如除以零、全部缺失的序列）**不是**错误：它们按照 IEEE-754
//! 语义产生 `inf` 或 `NaN`。只有调用方输入在结构上无效时才会返回 [`StatisticError`]。
//!
//! # 错误类型
//!
//! - **ShapeMismatch**: 基准序列无法广播到收益率数组的形状
//! - **NotASeries**: 用非一维数组构造 [`ReturnSeries`](crate::statistic::series::ReturnSeries)
//! - **InvalidAlpha**: 尾部概率不在 `[0, 1]` 区间内
//! - **Config**: 配置无法反序列化或未通过校验

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 表示统计库可能产生的所有错误。
///
/// # 使用示例
///
/// ```rust,ignore
/// match information_ratio(&returns, &benchmark, 252.0, Axis(0)) {
///     Ok(ratio) => { /* ... */ }
///     Err(StatisticError::ShapeMismatch { expected, actual }) => {
///         warn!(?expected, ?actual, "benchmark cannot be broadcast");
///     }
///     Err(other) => return Err(other),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, PartialOrd, Deserialize, Serialize, Error)]
pub enum StatisticError {
    /// 基准（或无风险）数组无法广播到收益率数组的形状。
    #[error("shape mismatch: cannot broadcast {actual:?} to {expected:?}")]
    ShapeMismatch {
        /// 收益率数组的形状。
        expected: Vec<usize>,
        /// 基准数组的形状。
        actual: Vec<usize>,
    },

    /// 输入不是一维收益率序列。
    #[error("type mismatch: expected a 1-dimensional return series, found {ndim} dimensions")]
    NotASeries {
        /// 输入数组的维数。
        ndim: usize,
    },

    /// 尾部概率 alpha 必须位于 `[0, 1]` 区间内。
    #[error("alpha must lie within [0, 1], found {0}")]
    InvalidAlpha(f64),

    /// 表示 [`StatisticConfig`](crate::config::StatisticConfig) 无效。
    #[error("StatisticConfig invalid: {0}")]
    Config(String),
}
