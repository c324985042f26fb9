//! Sharpe Ratio 夏普比率模块
//!
//! 夏普比率是衡量风险调整后收益的指标，比较年化超额收益（超过无风险收益率）与
//! 年化波动率。
//!
//! # 计算公式
//!
//! `Sharpe Ratio = annualized_absolute_return(r, risk_free) / annualized_vol(r)`
//!
//! # 解释
//!
//! - **高 Sharpe Ratio**: 表示在承担相同风险的情况下获得了更高的收益
//! - **负 Sharpe Ratio**: 表示投资表现不如无风险资产
//!
//! 波动率为零时不做特殊处理，按照 IEEE-754 语义得到 `±inf` 或 `NaN`。
//!
//! # 参考文档
//!
//! <https://www.investopedia.com/articles/07/sharpe_ratio.asp>

use crate::statistic::metric::{
    rate_of_return::annualized_absolute_return, volatility::annualized_vol,
};
use ndarray::{Array, ArrayBase, Axis, Data, RemoveAxis};

/// 沿 `axis` 计算年化夏普比率。
///
/// # 参数
///
/// - `risk_free`: 每周期的无风险收益率（与 `returns` 同频）
/// - `multiplier`: 每年的周期数
pub fn sharpe<S, D>(
    returns: &ArrayBase<S, D>,
    risk_free: f64,
    multiplier: f64,
    axis: Axis,
) -> Array<f64, D::Smaller>
where
    S: Data<Elem = f64>,
    D: RemoveAxis,
{
    let absolute_return = annualized_absolute_return(returns, risk_free, multiplier, axis);
    let volatility = annualized_vol(returns, multiplier, axis);
    absolute_return / volatility
}
