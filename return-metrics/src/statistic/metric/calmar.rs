//! Calmar Ratio 卡尔玛比率模块
//!
//! 卡尔玛比率是一种风险调整后的收益指标，将年化超额收益（超过无风险收益率）除以最大回撤的
//! 绝对值。它类似于 Sharpe 和 Sortino 比率，但使用最大回撤作为风险度量而不是标准差。
//!
//! # 计算公式
//!
//! `Calmar Ratio = annualized_absolute_return(r, risk_free) / |max_drawdown(r)|`
//!
//! # 特殊情况
//!
//! 最大回撤恰好为零（无回撤风险）时分母视为无穷大，比率为 `0.0`。
//!
//! # 参考文档
//!
//! <https://corporatefinanceinstitute.com/resources/career-map/sell-side/capital-markets/calmar-ratio/>

use crate::statistic::metric::{
    drawdown::max::max_drawdown, rate_of_return::annualized_absolute_return,
};
use ndarray::{Array, ArrayBase, Axis, Data, RemoveAxis, Zip};

/// 沿 `axis` 计算 Calmar Ratio。
///
/// ## 解释
///
/// - **高 Calmar Ratio**: 表示在承担相同最大回撤风险的情况下获得了更高的收益
/// - **负 Calmar Ratio**: 表示投资表现不如无风险资产
pub fn calmar<S, D>(
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
    let drawdown = max_drawdown(returns, axis);

    Zip::from(&absolute_return)
        .and(&drawdown)
        .map_collect(|absolute_return, drawdown| {
            let risk = drawdown.abs();
            match risk == 0.0 {
                true => absolute_return / f64::INFINITY,
                false => absolute_return / risk,
            }
        })
}
