//! Distribution 分布形态模块
//!
//! 收益率分布的偏度（三阶标准化矩）和峰度（四阶标准化矩）。两者都是有偏（总体）估计，
//! 峰度采用 Fisher 定义（超额峰度，正态分布为 0）。

use crate::statistic::{algorithm::nan_standardized_moment, lane::reduce};
use ndarray::{Array, ArrayBase, Axis, Data, RemoveAxis};

/// 沿 `axis` 的偏度，跳过缺失值。方差为零（包括任意常数序列）时返回 `NaN`。
pub fn skewness<S, D>(returns: &ArrayBase<S, D>, axis: Axis) -> Array<f64, D::Smaller>
where
    S: Data<Elem = f64>,
    D: RemoveAxis,
{
    reduce(returns, axis, |lane| {
        nan_standardized_moment(lane.iter().copied(), 3)
    })
}

/// 沿 `axis` 的超额峰度，跳过缺失值。方差为零（包括任意常数序列）时返回 `NaN`。
pub fn kurtosis<S, D>(returns: &ArrayBase<S, D>, axis: Axis) -> Array<f64, D::Smaller>
where
    S: Data<Elem = f64>,
    D: RemoveAxis,
{
    reduce(returns, axis, |lane| {
        nan_standardized_moment(lane.iter().copied(), 4) - 3.0
    })
}
