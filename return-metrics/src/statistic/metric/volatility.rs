//! Volatility 波动率模块
//!
//! 本模块提供了标准差、年化波动率以及上行/下行风险。年化时假设收益率独立同分布，
//! 按 `sqrt(multiplier)` 缩放。
//!
//! # 计算公式
//!
//! - 年化波动率：`std(r) * sqrt(multiplier)`
//! - 下行风险：把正收益置零后的 `std * sqrt(multiplier)`
//! - 上行风险：把负收益置零后的 `std * sqrt(multiplier)`
//!
//! 除 [`standard_deviation`] 可选样本方差外，所有指标使用总体方差（`ddof = 0`）。

use crate::statistic::{
    algorithm::{VarianceKind, nan_std},
    lane::reduce,
};
use ndarray::{Array, ArrayBase, Axis, Data, RemoveAxis};

/// 沿 `axis` 的标准差，跳过缺失值。
pub fn standard_deviation<S, D>(
    returns: &ArrayBase<S, D>,
    kind: VarianceKind,
    axis: Axis,
) -> Array<f64, D::Smaller>
where
    S: Data<Elem = f64>,
    D: RemoveAxis,
{
    reduce(returns, axis, |lane| nan_std(lane.iter().copied(), kind))
}

/// 沿 `axis` 的年化波动率：`std(r) * sqrt(multiplier)`。
pub fn annualized_vol<S, D>(
    returns: &ArrayBase<S, D>,
    multiplier: f64,
    axis: Axis,
) -> Array<f64, D::Smaller>
where
    S: Data<Elem = f64>,
    D: RemoveAxis,
{
    reduce(returns, axis, |lane| {
        nan_std(lane.iter().copied(), VarianceKind::Population) * multiplier.sqrt()
    })
}

/// 沿 `axis` 的年化下行风险：正收益置零后的年化标准差。
pub fn down_side_risk<S, D>(
    returns: &ArrayBase<S, D>,
    multiplier: f64,
    axis: Axis,
) -> Array<f64, D::Smaller>
where
    S: Data<Elem = f64>,
    D: RemoveAxis,
{
    annualized_vol(&returns.mapv(|r| if r > 0.0 { 0.0 } else { r }), multiplier, axis)
}

/// 沿 `axis` 的年化上行风险：负收益置零后的年化标准差。
pub fn up_side_risk<S, D>(
    returns: &ArrayBase<S, D>,
    multiplier: f64,
    axis: Axis,
) -> Array<f64, D::Smaller>
where
    S: Data<Elem = f64>,
    D: RemoveAxis,
{
    annualized_vol(&returns.mapv(|r| if r < 0.0 { 0.0 } else { r }), multiplier, axis)
}
