//! Information Ratio 信息比率模块
//!
//! 相对基准的主动收益指标。与 [`annualized_absolute_return`](super::rate_of_return::annualized_absolute_return)
//! 扣除固定的无风险收益率不同，这里逐周期扣除基准收益率：
//!
//! - `annualized_active_return = annualized_return(r - benchmark)`
//! - `annualized_active_vol = annualized_vol(r - benchmark)`
//! - `information_ratio = annualized_active_return / annualized_active_vol`
//!
//! 基准必须可广播到收益率的形状，否则返回 [`StatisticError::ShapeMismatch`]。
//! 跟踪误差为零时按照 IEEE-754 语义得到 `±inf` 或 `NaN`。
//!
//! # 参考文档
//!
//! <https://www.investopedia.com/terms/i/informationratio.asp>

use crate::{
    error::StatisticError,
    statistic::{
        lane::difference,
        metric::{rate_of_return::annualized_return, volatility::annualized_vol},
    },
};
use ndarray::{Array, ArrayBase, Axis, Data, Dimension, RemoveAxis};

/// 沿 `axis` 计算相对 `benchmark` 的年化主动收益。
pub fn annualized_active_return<S, D, SB, DB>(
    returns: &ArrayBase<S, D>,
    benchmark: &ArrayBase<SB, DB>,
    multiplier: f64,
    axis: Axis,
) -> Result<Array<f64, D::Smaller>, StatisticError>
where
    S: Data<Elem = f64>,
    D: RemoveAxis,
    SB: Data<Elem = f64>,
    DB: Dimension,
{
    let active = difference(returns, benchmark)?;
    Ok(annualized_return(&active, multiplier, axis))
}

/// 沿 `axis` 计算相对 `benchmark` 的年化主动波动率（跟踪误差）。
pub fn annualized_active_vol<S, D, SB, DB>(
    returns: &ArrayBase<S, D>,
    benchmark: &ArrayBase<SB, DB>,
    multiplier: f64,
    axis: Axis,
) -> Result<Array<f64, D::Smaller>, StatisticError>
where
    S: Data<Elem = f64>,
    D: RemoveAxis,
    SB: Data<Elem = f64>,
    DB: Dimension,
{
    let active = difference(returns, benchmark)?;
    Ok(annualized_vol(&active, multiplier, axis))
}

/// 沿 `axis` 计算信息比率。
pub fn information_ratio<S, D, SB, DB>(
    returns: &ArrayBase<S, D>,
    benchmark: &ArrayBase<SB, DB>,
    multiplier: f64,
    axis: Axis,
) -> Result<Array<f64, D::Smaller>, StatisticError>
where
    S: Data<Elem = f64>,
    D: RemoveAxis,
    SB: Data<Elem = f64>,
    DB: Dimension,
{
    let active = difference(returns, benchmark)?;
    Ok(annualized_return(&active, multiplier, axis) / annualized_vol(&active, multiplier, axis))
}
