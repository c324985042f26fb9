//! Max Drawdown 最大回撤模块
//!
//! 最大回撤是净值从峰值到谷值的最大百分比下降，以负数（或零）表示。
//!
//! # 参考文档
//!
//! <https://www.investopedia.com/terms/m/maximum-drawdown-mdd.asp>

use crate::statistic::{
    algorithm::nan_min, lane::reduce, metric::drawdown::draw_down_series,
};
use ndarray::{Array, ArrayBase, Axis, Data, RemoveAxis};

/// 沿 `axis` 的最大回撤：[`draw_down`](super::draw_down) 的最小值。
///
/// 净值从未低于此前高点时返回 `0.0`；空 lane 返回 `NaN`。
pub fn max_drawdown<S, D>(returns: &ArrayBase<S, D>, axis: Axis) -> Array<f64, D::Smaller>
where
    S: Data<Elem = f64>,
    D: RemoveAxis,
{
    reduce(returns, axis, |lane| nan_min(draw_down_series(lane)))
}
