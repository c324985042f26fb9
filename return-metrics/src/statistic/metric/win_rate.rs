//! Win Rate 胜率模块
//!
//! # 计算公式
//!
//! `winning_ratio = sum(r) / N`
//!
//! # 注意事项
//!
//! 该公式对原始收益率求和，而不是统计正收益周期的数量，因此结果等于平均周期收益
//! （缺失值会传播为 `NaN`），并不是通常意义上介于 0 到 1 之间的胜率。这里保留既有的
//! 公式不做修改，待产品需求明确后再调整。
//!
//! # 参考文档
//!
//! <https://www.investopedia.com/terms/w/win-loss-ratio.asp>

use crate::statistic::lane::reduce;
use ndarray::{Array, ArrayBase, Axis, Data, RemoveAxis};

/// 沿 `axis` 的 "胜率"：原始收益率之和除以周期数 `N`。
///
/// 与其他归约不同，缺失值不会被跳过，而是传播为 `NaN`。空 lane 返回 `NaN`。
pub fn winning_ratio<S, D>(returns: &ArrayBase<S, D>, axis: Axis) -> Array<f64, D::Smaller>
where
    S: Data<Elem = f64>,
    D: RemoveAxis,
{
    reduce(returns, axis, |lane| lane.sum() / lane.len() as f64)
}
