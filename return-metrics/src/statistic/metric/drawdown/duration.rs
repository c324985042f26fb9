//! Drawdown Duration 回撤持续时间模块
//!
//! 高水位线在回撤期间保持不变，形成一个"平台"。本模块找出出现周期数最多的高水位平台，
//! 并返回其索引区间及持续周期数，用来衡量处于（并从中恢复）最长回撤所花费的时间。
//!
//! # 平台排序
//!
//! 平台按持续周期数排序；周期数相同时，高水位值更高（即更晚出现）的平台排在前面。
//! `top = 1` 选择排名第一的平台，`top = 2` 选择第二个，依此类推。

use crate::statistic::{
    lane::reduce,
    metric::{drawdown::high_water_marks, rate_of_return::cumulative_return_series},
};
use derive_more::Constructor;
use itertools::Itertools;
use ndarray::{Array, ArrayBase, ArrayView1, Axis, Data, RemoveAxis};
use serde::{Deserialize, Serialize};

/// 高水位平台的索引区间 `[start, end]`（闭区间）。
#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default, Deserialize, Serialize, Constructor,
)]
pub struct DrawdownRange {
    /// 平台开始的周期索引（创出该高水位的周期）。
    pub start: usize,
    /// 平台最后一个周期的索引。
    pub end: usize,
}

impl DrawdownRange {
    /// 平台持续的周期数，`end - start`。
    pub fn duration(&self) -> usize {
        self.end - self.start
    }
}

/// 沿 `axis` 找出排名第 `top` 的高水位平台区间。
///
/// 空 lane，或 `top` 为零、超过平台数量时返回 `None`。
pub fn draw_down_range<S, D>(
    returns: &ArrayBase<S, D>,
    top: usize,
    axis: Axis,
) -> Array<Option<DrawdownRange>, D::Smaller>
where
    S: Data<Elem = f64>,
    D: RemoveAxis,
{
    reduce(returns, axis, |lane| draw_down_range_lane(lane, top))
}

/// 沿 `axis` 的回撤持续周期数，即 [`draw_down_range`] 的 `end - start`。
pub fn draw_down_duration<S, D>(
    returns: &ArrayBase<S, D>,
    top: usize,
    axis: Axis,
) -> Array<Option<usize>, D::Smaller>
where
    S: Data<Elem = f64>,
    D: RemoveAxis,
{
    reduce(returns, axis, |lane| {
        draw_down_range_lane(lane, top).map(|range| range.duration())
    })
}

fn draw_down_range_lane(returns: ArrayView1<'_, f64>, top: usize) -> Option<DrawdownRange> {
    let peaks = high_water_marks(&cumulative_return_series(returns));

    // high water marks never decrease, so equal values form contiguous plateaus
    let plateaus = peaks
        .iter()
        .dedup_with_count()
        .scan(0, |start, (length, _)| {
            let range = DrawdownRange::new(*start, *start + length - 1);
            *start += length;
            Some(range)
        })
        .sorted_by_key(|range| (range.duration(), range.start))
        .collect::<Vec<_>>();

    let rank = plateaus.len().checked_sub(top)?;
    (top > 0).then(|| plateaus[rank])
}
