//! Continuation 连续涨跌模块
//!
//! 统计收益率序列中最长的连续非负周期数（连涨）和最长的连续负收益周期数（连跌）。
//! 缺失周期既不打断也不延长当前的连续区间。

use crate::statistic::{algorithm::present, lane::reduce};
use derive_more::Constructor;
use itertools::Itertools;
use ndarray::{Array, ArrayBase, ArrayView1, Axis, Data, RemoveAxis};
use serde::{Deserialize, Serialize};

/// 最长连续区间的长度（以周期计）。
#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default, Deserialize, Serialize, Constructor,
)]
pub struct Continuations {
    /// 最长的连续非负收益周期数。
    pub winning: usize,
    /// 最长的连续负收益周期数。
    pub losing: usize,
}

/// 沿 `axis` 计算最长连涨与连跌的周期数。
pub fn longest_continuations<S, D>(
    returns: &ArrayBase<S, D>,
    axis: Axis,
) -> Array<Continuations, D::Smaller>
where
    S: Data<Elem = f64>,
    D: RemoveAxis,
{
    reduce(returns, axis, longest_continuations_lane)
}

fn longest_continuations_lane(returns: ArrayView1<'_, f64>) -> Continuations {
    let runs = present(returns.iter().copied()).chunk_by(|r| *r >= 0.0);

    runs.into_iter()
        .fold(Continuations::default(), |longest, (winning, run)| {
            let length = run.count();
            match winning {
                true => Continuations::new(longest.winning.max(length), longest.losing),
                false => Continuations::new(longest.winning, longest.losing.max(length)),
            }
        })
}
