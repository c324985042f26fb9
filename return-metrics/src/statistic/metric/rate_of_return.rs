//! Rate Of Return 收益率模块
//!
//! 本模块提供了基于周期收益率的收益类指标：最佳/最差周期、平均收益、累计收益、
//! 年化收益以及频率转换。
//!
//! # 计算公式
//!
//! - 累计收益：`cumprod(1 + r)`
//! - 年化收益：`prod(1 + r) ^ (multiplier / N) - 1`，`N` 为 lane 长度（包含缺失值）
//! - 频率转换：`(1 + r) ^ k - 1`
//!
//! # 缺失值
//!
//! 累计收益把缺失值视为收益率为零的周期（乘以 1），因此输出在每个位置都有定义，
//! 缺失位置沿用前一个值。频率转换是逐点变换，缺失值原样传播。
//!
//! # 参考文档
//!
//! <https://www.investopedia.com/terms/r/rateofreturn.asp>

use crate::statistic::{
    algorithm::{nan_max, nan_mean, nan_min, nan_product},
    lane::{accumulate, reduce},
};
use ndarray::{Array, ArrayBase, ArrayView1, ArrayViewMut1, Axis, Data, Dimension, RemoveAxis};

/// 沿 `axis` 的最佳周期收益（跳过缺失值的最大值）。
pub fn best<S, D>(returns: &ArrayBase<S, D>, axis: Axis) -> Array<f64, D::Smaller>
where
    S: Data<Elem = f64>,
    D: RemoveAxis,
{
    reduce(returns, axis, |lane| nan_max(lane.iter().copied()))
}

/// 沿 `axis` 的最差周期收益（跳过缺失值的最小值）。
pub fn worst<S, D>(returns: &ArrayBase<S, D>, axis: Axis) -> Array<f64, D::Smaller>
where
    S: Data<Elem = f64>,
    D: RemoveAxis,
{
    reduce(returns, axis, |lane| nan_min(lane.iter().copied()))
}

/// 沿 `axis` 的算术平均收益，跳过缺失值。
pub fn average_return<S, D>(returns: &ArrayBase<S, D>, axis: Axis) -> Array<f64, D::Smaller>
where
    S: Data<Elem = f64>,
    D: RemoveAxis,
{
    reduce(returns, axis, |lane| nan_mean(lane.iter().copied()))
}

/// 沿 `axis` 的累计收益（净值曲线），`cumprod(1 + r)`。
///
/// # 使用示例
///
/// ```rust
/// use ndarray::{Axis, arr1};
/// use return_metrics::statistic::metric::rate_of_return::cumulative_return;
///
/// let nav = cumulative_return(&arr1(&[0.10, f64::NAN, -0.5]), Axis(0));
/// assert_eq!(nav.to_vec(), vec![1.1, 1.1, 0.55]);
/// ```
pub fn cumulative_return<S, D>(returns: &ArrayBase<S, D>, axis: Axis) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: RemoveAxis,
{
    accumulate(returns, axis, cumulative_return_lane)
}

/// 沿 `axis` 的最终累计收益，即 [`cumulative_return`] 在该轴上的最后一个值。
///
/// 空 lane 返回 `NaN`。
pub fn final_cumulative_return<S, D>(returns: &ArrayBase<S, D>, axis: Axis) -> Array<f64, D::Smaller>
where
    S: Data<Elem = f64>,
    D: RemoveAxis,
{
    reduce(returns, axis, |lane| {
        cumulative_return_series(lane)
            .last()
            .copied()
            .unwrap_or(f64::NAN)
    })
}

/// 沿 `axis` 的几何年化收益：`prod(1 + r) ^ (multiplier / N) - 1`。
///
/// `N` 为 lane 的周期数（包含缺失周期），`multiplier` 为每年的周期数（例如日收益率为 252）。
pub fn annualized_return<S, D>(
    returns: &ArrayBase<S, D>,
    multiplier: f64,
    axis: Axis,
) -> Array<f64, D::Smaller>
where
    S: Data<Elem = f64>,
    D: RemoveAxis,
{
    reduce(returns, axis, |lane| {
        let growth = nan_product(lane.iter().map(|r| 1.0 + r));
        growth.powf(multiplier / lane.len() as f64) - 1.0
    })
}

/// 扣除固定无风险收益率后的年化收益：`annualized_return(r - risk_free)`。
pub fn annualized_absolute_return<S, D>(
    returns: &ArrayBase<S, D>,
    risk_free: f64,
    multiplier: f64,
    axis: Axis,
) -> Array<f64, D::Smaller>
where
    S: Data<Elem = f64>,
    D: RemoveAxis,
{
    let excess = returns.mapv(|r| r - risk_free);
    annualized_return(&excess, multiplier, axis)
}

/// 逐点频率转换：`(1 + r) ^ multiplier - 1`。
///
/// 例如把日收益率按 252 复利转换为年收益率。缺失值原样传播。
pub fn frequency_transformation<S, D>(returns: &ArrayBase<S, D>, multiplier: f64) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    returns.mapv(|r| (1.0 + r).powf(multiplier) - 1.0)
}

/// 单个 lane 的累计收益。
pub(crate) fn cumulative_return_series(returns: ArrayView1<'_, f64>) -> Vec<f64> {
    returns
        .iter()
        .scan(1.0, |growth, r| {
            if !r.is_nan() {
                *growth *= 1.0 + r;
            }
            Some(*growth)
        })
        .collect()
}

fn cumulative_return_lane(returns: ArrayView1<'_, f64>, mut output: ArrayViewMut1<'_, f64>) {
    for (slot, value) in output.iter_mut().zip(cumulative_return_series(returns)) {
        *slot = value;
    }
}
