//! Drawdown 回撤模块
//!
//! 本模块提供了基于累计收益（净值）的回撤计算。回撤是净值相对于历史最高点
//! （高水位线，high-water mark）的百分比下降，是衡量下行波动的指标。
//!
//! # 核心概念
//!
//! - **cumulative_max**: 高水位线，累计收益的运行最大值
//! - **draw_down**: 逐期回撤，`cumulative_return / cumulative_max - 1`，恒小于等于零
//! - **max_drawdown**: 最大回撤
//! - **draw_down_range / draw_down_duration**: 最长高水位平台的区间及持续周期数
//!
//! # 参考文档
//!
//! <https://www.investopedia.com/terms/d/drawdown.asp>

use crate::statistic::{lane::accumulate, metric::rate_of_return::cumulative_return_series};
use ndarray::{Array, ArrayBase, ArrayView1, ArrayViewMut1, Axis, Data, RemoveAxis};

/// 最大回撤计算逻辑。
pub mod max;

/// 回撤持续时间计算逻辑。
pub mod duration;

/// 沿 `axis` 的高水位线：累计收益的运行最大值，沿轴单调不减。
pub fn cumulative_max<S, D>(returns: &ArrayBase<S, D>, axis: Axis) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: RemoveAxis,
{
    accumulate(returns, axis, |lane, output| {
        write_lane(output, high_water_marks(&cumulative_return_series(lane)))
    })
}

/// 沿 `axis` 的逐期回撤：`cumulative_return / cumulative_max - 1`。
///
/// # 使用示例
///
/// ```rust
/// use ndarray::{Axis, arr1};
/// use return_metrics::statistic::metric::drawdown::draw_down;
///
/// let draw_downs = draw_down(&arr1(&[0.25, -0.2, 0.1]), Axis(0));
/// assert_eq!(draw_downs[0], 0.0);
/// assert!((draw_downs[1] + 0.2).abs() < 1e-12);
/// ```
pub fn draw_down<S, D>(returns: &ArrayBase<S, D>, axis: Axis) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: RemoveAxis,
{
    accumulate(returns, axis, |lane, output| {
        write_lane(output, draw_down_series(lane))
    })
}

/// 单个 lane 的逐期回撤。
pub(crate) fn draw_down_series(returns: ArrayView1<'_, f64>) -> Vec<f64> {
    let cumulative = cumulative_return_series(returns);

    cumulative
        .iter()
        .zip(high_water_marks(&cumulative))
        .map(|(value, peak)| value / peak - 1.0)
        .collect()
}

/// 累计收益序列的运行最大值。
pub(crate) fn high_water_marks(cumulative: &[f64]) -> Vec<f64> {
    cumulative
        .iter()
        .scan(f64::NEG_INFINITY, |peak, value| {
            *peak = peak.max(*value);
            Some(*peak)
        })
        .collect()
}

fn write_lane(mut output: ArrayViewMut1<'_, f64>, values: Vec<f64>) {
    for (slot, value) in output.iter_mut().zip(values) {
        *slot = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_all_f64_eq;
    use ndarray::{arr1, arr2};

    #[test]
    fn test_cumulative_max() {
        struct TestCase {
            input: Vec<f64>,
            expected: Vec<f64>,
        }

        let cases = vec![
            // TC0: peak at index 1 holds through the dip
            TestCase {
                input: vec![0.01, 0.02, -0.01, 0.03],
                expected: vec![1.01, 1.0302, 1.0302, 1.05049494],
            },
            // TC1: immediate loss sets the first peak below one
            TestCase {
                input: vec![-0.1, -0.1, 0.2],
                expected: vec![0.9, 0.9, 0.972],
            },
            // TC2: missing periods keep the previous peak
            TestCase {
                input: vec![0.1, f64::NAN, -0.5],
                expected: vec![1.1, 1.1, 1.1],
            },
        ];

        for (index, test) in cases.into_iter().enumerate() {
            let actual = cumulative_max(&arr1(&test.input), Axis(0));
            assert_all_f64_eq(actual.iter().copied(), test.expected, &format!("TC{index} failed"));
        }
    }

    #[test]
    fn test_draw_down() {
        struct TestCase {
            input: Vec<f64>,
            expected: Vec<f64>,
        }

        let cases = vec![
            // TC0: dip of one percent from the peak at index 1
            TestCase {
                input: vec![0.01, 0.02, -0.01, 0.03],
                expected: vec![0.0, 0.0, -0.01, 0.0],
            },
            // TC1: deepening then partial recovery
            TestCase {
                input: vec![0.1, -0.1, -0.5, 0.2],
                expected: vec![0.0, -0.1, -0.55, -0.46],
            },
            // TC2: only losses, first period is its own peak
            TestCase {
                input: vec![-0.5, -0.5],
                expected: vec![0.0, -0.5],
            },
        ];

        for (index, test) in cases.into_iter().enumerate() {
            let actual = draw_down(&arr1(&test.input), Axis(0));
            assert_all_f64_eq(actual.iter().copied(), test.expected, &format!("TC{index} failed"));
        }
    }

    #[test]
    fn test_draw_down_two_dimensional() {
        let returns = arr2(&[[0.1, -0.5], [-0.1, -0.5]]);

        let per_column = draw_down(&returns, Axis(0));
        assert_all_f64_eq(per_column.iter().copied(), vec![0.0, 0.0, -0.1, -0.5], "axis 0");

        let per_row = draw_down(&returns, Axis(1));
        assert_all_f64_eq(per_row.iter().copied(), vec![0.0, -0.5, 0.0, -0.5], "axis 1");
    }
}
