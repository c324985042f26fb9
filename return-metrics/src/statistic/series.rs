//! ReturnSeries 收益率序列模块
//!
//! [`ReturnSeries`] 为单条命名的收益率序列提供只读的派生指标，每个方法都委托给
//! [`metric`](crate::statistic::metric) 模块中的自由函数，不引入新的语义。

use crate::{
    error::StatisticError,
    statistic::{
        algorithm::VarianceKind,
        metric::{
            drawdown::{cumulative_max, draw_down},
            rate_of_return::{average_return, cumulative_return, final_cumulative_return},
            volatility::standard_deviation,
        },
    },
};
use derive_more::Constructor;
use ndarray::{Array1, ArrayBase, ArrayD, Axis, Data, Ix1, Ix2};
use serde::{Deserialize, Serialize};
use smol_str::{SmolStr, format_smolstr};
use tracing::warn;

/// 单条命名的周期收益率序列。
///
/// # 使用示例
///
/// ```rust
/// use return_metrics::statistic::series::ReturnSeries;
/// use ndarray::arr1;
///
/// let series = ReturnSeries::new("fund".into(), arr1(&[0.1, -0.1]));
/// assert!((series.accumulative_return() - 0.99).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Constructor)]
pub struct ReturnSeries {
    /// 序列名称，例如基金或策略代码。
    pub name: SmolStr,
    /// 周期收益率，缺失值为 `NaN`。
    pub returns: Array1<f64>,
}

impl ReturnSeries {
    /// 从动态维度数组构造序列，数组不是一维时返回 [`StatisticError::NotASeries`]。
    pub fn from_dyn(name: SmolStr, returns: ArrayD<f64>) -> Result<Self, StatisticError> {
        let ndim = returns.ndim();
        let returns = returns.into_dimensionality::<Ix1>().map_err(|_| {
            warn!(%name, ndim, "rejected non 1-dimensional return series");
            StatisticError::NotASeries { ndim }
        })?;

        Ok(Self::new(name, returns))
    }

    /// 将形状为 `(periods, series)` 的面板拆分为每列一条序列。
    ///
    /// 名称按列顺序分配，名称不足时使用 `column_{index}`，多余的名称被忽略。
    pub fn columns<S, I>(panel: &ArrayBase<S, Ix2>, names: I) -> Vec<Self>
    where
        S: Data<Elem = f64>,
        I: IntoIterator,
        I::Item: Into<SmolStr>,
    {
        let mut names = names.into_iter().map(Into::into);

        panel
            .axis_iter(Axis(1))
            .enumerate()
            .map(|(index, column)| {
                let name = names
                    .next()
                    .unwrap_or_else(|| format_smolstr!("column_{index}"));
                Self::new(name, column.to_owned())
            })
            .collect()
    }

    /// 累计收益序列。
    pub fn cumulative_return(&self) -> Array1<f64> {
        cumulative_return(&self.returns, Axis(0))
    }

    /// 最终累计收益（累计收益序列的最后一个值）。
    pub fn accumulative_return(&self) -> f64 {
        final_cumulative_return(&self.returns, Axis(0)).into_scalar()
    }

    /// 平均周期收益。
    pub fn mean_return(&self) -> f64 {
        average_return(&self.returns, Axis(0)).into_scalar()
    }

    /// 周期收益的样本标准差（`ddof = 1`）。
    pub fn std(&self) -> f64 {
        standard_deviation(&self.returns, VarianceKind::Sample, Axis(0)).into_scalar()
    }

    /// 累计收益的历史最高点序列。
    pub fn cumulative_max(&self) -> Array1<f64> {
        cumulative_max(&self.returns, Axis(0))
    }

    /// 回撤序列。
    pub fn drawdowns(&self) -> Array1<f64> {
        draw_down(&self.returns, Axis(0))
    }
}

impl TryFrom<(SmolStr, ArrayD<f64>)> for ReturnSeries {
    type Error = StatisticError;

    fn try_from((name, returns): (SmolStr, ArrayD<f64>)) -> Result<Self, Self::Error> {
        Self::from_dyn(name, returns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_all_f64_eq, assert_f64_eq};
    use ndarray::{IxDyn, arr1, arr2};

    #[test]
    fn test_return_series_delegates_to_metrics() {
        let series = ReturnSeries::new("fund".into(), arr1(&[0.01, 0.02, -0.01, 0.03]));

        assert_all_f64_eq(
            series.cumulative_return().iter().copied(),
            vec![1.01, 1.0302, 1.019898, 1.05049494],
            "cumulative_return",
        );
        assert_f64_eq(series.accumulative_return(), 1.05049494, "accumulative_return");
        assert_f64_eq(series.mean_return(), 0.0125, "mean_return");
        assert_f64_eq(series.std(), (0.000875_f64 / 3.0).sqrt(), "std");
        assert_all_f64_eq(
            series.cumulative_max().iter().copied(),
            vec![1.01, 1.0302, 1.0302, 1.05049494],
            "cumulative_max",
        );
        assert_all_f64_eq(series.drawdowns().iter().copied(), vec![0.0, 0.0, -0.01, 0.0], "drawdowns");
    }

    #[test]
    fn test_return_series_rejects_non_series() {
        struct TestCase {
            input: ArrayD<f64>,
            expected: Result<usize, StatisticError>,
        }

        let cases = vec![
            // TC0: 1-dimensional input is accepted
            TestCase {
                input: arr1(&[0.01, 0.02]).into_dyn(),
                expected: Ok(2),
            },
            // TC1: 2-dimensional panel
            TestCase {
                input: arr2(&[[0.01, 0.02], [0.03, 0.04]]).into_dyn(),
                expected: Err(StatisticError::NotASeries { ndim: 2 }),
            },
            // TC2: scalar
            TestCase {
                input: ArrayD::zeros(IxDyn(&[])),
                expected: Err(StatisticError::NotASeries { ndim: 0 }),
            },
        ];

        for (index, test) in cases.into_iter().enumerate() {
            let actual = ReturnSeries::try_from((SmolStr::new("fund"), test.input))
                .map(|series| series.returns.len());
            assert_eq!(actual, test.expected, "TC{index} failed");
        }
    }

    #[test]
    fn test_return_series_columns() {
        let panel = arr2(&[[0.01, 0.02, 0.03], [0.04, 0.05, 0.06]]);
        let actual = ReturnSeries::columns(&panel, ["a", "b"]);

        assert_eq!(
            actual,
            vec![
                ReturnSeries::new("a".into(), arr1(&[0.01, 0.04])),
                ReturnSeries::new("b".into(), arr1(&[0.02, 0.05])),
                ReturnSeries::new("column_2".into(), arr1(&[0.03, 0.06])),
            ]
        );
    }
}
