//! Tail Risk 尾部风险模块
//!
//! 基于历史分位数的尾部风险指标：
//!
//! - **VaR (Value-at-Risk)**: 收益分布的 `alpha` 分位数（对典型的亏损尾部为负数）
//! - **CVaR (Conditional Value-at-Risk)**: 小于等于 VaR 的收益的均值
//! - **Tail Risk**: 小于等于 VaR 的收益的（总体）标准差
//!
//! 分位数在相邻排序观测值之间线性插值，跳过缺失值。
//!
//! # 参考文档
//!
//! <https://www.investopedia.com/terms/v/var.asp>

use crate::{
    error::StatisticError,
    statistic::{
        algorithm::{VarianceKind, nan_mean, nan_quantile, nan_std},
        lane::reduce,
    },
};
use ndarray::{Array, ArrayBase, ArrayView1, Axis, Data, RemoveAxis};
use serde::{Deserialize, Serialize};

/// 经过校验的尾部概率，位于 `[0, 1]` 区间内，默认值为 `0.05`。
///
/// # 使用示例
///
/// ```rust
/// use return_metrics::statistic::metric::tail::Alpha;
///
/// assert_eq!(Alpha::default().value(), 0.05);
/// assert!(Alpha::new(0.01).is_ok());
/// assert!(Alpha::new(1.5).is_err());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Alpha(f64);

impl Alpha {
    /// 构造 [`Alpha`]，`value` 不在 `[0, 1]` 区间内（或为 `NaN`）时返回错误。
    pub fn new(value: f64) -> Result<Self, StatisticError> {
        match (0.0..=1.0).contains(&value) {
            true => Ok(Self(value)),
            false => Err(StatisticError::InvalidAlpha(value)),
        }
    }

    /// 尾部概率的数值。
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Alpha {
    fn default() -> Self {
        Self(0.05)
    }
}

impl TryFrom<f64> for Alpha {
    type Error = StatisticError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Alpha> for f64 {
    fn from(alpha: Alpha) -> Self {
        alpha.0
    }
}

/// 沿 `axis` 的历史 VaR：收益率的 `alpha` 分位数。
pub fn value_at_risk<S, D>(returns: &ArrayBase<S, D>, alpha: Alpha, axis: Axis) -> Array<f64, D::Smaller>
where
    S: Data<Elem = f64>,
    D: RemoveAxis,
{
    reduce(returns, axis, |lane| nan_quantile(lane.iter().copied(), alpha.value()))
}

/// 沿 `axis` 的 CVaR：所有小于等于 VaR 的收益的均值。
pub fn conditional_value_at_risk<S, D>(
    returns: &ArrayBase<S, D>,
    alpha: Alpha,
    axis: Axis,
) -> Array<f64, D::Smaller>
where
    S: Data<Elem = f64>,
    D: RemoveAxis,
{
    reduce(returns, axis, |lane| nan_mean(tail(lane, alpha)))
}

/// 沿 `axis` 的尾部风险：所有小于等于 VaR 的收益的标准差。
pub fn tail_risk<S, D>(returns: &ArrayBase<S, D>, alpha: Alpha, axis: Axis) -> Array<f64, D::Smaller>
where
    S: Data<Elem = f64>,
    D: RemoveAxis,
{
    reduce(returns, axis, |lane| {
        nan_std(tail(lane, alpha), VarianceKind::Population)
    })
}

/// 小于等于 VaR 的观测值。缺失值与 VaR 的比较恒为假，因此被排除。
fn tail<'a>(returns: ArrayView1<'a, f64>, alpha: Alpha) -> impl Iterator<Item = f64> + 'a {
    let threshold = nan_quantile(returns.iter().copied(), alpha.value());
    returns.into_iter().copied().filter(move |r| *r <= threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_f64_eq;
    use ndarray::{Array1, arr1};

    #[test]
    fn test_alpha_validation() {
        assert_eq!(Alpha::new(-0.1), Err(StatisticError::InvalidAlpha(-0.1)));
        assert!(Alpha::new(f64::NAN).is_err());
        assert_eq!(Alpha::new(0.0).unwrap().value(), 0.0);
        assert_eq!(Alpha::new(1.0).unwrap().value(), 1.0);

        let alpha: Alpha = serde_json::from_str("0.01").unwrap();
        assert_eq!(alpha.value(), 0.01);
        assert!(serde_json::from_str::<Alpha>("2.0").is_err());
    }

    #[test]
    fn test_value_at_risk_selects_lower_tail() {
        // 1000 evenly spread returns in [-0.0999, 0.0999]
        let returns = Array1::from_iter((0..1000).map(|index| (index as f64 - 499.5) / 5000.0));
        let actual = value_at_risk(&returns, Alpha::default(), Axis(0)).into_scalar();

        // position 0.05 * 999 = 49.95, between the 50th and 51st smallest values
        let fiftieth_smallest = returns[49];
        assert!(actual > fiftieth_smallest);
        assert!(actual < returns[50]);
        assert_f64_eq(actual, fiftieth_smallest + 0.95 * (returns[50] - returns[49]), "interpolated");
    }

    #[test]
    fn test_conditional_value_at_risk_and_tail_risk() {
        // sorted = [-0.05, -0.03, -0.01, 0.01, 0.02], alpha 0.5 -> VaR = -0.01
        let returns = arr1(&[0.02, -0.05, f64::NAN, -0.01, 0.01, -0.03]);
        let alpha = Alpha::new(0.5).unwrap();

        assert_f64_eq(
            value_at_risk(&returns, alpha, Axis(0)).into_scalar(),
            -0.01,
            "VaR",
        );
        assert_f64_eq(
            conditional_value_at_risk(&returns, alpha, Axis(0)).into_scalar(),
            -0.03,
            "CVaR",
        );
        assert_f64_eq(
            tail_risk(&returns, alpha, Axis(0)).into_scalar(),
            (0.0008_f64 / 3.0).sqrt(),
            "tail risk",
        );
    }

    #[test]
    fn test_all_missing_tail_is_missing() {
        let returns = arr1(&[f64::NAN, f64::NAN]);

        assert!(value_at_risk(&returns, Alpha::default(), Axis(0)).into_scalar().is_nan());
        assert!(
            conditional_value_at_risk(&returns, Alpha::default(), Axis(0))
                .into_scalar()
                .is_nan()
        );
        assert!(tail_risk(&returns, Alpha::default(), Axis(0)).into_scalar().is_nan());
    }
}
