//! Sortino Ratio 索提诺比率模块
//!
//! 索提诺比率类似于夏普比率，但只考虑下行风险（正收益置零后的波动率）而不是总波动率。
//!
//! # 计算公式
//!
//! `Sortino Ratio = annualized_absolute_return(r, risk_free) / down_side_risk(r)`
//!
//! # 特殊情况
//!
//! 下行风险为零时分母视为无穷大，比率为 `0.0`。

use crate::statistic::metric::{
    rate_of_return::annualized_absolute_return, volatility::down_side_risk,
};
use ndarray::{Array, ArrayBase, Axis, Data, RemoveAxis, Zip};

/// 沿 `axis` 计算年化索提诺比率。
pub fn sortino<S, D>(
    returns: &ArrayBase<S, D>,
    risk_free: f64,
    multiplier: f64,
    axis: Axis,
) -> Array<f64, D::Smaller>
where
    S: Data<Elem = f64>,
    D: RemoveAxis,
{
    let absolute_return = annualized_absolute_return(returns, risk_free, multiplier, axis);
    let risk = down_side_risk(returns, multiplier, axis);

    Zip::from(&absolute_return)
        .and(&risk)
        .map_collect(|absolute_return, risk| match *risk == 0.0 {
            true => absolute_return / f64::INFINITY,
            false => absolute_return / risk,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_f64_eq;
    use ndarray::arr1;

    #[test]
    fn test_sortino_ratio() {
        // down side series [0, -0.02], population std 0.01
        let returns = arr1(&[0.04, -0.02]);
        let expected_return = 1.04 * 0.98 - 1.0;

        let actual = sortino(&returns, 0.0, 2.0, Axis(0)).into_scalar();
        assert_f64_eq(actual, expected_return / (0.01 * 2.0_f64.sqrt()), "sortino");
    }

    #[test]
    fn test_sortino_ratio_without_down_side_risk() {
        struct TestCase {
            input: Vec<f64>,
            risk_free: f64,
        }

        let cases = vec![
            // TC0: only gains
            TestCase {
                input: vec![0.01, 0.02, 0.03],
                risk_free: 0.0,
            },
            // TC1: negative excess return with no losing periods
            TestCase {
                input: vec![0.01, 0.01],
                risk_free: 0.05,
            },
        ];

        for (index, test) in cases.into_iter().enumerate() {
            let actual = sortino(&arr1(&test.input), test.risk_free, 252.0, Axis(0));
            let actual = actual.into_scalar();
            assert_eq!(actual, 0.0, "TC{index} failed");
            assert!(actual.is_finite(), "TC{index} failed");
        }
    }
}
