#![forbid(unsafe_code)]
#![warn(
    unused,
    clippy::cognitive_complexity,
    unused_crate_dependencies,
    unused_extern_crates,
    clippy::unused_self,
    clippy::useless_let_if_seq,
    missing_debug_implementations,
    rust_2018_idioms,
    rust_2024_compatibility
)]
#![allow(clippy::type_complexity, clippy::too_many_arguments)]

//! # Return Metrics
//! Return Metrics 是一个用于计算周期收益率绩效与风险指标的 Rust 库。
//! * **纯函数**：所有指标都是无状态的纯函数，没有共享的可变状态。
//! * **多维**：基于 `ndarray`，同一个函数既可以处理一维序列，也可以沿指定轴处理二维面板。
//! * **缺失值友好**：缺失值以 `NaN` 表示，归约时被跳过而不是当作零。
//!
//! ## 概述
//! 从高层次来看，它提供了几个主要组件：
//! * 收益率、波动率、回撤、偏度/峰度、VaR/CVaR 等指标的自由函数。
//! * Sharpe、Sortino、Calmar 以及相对基准的 Information Ratio。
//! * 单条命名序列的便捷封装 [`ReturnSeries`](statistic::series::ReturnSeries)。
//! * 汇总所有指标的 [`TearSheet`](statistic::summary::TearSheet)，可序列化并以表格打印。
//!
//! ## 快速开始
//!
//! ```rust
//! use return_metrics::statistic::metric::{drawdown::max::max_drawdown, sharpe::sharpe};
//! use ndarray::{Axis, arr2};
//!
//! // 每列一条序列
//! let returns = arr2(&[[0.01, 0.02], [0.02, -0.01], [-0.01, 0.03]]);
//!
//! let drawdowns = max_drawdown(&returns, Axis(0));
//! let ratios = sharpe(&returns, 0.0, 252.0, Axis(0));
//!
//! assert_eq!(drawdowns.len(), 2);
//! assert_eq!(ratios.len(), 2);
//! ```

/// 统计计算参数配置。
///
/// 例如：`StatisticConfig`。
pub mod config;

/// 定义统计库中所有可能的错误。
pub mod error;

/// 提供默认的 Tracing 日志初始化器。
pub mod logging;

/// 用于分析收益率数组的统计算法、金融指标和金融摘要。
///
/// 例如：`TearSheet`、`sharpe`、`max_drawdown` 等。
pub mod statistic;

/// 测试工具。
///
/// 提供用于测试的浮点数比较辅助函数。
pub mod test_utils {
    /// 断言比较使用的相对容差。
    pub const EPSILON: f64 = 1e-9;

    /// 比较两个 f64 浮点数是否相等（考虑 NaN 和无穷大）。
    ///
    /// # 特殊情况处理
    ///
    /// - 两个 NaN 值被视为相等
    /// - 两个同符号的无穷大值被视为相等
    /// - 其他包含 NaN 或无穷大的情况返回 `false`
    ///
    /// # 使用示例
    ///
    /// ```rust
    /// use return_metrics::test_utils::f64_is_eq;
    ///
    /// assert!(f64_is_eq(0.1 + 0.2, 0.3, 1e-10));
    /// assert!(f64_is_eq(f64::NAN, f64::NAN, 1e-10));
    /// ```
    pub fn f64_is_eq(actual: f64, expected: f64, epsilon: f64) -> bool {
        if actual.is_nan() && expected.is_nan() {
            true
        } else if actual.is_infinite() && expected.is_infinite() {
            actual.is_sign_positive() == expected.is_sign_positive()
        } else if actual.is_nan()
            || expected.is_nan()
            || actual.is_infinite()
            || expected.is_infinite()
        {
            false
        } else {
            (actual - expected).abs() < epsilon
        }
    }

    /// 断言 `actual` 与 `expected` 在 [`EPSILON`]（按 `expected` 的量级缩放）内相等。
    ///
    /// # Panics
    ///
    /// 不相等时 panic，并附带 `message`。
    pub fn assert_f64_eq(actual: f64, expected: f64, message: &str) {
        let epsilon = EPSILON * expected.abs().max(1.0);
        assert!(
            f64_is_eq(actual, expected, epsilon),
            "{message}: actual {actual}, expected {expected}"
        );
    }

    /// 逐元素断言两个序列长度相同且在容差内相等。
    pub fn assert_all_f64_eq<A, E>(actual: A, expected: E, message: &str)
    where
        A: IntoIterator<Item = f64>,
        E: IntoIterator<Item = f64>,
    {
        let actual = actual.into_iter().collect::<Vec<_>>();
        let expected = expected.into_iter().collect::<Vec<_>>();

        assert_eq!(
            actual.len(),
            expected.len(),
            "{message}: actual {actual:?}, expected {expected:?}"
        );

        for (index, (actual, expected)) in actual.into_iter().zip(expected).enumerate() {
            assert_f64_eq(actual, expected, &format!("{message} [{index}]"));
        }
    }
}
