//! Algorithm 统计算法模块
//!
//! 本模块提供了对单条收益率序列（一个 lane）进行归约的基础算法。所有算法都跳过
//! 缺失值（`NaN`），而不是把它们当作零。
//!
//! # 核心概念
//!
//! - **Welford Online 算法**: 单次遍历计算均值和方差的在线算法
//! - **NaN 感知归约**: 最大值、最小值、乘积、分位数
//! - **标准化矩**: 偏度（三阶）和峰度（四阶）
//!
//! # 缺失值约定
//!
//! 只包含缺失值（或为空）的输入，对均值/方差类归约返回 `NaN`；
//! 对乘积返回空积 `1.0`。

use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// [Welford Online](https://en.wikipedia.org/wiki/Algorithms_for_calculating_variance#Welford's_online_algorithm)
/// 算法集合，用于单次遍历计算运行中的均值和方差。
///
/// # 使用示例
///
/// ```rust,ignore
/// use return_metrics::statistic::algorithm::welford_online;
///
/// let mut mean = 0.0;
/// let mut m = 0.0;
/// let mut count = 0.0;
///
/// for value in data {
///     count += 1.0;
///     let new_mean = welford_online::calculate_mean(mean, value, count);
///     m = welford_online::calculate_recurrence_relation_m(m, mean, value, new_mean);
///     mean = new_mean;
/// }
///
/// let variance = welford_online::calculate_population_variance(m, count);
/// ```
pub mod welford_online {
    /// 计算下一个均值。
    ///
    /// `new_mean = prev_mean + (next_value - prev_mean) / count`
    pub fn calculate_mean<T>(mut prev_mean: T, next_value: T, count: T) -> T
    where
        T: Copy + std::ops::Sub<Output = T> + std::ops::Div<Output = T> + std::ops::AddAssign,
    {
        prev_mean += (next_value - prev_mean) / count;
        prev_mean
    }

    /// 计算下一个 Welford Online 递推关系 M。
    ///
    /// `M = prev_m + (new_value - prev_mean) * (new_value - new_mean)`
    pub fn calculate_recurrence_relation_m(
        prev_m: f64,
        prev_mean: f64,
        new_value: f64,
        new_mean: f64,
    ) -> f64 {
        prev_m + ((new_value - prev_mean) * (new_value - new_mean))
    }

    /// 使用 Bessel 校正（count - 1）计算无偏"样本"方差。
    ///
    /// 少于两个观测值时方差无定义，返回 `NaN`。
    pub fn calculate_sample_variance(recurrence_relation_m: f64, count: f64) -> f64 {
        match count < 2.0 {
            true => f64::NAN,
            false => recurrence_relation_m / (count - 1.0),
        }
    }

    /// 计算有偏"总体"方差（分母为 `count`）。
    ///
    /// 没有观测值时返回 `NaN`。
    pub fn calculate_population_variance(recurrence_relation_m: f64, count: f64) -> f64 {
        match count < 1.0 {
            true => f64::NAN,
            false => recurrence_relation_m / count,
        }
    }
}

/// 方差的自由度约定。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default, Deserialize, Serialize)]
pub enum VarianceKind {
    /// 有偏总体方差（`ddof = 0`），所有年化波动率指标使用此约定。
    #[default]
    Population,
    /// 无偏样本方差（`ddof = 1`）。
    Sample,
}

/// 跳过缺失值，返回非缺失观测值的迭代器。
pub fn present(values: impl IntoIterator<Item = f64>) -> impl Iterator<Item = f64> {
    values.into_iter().filter(|value| !value.is_nan())
}

/// 跳过缺失值的算术平均数。
pub fn nan_mean(values: impl IntoIterator<Item = f64>) -> f64 {
    let (mean, count) = present(values).fold((0.0, 0.0), |(mean, count), value| {
        let count = count + 1.0;
        (welford_online::calculate_mean(mean, value, count), count)
    });

    match count > 0.0 {
        true => mean,
        false => f64::NAN,
    }
}

/// 使用 Welford Online 算法计算跳过缺失值的方差。
pub fn nan_variance(values: impl IntoIterator<Item = f64>, kind: VarianceKind) -> f64 {
    let (_, m, count) = present(values).fold((0.0, 0.0, 0.0), |(mean, m, count), value| {
        let count = count + 1.0;
        let new_mean = welford_online::calculate_mean(mean, value, count);
        let m = welford_online::calculate_recurrence_relation_m(m, mean, value, new_mean);
        (new_mean, m, count)
    });

    match kind {
        VarianceKind::Population => welford_online::calculate_population_variance(m, count),
        VarianceKind::Sample => welford_online::calculate_sample_variance(m, count),
    }
}

/// 跳过缺失值的标准差。
pub fn nan_std(values: impl IntoIterator<Item = f64>, kind: VarianceKind) -> f64 {
    nan_variance(values, kind).sqrt()
}

/// 跳过缺失值的最大值；没有观测值时返回 `NaN`。
pub fn nan_max(values: impl IntoIterator<Item = f64>) -> f64 {
    present(values).reduce(f64::max).unwrap_or(f64::NAN)
}

/// 跳过缺失值的最小值；没有观测值时返回 `NaN`。
pub fn nan_min(values: impl IntoIterator<Item = f64>) -> f64 {
    present(values).reduce(f64::min).unwrap_or(f64::NAN)
}

/// 跳过缺失值的乘积；没有观测值时返回空积 `1.0`。
pub fn nan_product(values: impl IntoIterator<Item = f64>) -> f64 {
    present(values).product()
}

/// 跳过缺失值的 `q` 分位数（`q` 位于 `[0, 1]`）。
///
/// 在相邻的排序观测值之间线性插值：对 `n` 个排序值，位置为 `q * (n - 1)`。
/// 没有观测值时返回 `NaN`。
pub fn nan_quantile(values: impl IntoIterator<Item = f64>, q: f64) -> f64 {
    let sorted = present(values).sorted_by(f64::total_cmp).collect::<Vec<_>>();

    let Some(last) = sorted.len().checked_sub(1) else {
        return f64::NAN;
    };

    let position = q * last as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let weight = position - lower as f64;

    sorted[lower] + weight * (sorted[upper] - sorted[lower])
}

/// 跳过缺失值的有偏 `order` 阶标准化矩：`m_k / m_2^(k/2)`。
///
/// `m_k` 为以均值为中心的 `k` 阶总体中心矩。没有观测值，或方差相对均值的量级可以
/// 忽略（`m_2 <= (EPSILON * |mean|)^2`，例如常数序列）时返回 `NaN`。
pub fn nan_standardized_moment(values: impl IntoIterator<Item = f64>, order: i32) -> f64 {
    let observed = present(values).collect::<Vec<_>>();
    if observed.is_empty() {
        return f64::NAN;
    }

    let count = observed.len() as f64;
    // Welford mean is exact for constant input, a plain sum / count is not
    let mean = nan_mean(observed.iter().copied());
    let central_moment = |k: i32| {
        observed
            .iter()
            .map(|value| (value - mean).powi(k))
            .sum::<f64>()
            / count
    };

    let m2 = central_moment(2);
    if m2 <= (f64::EPSILON * mean.abs()).powi(2) {
        return f64::NAN;
    }

    central_moment(order) / m2.powf(f64::from(order) / 2.0)
}
