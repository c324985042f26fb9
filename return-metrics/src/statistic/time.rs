//! TimeInterval 时间间隔模块
//!
//! 本模块定义了用于年化计算的时间间隔类型，以及由两个间隔推导出的年化乘数
//! （每年包含多少个收益率周期）。
//!
//! # 核心概念
//!
//! - **TimeInterval**: Trait，定义时间间隔接口
//! - **Annual365**: 365 天年化间隔（适用于加密货币等 24/7 交易）
//! - **Annual252**: 252 天年化间隔（适用于传统市场，每年 252 个交易日）
//! - **Daily**: 日间隔
//! - **periods_per_year**: 年化乘数，例如 `Daily` 相对 `Annual252` 为 252

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use smol_str::{SmolStr, format_smolstr};
use std::fmt::Debug;

/// 表示用于年化计算的时间间隔类型的 Trait。
///
/// # 使用示例
///
/// ```rust
/// use return_metrics::statistic::time::{Annual252, Annual365, Daily, TimeInterval};
///
/// assert_eq!(Daily.name().as_str(), "Daily");
/// assert_eq!(Annual252.interval().num_days(), 252);
/// assert_eq!(Annual365.name().as_str(), "Annual(365)");
/// ```
pub trait TimeInterval: Debug + Copy {
    /// 返回时间间隔的人类可读名称。
    fn name(&self) -> SmolStr;

    /// 返回时间间隔的持续时间。
    fn interval(&self) -> TimeDelta;
}

/// 365 天年化时间间隔。
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
pub struct Annual365;

impl TimeInterval for Annual365 {
    fn name(&self) -> SmolStr {
        SmolStr::new("Annual(365)")
    }

    fn interval(&self) -> TimeDelta {
        TimeDelta::days(365)
    }
}

/// 252 天年化时间间隔。
///
/// 适用于传统市场，每年通常有 252 个交易日（排除周末和节假日）。
/// [`StatisticConfig::default`](crate::config::StatisticConfig) 的 `periods_per_year`
/// 即由 [`Daily`] 对本间隔推导得出。
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
pub struct Annual252;

impl TimeInterval for Annual252 {
    fn name(&self) -> SmolStr {
        SmolStr::new("Annual(252)")
    }

    fn interval(&self) -> TimeDelta {
        TimeDelta::days(252)
    }
}

/// 日时间间隔。
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
pub struct Daily;

impl TimeInterval for Daily {
    fn name(&self) -> SmolStr {
        SmolStr::new("Daily")
    }

    fn interval(&self) -> TimeDelta {
        TimeDelta::days(1)
    }
}

impl TimeInterval for TimeDelta {
    fn name(&self) -> SmolStr {
        format_smolstr!("Duration {} (minutes)", self.num_minutes())
    }

    fn interval(&self) -> TimeDelta {
        *self
    }
}

/// 计算一个 `year` 间隔内包含多少个 `period` 间隔，即年化乘数。
///
/// 例如 `periods_per_year(Daily, Annual252) == 252.0`，
/// `periods_per_year(TimeDelta::hours(12), Annual365) == 730.0`。
///
/// 如果 `period` 的持续时间为零，按照 IEEE-754 语义返回 `inf`。
pub fn periods_per_year<Period, Year>(period: Period, year: Year) -> f64
where
    Period: TimeInterval,
    Year: TimeInterval,
{
    let period_secs = period.interval().num_seconds().abs() as f64;
    let year_secs = year.interval().num_seconds().abs() as f64;
    year_secs / period_secs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_periods_per_year() {
        struct TestCase {
            actual: f64,
            expected: f64,
        }

        let cases = vec![
            // TC0: daily returns, traditional market
            TestCase {
                actual: periods_per_year(Daily, Annual252),
                expected: 252.0,
            },
            // TC1: daily returns, 24/7 market
            TestCase {
                actual: periods_per_year(Daily, Annual365),
                expected: 365.0,
            },
            // TC2: custom 12 hour returns
            TestCase {
                actual: periods_per_year(TimeDelta::hours(12), Annual365),
                expected: 730.0,
            },
            // TC3: weekly returns
            TestCase {
                actual: periods_per_year(TimeDelta::weeks(1), Annual365),
                expected: 365.0 / 7.0,
            },
        ];

        for (index, test) in cases.into_iter().enumerate() {
            assert_eq!(test.actual, test.expected, "TC{index} failed");
        }
    }

    #[test]
    fn test_periods_per_year_zero_period_is_infinite() {
        assert!(periods_per_year(TimeDelta::zero(), Annual252).is_infinite());
    }

    #[test]
    fn test_time_delta_name() {
        assert_eq!(
            TimeDelta::hours(2).name().as_str(),
            "Duration 120 (minutes)"
        );
    }
}
