//! StatisticConfig 统计配置模块
//!
//! 本模块提供了生成 [`TearSheet`](crate::statistic::summary::TearSheet) 时使用的参数配置。
//! 配置可以直接构造，也可以从 JSON 字符串或 reader 加载；缺省的字段使用默认值。
//!
//! # 默认值
//!
//! - **periods_per_year**: `252.0`（[`Daily`] 对 [`Annual252`]）
//! - **risk_free_return**: `0.0`（每周期）
//! - **alpha**: `0.05`
//! - **draw_down_rank**: `1`（最长的回撤）

use crate::{
    error::StatisticError,
    statistic::{
        metric::tail::Alpha,
        time::{Annual252, Daily, TimeInterval, periods_per_year},
    },
};
use serde::{Deserialize, Serialize};
use std::io::Read;
use tracing::{info, warn};

/// 统计指标的计算参数。
///
/// # 使用示例
///
/// ```rust
/// use return_metrics::config::StatisticConfig;
///
/// let config = StatisticConfig::from_json_str(r#"{ "periods_per_year": 12.0 }"#).unwrap();
/// assert_eq!(config.periods_per_year, 12.0);
/// assert_eq!(config.draw_down_rank, 1);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(default)]
pub struct StatisticConfig {
    /// 每年的周期数，用作年化乘数。
    pub periods_per_year: f64,

    /// 每周期的无风险收益率，与收益率同频。
    pub risk_free_return: f64,

    /// VaR / CVaR / 尾部风险使用的尾部概率。
    pub alpha: Alpha,

    /// 回撤持续时间的排名（`1` 表示最长的回撤）。
    pub draw_down_rank: usize,
}

impl Default for StatisticConfig {
    fn default() -> Self {
        Self {
            periods_per_year: periods_per_year(Daily, Annual252),
            risk_free_return: 0.0,
            alpha: Alpha::default(),
            draw_down_rank: 1,
        }
    }
}

impl StatisticConfig {
    /// 使用两个 [`TimeInterval`] 推导每年周期数，其余字段取默认值。
    ///
    /// # 使用示例
    ///
    /// ```rust
    /// use return_metrics::{config::StatisticConfig, statistic::time::{Annual365, Daily}};
    ///
    /// let config = StatisticConfig::from_intervals(Daily, Annual365).unwrap();
    /// assert_eq!(config.periods_per_year, 365.0);
    /// ```
    pub fn from_intervals<Period, Year>(period: Period, year: Year) -> Result<Self, StatisticError>
    where
        Period: TimeInterval,
        Year: TimeInterval,
    {
        Self {
            periods_per_year: periods_per_year(period, year),
            ..Self::default()
        }
        .validate()
    }

    /// 从 JSON 字符串加载并校验配置。
    pub fn from_json_str(json: &str) -> Result<Self, StatisticError> {
        let config = serde_json::from_str::<Self>(json).map_err(|error| {
            warn!(%error, "failed to deserialise StatisticConfig");
            StatisticError::Config(error.to_string())
        })?;

        info!(?config, "loaded StatisticConfig");
        config.validate()
    }

    /// 从任意 [`Read`] 源（例如文件）加载并校验 JSON 配置。
    pub fn from_reader<R>(reader: R) -> Result<Self, StatisticError>
    where
        R: Read,
    {
        let config = serde_json::from_reader::<_, Self>(reader).map_err(|error| {
            warn!(%error, "failed to deserialise StatisticConfig");
            StatisticError::Config(error.to_string())
        })?;

        info!(?config, "loaded StatisticConfig");
        config.validate()
    }

    /// 校验配置，返回自身以便链式调用。
    ///
    /// `periods_per_year` 必须是有限正数，`draw_down_rank` 至少为 `1`，
    /// `risk_free_return` 不能是 `NaN`。
    pub fn validate(self) -> Result<Self, StatisticError> {
        if !(self.periods_per_year.is_finite() && self.periods_per_year > 0.0) {
            return Err(StatisticError::Config(format!(
                "periods_per_year must be finite and positive, found {}",
                self.periods_per_year
            )));
        }

        if self.draw_down_rank == 0 {
            return Err(StatisticError::Config(
                "draw_down_rank must be at least 1".to_string(),
            ));
        }

        if self.risk_free_return.is_nan() {
            return Err(StatisticError::Config(
                "risk_free_return must not be NaN".to_string(),
            ));
        }

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statistic::time::{Annual252, Annual365, Daily};
    use chrono::TimeDelta;

    #[test]
    fn test_statistic_config_from_json_str() {
        struct TestCase {
            input: &'static str,
            expected: Result<StatisticConfig, ()>,
        }

        let cases = vec![
            // TC0: empty object uses defaults
            TestCase {
                input: "{}",
                expected: Ok(StatisticConfig::default()),
            },
            // TC1: every field provided
            TestCase {
                input: r#"{
                    "periods_per_year": 12.0,
                    "risk_free_return": 0.001,
                    "alpha": 0.01,
                    "draw_down_rank": 2
                }"#,
                expected: Ok(StatisticConfig {
                    periods_per_year: 12.0,
                    risk_free_return: 0.001,
                    alpha: Alpha::new(0.01).unwrap(),
                    draw_down_rank: 2,
                }),
            },
            // TC2: alpha outside [0, 1]
            TestCase {
                input: r#"{ "alpha": 1.5 }"#,
                expected: Err(()),
            },
            // TC3: non-positive periods_per_year
            TestCase {
                input: r#"{ "periods_per_year": 0.0 }"#,
                expected: Err(()),
            },
            // TC4: zero draw_down_rank
            TestCase {
                input: r#"{ "draw_down_rank": 0 }"#,
                expected: Err(()),
            },
            // TC5: malformed json
            TestCase {
                input: r#"{ "periods_per_year": "#,
                expected: Err(()),
            },
        ];

        for (index, test) in cases.into_iter().enumerate() {
            let actual = StatisticConfig::from_json_str(test.input);
            match (actual, test.expected) {
                (Ok(actual), Ok(expected)) => assert_eq!(actual, expected, "TC{index} failed"),
                (Err(StatisticError::Config(_)), Err(())) => {}
                (actual, expected) => {
                    panic!("TC{index} failed: actual {actual:?}, expected {expected:?}")
                }
            }
        }
    }

    #[test]
    fn test_statistic_config_from_reader() {
        let json = br#"{ "risk_free_return": 0.0002 }"#;
        let actual = StatisticConfig::from_reader(&json[..]).unwrap();

        assert_eq!(actual.risk_free_return, 0.0002);
        assert_eq!(actual.periods_per_year, 252.0);
    }

    #[test]
    fn test_statistic_config_default_periods_match_annual_252() {
        let actual = StatisticConfig::default();
        let expected = StatisticConfig::from_intervals(Daily, Annual252).unwrap();

        assert_eq!(actual.periods_per_year, 252.0);
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_statistic_config_from_intervals() {
        assert_eq!(
            StatisticConfig::from_intervals(Daily, Annual252).unwrap().periods_per_year,
            252.0
        );
        assert_eq!(
            StatisticConfig::from_intervals(TimeDelta::hours(12), Annual365)
                .unwrap()
                .periods_per_year,
            730.0
        );
        assert!(matches!(
            StatisticConfig::from_intervals(TimeDelta::zero(), Annual365),
            Err(StatisticError::Config(_))
        ));
    }

    #[test]
    fn test_statistic_config_serde_round_trip() {
        let config = StatisticConfig {
            alpha: Alpha::new(0.1).unwrap(),
            ..StatisticConfig::default()
        };

        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(StatisticConfig::from_json_str(&json).unwrap(), config);
    }
}
