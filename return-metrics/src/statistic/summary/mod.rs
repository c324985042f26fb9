//! Summary 统计摘要模块
//!
//! 本模块把 [`metric`](crate::statistic::metric) 中的所有标量指标汇总为一份
//! [`TearSheet`]，用于一次性评估单条收益率序列（可选地相对一个基准）。
//!
//! # 核心概念
//!
//! - **TearSheet**: 单条序列的完整绩效摘要
//! - **ActiveSummary**: 相对基准的主动收益指标
//! - **display**: 以表格形式打印 [`TearSheet`]

use crate::{
    config::StatisticConfig,
    error::StatisticError,
    statistic::{
        metric::{
            calmar::calmar,
            continuation::{Continuations, longest_continuations},
            distribution::{kurtosis, skewness},
            drawdown::{duration::draw_down_duration, max::max_drawdown},
            information::{annualized_active_return, annualized_active_vol, information_ratio},
            rate_of_return::{
                annualized_return, average_return, best, final_cumulative_return, worst,
            },
            sharpe::sharpe,
            sortino::sortino,
            tail::{conditional_value_at_risk, tail_risk, value_at_risk},
            volatility::{annualized_vol, down_side_risk, up_side_risk},
            win_rate::winning_ratio,
        },
        series::ReturnSeries,
    },
};
use derive_more::Constructor;
use ndarray::{ArrayBase, Axis, Data, Ix2};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use tracing::debug;

/// 显示格式化模块。
pub mod display;

/// `NaN` 与无穷大指标的序列化。
pub mod non_finite;

/// 单条收益率序列的绩效摘要。
///
/// 所有比率均按照 [`StatisticConfig`] 中的 `periods_per_year` 年化，并扣除
/// `risk_free_return`。缺失或退化的指标为 `NaN`（序列化为 JSON `null`），无穷大序列化为
/// `"inf"`/`"-inf"`，详见 [`non_finite`]。
///
/// # 使用示例
///
/// ```rust
/// use return_metrics::{
///     config::StatisticConfig,
///     statistic::{series::ReturnSeries, summary::TearSheet},
/// };
/// use ndarray::arr1;
///
/// let series = ReturnSeries::new("fund".into(), arr1(&[0.01, 0.02, -0.01, 0.03]));
/// let tear_sheet = TearSheet::generate(&series, None, &StatisticConfig::default()).unwrap();
///
/// assert_eq!(tear_sheet.periods, 4);
/// assert!((tear_sheet.max_drawdown + 0.01).abs() < 1e-12);
/// println!("{tear_sheet}");
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Constructor)]
pub struct TearSheet {
    /// 序列名称。
    pub name: SmolStr,
    /// 周期数（包含缺失周期）。
    pub periods: usize,
    /// 生成摘要时使用的配置。
    pub config: StatisticConfig,

    #[serde(with = "non_finite")]
    pub best: f64,
    #[serde(with = "non_finite")]
    pub worst: f64,
    #[serde(with = "non_finite")]
    pub average_return: f64,
    #[serde(with = "non_finite")]
    pub final_cumulative_return: f64,
    #[serde(with = "non_finite")]
    pub annualized_return: f64,
    #[serde(with = "non_finite")]
    pub annualized_vol: f64,
    #[serde(with = "non_finite")]
    pub down_side_risk: f64,
    #[serde(with = "non_finite")]
    pub up_side_risk: f64,
    #[serde(with = "non_finite")]
    pub skewness: f64,
    #[serde(with = "non_finite")]
    pub kurtosis: f64,
    #[serde(with = "non_finite")]
    pub winning_ratio: f64,

    #[serde(with = "non_finite")]
    pub max_drawdown: f64,
    /// 排名第 `config.draw_down_rank` 的回撤持续周期数。
    pub draw_down_duration: Option<usize>,
    pub continuations: Continuations,

    #[serde(with = "non_finite")]
    pub value_at_risk: f64,
    #[serde(with = "non_finite")]
    pub conditional_value_at_risk: f64,
    #[serde(with = "non_finite")]
    pub tail_risk: f64,

    #[serde(with = "non_finite")]
    pub sharpe: f64,
    #[serde(with = "non_finite")]
    pub sortino: f64,
    #[serde(with = "non_finite")]
    pub calmar: f64,

    /// 提供基准时的主动收益指标。
    pub active: Option<ActiveSummary>,
}

/// 相对基准的主动收益指标。
#[derive(Debug, Clone, PartialEq, PartialOrd, Deserialize, Serialize, Constructor)]
pub struct ActiveSummary {
    /// 基准名称。
    pub benchmark: SmolStr,
    #[serde(with = "non_finite")]
    pub annualized_active_return: f64,
    #[serde(with = "non_finite")]
    pub annualized_active_vol: f64,
    #[serde(with = "non_finite")]
    pub information_ratio: f64,
}

impl TearSheet {
    /// 为 `series` 生成 [`TearSheet`]。
    ///
    /// 提供 `benchmark` 时其长度必须与 `series` 相同（长度为 1 的基准同样被拒绝，
    /// 不做广播），否则返回 [`StatisticError::ShapeMismatch`]。
    pub fn generate(
        series: &ReturnSeries,
        benchmark: Option<&ReturnSeries>,
        config: &StatisticConfig,
    ) -> Result<Self, StatisticError> {
        let returns = &series.returns;
        let axis = Axis(0);
        let multiplier = config.periods_per_year;
        let risk_free = config.risk_free_return;

        let active = benchmark
            .map(|benchmark| ActiveSummary::generate(series, benchmark, multiplier))
            .transpose()?;

        let tear_sheet = Self {
            name: series.name.clone(),
            periods: returns.len(),
            config: *config,
            best: best(returns, axis).into_scalar(),
            worst: worst(returns, axis).into_scalar(),
            average_return: average_return(returns, axis).into_scalar(),
            final_cumulative_return: final_cumulative_return(returns, axis).into_scalar(),
            annualized_return: annualized_return(returns, multiplier, axis).into_scalar(),
            annualized_vol: annualized_vol(returns, multiplier, axis).into_scalar(),
            down_side_risk: down_side_risk(returns, multiplier, axis).into_scalar(),
            up_side_risk: up_side_risk(returns, multiplier, axis).into_scalar(),
            skewness: skewness(returns, axis).into_scalar(),
            kurtosis: kurtosis(returns, axis).into_scalar(),
            winning_ratio: winning_ratio(returns, axis).into_scalar(),
            max_drawdown: max_drawdown(returns, axis).into_scalar(),
            draw_down_duration: draw_down_duration(returns, config.draw_down_rank, axis)
                .into_scalar(),
            continuations: longest_continuations(returns, axis).into_scalar(),
            value_at_risk: value_at_risk(returns, config.alpha, axis).into_scalar(),
            conditional_value_at_risk: conditional_value_at_risk(returns, config.alpha, axis)
                .into_scalar(),
            tail_risk: tail_risk(returns, config.alpha, axis).into_scalar(),
            sharpe: sharpe(returns, risk_free, multiplier, axis).into_scalar(),
            sortino: sortino(returns, risk_free, multiplier, axis).into_scalar(),
            calmar: calmar(returns, risk_free, multiplier, axis).into_scalar(),
            active,
        };

        debug!(
            name = %tear_sheet.name,
            periods = tear_sheet.periods,
            sharpe = tear_sheet.sharpe,
            max_drawdown = tear_sheet.max_drawdown,
            "generated TearSheet"
        );

        Ok(tear_sheet)
    }

    /// 为形状为 `(periods, series)` 的面板中每一列生成 [`TearSheet`]。
    ///
    /// 列名的分配规则与 [`ReturnSeries::columns`] 相同。
    pub fn generate_all<S, I>(
        panel: &ArrayBase<S, Ix2>,
        names: I,
        config: &StatisticConfig,
    ) -> Result<Vec<Self>, StatisticError>
    where
        S: Data<Elem = f64>,
        I: IntoIterator,
        I::Item: Into<SmolStr>,
    {
        ReturnSeries::columns(panel, names)
            .iter()
            .map(|series| Self::generate(series, None, config))
            .collect()
    }
}

impl ActiveSummary {
    fn generate(
        series: &ReturnSeries,
        benchmark: &ReturnSeries,
        multiplier: f64,
    ) -> Result<Self, StatisticError> {
        let returns = &series.returns;
        let axis = Axis(0);

        // a single period benchmark would otherwise broadcast
        if benchmark.returns.len() != returns.len() {
            return Err(StatisticError::ShapeMismatch {
                expected: vec![returns.len()],
                actual: vec![benchmark.returns.len()],
            });
        }

        Ok(Self::new(
            benchmark.name.clone(),
            annualized_active_return(returns, &benchmark.returns, multiplier, axis)?.into_scalar(),
            annualized_active_vol(returns, &benchmark.returns, multiplier, axis)?.into_scalar(),
            information_ratio(returns, &benchmark.returns, multiplier, axis)?.into_scalar(),
        ))
    }
}
