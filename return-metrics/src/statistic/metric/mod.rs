//! Metric 金融指标模块
//!
//! 本模块提供了基于周期收益率数组的各种金融指标，用于评估投资组合或策略的绩效。
//! 所有指标都是作用在 `ndarray` 数组上的纯函数，沿调用方指定的 `Axis` 归约或累积，
//! 缺失值（`NaN`）在归约中被跳过。
//!
//! # 核心指标
//!
//! - **Rate Of Return**: 收益率（累计、平均、年化）
//! - **Volatility**: 波动率（总体、下行、上行）
//! - **Drawdown**: 回撤及回撤持续时间
//! - **Sharpe Ratio**: 夏普比率，衡量风险调整后的收益
//! - **Sortino Ratio**: 索提诺比率，只考虑下行波动率
//! - **Calmar Ratio**: 卡尔玛比率，使用最大回撤作为风险度量
//! - **Information Ratio**: 信息比率，相对基准的主动收益
//! - **Tail**: VaR、CVaR 与尾部风险

/// Calmar Ratio 卡尔玛比率计算逻辑。
pub mod calmar;

/// 最长连涨、连跌周期数。
pub mod continuation;

/// 偏度与峰度。
pub mod distribution;

/// Drawdown 回撤计算逻辑。
pub mod drawdown;

/// Information Ratio 信息比率及主动收益计算逻辑。
pub mod information;

/// Rate Of Return 收益率计算逻辑。
pub mod rate_of_return;

/// Sharpe Ratio 夏普比率计算逻辑。
pub mod sharpe;

/// Sortino Ratio 索提诺比率计算逻辑。
pub mod sortino;

/// VaR、CVaR 与尾部风险。
pub mod tail;

/// 波动率计算逻辑。
pub mod volatility;

/// Win Rate 胜率计算逻辑。
pub mod win_rate;
