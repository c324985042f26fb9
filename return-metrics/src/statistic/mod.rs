//! Statistic 统计模块
//!
//! 本模块提供了用于分析周期收益率数组的统计算法和指标。
//! 包括各种金融指标的计算、统计摘要的生成、时间间隔的定义等。
//!
//! # 核心概念
//!
//! - **algorithm**: 忽略缺失值的统计算法
//! - **lane**: 将单条序列上的计算提升到任意维度数组的指定轴上
//! - **metric**: 金融指标
//! - **series**: 单条命名收益率序列的便捷封装
//! - **summary**: 收益率序列的统计摘要
//! - **time**: 用于年化计算的时间间隔定义
//!
//! # 使用场景
//!
//! - 计算基金或策略的绩效指标
//! - 生成绩效摘要和报告
//! - 评估风险指标

/// 用于分析数据集的统计算法。
pub mod algorithm;

/// 沿轴归约与累积。
pub mod lane;

/// 金融指标。
pub mod metric;

/// 单条命名收益率序列。
pub mod series;

/// 收益率序列的统计摘要。
///
/// 例如，`TearSheet`。
pub mod summary;

/// 用于年化计算的时间间隔定义。
///
/// 例如，`Annual365`、`Annual252`、`Daily` 等。
pub mod time;
