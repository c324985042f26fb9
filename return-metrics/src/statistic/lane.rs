//! Lane 轴向提升模块
//!
//! 每个指标只需要针对单条收益率序列（`ArrayView1`，即沿某个轴的一个 lane）实现一次，
//! 本模块负责把它提升到任意维度的数组上：
//!
//! - [`reduce`]: 沿轴归约，输出比输入少一维（一维输入得到零维数组）
//! - [`accumulate`]: 沿轴累积，输出与输入形状相同
//! - [`difference`]: 收益率减去可广播的基准数组
//!
//! # Panics
//!
//! 与 `ndarray` 的约定一致，`axis` 超出输入维数时 panic。

use crate::error::StatisticError;
use ndarray::{Array, ArrayBase, ArrayView1, ArrayViewMut1, Axis, Data, Dimension, RemoveAxis, Zip};
use tracing::debug;

/// 沿 `axis` 对每个 lane 应用归约 `kernel`。
pub fn reduce<S, D, F, T>(returns: &ArrayBase<S, D>, axis: Axis, kernel: F) -> Array<T, D::Smaller>
where
    S: Data<Elem = f64>,
    D: RemoveAxis,
    F: FnMut(ArrayView1<'_, f64>) -> T,
{
    returns.map_axis(axis, kernel)
}

/// 沿 `axis` 对每个 lane 应用累积 `kernel`，`kernel` 将结果写入同长度的输出 lane。
pub fn accumulate<S, D, F>(returns: &ArrayBase<S, D>, axis: Axis, mut kernel: F) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: RemoveAxis,
    F: FnMut(ArrayView1<'_, f64>, ArrayViewMut1<'_, f64>),
{
    let mut output = Array::from_elem(returns.raw_dim(), f64::NAN);

    Zip::from(returns.lanes(axis))
        .and(output.lanes_mut(axis))
        .for_each(|input, output| kernel(input, output));

    output
}

/// 计算 `returns - benchmark`，其中 `benchmark` 必须可广播到 `returns` 的形状。
///
/// 例如形状为 `(periods, series)` 的收益率，可以与相同形状、`(series,)` 形状
/// 或零维的基准相减。
pub fn difference<S, D, SB, DB>(
    returns: &ArrayBase<S, D>,
    benchmark: &ArrayBase<SB, DB>,
) -> Result<Array<f64, D>, StatisticError>
where
    S: Data<Elem = f64>,
    D: Dimension,
    SB: Data<Elem = f64>,
    DB: Dimension,
{
    let Some(benchmark) = benchmark.broadcast(returns.raw_dim()) else {
        debug!(
            returns = ?returns.shape(),
            benchmark = ?benchmark.shape(),
            "benchmark cannot be broadcast to returns"
        );
        return Err(StatisticError::ShapeMismatch {
            expected: returns.shape().to_vec(),
            actual: benchmark.shape().to_vec(),
        });
    };

    let mut output = returns.to_owned();
    output.zip_mut_with(&benchmark, |value, benchmark| *value -= *benchmark);
    Ok(output)
}
