//! Logging 日志模块
//!
//! 提供基于 `tracing-subscriber` 的默认日志初始化器，库内的 `debug!`/`warn!` 事件
//! 通过这里安装的订阅者输出。
//!
//! - [`init_logging`]: 人类可读格式
//! - [`init_json_logging`]: JSON 格式

use tracing_subscriber::{
    filter::{EnvFilter, LevelFilter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// 初始化默认的 `tracing` 日志（人类可读格式）。
///
/// 默认日志级别为 `DEBUG`，可通过 `RUST_LOG` 环境变量覆盖，例如
/// `RUST_LOG=return_metrics=info`。
///
/// 应在程序启动时调用一次；重复调用会 panic。
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(tracing_subscriber::fmt::layer())
        .init()
}

/// 初始化 JSON 格式的 `tracing` 日志，适用于日志采集系统。
///
/// 过滤规则与 [`init_logging`] 相同。
pub fn init_json_logging() {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .flatten_event(true),
        )
        .init()
}

fn env_filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::DEBUG.into())
        .from_env_lossy()
}
