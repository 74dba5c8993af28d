//! CLI 日志系统初始化
//!
//! 基于 `tracing-subscriber` 实现分阶段日志控制。核心 crate 的
//! [`Record`] 通过 [`TracingSink`] 转发为 tracing 事件，统一写到 stderr，
//! 保证 stdout 只有程序输出。

use std::io;
use std::sync::Arc;

use duostack_config::{LogLevel, Phase};
use duostack_log::{Level, LogSink, Logger, Record};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer};

use crate::config::LogConfig;

/// 日志输出格式
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// 彩色格式化（开发使用）
    Pretty,
    /// 紧凑格式
    Compact,
    /// JSON 格式（工具集成）
    Json,
    /// duostack-log 自带的单行格式，不经过 tracing，忽略分阶段级别
    Plain,
}

/// 初始化 tracing 并返回转发到 tracing 的 logger
///
/// 全部静默时不安装 subscriber，返回 noop logger。
pub fn init(log_config: &LogConfig, format: LogFormat) -> Arc<Logger> {
    let Some(level) = to_log_level(log_config.most_verbose()) else {
        return Logger::noop();
    };

    if format == LogFormat::Plain {
        let (logger, _) = duostack_log::LogConfig::new(level).with_stderr().init();
        return logger;
    }

    let targets = Targets::new()
        .with_default(LevelFilter::OFF)
        .with_target("duostack", to_filter(log_config.global))
        .with_target(
            Phase::Preprocess.target(),
            to_filter(log_config.level_for(Phase::Preprocess)),
        )
        .with_target(
            Phase::Lexer.target(),
            to_filter(log_config.level_for(Phase::Lexer)),
        )
        .with_target(
            Phase::Engine.target(),
            to_filter(log_config.level_for(Phase::Engine)),
        );

    let layer = create_format_layer(format, io::stderr).with_filter(targets);
    // 已经安装过 subscriber 时保留原来的
    let _ = tracing_subscriber::registry().with(layer).try_init();

    Logger::new(level).with_sink(TracingSink)
}

/// Create formatter layer based on format
fn create_format_layer<W, F>(
    format: LogFormat,
    make_writer: F,
) -> Box<dyn Layer<tracing_subscriber::Registry> + Send + Sync>
where
    W: io::Write + 'static,
    F: Fn() -> W + Send + Sync + 'static,
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(false)
            .without_time()
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Json | LogFormat::Plain => fmt::layer()
            .json()
            .with_target(true)
            .with_writer(make_writer)
            .boxed(),
    }
}

fn to_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Silent => LevelFilter::OFF,
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Trace => LevelFilter::TRACE,
    }
}

fn to_log_level(level: LogLevel) -> Option<Level> {
    match level {
        LogLevel::Silent => None,
        LogLevel::Error => Some(Level::Error),
        LogLevel::Warn => Some(Level::Warn),
        LogLevel::Info => Some(Level::Info),
        LogLevel::Debug => Some(Level::Debug),
        LogLevel::Trace => Some(Level::Trace),
    }
}

/// 按模块路径判断记录属于哪个阶段
pub fn phase_of(module: &str) -> Option<Phase> {
    if module.contains("::preprocess") {
        Some(Phase::Preprocess)
    } else if module.contains("::kit::lexer") {
        Some(Phase::Lexer)
    } else if module.contains("::runtime") {
        Some(Phase::Engine)
    } else {
        None
    }
}

/// 把 duostack-log 的记录转发为 tracing 事件
pub struct TracingSink;

// tracing 的 target 和 level 必须是常量，只能逐个展开
macro_rules! forward {
    ($target:literal, $record:expr) => {{
        let module = $record.target;
        let message = $record.message.as_str();
        match $record.level {
            Level::Trace => tracing::trace!(target: $target, module, "{}", message),
            Level::Debug => tracing::debug!(target: $target, module, "{}", message),
            Level::Info => tracing::info!(target: $target, module, "{}", message),
            Level::Warn => tracing::warn!(target: $target, module, "{}", message),
            Level::Error => tracing::error!(target: $target, module, "{}", message),
        }
    }};
}

impl LogSink for TracingSink {
    fn write(&self, record: &Record) {
        match phase_of(record.target) {
            Some(Phase::Preprocess) => forward!("duostack::preprocess", record),
            Some(Phase::Lexer) => forward!("duostack::lexer", record),
            Some(Phase::Engine) => forward!("duostack::engine", record),
            None => forward!("duostack", record),
        }
    }
}
