//! `trace!` .. `error!`
//!
//! 用法：`debug!(logger, "pc={}", pc)`。`logger` 只求值一次，
//! 可以是 `Logger`、`&Logger` 或 `Arc<Logger>`。

#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log!($logger, $crate::Level::Trace, $($arg)*)
    };
}

#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log!($logger, $crate::Level::Debug, $($arg)*)
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log!($logger, $crate::Level::Info, $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log!($logger, $crate::Level::Warn, $($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log!($logger, $crate::Level::Error, $($arg)*)
    };
}

/// 按运行时级别写日志；级别关闭时不会格式化参数
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)*) => {{
        let sink: &$crate::Logger = ::std::borrow::Borrow::borrow(&$logger);
        let level: $crate::Level = $level;
        if sink.is_enabled(level) {
            sink.log(level, module_path!(), ::std::format!($($arg)*));
        }
    }};
}
