//! `Logger` 与输出目标

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use crate::record::{Level, Record};

/// 接收已经通过级别过滤的记录
pub trait LogSink: Send + Sync {
    fn write(&self, record: &Record);
}

/// 没有全局实例；各阶段通过构造参数拿到 `Arc<Logger>`
pub struct Logger {
    threshold: AtomicU8,
    sinks: RwLock<Vec<Box<dyn LogSink>>>,
}

impl Logger {
    pub fn new(level: Level) -> Arc<Self> {
        Arc::new(Logger {
            threshold: AtomicU8::new(level as u8),
            sinks: RwLock::new(Vec::new()),
        })
    }

    /// 只有 `Error` 会通过，但没有 sink，所以什么也不写
    pub fn noop() -> Arc<Self> {
        Self::new(Level::Error)
    }

    pub fn with_sink<S: LogSink + 'static>(self: Arc<Self>, sink: S) -> Arc<Self> {
        self.add_sink(sink);
        self
    }

    pub fn add_sink<S: LogSink + 'static>(&self, sink: S) {
        self.sinks
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Box::new(sink));
    }

    pub fn set_level(&self, level: Level) {
        self.threshold.store(level as u8, Ordering::Relaxed);
    }

    pub fn level(&self) -> Level {
        Level::from_u8(self.threshold.load(Ordering::Relaxed)).unwrap_or(Level::Error)
    }

    pub fn is_enabled(&self, level: Level) -> bool {
        level >= self.level()
    }

    /// 宏在调用前已经检查过级别；直接调用时这里再过滤一次
    #[inline(never)]
    pub fn log(&self, level: Level, target: &'static str, message: impl Into<String>) {
        if !self.is_enabled(level) {
            return;
        }
        let sinks = self.sinks.read().unwrap_or_else(PoisonError::into_inner);
        if sinks.is_empty() {
            return;
        }
        let record = Record::new(level, target, message);
        sinks.iter().for_each(|sink| sink.write(&record));
    }

    fn sink_count(&self) -> usize {
        self.sinks.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level())
            .field("sinks", &self.sink_count())
            .finish()
    }
}

/// 把一个 logger 挂到另一个 logger 下面，两边的级别都要满足
impl LogSink for Arc<Logger> {
    fn write(&self, record: &Record) {
        self.log(record.level, record.target, record.message.clone());
    }
}

/// stdout 留给程序输出，日志只写 stderr
#[cfg(feature = "stderr")]
pub struct StderrSink;

#[cfg(feature = "stderr")]
impl LogSink for StderrSink {
    fn write(&self, record: &Record) {
        eprintln!("{}", record.format());
    }
}
