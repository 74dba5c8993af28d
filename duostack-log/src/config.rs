//! 一次性组装 `Logger` 和它的输出

use std::sync::Arc;

use crate::{Level, LogRingBuffer, Logger};

/// `dev()` 保留的记录条数
#[cfg(feature = "stderr")]
const DEV_RING_CAPACITY: usize = 4096;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputConfig {
    #[cfg(feature = "stderr")]
    Stderr,
    /// 内存缓冲，参数为容量
    RingBuffer(usize),
}

/// ```
/// use duostack_log::{LogConfig, Level};
///
/// let (logger, ring) = LogConfig::new(Level::Debug).with_ring_buffer(100).init();
/// assert_eq!(logger.level(), Level::Debug);
/// assert!(ring.is_some());
/// ```
#[derive(Clone, Debug)]
pub struct LogConfig {
    pub level: Level,
    pub outputs: Vec<OutputConfig>,
}

impl LogConfig {
    pub fn new(level: Level) -> Self {
        LogConfig {
            level,
            outputs: Vec::new(),
        }
    }

    /// 本地调试：`Debug` 级别写 stderr，并留一份最近记录
    #[cfg(feature = "stderr")]
    pub fn dev() -> Self {
        Self::new(Level::Debug)
            .with_stderr()
            .with_ring_buffer(DEV_RING_CAPACITY)
    }

    /// `Error` 级别且没有输出
    pub fn test() -> Self {
        Self::new(Level::Error)
    }

    /// 重复调用只保留一个 stderr 输出
    #[cfg(feature = "stderr")]
    pub fn with_stderr(self) -> Self {
        self.with_output(OutputConfig::Stderr)
    }

    pub fn with_ring_buffer(self, capacity: usize) -> Self {
        self.with_output(OutputConfig::RingBuffer(capacity))
    }

    fn with_output(mut self, output: OutputConfig) -> Self {
        if !self.outputs.contains(&output) {
            self.outputs.push(output);
        }
        self
    }

    /// 返回 logger，以及第一个环形缓冲区（如果配置了）
    pub fn init(self) -> (Arc<Logger>, Option<Arc<LogRingBuffer>>) {
        let logger = Logger::new(self.level);
        let mut first_ring = None;

        for output in self.outputs {
            match output {
                #[cfg(feature = "stderr")]
                OutputConfig::Stderr => logger.add_sink(crate::StderrSink),
                OutputConfig::RingBuffer(capacity) => {
                    let ring = LogRingBuffer::new(capacity);
                    logger.add_sink(Arc::clone(&ring));
                    first_ring.get_or_insert(ring);
                }
            }
        }

        (logger, first_ring)
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::new(Level::Info)
    }
}
