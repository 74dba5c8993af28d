//! duostack-log - 结构化日志系统
//!
//! 为 Duostack 预处理器、词法分析器和执行引擎设计的日志系统：
//! - **显式传递**：没有全局 logger，`Arc<Logger>` 通过构造函数传入
//! - **惰性格式化**：宏先检查级别，未启用时不做任何格式化
//! - **可回放**：环形缓冲区保留最后 N 条记录，测试中用来断言日志内容
//!
//! # 快速开始
//!
//! ```
//! use duostack_log::{debug, LogConfig, Level};
//!
//! let (logger, ring) = LogConfig::new(Level::Debug).with_ring_buffer(128).init();
//! debug!(logger, "engine ready, {} tokens", 3);
//! assert_eq!(ring.unwrap().len(), 1);
//! ```
//!
//! 需要接入其它日志框架（例如 CLI 中的 `tracing`）时，实现 [`LogSink`] 即可。

mod config;
mod logger;
mod macros;
mod record;
mod ring_buffer;

pub use config::{LogConfig, OutputConfig};
pub use logger::{LogSink, Logger};
pub use record::{Level, ParseLevelError, Record};
pub use ring_buffer::{LogRingBuffer, RingBufferStats};

#[cfg(feature = "stderr")]
pub use logger::StderrSink;
