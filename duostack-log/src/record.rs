//! `Level` 与 `Record`

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use thiserror::Error;

/// 从最详细到最严重排列
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Level {
    /// 每条指令一行
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl Level {
    pub const ALL: [Level; 5] = [
        Level::Trace,
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }

    /// `Logger` 把级别存在 `AtomicU8` 里，这里是反方向
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::ALL.get(usize::from(value)).copied()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown log level '{0}'")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    /// 大小写不敏感，额外接受 `warning`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.eq_ignore_ascii_case("warning") {
            return Ok(Level::Warn);
        }
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseLevelError(s.to_string()))
    }
}

/// 一条已经格式化好的日志
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    /// 自 Unix 纪元起的毫秒数
    pub timestamp_ms: u64,
    pub level: Level,
    /// 发出日志的 `module_path!()`
    pub target: &'static str,
    pub message: String,
}

impl Record {
    pub fn new(level: Level, target: &'static str, message: impl Into<String>) -> Self {
        let since_epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Record {
            timestamp_ms: u64::try_from(since_epoch.as_millis()).unwrap_or(u64::MAX),
            level,
            target,
            message: message.into(),
        }
    }

    /// `[hh:mm:ss.mmm] LEVEL target: message`，时间为 UTC
    pub fn format(&self) -> String {
        let clock = Duration::from_millis(self.timestamp_ms);
        let secs = clock.as_secs() % 86_400;
        format!(
            "[{:02}:{:02}:{:02}.{:03}] {} {}: {}",
            secs / 3600,
            secs / 60 % 60,
            secs % 60,
            clock.subsec_millis(),
            self.level,
            self.target,
            self.message
        )
    }
}
