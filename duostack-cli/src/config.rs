//! CLI 配置
//!
//! 分阶段的日志级别：`--log-level info,engine=trace`

use duostack_config::{LogLevel, Phase};

/// CLI 日志配置
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogConfig {
    pub global: LogLevel,
    pub preprocess: Option<LogLevel>,
    pub lexer: Option<LogLevel>,
    pub engine: Option<LogLevel>,
}

impl LogConfig {
    pub fn new(global: LogLevel) -> Self {
        Self {
            global,
            ..Self::default()
        }
    }

    /// 解析 `LEVEL` 或 `LEVEL,phase=LEVEL,...`
    pub fn parse(text: &str) -> Result<Self, String> {
        let mut config = Self::default();
        for part in text.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            match part.split_once('=') {
                None => config.global = parse_level(part)?,
                Some((phase, level)) => {
                    let level = Some(parse_level(level)?);
                    match phase.trim() {
                        "preprocess" => config.preprocess = level,
                        "lexer" => config.lexer = level,
                        "engine" => config.engine = level,
                        other => return Err(format!("unknown log phase '{other}'")),
                    }
                }
            }
        }
        Ok(config)
    }

    /// Get log level for a specific phase
    pub fn level_for(&self, phase: Phase) -> LogLevel {
        let specific = match phase {
            Phase::Preprocess => self.preprocess,
            Phase::Lexer => self.lexer,
            Phase::Engine => self.engine,
        };
        specific.unwrap_or(self.global)
    }

    /// 所有阶段中最详细的级别
    pub fn most_verbose(&self) -> LogLevel {
        [self.preprocess, self.lexer, self.engine]
            .into_iter()
            .flatten()
            .fold(self.global, LogLevel::max)
    }

    #[cfg(test)]
    pub fn is_silent(&self) -> bool {
        self.most_verbose() == LogLevel::Silent
    }
}

fn parse_level(s: &str) -> Result<LogLevel, String> {
    LogLevel::parse(s).ok_or_else(|| format!("unknown log level '{}'", s.trim()))
}
