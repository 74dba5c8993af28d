//! API 层配置
//!
//! RunConfig 总是显式传入，没有全局单例。

use std::sync::Arc;

use duostack_config::EngineConfig;
use duostack_log::Logger;

/// Execution configuration
#[derive(Clone)]
pub struct RunConfig {
    /// Print the preprocessed program before running it
    pub echo_source: bool,
    /// Engine configuration
    pub engine: EngineConfig,
    /// Logger (noop by default)
    pub logger: Arc<Logger>,
}

impl RunConfig {
    pub fn with_logger(logger: Arc<Logger>) -> Self {
        Self {
            logger,
            ..Self::default()
        }
    }
}

impl std::fmt::Debug for RunConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunConfig")
            .field("echo_source", &self.echo_source)
            .field("engine", &self.engine)
            .field("log_level", &self.logger.level())
            .finish()
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            echo_source: false,
            engine: EngineConfig::default(),
            logger: Logger::noop(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duostack_log::Level;

    #[test]
    fn test_default_run_config() {
        let cfg = RunConfig::default();
        assert!(!cfg.echo_source);
        assert_eq!(cfg.engine.wait_interval_ms, 1);
        assert_eq!(cfg.logger.level(), Level::Error);
    }

    #[test]
    fn test_run_config_debug_hides_sinks() {
        let cfg = RunConfig::with_logger(Logger::new(Level::Debug));
        let text = format!("{:?}", cfg);
        assert!(text.contains("echo_source: false"));
        assert!(text.contains("Debug"));
    }
}
