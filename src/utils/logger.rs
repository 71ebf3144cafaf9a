use crate::domain::model::LogLevel;
use crate::domain::ports::LogSink;
use std::fmt;
use std::sync::{Arc, Mutex};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init_cli_logger() {
    // Logger 自己負責門檻，這裡預設放行 crate 內所有 debug 事件
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("small_demo=debug,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stdout)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

/// 將訊息轉送為 tracing 事件
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn write(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Debug => tracing::debug!("{}", message),
            LogLevel::Info => tracing::info!("{}", message),
            LogLevel::Warn => tracing::warn!("{}", message),
        }
    }
}

/// 將訊息收集在記憶體中，供測試檢查輸出
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<(LogLevel, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<(LogLevel, String)> {
        match self.lines.lock() {
            Ok(lines) => lines.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.lines().into_iter().map(|(_, message)| message).collect()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines()
            .iter()
            .any(|(_, message)| message.contains(needle))
    }
}

impl LogSink for MemorySink {
    fn write(&self, level: LogLevel, message: &str) {
        let mut lines = match self.lines.lock() {
            Ok(lines) => lines,
            Err(poisoned) => poisoned.into_inner(),
        };
        lines.push((level, message.to_string()));
    }
}

/// 帶最低等級門檻的日誌器。
///
/// 由組合根建立後以 clone 傳入各元件的建構子，不使用全域狀態。
#[derive(Clone)]
pub struct Logger {
    min_level: LogLevel,
    sink: Arc<dyn LogSink>,
}

impl Logger {
    pub fn new(min_level: LogLevel, sink: Arc<dyn LogSink>) -> Self {
        Self { min_level, sink }
    }

    /// 使用 tracing 輸出 (即 stdout) 的日誌器
    pub fn stdout(min_level: LogLevel) -> Self {
        Self::new(min_level, Arc::new(TracingSink))
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    pub fn set_min_level(&mut self, level: LogLevel) {
        self.min_level = level;
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    pub fn log(&self, level: LogLevel, message: impl AsRef<str>) {
        if self.enabled(level) {
            self.sink.write(level, message.as_ref());
        }
    }

    pub fn debug(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Debug, message);
    }

    pub fn info(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Info, message);
    }

    pub fn warn(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Warn, message);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::stdout(LogLevel::default())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("min_level", &self.min_level)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capturing(min_level: LogLevel) -> (Logger, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        (Logger::new(min_level, sink.clone()), sink)
    }

    #[test]
    fn test_default_threshold_emits_everything() {
        let (logger, sink) = capturing(LogLevel::default());
        logger.debug("d");
        logger.info("i");
        logger.warn("w");
        assert_eq!(sink.messages(), vec!["d", "i", "w"]);
    }

    #[test]
    fn test_threshold_filters_lower_levels() {
        let (logger, sink) = capturing(LogLevel::Info);
        logger.debug("hidden");
        logger.info("shown");
        logger.log(LogLevel::Warn, "also shown");

        assert_eq!(
            sink.lines(),
            vec![
                (LogLevel::Info, "shown".to_string()),
                (LogLevel::Warn, "also shown".to_string()),
            ]
        );
    }

    #[test]
    fn test_set_min_level_applies_to_later_calls() {
        let (mut logger, sink) = capturing(LogLevel::Debug);
        logger.debug("first");
        logger.set_min_level(LogLevel::Warn);
        logger.info("dropped");
        logger.warn("kept");

        assert_eq!(sink.messages(), vec!["first", "kept"]);
        assert!(!logger.enabled(LogLevel::Info));
    }

    #[test]
    fn test_clones_share_sink() {
        let (logger, sink) = capturing(LogLevel::Debug);
        let other = logger.clone();
        logger.info("a");
        other.info("b");
        assert_eq!(sink.lines().len(), 2);
    }
}
