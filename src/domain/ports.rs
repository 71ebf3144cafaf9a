use crate::domain::model::LogLevel;

/// 日誌輸出端，Logger 通過門檻後才會呼叫
pub trait LogSink: Send + Sync {
    fn write(&self, level: LogLevel, message: &str);
}
