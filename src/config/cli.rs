use crate::config::toml_config::DemoConfig;
use crate::domain::model::LogLevel;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "small-demo")]
#[command(about = "Simulated connections, masking, deep copy and expression evaluation")]
pub struct CliArgs {
    /// Optional TOML configuration file; the built-in demo runs without it
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the minimum log level
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,
}

impl CliArgs {
    /// 依序套用設定檔與命令列覆蓋，並驗證結果
    pub fn load_config(&self) -> Result<DemoConfig> {
        let mut config = match &self.config {
            Some(path) => DemoConfig::from_file(path)?,
            None => DemoConfig::default(),
        };

        if let Some(level) = self.log_level {
            config.logging.level = level;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_runs_builtin_demo() {
        let args = CliArgs::try_parse_from(["small-demo"]).unwrap();
        assert!(args.config.is_none());
        assert_eq!(args.load_config().unwrap(), DemoConfig::default());
    }

    #[test]
    fn test_log_level_override() {
        let args = CliArgs::try_parse_from(["small-demo", "--log-level", "warn"]).unwrap();
        let config = args.load_config().unwrap();
        assert_eq!(config.log_level(), LogLevel::Warn);
    }

    #[test]
    fn test_rejects_unknown_level() {
        assert!(CliArgs::try_parse_from(["small-demo", "--log-level", "trace"]).is_err());
    }
}
