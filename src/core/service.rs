use crate::domain::model::ServiceConfig;
use crate::utils::logger::Logger;

/// 套用靜態設定到具名服務 (只記錄日誌)
pub struct ServiceConfigurator {
    logger: Logger,
}

impl ServiceConfigurator {
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }

    pub fn configure(&self, name: &str, config: &ServiceConfig) {
        self.logger.info(format!("Configuring service {}", name));

        let rendered = serde_json::to_string_pretty(config)
            .unwrap_or_else(|_| format!("{:?}", config));
        self.logger.debug(format!("Service config: {}", rendered));
    }
}
