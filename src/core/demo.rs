use crate::config::toml_config::DemoConfig;
use crate::core::database::DatabaseConnector;
use crate::core::deep_copy::deep_copy;
use crate::core::expression::evaluate_expression;
use crate::core::request_handler::RequestHandler;
use crate::core::service::ServiceConfigurator;
use crate::domain::model::{Connection, LogLevel, RequestKind, Response};
use crate::utils::logger::Logger;
use serde_json::json;

#[derive(Debug, Clone, Default)]
pub struct DemoReport {
    pub connections: Vec<Connection>,
    pub evaluations: Vec<(String, Option<f64>)>,
    pub request_kinds: Vec<RequestKind>,
    pub requests_recorded: usize,
}

/// 依固定順序執行整個示範流程
pub struct DemoRunner {
    config: DemoConfig,
    logger: Logger,
}

impl DemoRunner {
    pub fn new(config: DemoConfig, logger: Logger) -> Self {
        Self { config, logger }
    }

    pub fn run(&self) -> DemoReport {
        let mut report = DemoReport::default();
        self.logger.info("Starting demo");

        // 連線
        let connector = DatabaseConnector::new(self.logger.clone());
        for database in &self.config.databases {
            report
                .connections
                .push(connector.connect(&database.name, &database.connection_string));
        }

        // 各等級日誌
        self.logger.log(LogLevel::Debug, "Sample debug message");
        self.logger.log(LogLevel::Info, "Sample info message");
        self.logger.log(LogLevel::Warn, "Sample warning message");

        // 深層複製
        self.run_deep_copy();

        // 計算算式
        for expression in &self.config.expressions {
            let result = evaluate_expression(expression);
            match result {
                Some(value) => self.logger.info(format!("{} = {}", expression, value)),
                None => self.logger.warn(format!("{} = no result", expression)),
            }
            report.evaluations.push((expression.clone(), result));
        }

        // 設定服務
        let configurator = ServiceConfigurator::new(self.logger.clone());
        for service in &self.config.services {
            configurator.configure(&service.name, &service.config);
        }

        // 處理請求
        let mut handler = RequestHandler::new(self.logger.clone());
        for request in &self.config.requests {
            let kind = handler.handle(request);
            let body = match kind {
                RequestKind::Api => "api",
                RequestKind::Page => "page",
            };
            let response = Response::with_content(200, body);
            report.request_kinds.push(kind);
            self.logger
                .debug(format!("Response for {}: {:?}", request.path, response));
        }

        report.requests_recorded = handler.store().count();
        self.logger
            .info(format!("Handled {} requests", report.requests_recorded));

        report
    }

    fn run_deep_copy(&self) {
        let original = json!({"name": "test", "nested": {"value": 123}});
        let mut copy = deep_copy(&original).into_owned();
        copy["nested"]["value"] = json!(456);

        self.logger.info(format!("Original: {}", original));
        self.logger.info(format!("Modified copy: {}", copy));
    }
}
