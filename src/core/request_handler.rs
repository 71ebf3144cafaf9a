use crate::core::request_store::RequestStore;
use crate::domain::model::{Request, RequestKind};
use crate::utils::logger::Logger;
use serde_json::{json, Value};

const API_PREFIX: &str = "/api/";

pub fn classify(path: &str) -> RequestKind {
    let is_api = path
        .get(..API_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(API_PREFIX));

    if is_api {
        RequestKind::Api
    } else {
        RequestKind::Page
    }
}

pub struct RequestHandler {
    logger: Logger,
    store: RequestStore,
}

impl RequestHandler {
    pub fn new(logger: Logger) -> Self {
        Self::with_store(logger, RequestStore::new())
    }

    pub fn with_store(logger: Logger, store: RequestStore) -> Self {
        Self { logger, store }
    }

    pub fn store(&self) -> &RequestStore {
        &self.store
    }

    pub fn into_store(self) -> RequestStore {
        self.store
    }

    pub fn handle(&mut self, request: &Request) -> RequestKind {
        if let Err(e) = self.store.record(request) {
            self.logger
                .warn(format!("Failed to record request {}: {}", request.path, e));
        }

        let payload = extract_payload(request);
        let result = process_payload(&payload);

        let kind = classify(&request.path);
        match kind {
            RequestKind::Api => self.logger.info(format!(
                "Handling API request: {} {}",
                request.method, request.path
            )),
            RequestKind::Page => self.logger.info(format!(
                "Handling page request: {} {}",
                request.method, request.path
            )),
        }

        self.logger.debug(format!("Payload: {}", pretty(&payload)));
        self.logger.debug(format!("Result: {}", pretty(&result)));

        kind
    }
}

// 佔位資料，尚未實作真正的擷取邏輯
fn extract_payload(_request: &Request) -> Value {
    json!({"id": 1, "name": "sample"})
}

// 佔位資料，尚未實作真正的處理邏輯
fn process_payload(_payload: &Value) -> Value {
    json!({"status": "processed", "items": 1})
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::LogLevel;
    use crate::utils::logger::MemorySink;
    use std::sync::Arc;

    fn build_handler(min_level: LogLevel) -> (RequestHandler, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        (
            RequestHandler::new(Logger::new(min_level, sink.clone())),
            sink,
        )
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("/api/data"), RequestKind::Api);
        assert_eq!(classify("/API/Users"), RequestKind::Api);
        assert_eq!(classify("/api"), RequestKind::Page);
        assert_eq!(classify("/home"), RequestKind::Page);
        assert_eq!(classify(""), RequestKind::Page);
        assert_eq!(classify("/é"), RequestKind::Page);
    }

    #[test]
    fn test_handle_api_request_logs_and_records() {
        let (mut handler, sink) = build_handler(LogLevel::Debug);
        let kind = handler.handle(&Request::new("/api/data", "GET"));

        assert_eq!(kind, RequestKind::Api);
        assert_eq!(handler.store().count(), 1);

        let lines = sink.lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            (LogLevel::Info, "Handling API request: GET /api/data".to_string())
        );
        assert_eq!(lines[1].0, LogLevel::Debug);
        assert!(lines[1].1.starts_with("Payload: {"));
        assert!(lines[2].1.contains("\"processed\""));
    }

    #[test]
    fn test_handle_page_request() {
        let (mut handler, sink) = build_handler(LogLevel::Info);
        assert_eq!(handler.handle(&Request::new("/home", "GET")), RequestKind::Page);
        assert_eq!(handler.handle(&Request::new("", "POST")), RequestKind::Page);

        assert_eq!(
            sink.messages(),
            vec!["Handling page request: GET /home", "Handling page request: POST "]
        );
        assert_eq!(handler.into_store().count(), 2);
    }
}
