use crate::core::masking::mask_connection_string;
use crate::domain::model::{Connection, DatabaseKind};
use crate::utils::logger::Logger;
use url::Url;

const TARGET_KEYS: [&str; 4] = ["server", "host", "data source", "address"];

/// 模擬資料庫連線；不會進行任何網路 I/O
pub struct DatabaseConnector {
    logger: Logger,
}

impl DatabaseConnector {
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }

    pub fn connect(&self, name: &str, connection_string: &str) -> Connection {
        self.logger.info(format!(
            "Connecting to database {}: {}",
            name,
            mask_connection_string(connection_string)
        ));

        let (kind, target) = describe(connection_string);
        let connection = Connection {
            name: name.to_string(),
            kind,
            target,
        };

        self.logger
            .debug(format!("Connected to {} ({:?})", connection.target, connection.kind));
        connection
    }
}

fn describe(connection_string: &str) -> (DatabaseKind, String) {
    if let Ok(url) = Url::parse(connection_string.trim()) {
        if let Some(host) = url.host_str() {
            return (
                DatabaseKind::Uri {
                    scheme: url.scheme().to_string(),
                },
                host.to_string(),
            );
        }
    }

    let target = connection_string
        .split(';')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| TARGET_KEYS.contains(&key.trim().to_ascii_lowercase().as_str()))
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| "unknown".to_string());

    (DatabaseKind::KeyValue, target)
}
