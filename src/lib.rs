pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliArgs;
pub use crate::config::DemoConfig;

pub use crate::core::database::DatabaseConnector;
pub use crate::core::deep_copy::{deep_copy, try_deep_copy, DeepCopy};
pub use crate::core::demo::{DemoReport, DemoRunner};
pub use crate::core::expression::{evaluate_expression, try_evaluate_expression};
pub use crate::core::masking::mask_connection_string;
pub use crate::core::request_handler::RequestHandler;
pub use crate::core::request_store::RequestStore;
pub use crate::core::service::ServiceConfigurator;
pub use crate::domain::model::{LogLevel, Request, RequestKind, Response, ServiceConfig};
pub use crate::utils::error::{DemoError, Result};
pub use crate::utils::logger::{Logger, MemorySink};
