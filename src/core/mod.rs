pub mod database;
pub mod deep_copy;
pub mod demo;
pub mod expression;
pub mod masking;
pub mod request_handler;
pub mod request_store;
pub mod service;

pub use crate::domain::model::{
    Connection, DatabaseKind, LogLevel, Request, RequestKind, Response, ServiceConfig,
};
pub use crate::domain::ports::LogSink;
pub use crate::utils::error::Result;
