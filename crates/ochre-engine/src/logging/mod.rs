//! Logging utilities.
//!
//! Centralizes logger initialization. Everything else in the engine logs
//! through the `log` facade.

mod init;

pub use init::{LoggingConfig, init_logging};
