//! Logging utilities.
//!
//! Centralizes logger initialization behind the standard `log` facade.
//! Shader compile/link diagnostics and runtime lifecycle messages all go
//! through here.

mod init;

pub use init::{LoggingConfig, init_logging};
