//! Logging utilities.
//!
//! The engine only emits through the `log` facade. This module offers an
//! `env_logger` setup for hosts and tests that have no backend of their own.

mod init;

pub use init::{init_logging, LoggingConfig};
