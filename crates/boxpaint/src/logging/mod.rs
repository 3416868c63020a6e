//! Logging utilities.
//!
//! Painters only talk to the `log` facade. This module offers an optional
//! `env_logger` setup for hosts and tests that want output.

mod init;

pub use init::{init_logging, LoggingConfig};
