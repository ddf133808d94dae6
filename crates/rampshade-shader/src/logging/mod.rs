//! Logging utilities.
//!
//! This module centralizes logger initialization. Library code only talks to
//! the `log` facade; hosts that have no logger of their own can call
//! [`init_logging`] early in `main`.

mod init;

pub use init::{init_logging, LoggingConfig};
