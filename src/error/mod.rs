//! Error types for dokanrs.
//!
//! Matching and the runtime pool operations are total; the only fallible
//! step is building a pool from a configuration.

use thiserror::Error;

/// Errors that can occur while configuring a buffer pool.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoolError {
    /// Invalid configuration parameter.
    #[error("invalid config: {message}")]
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },
}
