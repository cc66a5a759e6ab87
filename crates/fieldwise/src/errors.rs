//! Error types for build-time configuration validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Canonical error type for the fieldwise builders.
///
/// The fold paths themselves are total, so errors only arise when a caller
/// asks for a configuration value to be validated before an engine is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum FieldwiseError {
    /// The polynomial hash multiplier violates the "non-zero, odd" rule.
    #[error("hash constant must be a non-zero odd number, got {value}")]
    InvalidHashConstant {
        /// The rejected multiplier.
        value: u64,
    },
    /// The polynomial hash seed violates the "non-zero, odd" rule.
    #[error("hash initial value must be a non-zero odd number, got {value}")]
    InvalidHashInitial {
        /// The rejected seed.
        value: u64,
    },
}
