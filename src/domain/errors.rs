//! Domain error types
//!
//! This module defines the error hierarchy for Pricefan. Every failure is fatal
//! to the run unless the row-skipping error policy is enabled, so the variants
//! map directly onto process exit codes.

use super::ids::ProductId;
use thiserror::Error;

/// Main Pricefan error type
///
/// This is the primary error type used throughout the application.
/// It wraps the per-component error types and carries the exit code policy.
#[derive(Debug, Error)]
pub enum PricefanError {
    /// Missing or invalid startup configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Record store errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Payload decoding errors
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Event emission errors
    #[error("Emit error: {0}")]
    Emit(#[from] EmitError),
}

impl PricefanError {
    /// Process exit code for this error
    ///
    /// - `2` configuration error
    /// - `4` record store error
    /// - `5` any other fatal error
    pub fn exit_code(&self) -> i32 {
        match self {
            PricefanError::Configuration(_) => 2,
            PricefanError::Store(_) => 4,
            PricefanError::Decode(_) | PricefanError::Emit(_) => 5,
        }
    }
}

/// Record store errors
///
/// These errors don't expose third-party database driver types.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to open or check out the store connection
    #[error("Failed to connect to record store: {0}")]
    ConnectionFailed(String),

    /// The row count query failed
    #[error("Count query failed: {0}")]
    CountFailed(String),

    /// A page query failed to start
    #[error("Page query failed (limit {limit}, offset {offset}): {message}")]
    QueryFailed {
        limit: u64,
        offset: u64,
        message: String,
    },

    /// A row could not be read while streaming a page
    #[error("Failed to read row: {0}")]
    RowReadFailed(String),
}

/// Payload decoding errors
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The branch payload is not well-formed or violates the expected shape
    #[error("Malformed branch payload for product {product_id}: {reason}")]
    MalformedPayload { product_id: ProductId, reason: String },
}

impl DecodeError {
    /// Product whose payload failed to decode
    pub fn product_id(&self) -> ProductId {
        match self {
            DecodeError::MalformedPayload { product_id, .. } => *product_id,
        }
    }
}

/// Event emission errors
#[derive(Debug, Error)]
pub enum EmitError {
    /// The event could not be serialized
    #[error("Failed to serialize event: {0}")]
    SerializationFailed(String),

    /// The sink rejected the write
    #[error("Failed to write to sink: {0}")]
    WriteFailed(String),
}

impl From<std::io::Error> for EmitError {
    fn from(err: std::io::Error) -> Self {
        EmitError::WriteFailed(err.to_string())
    }
}
