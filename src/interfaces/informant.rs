//! Informant interface.
//!
//! Informants serialize call events and forward them to the logging backend.

use crate::severity::Severity;
use crate::Fields;

/// Result type for informant operations.
pub type Result<T> = std::result::Result<T, InformantError>;

/// Errors from informant operations.
#[derive(Debug, thiserror::Error)]
pub enum InformantError {
    #[error("serialization failed: {0}")]
    Serialize(String),

    #[error("emit failed: {0}")]
    Emit(String),
}

/// Sink for structured call events.
///
/// Implement this trait to route events somewhere other than the default
/// logging backend.
///
/// `emit` is synchronous fire-and-forget: implementations must not buffer,
/// retry, or drop events, and failures are returned to the caller rather
/// than swallowed. An informant may be shared across many wrapped callables
/// and concurrent invocations, so `emit` takes `&self`; implementations
/// holding mutable state should use interior mutability.
pub trait Informant: Send + Sync {
    /// Serialize `data` and forward it at `level`.
    fn emit(&self, data: &Fields, level: Severity) -> Result<()>;
}
