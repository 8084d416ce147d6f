//! Informed - call instrumentation advice
//!
//! Wraps callables with structured logging for call start and completion,
//! including selected arguments, receiver attributes, and return values,
//! emitted through a pluggable informant sink.

pub mod advice;
pub mod config;
pub mod informants;
pub mod interfaces;
pub mod report;
pub mod severity;

/// Event fields: the JSON object emitted at call start and completion.
pub type Fields = serde_json::Map<String, serde_json::Value>;

pub use advice::{InformOn, Informed};
pub use config::{AlsoLog, InformConfig};
pub use informants::{CollectorInformant, Emitted, LogInformant};
pub use interfaces::callable::{Call, CallError, Callable, FnCallable};
pub use interfaces::informant::{Informant, InformantError};
pub use interfaces::source::AttributeSource;
pub use severity::{Severity, UnknownLevel};
