//! Abstract interfaces for informed components.
//!
//! These traits define the contracts for:
//! - Informants (event emission at a severity)
//! - Callables (the calling convention shared by wrapped and unwrapped code)
//! - Attribute sources (receiver attribute resolution)

pub mod callable;
pub mod informant;
pub mod source;

pub use callable::{Call, CallError, Callable, FnCallable};
pub use informant::{Informant, InformantError};
pub use source::AttributeSource;
