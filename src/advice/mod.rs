//! Aspect-oriented advice for cross-cutting concerns.
//!
//! This module provides wrapper types that add orthogonal behavior
//! (call logging) without polluting the callables themselves.
//!
//! # Architecture
//!
//! Advice is applied at composition time, not in implementations:
//!
//! ```ignore
//! // Core implementation - pure business logic
//! let do_something = FnCallable::new("do_something", |call| { ... });
//!
//! // Apply advice layers
//! let do_something = InformOn::new().wrap(do_something);
//!
//! // Use as normal - events are transparent
//! do_something.invoke(&Call::on(&service).kwarg("force", false))?;
//! ```
//!
//! # Available Advice
//!
//! - [`Informed`] - Emits structured starting/done events per invocation

mod informed;

pub use informed::{InformOn, Informed};
