//! Callable interface.
//!
//! The calling convention shared by wrapped and unwrapped callables, so
//! that wrapping is transparent to callers.

use std::marker::PhantomData;

use serde::Serialize;
use serde_json::Value;

use crate::interfaces::informant::InformantError;
use crate::interfaces::source::AttributeSource;
use crate::Fields;

/// Result type for callable invocations.
pub type Result<T> = std::result::Result<T, CallError>;

/// Errors surfaced at informed call sites.
#[derive(Debug, thiserror::Error)]
pub enum CallError {
    /// The underlying callable failed.
    #[error("call failed: {0}")]
    Failed(String),

    /// An informant could not emit an event.
    #[error(transparent)]
    Informant(#[from] InformantError),
}

/// Argument pack for a single invocation.
///
/// Carries an optional receiver (the first positional argument, used for
/// attribute resolution) and named keyword arguments. Built explicitly at
/// each call site and discarded afterwards.
#[derive(Default)]
pub struct Call<'a> {
    receiver: Option<&'a dyn AttributeSource>,
    keywords: Fields,
}

impl<'a> Call<'a> {
    /// Call with no receiver and no keyword arguments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Call on a receiver.
    pub fn on(receiver: &'a dyn AttributeSource) -> Self {
        Self {
            receiver: Some(receiver),
            keywords: Fields::new(),
        }
    }

    /// Add a keyword argument.
    pub fn kwarg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.keywords.insert(name.into(), value.into());
        self
    }

    /// The receiver, if the call has one.
    pub fn receiver(&self) -> Option<&dyn AttributeSource> {
        self.receiver
    }

    /// Look up a keyword argument by name.
    pub fn keyword(&self, name: &str) -> Option<&Value> {
        self.keywords.get(name)
    }

    /// All keyword arguments.
    pub fn keywords(&self) -> &Fields {
        &self.keywords
    }
}

/// A callable that can be informed upon.
///
/// `invoke` takes `&self`; callables that maintain mutable state should use
/// interior mutability.
pub trait Callable: Send + Sync {
    /// Value produced on success. Serializable so it can be reported on the
    /// completion event.
    type Output: Serialize;

    /// Identifier reported as the `function` field of emitted events.
    fn name(&self) -> &str;

    /// Execute against the given arguments.
    fn invoke(&self, call: &Call<'_>) -> Result<Self::Output>;
}

/// Adapter turning a named closure into a [`Callable`].
///
/// # Example
///
/// ```ignore
/// let f = FnCallable::new("f", |call: &Call<'_>| {
///     let b = call.keyword("b").cloned();
///     Ok(b)
/// });
/// ```
pub struct FnCallable<F, R> {
    name: String,
    f: F,
    _output: PhantomData<fn() -> R>,
}

impl<F, R> FnCallable<F, R>
where
    F: Fn(&Call<'_>) -> Result<R> + Send + Sync,
    R: Serialize,
{
    /// Name a closure for instrumentation.
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
            _output: PhantomData,
        }
    }
}

impl<F, R> Callable for FnCallable<F, R>
where
    F: Fn(&Call<'_>) -> Result<R> + Send + Sync,
    R: Serialize,
{
    type Output = R;

    fn name(&self) -> &str {
        &self.name
    }

    fn invoke(&self, call: &Call<'_>) -> Result<R> {
        (self.f)(call)
    }
}
