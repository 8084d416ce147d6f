//! Collector informant for testing.

use std::sync::{Arc, PoisonError, RwLock};

use crate::interfaces::informant::{Informant, Result};
use crate::severity::Severity;
use crate::Fields;

/// An event captured by [`CollectorInformant`].
#[derive(Debug, Clone, PartialEq)]
pub struct Emitted {
    /// Event fields as handed to `emit`.
    pub data: Fields,
    /// Severity the event was emitted at.
    pub level: Severity,
}

/// Informant that collects all emitted events for later inspection.
///
/// Useful for testing to verify what instrumentation emitted.
#[derive(Debug, Default)]
pub struct CollectorInformant {
    emitted: Arc<RwLock<Vec<Emitted>>>,
}

impl CollectorInformant {
    /// Create a new collector informant.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a handle to the collected events.
    ///
    /// This can be cloned and used to inspect events from tests after the
    /// collector has been handed to a wrapper.
    pub fn emitted(&self) -> Arc<RwLock<Vec<Emitted>>> {
        Arc::clone(&self.emitted)
    }

    /// Get the number of collected events.
    pub fn count(&self) -> usize {
        self.emitted
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Take all collected events, leaving the collector empty.
    pub fn take(&self) -> Vec<Emitted> {
        std::mem::take(
            &mut *self
                .emitted
                .write()
                .unwrap_or_else(PoisonError::into_inner),
        )
    }

    /// Clear all collected events.
    pub fn clear(&self) {
        self.emitted
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Informant for CollectorInformant {
    fn emit(&self, data: &Fields, level: Severity) -> Result<()> {
        self.emitted
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Emitted {
                data: data.clone(),
                level,
            });
        Ok(())
    }
}
