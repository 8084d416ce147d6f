//! Logging informant backed by `tracing`.

use tracing::{debug, error, info, warn};

use crate::interfaces::informant::{Informant, InformantError, Result};
use crate::severity::Severity;
use crate::Fields;

/// Target the default informant logs under.
pub const TARGET: &str = "informed";

/// Informant that logs JSON-encoded events via the `tracing` backend.
///
/// Events are emitted under the `informed` target. `tracing` has no
/// critical level, so critical events are forwarded at ERROR; every record
/// carries the exact numeric rank as a `rank` field, preserving the
/// critical=50 .. debug=10 table for downstream consumers.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogInformant;

impl LogInformant {
    /// Create a new logging informant.
    pub fn new() -> Self {
        Self
    }
}

impl Informant for LogInformant {
    fn emit(&self, data: &Fields, level: Severity) -> Result<()> {
        let payload = serde_json::to_string(data)
            .map_err(|e| InformantError::Serialize(e.to_string()))?;

        match level {
            Severity::Critical | Severity::Error => {
                error!(target: TARGET, rank = level.rank(), "{}", payload)
            }
            Severity::Warning => warn!(target: TARGET, rank = level.rank(), "{}", payload),
            Severity::Info => info!(target: TARGET, rank = level.rank(), "{}", payload),
            Severity::Debug => debug!(target: TARGET, rank = level.rank(), "{}", payload),
        }

        Ok(())
    }
}
