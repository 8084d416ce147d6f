//! Informant implementations.

mod collector;
mod logging;

pub use collector::{CollectorInformant, Emitted};
pub use logging::LogInformant;
