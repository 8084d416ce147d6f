//! Call logging advice.
//!
//! Wraps callables to emit structured start/completion events
//! without modifying the callables themselves.

use std::sync::Arc;

use serde_json::Value;

use crate::config::{AlsoLog, InformConfig};
use crate::informants::LogInformant;
use crate::interfaces::callable::{Call, Callable, Result};
use crate::interfaces::informant::{Informant, InformantError};
use crate::report::data_to_report;
use crate::severity::{Severity, UnknownLevel};

/// Wrap configuration: which informant to emit through, at what severity,
/// and what each event reports.
///
/// # Example
///
/// ```ignore
/// let do_something = InformOn::new()
///     .level(Severity::Debug)
///     .also_log(AlsoLog::values(["force"]).with_result())
///     .wrap(do_something);
/// ```
pub struct InformOn {
    via: Arc<dyn Informant>,
    level: Severity,
    also_log: AlsoLog,
}

impl std::fmt::Debug for InformOn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InformOn")
            .field("via", &"<dyn Informant>")
            .field("level", &self.level)
            .field("also_log", &self.also_log)
            .finish()
    }
}

impl InformOn {
    /// Default configuration: a fresh [`LogInformant`] at info level,
    /// reporting no extra fields.
    pub fn new() -> Self {
        Self {
            via: Arc::new(LogInformant::new()),
            level: Severity::Info,
            also_log: AlsoLog::default(),
        }
    }

    /// Build from deserialized configuration.
    ///
    /// Fails on an unrecognized level name here, at wrap time, before
    /// anything is called.
    pub fn from_config(config: &InformConfig) -> std::result::Result<Self, UnknownLevel> {
        let level = config.level.parse()?;
        Ok(Self {
            level,
            also_log: config.also_log.clone(),
            ..Self::new()
        })
    }

    /// Emit through the given informant instead of the default.
    pub fn via(mut self, informant: Arc<dyn Informant>) -> Self {
        self.via = informant;
        self
    }

    /// Severity to emit events at.
    pub fn level(mut self, level: Severity) -> Self {
        self.level = level;
        self
    }

    /// Field selection for emitted events.
    pub fn also_log(mut self, also_log: AlsoLog) -> Self {
        self.also_log = also_log;
        self
    }

    /// Apply the instrumentation to a callable.
    ///
    /// Wrapping composes: wrapping an already informed callable adds an
    /// independent layer that emits its own pair of events.
    pub fn wrap<T: Callable>(self, inner: T) -> Informed<T> {
        Informed {
            inner,
            via: self.via,
            level: self.level,
            also_log: self.also_log,
        }
    }
}

impl Default for InformOn {
    fn default() -> Self {
        Self::new()
    }
}

/// Wrapper that informs on every invocation of the inner callable.
///
/// Each invocation emits a `starting` event, runs the inner callable, then
/// emits a `done` event (carrying the result when configured to). Both
/// events share the same resolved fields.
///
/// If the inner callable fails, the failure propagates unchanged and no
/// completion event is emitted. Informant failures propagate too; no emit
/// is retried. On success the inner callable's output is returned
/// unchanged.
pub struct Informed<T> {
    inner: T,
    via: Arc<dyn Informant>,
    level: Severity,
    also_log: AlsoLog,
}

impl<T> Informed<T> {
    /// Get a reference to the inner callable.
    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Consume the wrapper and return the inner callable.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: Callable> Callable for Informed<T> {
    type Output = T::Output;

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn invoke(&self, call: &Call<'_>) -> Result<T::Output> {
        let mut data = data_to_report(self.inner.name(), call, &self.also_log);
        data.insert("status".to_string(), Value::from("starting"));
        self.via.emit(&data, self.level)?;

        let result = self.inner.invoke(call)?;

        let mut done = data;
        done.insert("status".to_string(), Value::from("done"));
        if self.also_log.result {
            let value = serde_json::to_value(&result)
                .map_err(|e| InformantError::Serialize(e.to_string()))?;
            done.insert("result".to_string(), value);
        }
        self.via.emit(&done, self.level)?;

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicU32, Ordering};

    use crate::informants::CollectorInformant;
    use crate::interfaces::callable::{CallError, FnCallable};
    use crate::Fields;

    struct FailingInformant;

    impl Informant for FailingInformant {
        fn emit(
            &self,
            _data: &Fields,
            _level: Severity,
        ) -> std::result::Result<(), InformantError> {
            Err(InformantError::Emit("sink down".to_string()))
        }
    }

    fn answer() -> impl Callable<Output = i64> {
        FnCallable::new("answer", |_call: &Call<'_>| Ok(42))
    }

    #[test]
    fn test_successful_call_emits_starting_then_done() {
        let collector = Arc::new(CollectorInformant::new());
        let events = collector.emitted();

        let informed = InformOn::new().via(collector).wrap(answer());
        assert_eq!(informed.invoke(&Call::new()).unwrap(), 42);

        let events = events.read().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].data["status"], json!("starting"));
        assert_eq!(events[1].data["status"], json!("done"));
        assert_eq!(events[0].data["function"], json!("answer"));
        assert_eq!(events[0].level, Severity::Info);
    }

    #[test]
    fn test_result_reported_only_when_configured() {
        let collector = Arc::new(CollectorInformant::new());
        let events = collector.emitted();

        let informed = InformOn::new()
            .via(Arc::clone(&collector) as Arc<dyn Informant>)
            .wrap(answer());
        informed.invoke(&Call::new()).unwrap();

        {
            let events = events.read().unwrap();
            assert!(!events[1].data.contains_key("result"));
        }
        collector.clear();

        let informed = InformOn::new()
            .via(collector)
            .also_log(AlsoLog::default().with_result())
            .wrap(answer());
        informed.invoke(&Call::new()).unwrap();

        let events = events.read().unwrap();
        assert!(!events[0].data.contains_key("result"));
        assert_eq!(events[1].data["result"], json!(42));
    }

    #[test]
    fn test_configured_level_is_used() {
        let collector = Arc::new(CollectorInformant::new());
        let events = collector.emitted();

        let informed = InformOn::new()
            .via(collector)
            .level(Severity::Debug)
            .wrap(answer());
        informed.invoke(&Call::new()).unwrap();

        let events = events.read().unwrap();
        assert_eq!(events[0].level, Severity::Debug);
        assert_eq!(events[1].level, Severity::Debug);
    }

    #[test]
    fn test_inner_failure_propagates_without_done_event() {
        let collector = Arc::new(CollectorInformant::new());
        let events = collector.emitted();

        let explode = FnCallable::new("explode", |_call: &Call<'_>| -> Result<i64> {
            Err(CallError::Failed("kaboom".to_string()))
        });
        let informed = InformOn::new().via(collector).wrap(explode);

        let err = informed.invoke(&Call::new()).unwrap_err();
        assert!(matches!(err, CallError::Failed(_)));

        let events = events.read().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].data["status"], json!("starting"));
    }

    #[test]
    fn test_informant_failure_propagates_before_inner_runs() {
        let calls = AtomicU32::new(0);
        let counting = FnCallable::new("counting", |_call: &Call<'_>| -> Result<i64> {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(1)
        });
        let informed = InformOn::new().via(Arc::new(FailingInformant)).wrap(counting);

        let err = informed.invoke(&Call::new()).unwrap_err();
        assert!(matches!(err, CallError::Informant(_)));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_from_config_rejects_unknown_level() {
        let config = InformConfig {
            level: "verbose".to_string(),
            ..Default::default()
        };

        let err = InformOn::from_config(&config).unwrap_err();
        assert_eq!(err, UnknownLevel("verbose".to_string()));
    }

    #[test]
    fn test_from_config_parses_level_case_insensitively() {
        let config = InformConfig {
            level: "WARNING".to_string(),
            also_log: AlsoLog::values(["force"]),
        };
        let collector = Arc::new(CollectorInformant::new());
        let events = collector.emitted();

        let informed = InformOn::from_config(&config)
            .unwrap()
            .via(collector)
            .wrap(answer());
        informed.invoke(&Call::new().kwarg("force", true)).unwrap();

        let events = events.read().unwrap();
        assert_eq!(events[0].level, Severity::Warning);
        assert_eq!(events[0].data["force"], json!(true));
    }

    #[test]
    fn test_wrapping_twice_emits_two_independent_pairs() {
        let collector = Arc::new(CollectorInformant::new());
        let events = collector.emitted();

        let inner = InformOn::new()
            .via(Arc::clone(&collector) as Arc<dyn Informant>)
            .wrap(answer());
        let outer = InformOn::new().via(collector).wrap(inner);

        assert_eq!(outer.invoke(&Call::new()).unwrap(), 42);

        let events = events.read().unwrap();
        let statuses: Vec<_> = events.iter().map(|e| e.data["status"].clone()).collect();
        assert_eq!(
            statuses,
            vec![
                json!("starting"),
                json!("starting"),
                json!("done"),
                json!("done")
            ]
        );
    }

    #[test]
    fn test_into_inner_returns_the_callable() {
        let informed = InformOn::new().wrap(answer());
        assert_eq!(informed.inner().name(), "answer");

        let unwrapped = informed.into_inner();
        assert_eq!(unwrapped.invoke(&Call::new()).unwrap(), 42);
    }
}
