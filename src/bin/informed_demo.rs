//! FancyService walkthrough.
//!
//! Wraps a method-like callable and prints the starting/done events it
//! emits. Run with `cargo run --bin informed_demo`; set INFORMED_LOG to
//! adjust verbosity.

use serde_json::Value;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use informed::{AlsoLog, AttributeSource, Call, CallError, Callable, FnCallable, InformOn};

/// Initialize tracing with the INFORMED_LOG environment variable.
///
/// Defaults to "info" level if INFORMED_LOG is not set.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env("INFORMED_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

struct FancyService {
    fanciness: u32,
}

impl FancyService {
    fn is_fancy(&self) -> bool {
        self.fanciness > 10
    }

    fn do_something(&self, force: bool) -> String {
        if self.is_fancy() || force {
            "so fancy".to_string()
        } else {
            "so plain".to_string()
        }
    }
}

impl AttributeSource for FancyService {
    fn resolve(&self, name: &str) -> Option<Value> {
        match name {
            "fanciness" => Some(Value::from(self.fanciness)),
            "is_fancy" => Some(Value::from(self.is_fancy())),
            _ => None,
        }
    }
}

fn main() -> Result<(), CallError> {
    init_tracing();

    let service = FancyService { fanciness: 8 };
    let do_something = FnCallable::new("do_something", |call: &Call<'_>| {
        let force = call
            .keyword("force")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        Ok(service.do_something(force))
    });

    let do_something = InformOn::new()
        .also_log(AlsoLog::values(["is_fancy", "force", "fanciness"]).with_result())
        .wrap(do_something);

    let result = do_something.invoke(&Call::on(&service).kwarg("force", false))?;
    println!("do_something returned {result:?}");

    let result = do_something.invoke(&Call::on(&service).kwarg("force", true))?;
    println!("do_something returned {result:?}");

    Ok(())
}
