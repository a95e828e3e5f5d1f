//! crates/logging/src/tracing_bridge.rs
//! Bridge between the tracing crate and the verbosity gate.
//!
//! This module lets code written against the standard tracing macros
//! (trace!, debug!, info!, warn!, error!) participate in the driver's
//! verbosity system. Events are admitted when the gate level configured at
//! startup reaches the threshold required for their tracing level; admitted
//! events are printed to standard output alongside the rest of the console
//! traffic.

use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

use crate::gate::Verbosity;

/// A tracing layer that filters events through a frozen verbosity level.
///
/// The layer captures the level once at construction; the gate is locked at
/// startup, so no later synchronisation with the shared gate is required.
pub struct GateLayer {
    threshold: Verbosity,
}

impl GateLayer {
    /// Creates a layer admitting events up to `threshold`.
    #[must_use]
    pub const fn new(threshold: Verbosity) -> Self {
        Self { threshold }
    }

    /// Maps a tracing level to the minimum gate level that shows it.
    fn required(level: &Level) -> Verbosity {
        if *level == Level::ERROR {
            Verbosity::Quiet
        } else if *level == Level::WARN {
            Verbosity::Low
        } else if *level == Level::INFO {
            Verbosity::Medium
        } else if *level == Level::DEBUG {
            Verbosity::Debug
        } else {
            Verbosity::Trace
        }
    }
}

impl<S> Layer<S> for GateLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        if self.threshold < Self::required(event.metadata().level()) {
            return;
        }
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        if let Some(message) = visitor.message {
            println!("{message}");
        }
    }
}

/// Visitor extracting the message field from a tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        }
    }
}

/// Installs a global subscriber that filters tracing events through
/// `threshold`.
///
/// Call once, after the startup code has parsed and locked the verbosity
/// configuration.
pub fn init_tracing(threshold: Verbosity) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(GateLayer::new(threshold))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_show_even_when_quiet() {
        assert_eq!(GateLayer::required(&Level::ERROR), Verbosity::Quiet);
    }

    #[test]
    fn thresholds_ascend_with_tracing_level() {
        assert_eq!(GateLayer::required(&Level::WARN), Verbosity::Low);
        assert_eq!(GateLayer::required(&Level::INFO), Verbosity::Medium);
        assert_eq!(GateLayer::required(&Level::DEBUG), Verbosity::Debug);
        assert_eq!(GateLayer::required(&Level::TRACE), Verbosity::Trace);
    }

    #[test]
    fn medium_gate_admits_info_but_not_debug() {
        let layer = GateLayer::new(Verbosity::Medium);
        assert!(layer.threshold >= GateLayer::required(&Level::INFO));
        assert!(layer.threshold < GateLayer::required(&Level::DEBUG));
    }
}
