//! In-memory capture of assertion outcome events
//!
//! Tests that check what an assertion logged install the capture layer once
//! per test binary with [`init_test_capture`] and query outcomes by
//! assertion name. Tests running in parallel share one store, so queries
//! always filter by assertion.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use tracing::field::{Field, Visit};
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use assay_core_types::schema::{FIELD_ASSERTION, FIELD_COMPONENT, FIELD_EVENT};

/// One assertion outcome as emitted by `log_assert_pass!`/`log_assert_fail!`
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    pub component: Option<String>,
    pub assertion: Option<String>,
    /// `pass`, `fail` or `rejected`
    pub event: Option<String>,
    fields: HashMap<String, String>,
}

impl CapturedEvent {
    fn new(level: Level, fields: HashMap<String, String>) -> Self {
        Self {
            level,
            component: fields.get(FIELD_COMPONENT).cloned(),
            assertion: fields.get(FIELD_ASSERTION).cloned(),
            event: fields.get(FIELD_EVENT).cloned(),
            fields,
        }
    }

    /// Recorded value of any field, such as `err_code` or `param`
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    fn is(&self, assertion: &str, event: &str) -> bool {
        self.assertion.as_deref() == Some(assertion) && self.event.as_deref() == Some(event)
    }
}

/// Outcome fields are strings or `Debug` values (`err_kind`)
#[derive(Default)]
struct OutcomeVisitor {
    fields: HashMap<String, String>,
}

impl Visit for OutcomeVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.fields
            .insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.fields
            .insert(field.name().to_string(), format!("{:?}", value));
    }
}

/// Layer that keeps every event carrying an `assertion` field
pub struct TestCaptureLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl TestCaptureLayer {
    pub fn new() -> (Self, TestCapture) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let capture = TestCapture {
            events: Arc::clone(&events),
        };
        (Self { events }, capture)
    }
}

impl<S> Layer<S> for TestCaptureLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = OutcomeVisitor::default();
        event.record(&mut visitor);
        if !visitor.fields.contains_key(FIELD_ASSERTION) {
            return;
        }

        let captured = CapturedEvent::new(*event.metadata().level(), visitor.fields);
        if let Ok(mut events) = self.events.lock() {
            events.push(captured);
        }
    }
}

/// Handle for querying captured outcomes
#[derive(Clone)]
pub struct TestCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl TestCapture {
    /// Snapshot of every captured outcome
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Outcomes emitted under one assertion name
    pub fn events_for(&self, assertion: &str) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.assertion.as_deref() == Some(assertion))
            .collect()
    }

    /// # Panics
    ///
    /// Panics unless `assertion` emitted at least one `event` outcome.
    pub fn assert_event_exists(&self, assertion: &str, event: &str) {
        let events = self.events();
        assert!(
            events.iter().any(|e| e.is(assertion, event)),
            "No '{}' outcome captured for assertion '{}' among {} events",
            event,
            assertion,
            events.len()
        );
    }

    pub fn clear(&self) {
        if let Ok(mut events) = self.events.lock() {
            events.clear();
        }
    }

    pub fn count_events<F>(&self, predicate: F) -> usize
    where
        F: Fn(&CapturedEvent) -> bool,
    {
        self.events().iter().filter(|e| predicate(e)).count()
    }
}

static GLOBAL_CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Install the capture layer on first call and return the shared handle
///
/// # Example
///
/// ```
/// use assay_core::logging_facility::test_capture::init_test_capture;
/// use assay_core::log_assert_pass;
///
/// let capture = init_test_capture();
/// log_assert_pass!("doc.example");
/// capture.assert_event_exists("doc.example", "pass");
/// ```
pub fn init_test_capture() -> TestCapture {
    GLOBAL_CAPTURE
        .get_or_init(|| {
            let (layer, capture) = TestCaptureLayer::new();
            // another global subscriber wins; the handle then stays empty
            let _ = tracing_subscriber::registry().with(layer).try_init();
            capture
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_event_promotes_schema_fields() {
        let event = CapturedEvent::new(
            Level::DEBUG,
            fields(&[
                ("assertion", "logical.equal"),
                ("event", "fail"),
                ("err_code", "ERR_ASSERTION_FAILED"),
            ]),
        );

        assert_eq!(event.assertion.as_deref(), Some("logical.equal"));
        assert!(event.is("logical.equal", "fail"));
        assert_eq!(event.field("err_code"), Some("ERR_ASSERTION_FAILED"));
        assert_eq!(event.field("param"), None);
        assert!(event.component.is_none());
    }

    #[test]
    fn test_layer_and_capture_share_storage() {
        let (layer, capture) = TestCaptureLayer::new();
        if let Ok(mut events) = layer.events.lock() {
            events.push(CapturedEvent::new(
                Level::TRACE,
                fields(&[("assertion", "basic.is_true"), ("event", "pass")]),
            ));
        }

        assert_eq!(capture.events_for("basic.is_true").len(), 1);
        capture.assert_event_exists("basic.is_true", "pass");
        capture.clear();
        assert!(capture.events().is_empty());
    }
}
