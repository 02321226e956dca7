//! In-memory event capture for logging assertions in tests
//!
//! The capture layer is installed as the process-wide subscriber once; every
//! test shares it. Tests run in parallel, so assertions should look for the
//! events they expect rather than count everything in the buffer.

use cfgsnap_core_types::schema::{
    FIELD_COMPONENT, FIELD_DURATION_MS, FIELD_ERR_CODE, FIELD_ERR_KIND, FIELD_EVENT, FIELD_OP,
};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, OnceLock};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// One recorded event: its level, target and every field rendered as text
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    pub target: String,
    pub fields: BTreeMap<String, String>,
}

impl CapturedEvent {
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn component(&self) -> Option<&str> {
        self.field(FIELD_COMPONENT)
    }

    pub fn op(&self) -> Option<&str> {
        self.field(FIELD_OP)
    }

    pub fn event(&self) -> Option<&str> {
        self.field(FIELD_EVENT)
    }

    /// Elapsed time on an `end`/`end_error` boundary
    pub fn duration_ms(&self) -> Option<u64> {
        self.field(FIELD_DURATION_MS)?.parse().ok()
    }

    pub fn err_code(&self) -> Option<&str> {
        self.field(FIELD_ERR_CODE)
    }

    pub fn err_kind(&self) -> Option<&str> {
        self.field(FIELD_ERR_KIND)
    }

    /// True for the `event` boundary of operation `op`.
    pub fn is(&self, op: &str, event: &str) -> bool {
        self.op() == Some(op) && self.event() == Some(event)
    }
}

struct FieldCollector<'a>(&'a mut BTreeMap<String, String>);

impl Visit for FieldCollector<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let rendered = format!("{:?}", value);
        self.0.insert(field.name().to_string(), rendered);
    }
}

type Sink = Arc<Mutex<Vec<CapturedEvent>>>;

struct CaptureLayer {
    sink: Sink,
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = BTreeMap::new();
        event.record(&mut FieldCollector(&mut fields));

        let captured = CapturedEvent {
            level: *event.metadata().level(),
            target: event.metadata().target().to_string(),
            fields,
        };
        if let Ok(mut events) = self.sink.lock() {
            events.push(captured);
        }
    }
}

/// Shared handle onto the captured events
#[derive(Clone, Default)]
pub struct TestCapture {
    sink: Sink,
}

impl TestCapture {
    /// Snapshot of everything captured so far
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.sink.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Events logged by operation `op`, in emission order
    pub fn events_for(&self, op: &str) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.op() == Some(op))
            .collect()
    }

    /// First `event` boundary recorded for `op`
    pub fn find(&self, op: &str, event: &str) -> Option<CapturedEvent> {
        self.events().into_iter().find(|e| e.is(op, event))
    }

    /// # Panics
    ///
    /// If no `event` boundary was recorded for `op`.
    pub fn assert_event_exists(&self, op: &str, event: &str) {
        assert!(
            self.find(op, event).is_some(),
            "no {op}/{event} event among {} captured",
            self.events().len()
        );
    }

    pub fn clear(&self) {
        if let Ok(mut events) = self.sink.lock() {
            events.clear();
        }
    }

    /// Number of events matching `predicate`
    pub fn count_events<F>(&self, predicate: F) -> usize
    where
        F: Fn(&CapturedEvent) -> bool,
    {
        self.events().iter().filter(|e| predicate(e)).count()
    }

    fn layer(&self) -> CaptureLayer {
        CaptureLayer {
            sink: Arc::clone(&self.sink),
        }
    }
}

static GLOBAL_CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Install the capture layer globally (first call) and return its handle
///
/// # Example
///
/// ```
/// use cfgsnap_core::logging_facility::init_test_capture;
/// use cfgsnap_core::log_op_start;
///
/// let capture = init_test_capture();
/// log_op_start!("snapshot_list");
/// capture.assert_event_exists("snapshot_list", "start");
/// ```
pub fn init_test_capture() -> TestCapture {
    GLOBAL_CAPTURE
        .get_or_init(|| {
            let capture = TestCapture::default();
            tracing_subscriber::registry().with(capture.layer()).init();
            capture
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cfgsnap_core_types::schema::{FIELD_FROM, FIELD_TO};
    use tracing::subscriber::with_default;

    fn local_capture<F: FnOnce()>(f: F) -> TestCapture {
        let capture = TestCapture::default();
        let subscriber = tracing_subscriber::registry().with(capture.layer());
        with_default(subscriber, f);
        capture
    }

    #[test]
    fn test_boundary_fields_are_extracted() {
        let capture = local_capture(|| {
            crate::log_op_start!("snapshot_diff", from = "1", to = "3");
        });

        let start = capture.find("snapshot_diff", "start").unwrap();
        assert_eq!(start.level, Level::INFO);
        assert_eq!(start.field(FIELD_FROM), Some("1"));
        assert_eq!(start.field(FIELD_TO), Some("3"));
        assert_eq!(start.duration_ms(), None);
        assert!(start.component().is_some());
    }

    #[test]
    fn test_error_boundary_carries_code() {
        let capture = local_capture(|| {
            let err = crate::errors::ExError::new(crate::errors::ExErrorKind::MalformedKey);
            crate::log_op_error!("snapshot_export", err, duration_ms = 2u64);
        });

        let end = capture.find("snapshot_export", "end_error").unwrap();
        assert_eq!(end.level, Level::ERROR);
        assert_eq!(end.err_code(), Some("ERR_MALFORMED_KEY"));
        assert_eq!(end.err_kind(), Some("MalformedKey"));
        assert_eq!(end.duration_ms(), Some(2));
    }

    #[test]
    fn test_events_for_and_clear() {
        let capture = local_capture(|| {
            crate::log_op_start!("snapshot_list");
            crate::log_op_end!("snapshot_list", duration_ms = 1u64);
            tracing::debug!(snapshot_id = "x", "detail");
        });

        assert_eq!(capture.events().len(), 3);
        assert_eq!(capture.events_for("snapshot_list").len(), 2);

        capture.clear();
        assert!(capture.events().is_empty());
    }
}
