//! Test harness with recording doubles for the analytics and notification
//! seams.

use std::cell::RefCell;

use skyshine_core::{AnalyticsEvent, AnalyticsSink, Notifier};
use test_context::TestContext;

/// Keeps every emitted event in order.
#[derive(Default)]
pub struct RecordingSink {
    events: RefCell<Vec<AnalyticsEvent>>,
}

impl RecordingSink {
    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.events.borrow().clone()
    }
}

impl AnalyticsSink for RecordingSink {
    fn emit(&self, event: &AnalyticsEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

/// Keeps every notification message in order.
#[derive(Default)]
pub struct RecordingNotifier {
    messages: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

/// Fresh doubles per test.
pub struct TestHarness {
    pub sink: RecordingSink,
    pub notifier: RecordingNotifier,
}

impl TestContext for TestHarness {
    fn setup() -> Self {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        Self {
            sink: RecordingSink::default(),
            notifier: RecordingNotifier::default(),
        }
    }
}
