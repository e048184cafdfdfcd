//! Analytics events and the sink they are emitted into.
//!
//! Events are facts about what a visitor did. They are emitted synchronously
//! from inside a UI callback and the sink must never fail or block the
//! caller's transition.

use std::rc::Rc;

use serde::Serialize;
use serde_json::{json, Value};
use tracing::info;

use crate::onboarding::OnboardingForm;
use crate::quote::QuoteForm;

/// Everything the site reports to analytics.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", content = "payload")]
pub enum AnalyticsEvent {
    /// "Get a Quote" in the hero (no provider) or "Book Now" on a provider
    #[serde(rename = "book_now_click")]
    BookNowClicked { provider: Option<String> },

    /// Detailer onboarding confirmed
    #[serde(rename = "detailer_application_submit")]
    DetailerApplicationSubmitted { form: OnboardingForm },

    /// Quote request passed validation
    #[serde(rename = "quote_form_submit")]
    QuoteFormSubmitted { form: QuoteForm },
}

impl AnalyticsEvent {
    pub fn book_now(provider: impl Into<String>) -> Self {
        AnalyticsEvent::BookNowClicked {
            provider: Some(provider.into()),
        }
    }

    /// Stable event name as sent to the analytics backend
    pub fn name(&self) -> &'static str {
        match self {
            AnalyticsEvent::BookNowClicked { .. } => "book_now_click",
            AnalyticsEvent::DetailerApplicationSubmitted { .. } => "detailer_application_submit",
            AnalyticsEvent::QuoteFormSubmitted { .. } => "quote_form_submit",
        }
    }

    /// Flat payload mapping. Form events carry the whole form; a hero click
    /// carries an empty object.
    pub fn payload(&self) -> Value {
        match self {
            AnalyticsEvent::BookNowClicked { provider: Some(name) } => json!({ "provider": name }),
            AnalyticsEvent::BookNowClicked { provider: None } => json!({}),
            AnalyticsEvent::DetailerApplicationSubmitted { form } => {
                serde_json::to_value(form).unwrap_or(Value::Null)
            }
            AnalyticsEvent::QuoteFormSubmitted { form } => {
                serde_json::to_value(form).unwrap_or(Value::Null)
            }
        }
    }
}

/// Fire-and-forget receiver of analytics events.
pub trait AnalyticsSink {
    fn emit(&self, event: &AnalyticsEvent);
}

impl<S: AnalyticsSink + ?Sized> AnalyticsSink for &S {
    fn emit(&self, event: &AnalyticsEvent) {
        (**self).emit(event)
    }
}

impl<S: AnalyticsSink + ?Sized> AnalyticsSink for Rc<S> {
    fn emit(&self, event: &AnalyticsEvent) {
        (**self).emit(event)
    }
}

/// Logs every event under the `analytics` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl AnalyticsSink for TracingSink {
    fn emit(&self, event: &AnalyticsEvent) {
        info!(
            target: "analytics",
            event = event.name(),
            payload = %event.payload(),
            "trackEvent"
        );
    }
}

/// Drops every event. Used when analytics is switched off in config.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl AnalyticsSink for NoopSink {
    fn emit(&self, _event: &AnalyticsEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_match_wire_tags() {
        let event = AnalyticsEvent::book_now("Sky Elite Detailing");
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["event"], event.name());
        assert_eq!(value["payload"]["provider"], "Sky Elite Detailing");
    }

    #[test]
    fn hero_click_has_empty_payload() {
        let event = AnalyticsEvent::BookNowClicked { provider: None };
        assert_eq!(event.payload(), json!({}));
    }

    #[test]
    fn form_payload_is_flat_field_mapping() {
        let form = OnboardingForm {
            business: "Jet Gleam".into(),
            insurance: true,
            ..Default::default()
        };
        let event = AnalyticsEvent::DetailerApplicationSubmitted { form };
        let payload = event.payload();
        assert_eq!(payload["business"], "Jet Gleam");
        assert_eq!(payload["insurance"], true);
        assert_eq!(payload["email"], "");
    }
}
