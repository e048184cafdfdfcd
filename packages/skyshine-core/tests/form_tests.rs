//! Onboarding wizard and quote form driven through the recording harness.

mod common;

use crate::common::TestHarness;
use serde_json::json;
use skyshine_core::{
    AnalyticsEvent, OnboardingField, OnboardingStep, OnboardingWizard, QuoteError, QuoteField,
    QuoteRequest, QuoteStatus, ServiceKind, REQUIRED_FIELDS_MESSAGE,
};
use test_context::test_context;

fn filled_wizard() -> OnboardingWizard {
    let mut wizard = OnboardingWizard::new();
    wizard.edit(OnboardingField::Business, "Jet Gleam LLC");
    wizard.edit(OnboardingField::Email, "crew@jetgleam.example");
    wizard.edit(OnboardingField::Airports, "KTEB, KHPN");
    wizard.edit(OnboardingField::Services, "Exterior, Brightwork");
    wizard.edit(OnboardingField::Experience, "Ten years on Gulfstreams");
    wizard.set_insurance(true);
    wizard
}

// =============================================================================
// Onboarding
// =============================================================================

/// Details -> Confirm -> Details keeps every entered value
#[test_context(TestHarness)]
#[test]
fn onboarding_back_and_forth_preserves_fields(ctx: &mut TestHarness) {
    let mut wizard = filled_wizard();
    let before = wizard.form().clone();

    assert_eq!(wizard.advance(&ctx.sink), OnboardingStep::Confirm);
    assert_eq!(wizard.back(), OnboardingStep::Details);

    assert_eq!(*wizard.form(), before);
    assert!(ctx.sink.events().is_empty());
}

/// Reaching Success emits exactly one event carrying the full form
#[test_context(TestHarness)]
#[test]
fn onboarding_success_emits_one_event_with_full_form(ctx: &mut TestHarness) {
    let mut wizard = filled_wizard();
    wizard.advance(&ctx.sink);
    let submitted = wizard.form().clone();

    assert_eq!(wizard.advance(&ctx.sink), OnboardingStep::Success);
    // Terminal: further advances do nothing
    wizard.advance(&ctx.sink);

    let events = ctx.sink.events();
    assert_eq!(events.len(), 1);
    assert_eq!(
        events[0],
        AnalyticsEvent::DetailerApplicationSubmitted { form: submitted }
    );
    assert_eq!(
        events[0].payload(),
        json!({
            "business": "Jet Gleam LLC",
            "email": "crew@jetgleam.example",
            "airports": "KTEB, KHPN",
            "services": "Exterior, Brightwork",
            "experience": "Ten years on Gulfstreams",
            "insurance": true,
        })
    );
}

/// An empty application is accepted all the way through
#[test_context(TestHarness)]
#[test]
fn onboarding_accepts_empty_application(ctx: &mut TestHarness) {
    let mut wizard = OnboardingWizard::new();

    wizard.advance(&ctx.sink);
    wizard.advance(&ctx.sink);

    assert!(wizard.is_complete());
    assert_eq!(ctx.sink.events()[0].name(), "detailer_application_submit");
}

// =============================================================================
// Quote
// =============================================================================

/// Empty name with email and airport present: notify and stay Editing
#[test_context(TestHarness)]
#[test]
fn quote_missing_name_notifies_and_keeps_values(ctx: &mut TestHarness) {
    let mut quote = QuoteRequest::new();
    quote.edit(QuoteField::Email, "dispatch@example.com").unwrap();
    quote.edit(QuoteField::Airport, "KVNY").unwrap();
    quote.edit(QuoteField::Tail, "N650GX").unwrap();

    let result = quote.submit(&ctx.sink, &ctx.notifier);

    assert_eq!(result, Err(QuoteError::MissingRequired(vec![QuoteField::Name])));
    assert_eq!(quote.status(), QuoteStatus::Editing);
    assert_eq!(ctx.notifier.messages(), vec![REQUIRED_FIELDS_MESSAGE.to_string()]);
    assert!(ctx.sink.events().is_empty());
    assert_eq!(quote.form().email, "dispatch@example.com");
    assert_eq!(quote.form().airport, "KVNY");
    assert_eq!(quote.form().tail, "N650GX");

    // Fix the field and retry
    quote.edit(QuoteField::Name, "Sam Ortiz").unwrap();
    quote.submit(&ctx.sink, &ctx.notifier).unwrap();
    assert_eq!(quote.status(), QuoteStatus::Submitted);
    assert_eq!(ctx.notifier.messages().len(), 1);
}

/// Required fields present: Submitted and one event with the full form
#[test_context(TestHarness)]
#[test]
fn quote_with_required_fields_submits_once(ctx: &mut TestHarness) {
    let mut quote = QuoteRequest::new();
    quote.edit(QuoteField::Name, "Sam Ortiz").unwrap();
    quote.edit(QuoteField::Email, "sam@example.com").unwrap();
    quote.edit(QuoteField::Airport, "KDAL").unwrap();
    quote.set_service(Some(ServiceKind::Brightwork)).unwrap();
    quote.set_fleet(true).unwrap();

    quote.submit(&ctx.sink, &ctx.notifier).unwrap();

    let events = ctx.sink.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].name(), "quote_form_submit");
    assert_eq!(
        events[0].payload(),
        json!({
            "name": "Sam Ortiz",
            "email": "sam@example.com",
            "phone": "",
            "tail": "",
            "type": "",
            "airport": "KDAL",
            "service": "Brightwork",
            "notes": "",
            "fleet": true,
        })
    );
    assert!(ctx.notifier.messages().is_empty());
}

/// No service chosen: the payload carries an empty string like every other
/// untouched text field
#[test_context(TestHarness)]
#[test]
fn quote_without_service_sends_empty_service(ctx: &mut TestHarness) {
    let mut quote = QuoteRequest::new();
    quote.edit(QuoteField::Name, "Sam Ortiz").unwrap();
    quote.edit(QuoteField::Email, "sam@example.com").unwrap();
    quote.edit(QuoteField::Airport, "KDAL").unwrap();

    quote.submit(&ctx.sink, &ctx.notifier).unwrap();

    let payload = ctx.sink.events()[0].payload();
    assert_eq!(payload["service"], json!(""));
    assert!(payload
        .as_object()
        .unwrap()
        .values()
        .all(|value| value.is_string() || value.is_boolean()));
}

/// Once Submitted nothing else changes and nothing else is emitted
#[test_context(TestHarness)]
#[test]
fn quote_submitted_rejects_everything(ctx: &mut TestHarness) {
    let mut quote = QuoteRequest::new();
    quote.edit(QuoteField::Name, "Sam Ortiz").unwrap();
    quote.edit(QuoteField::Email, "sam@example.com").unwrap();
    quote.edit(QuoteField::Airport, "KDAL").unwrap();
    quote.submit(&ctx.sink, &ctx.notifier).unwrap();
    let locked = quote.form().clone();

    assert_eq!(quote.edit(QuoteField::Name, "Someone Else"), Err(QuoteError::AlreadySubmitted));
    assert_eq!(quote.set_fleet(true), Err(QuoteError::AlreadySubmitted));
    assert_eq!(
        quote.submit(&ctx.sink, &ctx.notifier),
        Err(QuoteError::AlreadySubmitted)
    );

    assert_eq!(*quote.form(), locked);
    assert_eq!(ctx.sink.events().len(), 1);
    assert!(ctx.notifier.messages().is_empty());
}
