//! Detailer onboarding wizard.
//!
//! ```text
//! Details(1) --advance--> Confirm(2) --advance--> Success(3)
//!     ^                        |
//!     +---------back-----------+
//! ```
//!
//! No field is required. The funnel is intentionally frictionless, so
//! `advance` from `Details` never validates.
//!
//! Submitting from `Confirm` emits one
//! [`AnalyticsEvent::DetailerApplicationSubmitted`] carrying the whole form,
//! before the step changes. `Success` is terminal: edits and actions are
//! ignored there.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::analytics::{AnalyticsEvent, AnalyticsSink};

/// Fields collected from an applicant. Serialized as the analytics payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingForm {
    pub business: String,
    pub email: String,
    /// Free text, e.g. "KTEB, KLAX"
    pub airports: String,
    pub services: String,
    pub experience: String,
    pub insurance: bool,
}

impl OnboardingForm {
    pub fn get(&self, field: OnboardingField) -> &str {
        match field {
            OnboardingField::Business => &self.business,
            OnboardingField::Email => &self.email,
            OnboardingField::Airports => &self.airports,
            OnboardingField::Services => &self.services,
            OnboardingField::Experience => &self.experience,
        }
    }

    fn slot(&mut self, field: OnboardingField) -> &mut String {
        match field {
            OnboardingField::Business => &mut self.business,
            OnboardingField::Email => &mut self.email,
            OnboardingField::Airports => &mut self.airports,
            OnboardingField::Services => &mut self.services,
            OnboardingField::Experience => &mut self.experience,
        }
    }
}

/// Text fields of [`OnboardingForm`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingField {
    Business,
    Email,
    Airports,
    Services,
    Experience,
}

impl OnboardingField {
    pub fn placeholder(&self) -> &'static str {
        match self {
            OnboardingField::Business => "Business name",
            OnboardingField::Email => "Email",
            OnboardingField::Airports => "Airports served (e.g., KTEB, KLAX)",
            OnboardingField::Services => "Services offered",
            OnboardingField::Experience => "Experience summary",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnboardingStep {
    #[default]
    Details,
    Confirm,
    Success,
}

impl OnboardingStep {
    /// 1-based position in the wizard
    pub fn number(&self) -> u8 {
        match self {
            OnboardingStep::Details => 1,
            OnboardingStep::Confirm => 2,
            OnboardingStep::Success => 3,
        }
    }

    /// Label of the forward button; `None` once the flow is finished.
    pub fn advance_label(&self) -> Option<&'static str> {
        match self {
            OnboardingStep::Details => Some("Continue"),
            OnboardingStep::Confirm => Some("Submit"),
            OnboardingStep::Success => None,
        }
    }
}

/// Onboarding state owned by the "For Detailers" section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OnboardingWizard {
    step: OnboardingStep,
    form: OnboardingForm,
}

impl OnboardingWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> OnboardingStep {
        self.step
    }

    pub fn form(&self) -> &OnboardingForm {
        &self.form
    }

    pub fn is_complete(&self) -> bool {
        self.step == OnboardingStep::Success
    }

    /// Back is only meaningful from `Confirm`.
    pub fn can_go_back(&self) -> bool {
        self.step == OnboardingStep::Confirm
    }

    /// Returns false if the wizard is finished and the edit was dropped.
    pub fn edit(&mut self, field: OnboardingField, value: impl Into<String>) -> bool {
        if self.is_complete() {
            return false;
        }
        *self.form.slot(field) = value.into();
        true
    }

    pub fn set_insurance(&mut self, insured: bool) -> bool {
        if self.is_complete() {
            return false;
        }
        self.form.insurance = insured;
        true
    }

    /// Move forward one step. From `Confirm` this submits the application.
    pub fn advance(&mut self, sink: &dyn AnalyticsSink) -> OnboardingStep {
        match self.step {
            OnboardingStep::Details => {
                debug!("Onboarding details captured");
                self.step = OnboardingStep::Confirm;
            }
            OnboardingStep::Confirm => {
                sink.emit(&AnalyticsEvent::DetailerApplicationSubmitted {
                    form: self.form.clone(),
                });
                info!(business = %self.form.business, "Detailer application submitted");
                self.step = OnboardingStep::Success;
            }
            OnboardingStep::Success => {}
        }
        self.step
    }

    /// Step back from `Confirm` to `Details`, keeping every field. No-op
    /// elsewhere.
    pub fn back(&mut self) -> OnboardingStep {
        if self.can_go_back() {
            self.step = OnboardingStep::Details;
        }
        self.step
    }
}
