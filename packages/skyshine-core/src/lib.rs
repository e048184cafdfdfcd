//! # SkyShine core
//!
//! Behaviour behind the SkyShine marketing site. The web crate renders; this
//! crate decides.
//!
//! - [`catalog`]: compiled-in reference data (providers, services, team,
//!   testimonials, FAQ)
//! - [`directory`]: provider search over airport, size and chip filters
//! - [`onboarding`]: the three-step detailer wizard
//! - [`quote`]: the quote request form
//! - [`analytics`] / [`notify`]: the two seams to the outside world
//! - [`document`]: scoped, reversible document side effects
//! - [`motion`]: hero parallax and the reduced-motion query
//!
//! All state is single-owner and every transition is synchronous. Nothing
//! here does IO beyond logging.

pub mod analytics;
pub mod catalog;
pub mod config;
pub mod directory;
pub mod document;
pub mod error;
pub mod motion;
pub mod notify;
pub mod onboarding;
pub mod quote;
pub mod structured_data;
pub mod types;

pub use analytics::{AnalyticsEvent, AnalyticsSink, NoopSink, TracingSink};
pub use config::SiteConfig;
pub use directory::{filter_providers, search, Chip, DirectoryResults, FilterState};
pub use document::{
    apply_declarations, restore_declarations, BodyStyle, DocumentPatch, ScopedPatch, StyleTarget,
};
pub use error::{CatalogError, QuoteError};
pub use motion::{FrameThrottle, Parallax, REDUCED_MOTION_QUERY};
pub use notify::{LogNotifier, Notifier};
pub use onboarding::{OnboardingField, OnboardingForm, OnboardingStep, OnboardingWizard};
pub use quote::{QuoteField, QuoteForm, QuoteRequest, QuoteStatus, REQUIRED_FIELDS_MESSAGE};
pub use types::{AircraftSize, Provider, ServiceKind};
