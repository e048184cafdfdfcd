//! Global state management

use std::rc::Rc;
use std::sync::OnceLock;

use dioxus::prelude::*;
use skyshine_core::{
    AnalyticsEvent, AnalyticsSink, BodyStyle, NoopSink, Notifier, ScopedPatch, SiteConfig,
    TracingSink,
};

use crate::platform::{BodyStylePatch, BrowserNotifier};

static CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Store the site configuration. Call this at startup.
pub fn init_config(config: SiteConfig) {
    CONFIG.set(config).ok();
}

/// Get the configured site settings, falling back to defaults
pub fn site_config() -> &'static SiteConfig {
    CONFIG.get_or_init(SiteConfig::default)
}

/// Collaborators shared by every section
#[derive(Clone)]
pub struct SiteContext {
    pub analytics: Rc<dyn AnalyticsSink>,
    pub notifier: Rc<dyn Notifier>,
}

impl SiteContext {
    pub fn from_config(config: &SiteConfig) -> Self {
        let analytics: Rc<dyn AnalyticsSink> = if config.analytics_enabled {
            Rc::new(TracingSink)
        } else {
            Rc::new(NoopSink)
        };

        Self {
            analytics,
            notifier: Rc::new(BrowserNotifier),
        }
    }

    pub fn track(&self, event: AnalyticsEvent) {
        self.analytics.emit(&event);
    }
}

/// Provides [`SiteContext`] and applies the site body style while mounted
#[component]
pub fn SiteProvider(children: Element) -> Element {
    use_context_provider(|| SiteContext::from_config(site_config()));

    // Reverted when the provider unmounts
    use_hook(|| Rc::new(ScopedPatch::acquire(BodyStylePatch::new(BodyStyle::default()))));

    children
}

/// Hook to access the site context
pub fn use_site() -> SiteContext {
    use_context::<SiteContext>()
}
