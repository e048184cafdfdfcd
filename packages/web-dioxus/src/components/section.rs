//! Page section wrappers and brand styling

use dioxus::prelude::*;
use skyshine_core::catalog::{BRAND_NAVY, BRAND_ORANGE};

/// Inline style for the orange call-to-action buttons
pub fn cta_style() -> String {
    format!("background-color: {BRAND_ORANGE}; color: {BRAND_NAVY};")
}

/// Full-width anchored section
#[component]
pub fn Section(id: &'static str, #[props(default)] class: &'static str, children: Element) -> Element {
    rsx! {
        section {
            id: "{id}",
            class: "relative py-24 {class}",
            {children}
        }
    }
}

/// Serif section title
#[component]
pub fn SectionHeading(title: &'static str) -> Element {
    rsx! {
        h2 {
            class: "font-display text-3xl md:text-4xl",
            "{title}"
        }
    }
}
