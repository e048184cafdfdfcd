//! Fallback for unknown paths

use dioxus::prelude::*;
use skyshine_core::catalog::BRAND_NAME;
use tracing::debug;

use crate::routes::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    debug!(path = %segments.join("/"), "Unknown path requested");

    rsx! {
        div {
            class: "min-h-screen flex flex-col items-center justify-center text-white px-6 text-center",
            h1 { class: "font-display text-5xl", "Off the flight plan" }
            p { class: "text-white/70 mt-4", "We couldn't find that page." }
            Link {
                to: Route::Home {},
                class: "mt-8 px-6 py-3 rounded-xl font-medium bg-[#FF8A3D] text-[#071C3A]",
                "Back to {BRAND_NAME}"
            }
        }
    }
}
