//! Fixed top navigation

use dioxus::prelude::*;
use skyshine_core::catalog::BRAND_NAME;

use crate::components::cta_style;

#[component]
pub fn SiteHeader() -> Element {
    rsx! {
        header {
            class: "fixed top-0 left-0 right-0 z-40",
            div {
                class: "max-w-6xl mx-auto px-6 py-4 flex items-center justify-between",
                a { href: "#home", class: "font-display text-2xl text-white", "{BRAND_NAME}" }
                nav {
                    class: "hidden md:flex items-center gap-6 text-sm",
                    a { href: "#marketplace", class: "text-white/80 hover:text-white", "Marketplace" }
                    a { href: "#services", class: "text-white/80 hover:text-white", "Services" }
                    a { href: "#how", class: "text-white/80 hover:text-white", "How It Works" }
                    a { href: "#detailers", class: "text-white/80 hover:text-white", "For Detailers" }
                    a { href: "#quote", class: "px-4 py-2 rounded-lg", style: cta_style(), "Get a Quote" }
                }
            }
        }
    }
}
