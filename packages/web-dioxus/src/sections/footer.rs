//! Site footer

use chrono::{Datelike, Local};
use dioxus::prelude::*;
use skyshine_core::catalog::BRAND_NAME;

use crate::state::site_config;

const SOCIAL: [(&str, &str); 3] = [("Twitter", "\u{1D54F}"), ("LinkedIn", "in"), ("Instagram", "\u{25CE}")];

#[component]
pub fn Footer() -> Element {
    let year = Local::now().year();
    let contact = &site_config().contact_email;

    rsx! {
        footer {
            class: "bg-[#0B274F] text-white",
            div {
                class: "max-w-6xl mx-auto px-6 py-10 grid md:grid-cols-4 gap-6",
                div {
                    div { class: "font-display text-2xl", "{BRAND_NAME}" }
                    p { class: "text-white/70 text-sm mt-2", "Premium aircraft detailing, anywhere you fly." }
                    a {
                        href: "mailto:{contact}",
                        class: "block text-white/70 text-sm mt-2 hover:text-white",
                        "{contact}"
                    }
                }
                nav {
                    class: "text-sm space-y-2",
                    a { href: "#marketplace", class: "block text-white/80 hover:text-white", "Marketplace" }
                    a { href: "#services", class: "block text-white/80 hover:text-white", "Services" }
                    a { href: "#detailers", class: "block text-white/80 hover:text-white", "For Detailers" }
                    a { href: "#about", class: "block text-white/80 hover:text-white", "About" }
                }
                div {
                    class: "text-sm",
                    div { class: "text-white/70 mb-2", "Follow" }
                    div {
                        class: "flex gap-3",
                        for (name, glyph) in SOCIAL {
                            a {
                                key: "{name}",
                                href: "#",
                                "aria-label": name,
                                class: "w-9 h-9 grid place-items-center rounded-full bg-white/10",
                                "{glyph}"
                            }
                        }
                    }
                }
                div { class: "text-sm text-white/60", "\u{A9} {year} {BRAND_NAME}. All rights reserved." }
            }
        }
    }
}
