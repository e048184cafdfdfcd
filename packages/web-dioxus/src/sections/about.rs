//! Mission, team and values

use dioxus::prelude::*;
use skyshine_core::catalog::{value_blurb, BRAND_NAME, COMPANY_VALUES, TEAM};

use crate::components::Section;

#[component]
pub fn About() -> Element {
    rsx! {
        Section {
            id: "about",
            class: "bg-[#0B274F] text-white",
            div {
                class: "max-w-6xl mx-auto px-6",
                h2 { class: "font-display text-3xl md:text-4xl", "About {BRAND_NAME}" }
                p {
                    class: "text-white/70 mt-2 max-w-2xl",
                    "Our mission is to elevate aircraft care with reliability, safety, and craftsmanship. We partner with certified professionals and operators to deliver consistent quality worldwide."
                }

                div {
                    class: "mt-10 grid md:grid-cols-4 gap-6",
                    for member in TEAM.iter() {
                        div {
                            key: "{member.name}",
                            class: "text-center bg-white/5 border border-white/10 rounded-xl overflow-hidden",
                            img {
                                src: "{member.image}",
                                alt: "{member.name} portrait",
                                class: "w-full h-48 object-cover",
                                loading: "lazy",
                            }
                            div {
                                class: "p-4",
                                div { class: "font-semibold", "{member.name}" }
                                div { class: "text-white/70 text-sm", "{member.role}" }
                            }
                        }
                    }
                }

                div {
                    class: "mt-10 grid md:grid-cols-4 gap-6",
                    for value in COMPANY_VALUES {
                        div {
                            key: "{value}",
                            class: "rounded-xl p-5 bg-white/5 border border-white/10",
                            div { class: "text-white/90 font-semibold", "{value}" }
                            p { class: "text-white/70 text-sm mt-2", "{value_blurb(value)}" }
                        }
                    }
                }
            }
        }
    }
}
