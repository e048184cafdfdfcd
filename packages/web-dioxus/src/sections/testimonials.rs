//! Client quotes

use dioxus::prelude::*;
use skyshine_core::catalog::TESTIMONIALS;

use crate::components::{Section, SectionHeading};

#[component]
pub fn Testimonials() -> Element {
    rsx! {
        Section {
            id: "testimonials",
            class: "bg-[#071C3A] text-white",
            div {
                class: "max-w-6xl mx-auto px-6",
                SectionHeading { title: "What Clients Say" }
                div {
                    class: "mt-8 grid md:grid-cols-3 gap-6",
                    for (i, item) in TESTIMONIALS.iter().enumerate() {
                        div {
                            key: "{i}",
                            class: "relative p-6 rounded-2xl bg-white/5 border border-white/10 shadow-xl will-change-transform",
                            style: "transform: translateZ({(i + 1) * 6}px);",
                            div {
                                class: "flex items-center gap-3",
                                img {
                                    src: "{item.image}",
                                    alt: "Client avatar",
                                    class: "w-10 h-10 rounded-full object-cover",
                                    loading: "lazy",
                                }
                                div { class: "text-sm text-white/80", "{item.author}" }
                            }
                            p { class: "mt-4", "\u{201C}{item.quote}\u{201D}" }
                        }
                    }
                }
            }
        }
    }
}
