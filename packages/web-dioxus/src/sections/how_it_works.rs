//! Four-step explainer with an owners/detailers toggle

use dioxus::prelude::*;
use skyshine_core::catalog::Audience;

use crate::components::{Section, SectionHeading};

#[component]
pub fn HowItWorks() -> Element {
    let mut audience = use_signal(Audience::default);

    rsx! {
        Section {
            id: "how",
            class: "bg-gradient-to-b from-[#071C3A] to-[#0B274F]",
            div {
                class: "max-w-6xl mx-auto px-6 text-white",
                div {
                    class: "text-center mb-10",
                    SectionHeading { title: "How It Works" }
                    div {
                        class: "mt-4 inline-flex bg-white/10 rounded-full p-1",
                        for option in Audience::variants().iter().copied() {
                            button {
                                key: "{option.label()}",
                                class: if audience() == option {
                                    "px-4 py-2 rounded-full bg-white text-[#071C3A]"
                                } else {
                                    "px-4 py-2 rounded-full text-white/80"
                                },
                                onclick: move |_| audience.set(option),
                                "{option.label()}"
                            }
                        }
                    }
                }
                div {
                    class: "grid md:grid-cols-4 gap-6",
                    for (i, (title, body)) in audience().steps().iter().enumerate() {
                        div {
                            key: "{title}",
                            class: "rounded-2xl p-6 border border-white/10 bg-white/5",
                            div {
                                class: "w-10 h-10 rounded-full bg-[#FF8A3D] text-[#071C3A] flex items-center justify-center font-bold",
                                "{i + 1}"
                            }
                            h4 { class: "mt-4 font-semibold", "{title}" }
                            p { class: "text-white/70 text-sm mt-1", "{body}" }
                        }
                    }
                }
            }
        }
    }
}
