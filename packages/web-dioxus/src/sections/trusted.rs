//! Trusted-by logo wall

use dioxus::prelude::*;
use skyshine_core::catalog::{BRAND_NAME, TRUSTED_LOGOS};

use crate::components::{cta_style, Section, SectionHeading};

#[component]
pub fn Trusted() -> Element {
    rsx! {
        Section {
            id: "trusted",
            class: "bg-[#071C3A]",
            div {
                class: "max-w-6xl mx-auto px-6 text-white",
                div {
                    class: "text-center mb-12",
                    SectionHeading { title: "Trusted by Industry" }
                    p { class: "text-white/70 mt-3", "Operators and FBOs rely on {BRAND_NAME} for quality and safety." }
                }
                div {
                    class: "grid grid-cols-2 sm:grid-cols-4 gap-6",
                    for (i, src) in TRUSTED_LOGOS.iter().enumerate() {
                        div {
                            key: "{i}",
                            class: "relative aspect-[4/3] rounded-xl overflow-hidden border border-white/10 bg-white/5 backdrop-blur will-change-transform",
                            style: tile_depth(i),
                            img {
                                src: "{src}",
                                alt: "Aviation brand partner logo or aircraft hangar",
                                class: "w-full h-full object-cover",
                                loading: "lazy",
                            }
                        }
                    }
                }
                div {
                    class: "text-center mt-10",
                    a {
                        href: "#quote",
                        class: "px-5 py-3 rounded-lg font-medium inline-block",
                        style: cta_style(),
                        "Partner With {BRAND_NAME}"
                    }
                }
            }
        }
    }
}

/// Alternate tiles sit slightly forward
fn tile_depth(index: usize) -> String {
    format!("transform: translateZ({}px);", index % 2 * 8)
}
