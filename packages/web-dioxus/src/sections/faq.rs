//! Frequently asked questions, published as schema.org FAQPage data too

use std::rc::Rc;

use dioxus::prelude::*;
use skyshine_core::catalog::FAQS;
use skyshine_core::structured_data::faq_page;
use skyshine_core::ScopedPatch;

use crate::components::{Section, SectionHeading};
use crate::platform::JsonLdPatch;

#[component]
pub fn Faq() -> Element {
    // The script element is removed when the section unmounts
    use_hook(|| Rc::new(ScopedPatch::acquire(JsonLdPatch::new(&faq_page(&FAQS)))));

    rsx! {
        Section {
            id: "faq",
            class: "bg-[#0B274F] text-white",
            div {
                class: "max-w-4xl mx-auto px-6",
                SectionHeading { title: "FAQ" }
                div {
                    class: "mt-6 divide-y divide-white/10",
                    for entry in FAQS.iter() {
                        details {
                            key: "{entry.question}",
                            class: "py-4",
                            summary { class: "cursor-pointer font-medium", "{entry.question}" }
                            p { class: "text-white/70 mt-2", "{entry.answer}" }
                        }
                    }
                }
            }
        }
    }
}
