//! Service catalogue grid with a detail modal

use dioxus::prelude::*;
use skyshine_core::catalog::{service_info, SERVICES, SERVICES_SUBTITLE, SERVICE_ASSURANCES};
use skyshine_core::ServiceKind;

use crate::components::{Modal, Section, SectionHeading};

#[component]
pub fn Services() -> Element {
    let mut open = use_signal(|| None::<ServiceKind>);

    rsx! {
        Section {
            id: "services",
            class: "bg-[#071C3A]",
            div {
                class: "max-w-6xl mx-auto px-6 text-white",
                SectionHeading { title: "Services" }
                p { class: "text-white/70 mt-2", "{SERVICES_SUBTITLE}" }

                div {
                    class: "grid sm:grid-cols-2 lg:grid-cols-3 gap-6 mt-8",
                    for info in SERVICES.iter() {
                        button {
                            key: "{info.kind}",
                            class: "text-left group rounded-2xl overflow-hidden border border-white/10 bg-white/5 hover:bg-white/10 transition will-change-transform",
                            onclick: move |_| open.set(Some(info.kind)),
                            div {
                                class: "relative aspect-[4/3]",
                                img {
                                    src: "{info.image}",
                                    alt: "{info.title} example on private jet",
                                    class: "w-full h-full object-cover",
                                    loading: "lazy",
                                }
                                div { class: "absolute inset-0 bg-gradient-to-t from-[#071C3A] to-transparent" }
                            }
                            div {
                                class: "p-5",
                                h3 { class: "font-semibold text-lg", "{info.title}" }
                                p { class: "text-white/70 text-sm mt-1", "{info.description}" }
                            }
                        }
                    }
                }

                if let Some(info) = open().and_then(service_info) {
                    Modal {
                        title: info.title.to_string(),
                        on_close: move |_| open.set(None),
                        div {
                            class: "grid md:grid-cols-2 gap-4 items-center",
                            img {
                                src: "{info.image}",
                                alt: "Service illustration",
                                class: "rounded-xl w-full h-full object-cover",
                            }
                            div {
                                p { class: "text-white/80", "{info.description}" }
                                ul {
                                    class: "list-disc list-inside text-white/70 mt-4 space-y-1",
                                    for line in SERVICE_ASSURANCES {
                                        li { key: "{line}", "{line}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
