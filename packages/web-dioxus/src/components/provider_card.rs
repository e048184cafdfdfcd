//! Provider card and profile

use dioxus::prelude::*;
use skyshine_core::{AnalyticsEvent, Provider};

use super::cta_style;
use crate::state::use_site;

/// Directory card for one provider
#[component]
pub fn ProviderCard(provider: &'static Provider, on_view: EventHandler<&'static Provider>) -> Element {
    rsx! {
        div {
            class: "rounded-2xl overflow-hidden border border-white/10 bg-white/5 text-white",

            div {
                class: "relative aspect-[4/3]",
                img {
                    src: "{provider.image}",
                    alt: "{provider.name} aircraft detailing",
                    class: "w-full h-full object-cover",
                    loading: "lazy",
                }
                div {
                    class: "absolute top-3 left-3 bg-black/60 text-white text-xs px-2 py-1 rounded-full",
                    "{provider.rating_badge()}"
                }
            }

            div {
                class: "p-5",
                h4 { class: "font-semibold", "{provider.name}" }
                p {
                    class: "text-white/70 text-sm",
                    "{provider.city} \u{2022} {provider.airport_list()}"
                }
                div {
                    class: "mt-3 flex flex-wrap gap-2",
                    for service in provider.card_services() {
                        span {
                            key: "{service}",
                            class: "px-2 py-1 text-xs rounded-full bg-white/10 border border-white/10",
                            "{service}"
                        }
                    }
                }
                div {
                    class: "mt-4 flex gap-3",
                    button {
                        class: "px-4 py-2 rounded-lg border border-white/20",
                        onclick: move |_| on_view.call(provider),
                        "View Profile"
                    }
                    BookNowLink { provider, class: "px-4 py-2 rounded-lg" }
                }
            }
        }
    }
}

/// Modal body for a provider's full profile
#[component]
pub fn ProviderProfile(provider: &'static Provider) -> Element {
    rsx! {
        div {
            class: "grid md:grid-cols-2 gap-4",
            img {
                src: "{provider.image}",
                alt: "{provider.name} aircraft detailing",
                class: "rounded-xl w-full h-full object-cover",
            }
            div {
                p { class: "text-white/80 text-sm", "Airports: {provider.airport_list()}" }
                p { class: "text-white/80 text-sm mt-1", "Services: {provider.service_list()}" }
                p { class: "text-white/80 text-sm mt-1", "Sizes: {provider.size_list()}" }
                BookNowLink { provider, class: "inline-block mt-4 px-4 py-2 rounded-lg" }
            }
        }
    }
}

/// "Book Now" jump to the quote form, reporting which provider was chosen
#[component]
fn BookNowLink(provider: &'static Provider, class: &'static str) -> Element {
    let site = use_site();

    rsx! {
        a {
            href: "#quote",
            class: "{class}",
            style: cta_style(),
            onclick: move |_| site.track(AnalyticsEvent::book_now(provider.name)),
            "Book Now"
        }
    }
}
