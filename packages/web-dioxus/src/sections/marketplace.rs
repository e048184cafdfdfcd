//! Provider directory with search and filters

use dioxus::prelude::*;
use skyshine_core::catalog::{
    provider_by_id, AIRPORT_SEARCH_PLACEHOLDER, MARKETPLACE_SUBTITLE, NO_MATCHES_MESSAGE, PROVIDERS,
};
use skyshine_core::{search, AircraftSize, Chip, DirectoryResults, FilterState, Provider};
use tracing::warn;

use crate::components::{FilterChip, Modal, ProviderCard, ProviderProfile, Section, SectionHeading};

#[component]
pub fn Marketplace() -> Element {
    let mut filter = use_signal(FilterState::new);
    // Id of the provider whose profile is open
    let mut profile = use_signal(|| None::<&'static str>);

    // Results borrow from the static seed, so they can live in the memo
    let results = use_memo(move || search(&PROVIDERS, &filter.read()));

    rsx! {
        Section {
            id: "marketplace",
            class: "bg-[#0B274F]",
            div {
                class: "max-w-6xl mx-auto px-6 text-white",
                div {
                    class: "flex items-end justify-between gap-4 flex-wrap",
                    div {
                        SectionHeading { title: "Marketplace" }
                        p { class: "text-white/70 mt-2", "{MARKETPLACE_SUBTITLE}" }
                    }
                    div {
                        class: "flex gap-3 w-full md:w-auto",
                        input {
                            class: "bg-white/10 border border-white/20 rounded-lg px-4 py-3 w-full outline-none placeholder-white/60",
                            placeholder: AIRPORT_SEARCH_PLACEHOLDER,
                            value: "{filter.read().query}",
                            oninput: move |evt| filter.write().query = evt.value(),
                        }
                        select {
                            class: "bg-white/10 border border-white/20 rounded-lg px-3 py-3 outline-none",
                            onchange: move |evt| match AircraftSize::parse_selection(&evt.value()) {
                                Ok(size) => filter.write().size = size,
                                Err(err) => warn!(error = %err, "Ignoring size selection"),
                            },
                            option { value: "", "Any Size" }
                            for size in AircraftSize::ALL {
                                option {
                                    key: "{size}",
                                    value: "{size}",
                                    selected: filter.read().size == Some(size),
                                    "{size}"
                                }
                            }
                        }
                    }
                }

                div {
                    class: "mt-4 flex flex-wrap",
                    for chip in Chip::ROW {
                        FilterChip {
                            key: "{chip.label()}",
                            label: chip.label(),
                            active: filter.read().is_active(chip),
                            on_toggle: move |_| filter.write().toggle(chip),
                        }
                    }
                }

                match results() {
                    DirectoryResults::NoMatches => rsx! {
                        div {
                            class: "grid sm:grid-cols-2 lg:grid-cols-3 gap-6 mt-8",
                            div { class: "col-span-full text-white/70", "{NO_MATCHES_MESSAGE}" }
                        }
                    },
                    found => rsx! {
                        div {
                            class: "grid sm:grid-cols-2 lg:grid-cols-3 gap-6 mt-8",
                            for provider in found.providers().iter().copied() {
                                ProviderCard {
                                    key: "{provider.id}",
                                    provider,
                                    on_view: move |p: &'static Provider| profile.set(Some(p.id)),
                                }
                            }
                        }
                    },
                }
            }

            if let Some(provider) = profile().and_then(provider_by_id) {
                Modal {
                    title: provider.name.to_string(),
                    on_close: move |_| profile.set(None),
                    ProviderProfile { provider }
                }
            }
        }
    }
}
