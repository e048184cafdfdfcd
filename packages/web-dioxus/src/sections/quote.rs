//! "Get a Quote" request form

use dioxus::prelude::*;
use skyshine_core::catalog::SERVICES;
use skyshine_core::{QuoteError, QuoteField, QuoteRequest, ServiceKind};
use tracing::{debug, warn};

use crate::components::{cta_style, Section, SectionHeading};
use crate::state::use_site;

const INPUT_CLASS: &str = "bg-white/10 border border-white/20 rounded-lg px-4 py-3";

/// Single-line inputs in display order
const LINE_FIELDS: [(QuoteField, &str); 6] = [
    (QuoteField::Name, "text"),
    (QuoteField::Email, "email"),
    (QuoteField::Phone, "text"),
    (QuoteField::Tail, "text"),
    (QuoteField::AircraftType, "text"),
    (QuoteField::Airport, "text"),
];

#[component]
pub fn QuoteSection() -> Element {
    let site = use_site();
    let mut request = use_signal(QuoteRequest::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        match request
            .write()
            .submit(&*site.analytics, &*site.notifier)
        {
            Ok(()) => {}
            Err(QuoteError::MissingRequired(missing)) => {
                debug!(?missing, "Quote form kept open for corrections");
            }
            Err(err) => warn!(error = %err, "Quote submission ignored"),
        }
    };

    rsx! {
        Section {
            id: "quote",
            class: "bg-[#071C3A] text-white",
            div {
                class: "max-w-4xl mx-auto px-6",
                SectionHeading { title: "Get a Quote" }
                p { class: "text-white/70 mt-2", "Share trip details and we\u{2019}ll match you with certified pros." }

                if request.read().is_submitted() {
                    div {
                        class: "mt-8 bg-white/5 border border-white/10 rounded-xl p-8 text-center",
                        h3 { class: "text-2xl font-semibold", "Thanks! We received your request." }
                        p { class: "text-white/70 mt-2", "Our team will reach out shortly." }
                    }
                } else {
                    form {
                        class: "mt-8 grid md:grid-cols-2 gap-4",
                        onsubmit: handle_submit,

                        for (field, kind) in LINE_FIELDS {
                            input {
                                key: "{field.key()}",
                                r#type: kind,
                                class: INPUT_CLASS,
                                placeholder: field.placeholder(),
                                "aria-required": if field.is_required() { "true" } else { "false" },
                                value: "{request.read().form().get(field)}",
                                oninput: move |evt| edit(request, |r| r.edit(field, evt.value())),
                            }
                        }

                        select {
                            class: INPUT_CLASS,
                            "aria-label": "Service type",
                            onchange: move |evt| match ServiceKind::parse_selection(&evt.value()) {
                                Ok(service) => edit(request, |r| r.set_service(service)),
                                Err(err) => warn!(error = %err, "Ignoring service selection"),
                            },
                            option { value: "", "Service type" }
                            for info in SERVICES.iter() {
                                option {
                                    key: "{info.kind}",
                                    value: "{info.kind}",
                                    selected: request.read().form().service == Some(info.kind),
                                    "{info.title}"
                                }
                            }
                        }

                        label {
                            class: "flex gap-2 items-center text-sm text-white/80",
                            input {
                                r#type: "checkbox",
                                checked: request.read().form().fleet,
                                onchange: move |evt| edit(request, |r| r.set_fleet(evt.checked())),
                            }
                            "Fleet pricing"
                        }

                        textarea {
                            class: "md:col-span-2 {INPUT_CLASS} min-h-[120px]",
                            placeholder: QuoteField::Notes.placeholder(),
                            value: "{request.read().form().notes}",
                            oninput: move |evt| edit(request, |r| r.edit(QuoteField::Notes, evt.value())),
                        }

                        button {
                            r#type: "submit",
                            class: "md:col-span-2 px-6 py-3 rounded-xl font-medium",
                            style: cta_style(),
                            "Submit"
                        }
                    }
                }
            }
        }
    }
}

/// Apply one edit, logging edits that arrive after submission.
fn edit(
    mut request: Signal<QuoteRequest>,
    change: impl FnOnce(&mut QuoteRequest) -> Result<(), QuoteError>,
) {
    if let Err(err) = change(&mut request.write()) {
        warn!(error = %err, "Quote edit dropped");
    }
}
