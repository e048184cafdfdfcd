//! "For Detailers" onboarding wizard

use dioxus::prelude::*;
use skyshine_core::catalog::BRAND_NAME;
use skyshine_core::{OnboardingField, OnboardingStep, OnboardingWizard};

use crate::components::{cta_style, Section, SectionHeading};
use crate::state::use_site;

const INPUT_CLASS: &str = "w-full bg-white/10 border border-white/20 rounded-lg px-4 py-3";

#[component]
pub fn Detailers() -> Element {
    let site = use_site();
    let mut wizard = use_signal(OnboardingWizard::new);

    let step = wizard.read().step();

    rsx! {
        Section {
            id: "detailers",
            class: "bg-[#071C3A] text-white",
            div {
                class: "max-w-4xl mx-auto px-6",
                SectionHeading { title: "For Detailers" }
                p { class: "text-white/70 mt-2", "Join {BRAND_NAME} and grow your aviation detailing business." }

                match step {
                    OnboardingStep::Details => rsx! {
                        div {
                            class: "mt-8 grid md:grid-cols-2 gap-6",
                            div {
                                class: "space-y-4",
                                WizardInput { wizard, field: OnboardingField::Business }
                                WizardInput { wizard, field: OnboardingField::Email, kind: "email" }
                                textarea {
                                    class: "{INPUT_CLASS} min-h-[120px]",
                                    placeholder: OnboardingField::Experience.placeholder(),
                                    value: "{wizard.read().form().experience}",
                                    oninput: move |evt| {
                                        wizard.write().edit(OnboardingField::Experience, evt.value());
                                    },
                                }
                            }
                            div {
                                class: "space-y-4",
                                WizardInput { wizard, field: OnboardingField::Airports }
                                WizardInput { wizard, field: OnboardingField::Services }
                                label {
                                    class: "flex gap-2 items-center text-sm text-white/80",
                                    input {
                                        r#type: "checkbox",
                                        checked: wizard.read().form().insurance,
                                        onchange: move |evt| {
                                            wizard.write().set_insurance(evt.checked());
                                        },
                                    }
                                    "I have active liability insurance"
                                }
                            }
                        }
                    },
                    OnboardingStep::Confirm => rsx! {
                        ConfirmSummary { wizard: wizard.read().clone() }
                    },
                    OnboardingStep::Success => rsx! {
                        div {
                            class: "mt-8 text-center bg-white/5 border border-white/10 rounded-xl p-10",
                            h3 { class: "font-semibold text-2xl", "Welcome to {BRAND_NAME} \u{1F389}" }
                            p { class: "text-white/70 mt-2", "We will verify your information and reach out shortly." }
                        }
                    },
                }

                div {
                    class: "mt-6 flex justify-between",
                    button {
                        class: "px-4 py-2 rounded-lg border border-white/20 disabled:opacity-50",
                        disabled: !wizard.read().can_go_back(),
                        onclick: move |_| {
                            wizard.write().back();
                        },
                        "Back"
                    }
                    match step.advance_label() {
                        Some(label) => rsx! {
                            button {
                                class: "px-5 py-2 rounded-lg",
                                style: cta_style(),
                                onclick: move |_| {
                                    wizard.write().advance(&*site.analytics);
                                },
                                "{label}"
                            }
                        },
                        None => rsx! {
                            a {
                                href: "#marketplace",
                                class: "px-5 py-2 rounded-lg",
                                style: cta_style(),
                                "Browse Marketplace"
                            }
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn WizardInput(
    wizard: Signal<OnboardingWizard>,
    field: OnboardingField,
    #[props(default = "text")] kind: &'static str,
) -> Element {
    rsx! {
        input {
            r#type: kind,
            class: INPUT_CLASS,
            placeholder: field.placeholder(),
            value: "{wizard.read().form().get(field)}",
            oninput: move |evt| {
                wizard.write().edit(field, evt.value());
            },
        }
    }
}

/// Read-only review of the application before it is sent
#[component]
fn ConfirmSummary(wizard: OnboardingWizard) -> Element {
    let form = wizard.form();
    let insured = if form.insurance { "Yes" } else { "No" };

    rsx! {
        div {
            class: "mt-8 bg-white/5 border border-white/10 rounded-xl p-6",
            h3 { class: "font-semibold text-lg", "Confirm Details" }
            ul {
                class: "text-white/80 text-sm mt-3 space-y-1",
                li { "Business: {form.business}" }
                li { "Email: {form.email}" }
                li { "Airports: {form.airports}" }
                li { "Services: {form.services}" }
                li { "Insurance: {insured}" }
            }
        }
    }
}
