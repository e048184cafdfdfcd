//! Home page component

use dioxus::prelude::*;

use crate::sections::{
    About, Detailers, Faq, Footer, Hero, HowItWorks, Marketplace, QuoteSection, Services,
    SiteHeader, Testimonials, Trusted,
};

/// Home page - every section of the site in scroll order
#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "min-h-screen",
            SiteHeader {}

            main {
                class: "pt-20",
                Hero {}
                Trusted {}
                HowItWorks {}
                Services {}
                Marketplace {}
                Detailers {}
                About {}
                Testimonials {}
                Faq {}
                QuoteSection {}
            }

            Footer {}
        }
    }
}
