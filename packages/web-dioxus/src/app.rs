//! Root application component

use dioxus::prelude::*;

use crate::routes::Route;
use crate::state::SiteProvider;

/// Root application component
#[component]
pub fn App() -> Element {
    rsx! {
        // Global styles
        document::Script { src: "https://cdn.tailwindcss.com" }
        document::Stylesheet { href: asset!("/assets/main.css") }
        document::Link {
            rel: "stylesheet",
            href: "https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600&family=Playfair+Display:wght@600&display=swap"
        }

        // Analytics, notifier and body styling for the whole site
        SiteProvider {
            Router::<Route> {}
        }
    }
}
