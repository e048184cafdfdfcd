//! Modal dialog

use dioxus::prelude::*;

/// Centered dialog over a dimmed backdrop. Clicking the backdrop or the
/// close button calls `on_close`.
#[component]
pub fn Modal(title: String, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "fixed inset-0 z-50 flex items-center justify-center",
            div {
                class: "absolute inset-0 bg-black/60",
                "aria-hidden": "true",
                onclick: move |_| on_close.call(()),
            }
            div {
                role: "dialog",
                "aria-modal": "true",
                class: "relative max-w-2xl w-[92vw] bg-[#0B274F] text-white rounded-2xl border border-white/10 shadow-2xl overflow-hidden",
                div {
                    class: "flex items-center justify-between px-6 py-4 border-b border-white/10",
                    h3 { class: "font-display text-2xl", "{title}" }
                    button {
                        "aria-label": "Close",
                        class: "text-white/70 hover:text-white",
                        onclick: move |_| on_close.call(()),
                        "\u{2715}"
                    }
                }
                div { class: "p-6", {children} }
            }
        }
    }
}
