//! Filter chip

use dioxus::prelude::*;

/// Toggleable pill used in the directory filter row
#[component]
pub fn FilterChip(label: &'static str, active: bool, on_toggle: EventHandler<()>) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: if active {
                "px-3 py-1 rounded-full border transition-colors text-sm mr-2 mb-2 bg-[#FF8A3D] border-[#FF8A3D] text-[#071C3A]"
            } else {
                "px-3 py-1 rounded-full border transition-colors text-sm mr-2 mb-2 border-white/20 text-white/80 hover:border-white/40"
            },
            "aria-pressed": if active { "true" } else { "false" },
            onclick: move |_| on_toggle.call(()),
            "{label}"
        }
    }
}
