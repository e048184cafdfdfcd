//! Hero banner

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use skyshine_core::catalog::{BRAND_NAME, BRAND_SKY_GRADIENT};
use skyshine_core::{AnalyticsEvent, Parallax, ScopedPatch};

use crate::components::cta_style;
use crate::platform::{prefers_reduced_motion, ParallaxPatch, ReducedMotionWatch};
use crate::state::use_site;

const BACKDROP: &str = "https://images.unsplash.com/photo-1504196606672-aef5c9cefc92?q=80&w=2000&auto=format&fit=crop";
const JET_ID: &str = "hero-jet";
const JET: &str = "https://images.unsplash.com/photo-1551049743-200ed61d6375?ixid=M3w3OTkxMTl8MHwxfHNlYXJjaHwxfHxTbGVlayUyMGJ1c2luZXNzJTIwamV0JTIwb24lMjBydW53YXl8ZW58MHwwfHx8MTc2MzU4Mzk5Nnww&ixlib=rb-4.1.0&w=1600&auto=format&fit=crop&q=80";

#[component]
pub fn Hero() -> Element {
    let site = use_site();

    // The server render never moves
    let mut reduced_motion = use_signal(|| true);
    let watch = use_hook(|| Rc::new(RefCell::new(None::<ScopedPatch<ReducedMotionWatch>>)));
    let parallax = use_hook(|| Rc::new(RefCell::new(None::<ScopedPatch<ParallaxPatch>>)));

    use_effect(move || {
        reduced_motion.set(prefers_reduced_motion());
        let mut watch = watch.borrow_mut();
        if watch.is_none() {
            *watch = Some(ScopedPatch::acquire(ReducedMotionWatch::new(move |reduce| {
                reduced_motion.set(reduce)
            })));
        }
    });

    // Follows the preference live: dropping the guard removes the listener
    use_effect(move || {
        let reduce = reduced_motion();
        let mut slot = parallax.borrow_mut();
        if reduce {
            drop(slot.take());
        } else if slot.is_none() {
            *slot = Some(ScopedPatch::acquire(ParallaxPatch::new(JET_ID, Parallax::HERO)));
        }
    });

    rsx! {
        div {
            id: "home",
            class: "relative min-h-[90vh] flex items-center justify-center overflow-hidden",
            style: "background: {BRAND_SKY_GRADIENT};",

            div {
                class: "absolute inset-0",
                "aria-hidden": "true",
                img {
                    src: BACKDROP,
                    alt: "Private jet cruising above clouds",
                    class: "w-full h-full object-cover opacity-50",
                    loading: "lazy",
                }
                div {
                    class: "absolute inset-0",
                    style: "background: radial-gradient(1200px 600px at 50% 10%, rgba(7,28,58,0.6), transparent 60%);",
                }
            }

            div {
                class: "relative z-10 max-w-6xl mx-auto px-6 text-center",
                h1 {
                    class: "font-display text-5xl sm:text-6xl md:text-7xl text-white drop-shadow-2xl",
                    "{BRAND_NAME}"
                }
                p {
                    class: "text-white/90 mt-5 text-lg md:text-xl max-w-2xl mx-auto",
                    "The premier marketplace connecting aircraft owners and operators with certified detailing professionals."
                }
                div {
                    class: "mt-8 flex flex-wrap items-center justify-center gap-4",
                    a {
                        href: "#quote",
                        class: "px-6 py-3 rounded-xl font-medium",
                        style: cta_style(),
                        onclick: move |_| site.track(AnalyticsEvent::BookNowClicked { provider: None }),
                        "Get a Quote"
                    }
                    a {
                        href: "#marketplace",
                        class: "px-6 py-3 rounded-xl font-medium border border-white/30 text-white/90 hover:bg-white/10",
                        "Browse Detailers"
                    }
                }
            }

            div {
                id: JET_ID,
                class: "absolute bottom-[-40px] sm:bottom-[-20px] will-change-transform",
                "aria-hidden": "true",
                img {
                    src: JET,
                    alt: "Sleek business jet on runway",
                    class: "w-[82vw] max-w-[1100px] rounded-2xl shadow-2xl",
                }
            }
        }
    }
}
