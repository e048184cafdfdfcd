//! Route definitions for the application

use dioxus::prelude::*;

use crate::pages::public::{Home, NotFound};

/// All application routes. The site is a single page; sections are reached
/// through `#anchor` links.
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
