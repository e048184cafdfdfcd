//! Sections of the single-page site, top to bottom

mod about;
mod detailers;
mod faq;
mod footer;
mod header;
mod hero;
mod how_it_works;
mod marketplace;
mod quote;
mod services;
mod testimonials;
mod trusted;

pub use about::*;
pub use detailers::*;
pub use faq::*;
pub use footer::*;
pub use header::*;
pub use hero::*;
pub use how_it_works::*;
pub use marketplace::*;
pub use quote::*;
pub use services::*;
pub use testimonials::*;
pub use trusted::*;
