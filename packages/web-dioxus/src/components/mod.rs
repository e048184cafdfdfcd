//! Reusable UI components

mod chip;
mod modal;
mod provider_card;
mod section;

pub use chip::*;
pub use modal::*;
pub use provider_card::*;
pub use section::*;
