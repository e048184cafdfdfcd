//! Page components, one per route

pub mod public;
