//! SkyShine - Dioxus Fullstack Web Application
//!
//! Single-page marketing site for the SkyShine aircraft-detailing
//! marketplace. All directory and form behaviour lives in `skyshine-core`;
//! this crate renders it.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web,server
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web,server
//! ```

#![allow(non_snake_case)]

mod app;
mod components;
mod pages;
mod platform;
mod routes;
mod sections;
mod state;

use anyhow::{Context, Result};
use skyshine_core::catalog::{validate_providers, PROVIDERS};
use skyshine_core::SiteConfig;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = SiteConfig::from_env()?;

    // Initialize logging
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .try_init();

    tracing::info!(
        analytics_enabled = config.analytics_enabled,
        "Starting SkyShine site"
    );

    validate_providers(&PROVIDERS).context("Seeded provider table is invalid")?;

    state::init_config(config);

    // Launch the Dioxus app
    // In fullstack mode, this handles both server and client
    dioxus::launch(app::App);

    Ok(())
}
