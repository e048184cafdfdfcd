use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

const DEFAULT_CONTACT_EMAIL: &str = "hello@skyshine.aero";
const DEFAULT_LOG_FILTER: &str = "info";

/// Site configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Send analytics events to the log sink; when false they are dropped
    pub analytics_enabled: bool,
    pub contact_email: String,
    pub log_filter: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            analytics_enabled: true,
            contact_email: DEFAULT_CONTACT_EMAIL.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup. Missing keys fall back to
    /// defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let analytics_enabled = match lookup("SKYSHINE_ANALYTICS") {
            Some(raw) => parse_bool(&raw)
                .with_context(|| format!("SKYSHINE_ANALYTICS must be a boolean, got {raw:?}"))?,
            None => true,
        };

        Ok(Self {
            analytics_enabled,
            contact_email: lookup("SKYSHINE_CONTACT_EMAIL")
                .unwrap_or_else(|| DEFAULT_CONTACT_EMAIL.to_string()),
            log_filter: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = SiteConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn reads_overrides() {
        let config = SiteConfig::from_lookup(lookup(&[
            ("SKYSHINE_ANALYTICS", "off"),
            ("SKYSHINE_CONTACT_EMAIL", "ops@skyshine.aero"),
            ("RUST_LOG", "skyshine_core=debug"),
        ]))
        .unwrap();
        assert!(!config.analytics_enabled);
        assert_eq!(config.contact_email, "ops@skyshine.aero");
        assert_eq!(config.log_filter, "skyshine_core=debug");
    }

    #[test]
    fn rejects_garbage_bool() {
        let err = SiteConfig::from_lookup(lookup(&[("SKYSHINE_ANALYTICS", "maybe")])).unwrap_err();
        assert!(err.to_string().contains("SKYSHINE_ANALYTICS"));
    }
}
