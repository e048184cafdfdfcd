//! Domain types shared by the catalog, the directory and the forms

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

// ============================================================================
// Services
// ============================================================================

/// A detailing service a provider can offer.
///
/// Serialized with its display label so analytics payloads carry the same
/// strings the page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ServiceKind {
    Exterior,
    Interior,
    Brightwork,
    Disinfection,
    #[serde(rename = "Leather Treatment")]
    LeatherTreatment,
    #[serde(rename = "Full Detail")]
    FullDetail,
    /// On-site service at the operator's ramp. Not part of the services grid.
    Mobile,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 7] = [
        ServiceKind::Exterior,
        ServiceKind::Interior,
        ServiceKind::Brightwork,
        ServiceKind::Disinfection,
        ServiceKind::LeatherTreatment,
        ServiceKind::FullDetail,
        ServiceKind::Mobile,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ServiceKind::Exterior => "Exterior",
            ServiceKind::Interior => "Interior",
            ServiceKind::Brightwork => "Brightwork",
            ServiceKind::Disinfection => "Disinfection",
            ServiceKind::LeatherTreatment => "Leather Treatment",
            ServiceKind::FullDetail => "Full Detail",
            ServiceKind::Mobile => "Mobile",
        }
    }

    /// Exact, case-sensitive lookup by display label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.label() == label)
    }

    /// Parse the value of the quote form's service `<select>`. The empty
    /// string means no service was chosen.
    pub fn parse_selection(value: &str) -> Result<Option<Self>, CatalogError> {
        if value.is_empty() {
            return Ok(None);
        }
        Self::from_label(value)
            .map(Some)
            .ok_or_else(|| CatalogError::UnknownService(value.to_string()))
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Aircraft sizes
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AircraftSize {
    #[serde(rename = "Light Jet")]
    LightJet,
    Midsize,
    #[serde(rename = "Heavy Jet")]
    HeavyJet,
    Turboprop,
}

impl AircraftSize {
    /// Order of the directory's size dropdown.
    pub const ALL: [AircraftSize; 4] = [
        AircraftSize::LightJet,
        AircraftSize::Midsize,
        AircraftSize::HeavyJet,
        AircraftSize::Turboprop,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AircraftSize::LightJet => "Light Jet",
            AircraftSize::Midsize => "Midsize",
            AircraftSize::HeavyJet => "Heavy Jet",
            AircraftSize::Turboprop => "Turboprop",
        }
    }

    /// Parse the value of the size `<select>`. The empty string is "Any Size".
    pub fn parse_selection(value: &str) -> Result<Option<Self>, CatalogError> {
        if value.is_empty() {
            return Ok(None);
        }
        value.parse().map(Some)
    }
}

impl FromStr for AircraftSize {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|size| size.label() == s)
            .ok_or_else(|| CatalogError::UnknownSize(s.to_string()))
    }
}

impl fmt::Display for AircraftSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Providers
// ============================================================================

/// A detailing business listed in the directory. Seeded at compile time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Provider {
    pub id: &'static str,
    pub name: &'static str,
    /// ICAO codes, uppercase
    pub airports: &'static [&'static str],
    pub rating: f32,
    pub services: &'static [ServiceKind],
    pub sizes: &'static [AircraftSize],
    pub city: &'static str,
    pub image: &'static str,
}

impl Provider {
    pub fn offers(&self, service: ServiceKind) -> bool {
        self.services.contains(&service)
    }

    pub fn supports(&self, size: AircraftSize) -> bool {
        self.sizes.contains(&size)
    }

    /// True if any airport code contains `query`, ignoring case.
    /// An empty query matches every provider.
    pub fn serves_airport(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        self.airports
            .iter()
            .any(|code| code.to_lowercase().contains(&query))
    }

    pub fn is_top_rated(&self) -> bool {
        self.rating >= 5.0
    }

    /// Rating badge text, e.g. `4.9★`
    pub fn rating_badge(&self) -> String {
        format!("{:.1}\u{2605}", self.rating)
    }

    pub fn airport_list(&self) -> String {
        self.airports.join(", ")
    }

    pub fn service_list(&self) -> String {
        join_labels(self.services.iter().map(ServiceKind::label))
    }

    pub fn size_list(&self) -> String {
        join_labels(self.sizes.iter().map(AircraftSize::label))
    }

    /// Services shown on the directory card (at most four).
    pub fn card_services(&self) -> &'static [ServiceKind] {
        let services = self.services;
        &services[..services.len().min(4)]
    }

    /// Check the seed invariants: airports and services non-empty, airport
    /// codes are four uppercase letters, rating within [0, 5].
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.airports.is_empty() {
            return Err(CatalogError::NoAirports(self.id.to_string()));
        }
        if self.services.is_empty() {
            return Err(CatalogError::NoServices(self.id.to_string()));
        }
        if let Some(code) = self
            .airports
            .iter()
            .find(|code| code.len() != 4 || !code.chars().all(|c| c.is_ascii_uppercase()))
        {
            return Err(CatalogError::InvalidAirport {
                provider: self.id.to_string(),
                code: code.to_string(),
            });
        }
        if !(0.0..=5.0).contains(&self.rating) {
            return Err(CatalogError::RatingOutOfRange {
                provider: self.id.to_string(),
                rating: self.rating,
            });
        }
        Ok(())
    }
}

fn join_labels<'a>(labels: impl Iterator<Item = &'a str>) -> String {
    labels.collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> Provider {
        Provider {
            id: "test",
            name: "Test Detailing",
            airports: &["KTEB", "KHPN"],
            rating: 4.5,
            services: &[
                ServiceKind::Exterior,
                ServiceKind::Interior,
                ServiceKind::Brightwork,
                ServiceKind::Mobile,
                ServiceKind::FullDetail,
            ],
            sizes: &[AircraftSize::Midsize],
            city: "Teterboro, NJ",
            image: "",
        }
    }

    #[test]
    fn service_labels_round_trip_through_lookup() {
        for kind in ServiceKind::ALL {
            assert_eq!(ServiceKind::from_label(kind.label()), Some(kind));
        }
        assert_eq!(ServiceKind::from_label("exterior"), None);
    }

    #[test]
    fn size_selection_treats_empty_as_any() {
        assert_eq!(AircraftSize::parse_selection("").unwrap(), None);
        assert_eq!(
            AircraftSize::parse_selection("Heavy Jet").unwrap(),
            Some(AircraftSize::HeavyJet)
        );
        assert!(matches!(
            AircraftSize::parse_selection("Blimp"),
            Err(CatalogError::UnknownSize(_))
        ));
    }

    #[test]
    fn service_selection_treats_empty_as_none() {
        assert_eq!(ServiceKind::parse_selection("").unwrap(), None);
        assert_eq!(
            ServiceKind::parse_selection("Leather Treatment").unwrap(),
            Some(ServiceKind::LeatherTreatment)
        );
        assert_eq!(
            ServiceKind::parse_selection("Polish"),
            Err(CatalogError::UnknownService("Polish".to_string()))
        );
    }

    #[test]
    fn airport_match_is_case_insensitive_substring() {
        let p = provider();
        assert!(p.serves_airport(""));
        assert!(p.serves_airport("teb"));
        assert!(p.serves_airport("KH"));
        assert!(!p.serves_airport("KLAX"));
    }

    #[test]
    fn card_shows_at_most_four_services() {
        assert_eq!(provider().card_services().len(), 4);
    }

    #[test]
    fn rating_badge_has_one_decimal() {
        let mut p = provider();
        assert_eq!(p.rating_badge(), "4.5\u{2605}");
        p.rating = 5.0;
        assert_eq!(p.rating_badge(), "5.0\u{2605}");
    }

    #[test]
    fn validate_rejects_bad_seed_rows() {
        let mut p = provider();
        assert!(p.validate().is_ok());

        p.airports = &["kteb"];
        assert!(matches!(p.validate(), Err(CatalogError::InvalidAirport { .. })));

        p.airports = &[];
        assert!(matches!(p.validate(), Err(CatalogError::NoAirports(_))));

        p = provider();
        p.rating = 5.5;
        assert!(matches!(p.validate(), Err(CatalogError::RatingOutOfRange { .. })));
    }
}
