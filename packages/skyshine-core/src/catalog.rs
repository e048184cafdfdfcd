//! Static reference data for the site.
//!
//! Everything here is read-only and compiled in. The directory filter reads
//! [`PROVIDERS`]; the page sections render the rest.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::CatalogError;
use crate::types::{AircraftSize, Provider, ServiceKind};

pub const BRAND_NAME: &str = "SkyShine";
pub const BRAND_NAVY: &str = "#071C3A";
pub const BRAND_ORANGE: &str = "#FF8A3D";
pub const BRAND_SKY_GRADIENT: &str = "linear-gradient(180deg, #EEF3FF 0%, #FDF9F5 100%)";
pub const BODY_FONT: &str = "Inter, system-ui, -apple-system, Segoe UI, Roboto, sans-serif";

// ============================================================================
// Providers
// ============================================================================

pub static PROVIDERS: [Provider; 3] = [
    Provider {
        id: "sky-elite",
        name: "Sky Elite Detailing",
        airports: &["KJFK", "KLGA", "KTEB"],
        rating: 4.9,
        services: &[
            ServiceKind::Exterior,
            ServiceKind::Interior,
            ServiceKind::FullDetail,
            ServiceKind::Mobile,
        ],
        sizes: &[AircraftSize::LightJet, AircraftSize::Midsize, AircraftSize::HeavyJet],
        image: "https://images.unsplash.com/photo-1673410497723-7f0e6c43ddeb?ixid=M3w3OTkxMTl8MHwxfHNlYXJjaHwxfHxTa3klMjBFbGl0ZSUyMERldGFpbGluZ3xlbnwwfDB8fHwxNzYzNTgzOTk2fDA&ixlib=rb-4.1.0&w=1600&auto=format&fit=crop&q=80",
        city: "Teterboro, NJ",
    },
    Provider {
        id: "brightworks",
        name: "BrightWorks Aviation",
        airports: &["KDAL", "KADS", "KDFW"],
        rating: 5.0,
        services: &[ServiceKind::Exterior, ServiceKind::Brightwork, ServiceKind::FullDetail],
        sizes: &[AircraftSize::Turboprop, AircraftSize::LightJet, AircraftSize::Midsize],
        image: "https://images.unsplash.com/photo-1662642388169-4808ef5b7533?ixid=M3w3OTkxMTl8MHwxfHNlYXJjaHwxfHxCcmlnaHRXb3JrcyUyMEF2aWF0aW9ufGVufDB8MHx8fDE3NjM1ODM5OTZ8MA&ixlib=rb-4.1.0&w=1600&auto=format&fit=crop&q=80",
        city: "Dallas, TX",
    },
    Provider {
        id: "cabin-craft",
        name: "CabinCraft Pros",
        airports: &["KVNY", "KBUR", "KLAX"],
        rating: 4.8,
        services: &[
            ServiceKind::Interior,
            ServiceKind::Disinfection,
            ServiceKind::LeatherTreatment,
        ],
        sizes: &[AircraftSize::LightJet, AircraftSize::Midsize, AircraftSize::HeavyJet],
        image: "https://images.unsplash.com/photo-1642731797389-1bab31d91398?ixid=M3w3OTkxMTl8MHwxfHNlYXJjaHwxfHxDYWJpbkNyYWZ0JTIwUHJvc3xlbnwwfDB8fHwxNzYzNTgzOTk3fDA&ixlib=rb-4.1.0&w=1600&auto=format&fit=crop&q=80",
        city: "Los Angeles, CA",
    },
];

pub const MARKETPLACE_SUBTITLE: &str = "Search by airport, size, and service filters.";
pub const AIRPORT_SEARCH_PLACEHOLDER: &str = "Search airport (ICAO/IATA)";
pub const NO_MATCHES_MESSAGE: &str = "No providers match your search. Try different filters.";

pub fn provider_by_id(id: &str) -> Option<&'static Provider> {
    PROVIDERS.iter().find(|p| p.id == id)
}

/// Validate every seeded provider and check ids are unique.
pub fn validate_providers(providers: &[Provider]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for provider in providers {
        provider.validate()?;
        if !seen.insert(provider.id) {
            return Err(CatalogError::DuplicateProvider(provider.id.to_string()));
        }
    }
    Ok(())
}

// ============================================================================
// Services grid
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceInfo {
    pub kind: ServiceKind,
    pub title: &'static str,
    pub image: &'static str,
    pub description: &'static str,
}

pub static SERVICES: [ServiceInfo; 6] = [
    ServiceInfo {
        kind: ServiceKind::Exterior,
        title: "Exterior Wash",
        image: "https://images.unsplash.com/photo-1541599188778-cdc73298e5a3?q=80&w=1200&auto=format&fit=crop",
        description: "Foam bath, rinse, and spot-free dry using aviation-safe products.",
    },
    ServiceInfo {
        kind: ServiceKind::Interior,
        title: "Interior Deep Clean",
        image: "https://images.unsplash.com/photo-1518306727298-4c86e07ea45a?q=80&w=1200&auto=format&fit=crop",
        description: "Cabin surfaces, carpets, galley, and lavatory sanitation.",
    },
    ServiceInfo {
        kind: ServiceKind::Brightwork,
        title: "Brightwork",
        image: "https://images.unsplash.com/photo-1491013516836-7db643ee125a?q=80&w=1200&auto=format&fit=crop",
        description: "Polishing leading edges and brightwork to mirror finish.",
    },
    ServiceInfo {
        kind: ServiceKind::Disinfection,
        title: "Cabin Disinfection",
        image: "https://images.unsplash.com/photo-1588912914071-8a927d527b31?q=80&w=1200&auto=format&fit=crop",
        description: "Hospital-grade disinfectants across all touchpoints.",
    },
    ServiceInfo {
        kind: ServiceKind::LeatherTreatment,
        title: "Leather Treatment",
        image: "https://images.unsplash.com/photo-1517849845537-4d257902454a?q=80&w=1200&auto=format&fit=crop",
        description: "Condition and protect leather for long-lasting comfort.",
    },
    ServiceInfo {
        kind: ServiceKind::FullDetail,
        title: "Full Detail",
        image: "https://images.unsplash.com/photo-1520975922118-44e6d86fd7e5?q=80&w=1200&auto=format&fit=crop",
        description: "Complete interior + exterior restoration and polish.",
    },
];

pub const SERVICES_SUBTITLE: &str = "Premium interior and exterior aircraft care.";

/// Bullet points in the service detail modal
pub const SERVICE_ASSURANCES: [&str; 3] = [
    "Certified products safe for aerospace materials",
    "Documented procedures meeting OEM guidance",
    "Insurance and background-checked teams",
];

pub fn service_info(kind: ServiceKind) -> Option<&'static ServiceInfo> {
    SERVICES.iter().find(|s| s.kind == kind)
}

// ============================================================================
// How it works
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Audience {
    #[default]
    Owners,
    Detailers,
}

impl Audience {
    pub fn label(&self) -> &'static str {
        match self {
            Audience::Owners => "For Aircraft Owners",
            Audience::Detailers => "For Detailers",
        }
    }

    pub fn variants() -> &'static [Audience] {
        &[Audience::Owners, Audience::Detailers]
    }

    /// (title, body) per step, in order
    pub fn steps(&self) -> &'static [(&'static str, &'static str); 4] {
        match self {
            Audience::Owners => &OWNER_STEPS,
            Audience::Detailers => &DETAILER_STEPS,
        }
    }
}

const OWNER_STEPS: [(&str, &str); 4] = [
    ("Request", "Share aircraft, airport, and date."),
    ("Match", "We surface vetted providers nearby."),
    ("Detail", "Certified pros deliver on-time service."),
    ("Review", "Rate quality and reliability."),
];

const DETAILER_STEPS: [(&str, &str); 4] = [
    ("Join", "Complete onboarding and verification."),
    ("List", "Add airports, services, and pricing."),
    ("Accept", "Get booking requests that fit your schedule."),
    ("Grow", "Build reputation with verified reviews."),
];

// ============================================================================
// Trust, team, testimonials, FAQ
// ============================================================================

pub const TRUSTED_LOGOS: [&str; 4] = [
    "https://images.unsplash.com/photo-1600783243999-1a49a4d24864?q=80&w=800&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1489008777659-ad1fc8e070a9?q=80&w=800&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1511739802069-67b0b1f210d7?q=80&w=800&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1542242476-5a81e59156de?q=80&w=800&auto=format&fit=crop",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub image: &'static str,
}

pub static TEAM: [TeamMember; 4] = [
    TeamMember {
        name: "Avery Cole",
        role: "Founder & Pilot",
        image: "https://images.unsplash.com/photo-1544005313-94ddf0286df2?q=80&w=800&auto=format&fit=crop",
    },
    TeamMember {
        name: "Jordan Lee",
        role: "Head of Operations",
        image: "https://images.unsplash.com/photo-1547425260-76bcadfb4f2c?q=80&w=800&auto=format&fit=crop",
    },
    TeamMember {
        name: "Riley Quinn",
        role: "Safety & Compliance",
        image: "https://images.unsplash.com/photo-1547425260-76bcadfb4f2c?q=80&w=800&auto=format&fit=crop",
    },
    TeamMember {
        name: "Morgan Cruz",
        role: "Customer Success",
        image: "https://images.unsplash.com/photo-1527980965255-d3b416303d12?q=80&w=800&auto=format&fit=crop",
    },
];

pub const COMPANY_VALUES: [&str; 4] = ["Safety", "Precision", "Reliability", "Innovation"];

pub fn value_blurb(value: &str) -> String {
    format!(
        "We uphold {} in every service touchpoint and partner relationship.",
        value.to_lowercase()
    )
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub image: &'static str,
}

pub static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "Impeccable brightwork and on-time arrival. Our passengers noticed the difference.",
        author: "Chief Pilot, G650",
        image: "https://images.unsplash.com/photo-1527980965255-d3b416303d12?q=80&w=600&auto=format&fit=crop",
    },
    Testimonial {
        quote: "Booking was seamless. Cabin looked better than delivery day.",
        author: "Director of Maintenance",
        image: "https://images.unsplash.com/photo-1547425260-76bcadfb4f2c?q=80&w=600&auto=format&fit=crop",
    },
    Testimonial {
        quote: "Trusted team for our fleet at TEB and VNY.",
        author: "Flight Department Manager",
        image: "https://images.unsplash.com/photo-1544005313-94ddf0286df2?q=80&w=600&auto=format&fit=crop",
    },
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub static FAQS: [FaqEntry; 4] = [
    FaqEntry {
        question: "Are providers vetted?",
        answer: "Yes. We verify insurance, experience, and safety procedures.",
    },
    FaqEntry {
        question: "What airports do you cover?",
        answer: "Major GA airports in the U.S., expanding globally.",
    },
    FaqEntry {
        question: "How are payments handled?",
        answer: "Secure online processing after service completion.",
    },
    FaqEntry {
        question: "Do you handle brightwork?",
        answer: "Yes, with trained specialists and proper equipment.",
    },
];
