//! Provider directory search.
//!
//! A search is a pure function of the provider list and a [`FilterState`].
//! Three predicates must all hold for a provider to be listed:
//!
//! - **airport**: the query is empty, or one of the provider's airport codes
//!   contains it (case-insensitive)
//! - **size**: no size selected, or the provider supports the selected size
//! - **chips**: every active chip is satisfied
//!
//! Source order is preserved. The cost is O(providers × chips), which is why
//! the web view recomputes it on every keystroke.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::CatalogError;
use crate::types::{AircraftSize, Provider, ServiceKind};

const TOP_RATED_LABEL: &str = "5\u{2605} Rated";
const FILTER_SUFFIX: &str = " Filter";

/// A toggleable filter in the chip row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Chip {
    /// Provider offers this service
    Service(ServiceKind),
    /// Provider is rated 5.0
    TopRated,
}

impl Chip {
    /// Chip row order as rendered.
    pub const ROW: [Chip; 5] = [
        Chip::Service(ServiceKind::Exterior),
        Chip::Service(ServiceKind::Interior),
        Chip::Service(ServiceKind::FullDetail),
        Chip::Service(ServiceKind::Mobile),
        Chip::TopRated,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Chip::Service(kind) => kind.label(),
            Chip::TopRated => TOP_RATED_LABEL,
        }
    }

    pub fn matches(&self, provider: &Provider) -> bool {
        match self {
            Chip::Service(kind) => provider.offers(*kind),
            Chip::TopRated => provider.is_top_rated(),
        }
    }
}

impl FromStr for Chip {
    type Err = CatalogError;

    /// Accepts the rendered labels plus the legacy `"<Service> Filter"` form,
    /// whose suffix is dropped before the service lookup.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == TOP_RATED_LABEL {
            return Ok(Chip::TopRated);
        }
        let service = s.strip_suffix(FILTER_SUFFIX).unwrap_or(s);
        ServiceKind::from_label(service)
            .map(Chip::Service)
            .ok_or_else(|| CatalogError::UnknownChip(s.to_string()))
    }
}

impl fmt::Display for Chip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Filter inputs owned by the directory view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    pub size: Option<AircraftSize>,
    /// Active chips in the order they were switched on
    chips: Vec<Chip>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_size(mut self, size: AircraftSize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_chip(mut self, chip: Chip) -> Self {
        if !self.is_active(chip) {
            self.chips.push(chip);
        }
        self
    }

    /// Switch a chip on if it is off, off if it is on.
    pub fn toggle(&mut self, chip: Chip) {
        if let Some(pos) = self.chips.iter().position(|c| *c == chip) {
            self.chips.remove(pos);
        } else {
            self.chips.push(chip);
        }
    }

    pub fn is_active(&self, chip: Chip) -> bool {
        self.chips.contains(&chip)
    }

    pub fn chips(&self) -> &[Chip] {
        &self.chips
    }

    /// No query, no size and no chips.
    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.size.is_none() && self.chips.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn matches(&self, provider: &Provider) -> bool {
        let airport = provider.serves_airport(&self.query);
        let size = self.size.map_or(true, |size| provider.supports(size));
        let chips = self.chips.iter().all(|chip| chip.matches(provider));
        airport && size && chips
    }
}

/// Providers satisfying `filter`, in source order.
pub fn filter_providers<'a>(providers: &'a [Provider], filter: &FilterState) -> Vec<&'a Provider> {
    providers.iter().filter(|p| filter.matches(p)).collect()
}

/// Outcome of a directory search.
///
/// An empty match set is its own variant so the view has to render the
/// no-results message instead of silently showing nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum DirectoryResults<'a> {
    /// No filters applied; every provider is listed.
    Unfiltered(Vec<&'a Provider>),
    /// Filters applied and at least one provider matched.
    Matches(Vec<&'a Provider>),
    /// Filters applied and nothing matched.
    NoMatches,
}

impl<'a> DirectoryResults<'a> {
    pub fn providers(&self) -> &[&'a Provider] {
        match self {
            DirectoryResults::Unfiltered(list) | DirectoryResults::Matches(list) => list,
            DirectoryResults::NoMatches => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.providers().len()
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, DirectoryResults::NoMatches)
    }
}

/// Run a directory search.
pub fn search<'a>(providers: &'a [Provider], filter: &FilterState) -> DirectoryResults<'a> {
    let matched = filter_providers(providers, filter);

    debug!(
        query = %filter.query,
        size = ?filter.size,
        chips = ?filter.chips,
        matched = matched.len(),
        "Directory filter recomputed"
    );

    if filter.is_empty() {
        DirectoryResults::Unfiltered(matched)
    } else if matched.is_empty() {
        DirectoryResults::NoMatches
    } else {
        DirectoryResults::Matches(matched)
    }
}
