//! Directory search against the seeded providers.

use skyshine_core::catalog::PROVIDERS;
use skyshine_core::{search, AircraftSize, Chip, DirectoryResults, FilterState, ServiceKind};

fn ids(results: &DirectoryResults<'_>) -> Vec<&'static str> {
    results.providers().iter().map(|p| p.id).collect()
}

/// No filters lists every provider in seed order
#[test]
fn empty_filter_returns_all_in_order() {
    let results = search(&PROVIDERS, &FilterState::new());

    assert_eq!(ids(&results), vec!["sky-elite", "brightworks", "cabin-craft"]);
}

/// Every airport substring returns exactly the providers containing it
#[test]
fn airport_substring_selects_exact_set() {
    for provider in &PROVIDERS {
        for code in provider.airports {
            for query in [&code[1..], &code.to_lowercase()[..]] {
                let results = search(&PROVIDERS, &FilterState::new().with_query(query));

                let expected: Vec<&str> = PROVIDERS
                    .iter()
                    .filter(|p| {
                        p.airports
                            .iter()
                            .any(|a| a.to_lowercase().contains(&query.to_lowercase()))
                    })
                    .map(|p| p.id)
                    .collect();

                assert_eq!(ids(&results), expected, "query {query:?}");
                assert!(ids(&results).contains(&provider.id));
            }
        }
    }
}

#[test]
fn teterboro_only_matches_sky_elite() {
    let results = search(&PROVIDERS, &FilterState::new().with_query("teb"));

    assert_eq!(ids(&results), vec!["sky-elite"]);
}

/// "5★ Rated" alone returns exactly the providers rated 5.0
#[test]
fn top_rated_chip_alone() {
    let results = search(&PROVIDERS, &FilterState::new().with_chip(Chip::TopRated));

    assert_eq!(ids(&results), vec!["brightworks"]);
    assert!(results.providers().iter().all(|p| p.rating >= 5.0));
}

/// Turboprop + Exterior narrows the seed set to BrightWorks Aviation
#[test]
fn turboprop_with_exterior_is_brightworks() {
    let filter = FilterState::new()
        .with_size(AircraftSize::Turboprop)
        .with_chip(Chip::Service(ServiceKind::Exterior));

    let results = search(&PROVIDERS, &filter);

    assert_eq!(
        results.providers().iter().map(|p| p.name).collect::<Vec<_>>(),
        vec!["BrightWorks Aviation"]
    );
}

/// A query matching no airport produces the explicit empty result
#[test]
fn unmatched_airport_is_explicitly_empty() {
    let results = search(&PROVIDERS, &FilterState::new().with_query("ZZZZ"));

    assert_eq!(results, DirectoryResults::NoMatches);
    assert_eq!(results.len(), 0);
}

#[test]
fn heavy_jet_excludes_turboprop_specialist() {
    let results = search(&PROVIDERS, &FilterState::new().with_size(AircraftSize::HeavyJet));

    assert_eq!(ids(&results), vec!["sky-elite", "cabin-craft"]);
}

#[test]
fn suffixed_chip_label_filters_like_plain_label() {
    let plain: Chip = "Full Detail".parse().unwrap();
    let suffixed: Chip = "Full Detail Filter".parse().unwrap();

    let a = search(&PROVIDERS, &FilterState::new().with_chip(plain));
    let b = search(&PROVIDERS, &FilterState::new().with_chip(suffixed));

    assert_eq!(ids(&a), ids(&b));
    assert_eq!(ids(&a), vec!["sky-elite", "brightworks"]);
}

#[test]
fn toggling_chip_off_restores_previous_results() {
    let mut filter = FilterState::new().with_query("K");
    let before = ids(&search(&PROVIDERS, &filter));

    filter.toggle(Chip::Service(ServiceKind::Interior));
    assert_eq!(ids(&search(&PROVIDERS, &filter)), vec!["sky-elite", "cabin-craft"]);

    filter.toggle(Chip::Service(ServiceKind::Interior));
    assert_eq!(ids(&search(&PROVIDERS, &filter)), before);
}
