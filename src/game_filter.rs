use std::collections::BTreeSet;

use crate::surfaceprop_catalog::{SurfacePropCatalog, SurfacePropEntry, ALL_GAMES};

/// Lookup of a key the catalog never defined. The UI only offers
/// catalog-derived choices, so seeing this means a stale or hand-edited key.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown surfaceprop key {key:?}")]
pub struct UnknownKeyError {
    pub key: String,
}

/// Every concrete game identifier referenced by the catalog. The `ALL`
/// wildcard is a catalog-side marker, not a game, and is left out.
pub fn available_games(catalog: &SurfacePropCatalog) -> BTreeSet<String> {
    let mut games = BTreeSet::new();
    for entry in catalog.entries() {
        for game in &entry.supported_games {
            if game != ALL_GAMES {
                games.insert(game.clone());
            }
        }
    }
    games
}

/// Keys applicable to the selected games, in catalog (sorted-key) order.
///
/// An empty selection yields an empty result: no surfaceprop is offered
/// until the user picks at least one target game.
pub fn filter<'a>(catalog: &'a SurfacePropCatalog, selected: &BTreeSet<String>) -> Vec<&'a str> {
    if selected.is_empty() {
        return Vec::new();
    }
    catalog
        .entries()
        .filter(|entry| {
            entry.supported_games.contains(ALL_GAMES)
                || entry.supported_games.iter().any(|game| selected.contains(game))
        })
        .map(|entry| entry.key.as_str())
        .collect()
}

pub fn resolve<'a>(
    catalog: &'a SurfacePropCatalog,
    key: &str,
) -> Result<&'a SurfacePropEntry, UnknownKeyError> {
    catalog.get(key).ok_or_else(|| UnknownKeyError {
        key: key.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_catalog() -> SurfacePropCatalog {
        SurfacePropCatalog::parse(
            r#"{
                "types": {
                    "concrete": {
                        "concrete": { "supported_games": "ALL" },
                        "gravel": { "supported_games": "hl2, css" }
                    },
                    "metal": {
                        "metalgrate": { "supported_games": "tf2" },
                        "metal_box": { "supported_games": "" }
                    }
                }
            }"#,
        )
        .unwrap()
    }

    fn games(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn available_games_unions_entries_without_wildcard() {
        assert_eq!(available_games(&test_catalog()), games(&["hl2", "css", "tf2"]));
    }

    #[test]
    fn empty_selection_yields_nothing() {
        let catalog = test_catalog();
        assert!(filter(&catalog, &BTreeSet::new()).is_empty());
    }

    #[test]
    fn wildcard_entries_match_any_nonempty_selection() {
        let catalog = test_catalog();
        let keys = filter(&catalog, &games(&["some_future_game"]));
        assert_eq!(keys, vec!["concrete - concrete"]);
    }

    #[test]
    fn selection_intersects_supported_games() {
        let catalog = test_catalog();
        let keys = filter(&catalog, &games(&["css", "tf2"]));
        assert_eq!(
            keys,
            vec!["concrete - concrete", "concrete - gravel", "metal - metalgrate"]
        );
    }

    #[test]
    fn entries_with_no_games_are_never_offered() {
        let catalog = test_catalog();
        let keys = filter(&catalog, &games(&["hl2", "css", "tf2"]));
        assert!(!keys.contains(&"metal - metal_box"));
    }

    #[test]
    fn resolve_known_and_unknown_keys() {
        let catalog = test_catalog();
        assert_eq!(resolve(&catalog, "concrete - gravel").unwrap().key, "concrete - gravel");
        assert_eq!(
            resolve(&catalog, "concrete - marble").unwrap_err(),
            UnknownKeyError {
                key: "concrete - marble".to_string()
            }
        );
    }
}
