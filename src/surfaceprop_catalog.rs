use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
};

use serde::Deserialize;

/// Wildcard token in a `supported_games` list marking an entry as usable in
/// every game.
pub const ALL_GAMES: &str = "ALL";

/// A single physical-material record from the catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SurfacePropEntry {
    /// `"category - subtype"`, unique within the catalog.
    pub key: String,
    pub description: String,
    pub supported_games: BTreeSet<String>,
}

/// All surfaceprop entries known to the generator, keyed by
/// `"category - subtype"`. Loaded once at startup and read-only afterwards.
#[derive(Clone, Debug, Default)]
pub struct SurfacePropCatalog {
    entries: BTreeMap<String, SurfacePropEntry>,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogLoadError {
    #[error("failed to read surfaceprop catalog {path:?}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("surfaceprop catalog is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Deserialize)]
struct RawCatalog {
    types: BTreeMap<String, Option<BTreeMap<String, RawEntry>>>,
}

#[derive(Deserialize)]
struct RawEntry {
    #[serde(default)]
    description: String,
    /// Kept as a raw value so a malformed field degrades to "supported by
    /// no game" instead of failing the whole load.
    #[serde(default)]
    supported_games: serde_json::Value,
}

impl SurfacePropCatalog {
    pub fn load(path: &Path) -> Result<Self, CatalogLoadError> {
        let text = std::fs::read_to_string(path).map_err(|source| CatalogLoadError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self, CatalogLoadError> {
        let raw: RawCatalog = serde_json::from_str(text)?;

        let mut entries = BTreeMap::new();
        for (category, subtypes) in raw.types {
            let Some(subtypes) = subtypes else {
                log::warn!("surfaceprop category {:?} has no subtypes, skipping", category);
                continue;
            };
            for (subtype, record) in subtypes {
                let key = format!("{} - {}", category, subtype);
                entries.insert(
                    key.clone(),
                    SurfacePropEntry {
                        key,
                        description: record.description,
                        supported_games: split_games(&record.supported_games),
                    },
                );
            }
        }

        Ok(Self { entries })
    }

    /// Keys in sorted order, for deterministic display.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn entries(&self) -> impl Iterator<Item = &SurfacePropEntry> {
        self.entries.values()
    }

    pub fn get(&self, key: &str) -> Option<&SurfacePropEntry> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// `supported_games` is a comma-and-space separated list, e.g.
/// `"hl2, css, ALL"`. Anything that is not a string yields the empty set.
fn split_games(raw: &serde_json::Value) -> BTreeSet<String> {
    let Some(raw) = raw.as_str() else {
        return BTreeSet::new();
    };
    raw.split(',')
        .map(str::trim)
        .filter(|game| !game.is_empty())
        .map(str::to_string)
        .collect()
}
