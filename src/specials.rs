//! Promoting settlements to special locations.
//!
//! Some settlements are landmarks the renderer draws differently. Reports
//! carry a registry of their names; after merging, any settlement whose name
//! is in the registry moves from the tile's settlements to its specials.

use serde::Serialize;
use tracing::debug;

use crate::caseless::CaselessMap;
use crate::merge::TileMap;
use crate::report::{Report, SpecialLocation};

/// A settlement promoted to a special feature.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SpecialFeature {
    pub id: String,
    pub name: String,
}

/// Special locations keyed by case-insensitive name.
#[derive(Debug, Clone, Default)]
pub struct SpecialRegistry {
    locations: CaselessMap<SpecialLocation>,
}

impl SpecialRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the registry from every report's special list.
    ///
    /// Reports are applied in the same precedence as observations: by turn,
    /// then the owning clan's reports after everyone else's, then by clan
    /// and source file. A later entry replaces an earlier one whose name
    /// differs only in case, so the result never depends on input order.
    pub fn from_reports(reports: &[Report], owning_clan: &str) -> Self {
        let mut ordered: Vec<&Report> = reports.iter().collect();
        ordered.sort_by(|a, b| {
            a.turn
                .cmp(&b.turn)
                .then_with(|| (a.clan == owning_clan).cmp(&(b.clan == owning_clan)))
                .then_with(|| a.clan.cmp(&b.clan))
                .then_with(|| a.source.cmp(&b.source))
        });

        let mut registry = SpecialRegistry::new();
        for report in ordered {
            for special in &report.specials {
                registry.insert(special.clone());
            }
        }
        registry
    }

    pub fn insert(&mut self, location: SpecialLocation) {
        let name = location.name.clone();
        self.locations.insert(&name, location);
    }

    /// Looks up a special location by name, ignoring case.
    pub fn lookup(&self, name: &str) -> Option<&SpecialLocation> {
        self.locations.get(name)
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

/// Moves every registered settlement into its tile's specials, skipping
/// duplicates. Returns the number of settlements moved.
pub fn promote_specials(tiles: &mut TileMap, registry: &SpecialRegistry) -> usize {
    if registry.is_empty() {
        return 0;
    }

    let mut promoted = 0;
    for tile in tiles.values_mut() {
        let settlements = std::mem::take(&mut tile.settlements);
        for settlement in settlements {
            match registry.lookup(&settlement.name) {
                Some(special) => {
                    let feature = SpecialFeature {
                        id: special.id.clone(),
                        name: special.name.clone(),
                    };
                    if !tile.specials.contains(&feature) {
                        tile.specials.push(feature);
                    }
                    promoted += 1;
                }
                None => tile.settlements.push(settlement),
            }
        }
    }
    debug!(promoted, registry = registry.len(), "specials.promoted");
    promoted
}
