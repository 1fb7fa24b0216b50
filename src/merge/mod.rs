//! Merging observations into per-hex state.
//!
//! Reports are flattened into events, the events are put in precedence
//! order, and the ordered stream is folded into one `TileState` per hex.

pub mod flatten;
pub mod sort;
pub mod tile;

pub use flatten::{flatten, ObservationEvent};
pub use sort::{precedence, sort_events};
pub use tile::{merge_events, TileMap, TileMerger, TileState};

use crate::report::Report;

/// Flattens, sorts and merges reports on behalf of `owning_clan`.
pub fn merge_reports(reports: &[Report], owning_clan: &str) -> TileMap {
    let mut events = flatten(reports);
    sort_events(&mut events, owning_clan);
    merge_events(&events)
}
