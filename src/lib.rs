//! clanmap: merge per-turn clan observation reports into one hex map.
//!
//! Reports are loaded from JSON and validated into typed records, flattened
//! into observation events, put into a deterministic precedence order, and
//! folded into one tile per hex. The merged tiles are then laid out for
//! rendering, named settlements are promoted to specials, and the result is
//! handed to a map writer.

pub mod caseless;
pub mod config;
pub mod coords;
pub mod input;
pub mod layout;
pub mod merge;
pub mod pipeline;
pub mod render;
pub mod report;
pub mod specials;
