//! Settings for a render run.

use std::path::PathBuf;

use crate::layout::Margin;
use crate::report::TurnId;

/// Settings for one render run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Clan whose own reports take precedence within a turn.
    pub owning_clan: String,
    /// Blank hexes kept around the observed area.
    pub margin: Margin,
    /// Reports for turns after this one are ignored.
    pub max_turn: Option<TurnId>,
    /// Where to write the rendered map. `None` only validates.
    pub output: Option<PathBuf>,
    /// Print merged tiles as JSON on stdout.
    pub dump: bool,
}

impl RenderConfig {
    pub fn new(owning_clan: impl Into<String>) -> Self {
        RenderConfig {
            owning_clan: owning_clan.into(),
            margin: Margin::default(),
            max_turn: None,
            output: None,
            dump: false,
        }
    }

    /// Whether the run needs merged tiles at all.
    pub fn needs_merge(&self) -> bool {
        self.output.is_some() || self.dump
    }
}
