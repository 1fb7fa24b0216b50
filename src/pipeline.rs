//! End-to-end run: report files in, render map out.
//!
//! Load and validate can fail and report every problem they find. Once the
//! reports are typed, the remaining stages (turn cutoff, flatten, sort,
//! merge, layout, special promotion) are total.

use std::path::Path;

use thiserror::Error;
use tracing::{error, info};

use crate::config::RenderConfig;
use crate::input::{load_reports, validate, LoadError, ValidationErrors};
use crate::layout::Layout;
use crate::merge::{merge_reports, TileMap};
use crate::render::RenderMap;
use crate::report::{Report, TurnId};
use crate::specials::{promote_specials, SpecialRegistry};

/// Reasons a batch of report files was rejected.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("{} report file(s) could not be read", .0.len())]
    Load(Vec<LoadError>),
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
}

/// Loads and validates report files, logging each failure on its own line.
pub fn read_reports<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<Report>, InputError> {
    let docs = load_reports(paths).map_err(|errors| {
        for err in &errors {
            error!("{}", err);
        }
        InputError::Load(errors)
    })?;
    let reports = validate(&docs).map_err(|errors| {
        for err in &errors.0 {
            error!("{}", err);
        }
        errors
    })?;
    info!(reports = reports.len(), "reports.accepted");
    Ok(reports)
}

/// Drops reports for turns after `max_turn`.
pub fn select_turns(reports: Vec<Report>, max_turn: Option<TurnId>) -> Vec<Report> {
    let Some(max_turn) = max_turn else {
        return reports;
    };
    let total = reports.len();
    let kept: Vec<Report> = reports.into_iter().filter(|r| r.turn <= max_turn).collect();
    if kept.len() < total {
        info!(max_turn = %max_turn, dropped = total - kept.len(), "reports.cutoff");
    }
    kept
}

/// Merged tiles with their layout, ready to render.
#[derive(Debug, Clone)]
pub struct MergedMap {
    pub tiles: TileMap,
    pub layout: Layout,
    /// Settlements promoted to specials.
    pub promoted: usize,
}

impl MergedMap {
    pub fn render_map(&self) -> RenderMap {
        RenderMap::build(&self.tiles, &self.layout)
    }
}

/// Runs every stage after validation.
pub fn merge(reports: Vec<Report>, config: &RenderConfig) -> MergedMap {
    let reports = select_turns(reports, config.max_turn);
    let mut tiles = merge_reports(&reports, &config.owning_clan);
    let layout = Layout::from_tiles(&tiles, config.margin);
    let registry = SpecialRegistry::from_reports(&reports, &config.owning_clan);
    let promoted = promote_specials(&mut tiles, &registry);

    info!(
        clan = %config.owning_clan,
        reports = reports.len(),
        tiles = tiles.len(),
        specials = promoted,
        offset = %layout.offset,
        "map.merged"
    );
    MergedMap { tiles, layout, promoted }
}
