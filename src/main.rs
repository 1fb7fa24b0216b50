//! `clanmap`: merge clan turn reports into one hex map.
//!
//! Logs go to stderr so `--dump` output on stdout can be piped.

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use clanmap::config::RenderConfig;
use clanmap::pipeline::{merge, read_reports};
use clanmap::render::{JsonMapWriter, MapWriter};
use clanmap::report::TurnId;

#[derive(Parser, Debug)]
#[command(author, version, about = "Merge clan turn reports into a hex map", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate and merge report files, optionally writing the map.
    Render(RenderArgs),
}

#[derive(clap::Args, Debug)]
struct RenderArgs {
    /// Report files (JSON) to merge.
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Clan the map is rendered for; its reports win within a turn.
    #[arg(long)]
    clan: String,

    /// Write the rendered map here. Without it, input is only validated.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print the merged tiles as JSON on stdout.
    #[arg(long)]
    dump: bool,

    /// Ignore reports for turns after this one (YYYY-MM).
    #[arg(long)]
    max_turn: Option<TurnId>,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long)]
    verbose: bool,
}

impl RenderArgs {
    fn config(&self) -> RenderConfig {
        RenderConfig {
            max_turn: self.max_turn,
            output: self.output.clone(),
            dump: self.dump,
            ..RenderConfig::new(self.clan.clone())
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Render(args) => {
            init_logging(args.verbose);
            render(&args)
        }
    }
}

fn render(args: &RenderArgs) -> Result<()> {
    let config = args.config();
    let reports = read_reports(args.files.as_slice()).context("report input rejected")?;

    if !config.needs_merge() {
        info!(files = args.files.len(), "reports.valid");
        return Ok(());
    }

    let merged = merge(reports, &config);

    if config.dump {
        let tiles: Vec<_> = merged.tiles.values().collect();
        let stdout = io::stdout();
        let mut out = stdout.lock();
        serde_json::to_writer_pretty(&mut out, &tiles).context("failed to dump tiles")?;
        writeln!(out).context("failed to dump tiles")?;
    }

    if let Some(path) = &config.output {
        let mut writer = JsonMapWriter::new(path);
        writer
            .write(&merged.render_map())
            .with_context(|| format!("failed to write map to {}", path.display()))?;
    }
    Ok(())
}
