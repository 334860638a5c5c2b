//! Command-line parsing.
//!
//! Argument parsing and command dispatch stay separate from the metric and
//! plotting code; `app` converts these structs into the config types in `domain`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "ww",
    version,
    about = "Small warm exoplanets: TSM ranking and mass/temperature-radius diagrams"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Plot equilibrium temperature vs radius with TSM-sized markers.
    Teq(TeqArgs),
    /// Plot mass vs radius with composition curves.
    Mass(MassArgs),
    /// Print the TSM ranking (optionally export it).
    Rank(RankArgs),
    /// Download today's catalog into the cache without plotting.
    Fetch(CatalogArgs),
}

/// Where the catalog comes from.
#[derive(Debug, Args, Clone)]
pub struct CatalogArgs {
    /// Read this catalog CSV instead of the dated cache (never queries the archive).
    #[arg(long, value_name = "CSV")]
    pub input: Option<PathBuf>,

    /// Directory holding the dated catalog cache.
    #[arg(long, default_value = ".")]
    pub cache_dir: PathBuf,

    /// Query the archive even if today's cache file exists.
    #[arg(long)]
    pub refresh: bool,

    /// Upper bound on equilibrium temperature (K) in the archive query.
    #[arg(long, default_value_t = 1000.0)]
    pub max_teq: f64,

    /// Upper bound on planet radius (Earth radii) in the archive query.
    #[arg(long, default_value_t = 4.0)]
    pub max_radius: f64,
}

#[derive(Debug, Args, Clone)]
pub struct TeqArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Output figure (.png or .svg).
    #[arg(short, long, default_value = "teq_rp.png")]
    pub output: PathBuf,

    /// Do not draw the highlighted target planet.
    #[arg(long)]
    pub no_highlight: bool,

    /// Do not print the ranked TSM table.
    #[arg(long)]
    pub no_list: bool,
}

#[derive(Debug, Args, Clone)]
pub struct MassArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Output figure (.png or .svg).
    #[arg(short, long, default_value = "mp_rp.png")]
    pub output: PathBuf,

    /// Directory with composition model tables (Fe.txt, Earth.txt, ...).
    #[arg(long, default_value = "data")]
    pub models_dir: PathBuf,

    /// Do not draw the highlighted target planet.
    #[arg(long)]
    pub no_highlight: bool,
}

#[derive(Debug, Args, Clone)]
pub struct RankArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Show only the top-N planets.
    #[arg(long)]
    pub top: Option<usize>,

    /// Export the full ranking to CSV or JSON (by extension).
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,
}
