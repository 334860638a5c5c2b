//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - loads (or fetches) the catalog
//! - ranks planets by TSM
//! - prints reports and writes figures/exports

use clap::Parser;
use log::info;

use crate::cli::{CatalogArgs, Command, MassArgs, RankArgs, TeqArgs};
use crate::domain::{CatalogConfig, Highlight, MassPlotConfig, RankConfig, TeqPlotConfig};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `ww` binary.
pub fn run() -> Result<(), AppError> {
    let cli = crate::cli::Cli::parse();

    match cli.command {
        Command::Teq(args) => handle_teq(args),
        Command::Mass(args) => handle_mass(args),
        Command::Rank(args) => handle_rank(args),
        Command::Fetch(args) => handle_fetch(args),
    }
}

fn handle_teq(args: TeqArgs) -> Result<(), AppError> {
    let catalog = catalog_config_from_args(&args.catalog);
    let config = teq_config_from_args(&args);

    let run = pipeline::load_catalog_run(&catalog)?;
    let ranked = pipeline::rank_planets(run.records());

    if config.list {
        println!("{}", crate::report::format_ranking(&ranked));
        println!("{}", crate::report::format_summary(&ranked));
    }

    let fig = pipeline::build_teq_figure(&ranked, &config);
    crate::plot::render_figure(&fig, &config.output)
}

fn handle_mass(args: MassArgs) -> Result<(), AppError> {
    let catalog = catalog_config_from_args(&args.catalog);
    let config = mass_config_from_args(&args);

    let run = pipeline::load_catalog_run(&catalog)?;
    let fig = pipeline::build_mass_figure(run.records(), &config)?;
    crate::plot::render_figure(&fig, &config.output)
}

fn handle_rank(args: RankArgs) -> Result<(), AppError> {
    let catalog = catalog_config_from_args(&args.catalog);
    let config = RankConfig {
        top: args.top,
        export: args.export.clone(),
    };

    let run = pipeline::load_catalog_run(&catalog)?;
    let ranked = pipeline::rank_planets(run.records());

    let shown = config.top.map_or(ranked.len(), |n| n.min(ranked.len()));
    println!("{}", crate::report::format_ranking(&ranked[..shown]));
    println!("{}", crate::report::format_summary(&ranked));

    // Exports always carry the full ranking.
    if let Some(path) = &config.export {
        crate::io::write_ranking(path, &crate::io::to_rows(&ranked))?;
    }

    Ok(())
}

fn handle_fetch(args: CatalogArgs) -> Result<(), AppError> {
    let catalog = catalog_config_from_args(&args);
    let run = pipeline::load_catalog_run(&catalog)?;
    info!(
        "Catalog ready at {} ({:?}, {} planets)",
        run.source.path.display(),
        run.source.origin,
        run.catalog.rows_used()
    );
    Ok(())
}

pub fn catalog_config_from_args(args: &CatalogArgs) -> CatalogConfig {
    CatalogConfig {
        input: args.input.clone(),
        cache_dir: args.cache_dir.clone(),
        refresh: args.refresh,
        max_teq_k: args.max_teq,
        max_radius_earth: args.max_radius,
    }
}

pub fn teq_config_from_args(args: &TeqArgs) -> TeqPlotConfig {
    TeqPlotConfig {
        output: args.output.clone(),
        highlight: (!args.no_highlight).then(Highlight::toi_1759b),
        list: !args.no_list,
    }
}

pub fn mass_config_from_args(args: &MassArgs) -> MassPlotConfig {
    MassPlotConfig {
        output: args.output.clone(),
        models_dir: args.models_dir.clone(),
        highlight: (!args.no_highlight).then(Highlight::toi_1759b),
    }
}
