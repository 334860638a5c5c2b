//! Export the ranked TSM table to CSV or JSON.
//!
//! The format follows the file extension (`.csv` or `.json`).

use std::fs::File;
use std::path::Path;

use log::info;
use serde::Serialize;

use crate::error::AppError;
use crate::metric::RankedPlanet;

/// One exported row, in ranking order.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RankedRow {
    pub rank: usize,
    pub name: String,
    pub tsm: f64,
    pub eq_temp_k: Option<f64>,
    pub j_mag: Option<f64>,
    pub radius_earth: Option<f64>,
    pub mass_earth: Option<f64>,
    pub stellar_radius_solar: Option<f64>,
    pub discovery_facility: String,
    pub atm_characterized: bool,
    pub tess_discovered: bool,
}

impl RankedRow {
    pub fn from_ranked(rank: usize, planet: &RankedPlanet<'_>) -> Self {
        let r = planet.record;
        Self {
            rank,
            name: r.name.clone(),
            tsm: planet.tsm,
            eq_temp_k: r.eq_temp_k,
            j_mag: r.j_mag,
            radius_earth: r.radius_earth,
            mass_earth: r.mass_earth,
            stellar_radius_solar: r.stellar_radius_solar,
            discovery_facility: r.discovery_facility.clone(),
            atm_characterized: planet.class.atm_characterized,
            tess_discovered: planet.class.tess_discovered,
        }
    }
}

pub fn to_rows(ranked: &[RankedPlanet<'_>]) -> Vec<RankedRow> {
    ranked
        .iter()
        .enumerate()
        .map(|(i, p)| RankedRow::from_ranked(i + 1, p))
        .collect()
}

/// Write ranked rows to `path`, choosing the format by extension.
pub fn write_ranking(path: &Path, rows: &[RankedRow]) -> Result<(), AppError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => write_csv(path, rows)?,
        "json" => write_json(path, rows)?,
        other => {
            return Err(AppError::usage(format!(
                "Unsupported export extension '.{other}' (expected .csv or .json)."
            )));
        }
    }

    info!("Wrote {} ranked planets to {}", rows.len(), path.display());
    Ok(())
}

fn write_csv(path: &Path, rows: &[RankedRow]) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| AppError::external(format!("Failed to create export CSV '{}': {e}", path.display())))?;
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| AppError::external(format!("Failed to write export CSV row: {e}")))?;
    }
    writer
        .flush()
        .map_err(|e| AppError::external(format!("Failed to flush export CSV: {e}")))?;
    Ok(())
}

fn write_json(path: &Path, rows: &[RankedRow]) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::external(format!("Failed to create export JSON '{}': {e}", path.display())))?;
    serde_json::to_writer_pretty(file, rows)
        .map_err(|e| AppError::external(format!("Failed to write export JSON: {e}")))?;
    Ok(())
}
