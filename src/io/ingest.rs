//! Catalog CSV ingest.
//!
//! Turns the archive's CSV table into `PlanetRecord`s:
//! - **Strict schema** only for `pl_name` (exit code 2 when the column is absent)
//! - **Missing numbers are data**, not errors: blank or non-finite cells become `None`
//! - **Row-level validation** (skip bad rows, but report what happened)

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use log::{info, warn};

use crate::domain::PlanetRecord;
use crate::error::AppError;

/// A row-level error encountered during ingest.
#[derive(Debug, Clone)]
pub struct RowError {
    pub line: usize,
    pub message: String,
}

/// Ingest output: records in catalog order + row errors.
#[derive(Debug, Clone)]
pub struct IngestedCatalog {
    pub records: Vec<PlanetRecord>,
    pub row_errors: Vec<RowError>,
    pub rows_read: usize,
}

impl IngestedCatalog {
    pub fn rows_used(&self) -> usize {
        self.records.len()
    }
}

/// Load the catalog CSV at `path`.
pub fn load_catalog(path: &Path) -> Result<IngestedCatalog, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::usage(format!("Failed to open catalog '{}': {e}", path.display())))?;
    let catalog = read_catalog(file)?;

    info!(
        "Read {} rows from {} ({} used)",
        catalog.rows_read,
        path.display(),
        catalog.rows_used()
    );
    for err in &catalog.row_errors {
        warn!("{}:{}: {}", path.display(), err.line, err.message);
    }

    if catalog.records.is_empty() {
        return Err(AppError::no_data(format!(
            "No usable planets in catalog '{}'.",
            path.display()
        )));
    }

    Ok(catalog)
}

/// Parse catalog CSV from any reader. An empty table is not an error here.
pub fn read_catalog<R: Read>(reader: R) -> Result<IngestedCatalog, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| AppError::usage(format!("Failed to read catalog headers: {e}")))?
        .clone();
    let header_map = build_header_map(&headers);

    if !header_map.contains_key("pl_name") {
        return Err(AppError::usage("Missing required column: `pl_name`"));
    }

    let mut records = Vec::new();
    let mut row_errors = Vec::new();
    let mut rows_read = 0usize;

    for (idx, result) in reader.records().enumerate() {
        // +2: records() starts after the header and lines are 1-based.
        let line = idx + 2;
        rows_read += 1;

        match result {
            Ok(record) => match parse_row(&record, &header_map) {
                Ok(planet) => records.push(planet),
                Err(message) => row_errors.push(RowError { line, message }),
            },
            Err(e) => row_errors.push(RowError {
                line,
                message: format!("CSV parse error: {e}"),
            }),
        }
    }

    Ok(IngestedCatalog {
        records,
        row_errors,
        rows_read,
    })
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header_name(name), idx))
        .collect()
}

fn normalize_header_name(name: &str) -> String {
    // Spreadsheet round-trips can leave a UTF-8 BOM on the first header.
    let name = name.trim().trim_start_matches('\u{feff}');
    name.to_ascii_lowercase()
}

fn parse_row(record: &StringRecord, header_map: &HashMap<String, usize>) -> Result<PlanetRecord, String> {
    let name = get_optional(record, header_map, "pl_name")
        .map(unquote)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| "Missing planet name.".to_string())?
        .to_string();

    let num = |column: &str| parse_opt_f64(get_optional(record, header_map, column));

    Ok(PlanetRecord {
        name,
        discovery_facility: get_optional(record, header_map, "disc_facility")
            .map(unquote)
            .unwrap_or_default()
            .to_string(),
        radius_earth: num("pl_rade"),
        radius_err_up: num("pl_radeerr1"),
        radius_err_down: num("pl_radeerr2").map(f64::abs),
        mass_earth: num("pl_bmasse"),
        mass_err_up: num("pl_bmasseerr1"),
        mass_err_down: num("pl_bmasseerr2").map(f64::abs),
        eq_temp_k: num("pl_eqt"),
        stellar_radius_solar: num("st_rad"),
        j_mag: num("sy_jmag"),
    })
}

fn get_optional<'a>(record: &'a StringRecord, header_map: &HashMap<String, usize>, name: &str) -> Option<&'a str> {
    let idx = header_map.get(name)?;
    record.get(*idx).map(str::trim).filter(|s| !s.is_empty())
}

/// Strip one level of surrounding quotes left in hand-edited tables.
fn unquote(s: &str) -> &str {
    s.strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(s)
        .trim()
}

fn parse_opt_f64(s: Option<&str>) -> Option<f64> {
    let v = s?.parse::<f64>().ok()?;
    if v.is_finite() { Some(v) } else { None }
}
