//! Dated on-disk cache of the catalog table.
//!
//! The archive is queried at most once per day: the CSV body is stored verbatim
//! as `all_small_warm_worlds_<DD-MM-YYYY>.csv` in the cache directory and reused
//! until the date changes or a refresh is requested.

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use log::info;

use crate::domain::CatalogConfig;
use crate::error::AppError;

/// How the catalog file for this run was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogOrigin {
    /// User-supplied `--input` file.
    Input,
    /// Today's cache file already existed.
    Cached,
    /// Freshly queried and written to the cache.
    Fetched,
}

#[derive(Debug, Clone)]
pub struct CatalogFile {
    pub path: PathBuf,
    pub origin: CatalogOrigin,
}

pub fn cache_file_name(date: NaiveDate) -> String {
    format!("all_small_warm_worlds_{}.csv", date.format("%d-%m-%Y"))
}

/// Locate the catalog CSV, calling `fetch` only when no usable file exists.
pub fn resolve_catalog<F>(config: &CatalogConfig, today: NaiveDate, fetch: F) -> Result<CatalogFile, AppError>
where
    F: FnOnce() -> Result<String, AppError>,
{
    if let Some(input) = &config.input {
        if !input.is_file() {
            return Err(AppError::usage(format!(
                "Input catalog '{}' does not exist.",
                input.display()
            )));
        }
        return Ok(CatalogFile {
            path: input.clone(),
            origin: CatalogOrigin::Input,
        });
    }

    let path = config.cache_dir.join(cache_file_name(today));
    if path.is_file() && !config.refresh {
        info!("Using cached catalog {}", path.display());
        return Ok(CatalogFile {
            path,
            origin: CatalogOrigin::Cached,
        });
    }

    let body = fetch()?;
    // Only a parseable catalog table is cached.
    crate::io::read_catalog(body.as_bytes()).map_err(|e| {
        AppError::external(format!("Archive response is not a catalog table: {e}"))
    })?;

    fs::create_dir_all(&config.cache_dir).map_err(|e| {
        AppError::external(format!(
            "Failed to create cache dir '{}': {e}",
            config.cache_dir.display()
        ))
    })?;
    fs::write(&path, body)
        .map_err(|e| AppError::external(format!("Failed to write cache '{}': {e}", path.display())))?;
    info!("Saved catalog to {}", path.display());

    Ok(CatalogFile {
        path,
        origin: CatalogOrigin::Fetched,
    })
}
