//! Shared pipeline steps used by every subcommand.
//!
//! catalog (input / cache / archive) -> ingest -> score -> rank -> figure
//!
//! The subcommand handlers in `app` only decide what to print and where to write.

use chrono::Local;

use crate::data::{ArchiveClient, CatalogFile, resolve_catalog, small_warm_worlds_query};
use crate::domain::{CatalogConfig, MassPlotConfig, PlanetRecord, TeqPlotConfig};
use crate::error::AppError;
use crate::io::{IngestedCatalog, load_catalog};
use crate::metric::{RankedPlanet, ordered_unique_by_metric, score_records, unique_by_name};
use crate::models::load_curves;
use crate::plot::{Figure, mass_radius_figure, teq_radius_figure};

/// The catalog for this run and where it came from.
#[derive(Debug, Clone)]
pub struct CatalogRun {
    pub source: CatalogFile,
    pub catalog: IngestedCatalog,
}

impl CatalogRun {
    pub fn records(&self) -> &[PlanetRecord] {
        &self.catalog.records
    }
}

/// Locate (fetching if needed) and ingest the catalog.
pub fn load_catalog_run(config: &CatalogConfig) -> Result<CatalogRun, AppError> {
    validate_catalog_config(config)?;

    let today = Local::now().date_naive();
    let source = resolve_catalog(config, today, || {
        let client = ArchiveClient::from_env()?;
        client.fetch_csv(&small_warm_worlds_query(config.max_teq_k, config.max_radius_earth))
    })?;
    let catalog = load_catalog(&source.path)?;

    Ok(CatalogRun { source, catalog })
}

pub fn validate_catalog_config(config: &CatalogConfig) -> Result<(), AppError> {
    if !(config.max_teq_k.is_finite() && config.max_teq_k > 0.0) {
        return Err(AppError::usage("--max-teq must be a positive number."));
    }
    if !(config.max_radius_earth.is_finite() && config.max_radius_earth > 0.0) {
        return Err(AppError::usage("--max-radius must be a positive number."));
    }
    Ok(())
}

/// Unique planets in descending TSM order.
pub fn rank_planets(records: &[PlanetRecord]) -> Vec<RankedPlanet<'_>> {
    ordered_unique_by_metric(score_records(records)).collect()
}

pub fn build_teq_figure(ranked: &[RankedPlanet<'_>], config: &TeqPlotConfig) -> Figure {
    teq_radius_figure(ranked, config.highlight.as_ref())
}

/// Mass-radius figure: first row per name that has a mass, in catalog order.
pub fn build_mass_figure(records: &[PlanetRecord], config: &MassPlotConfig) -> Result<Figure, AppError> {
    let curves = load_curves(&config.models_dir)?;
    let planets = unique_by_name(records.iter().filter(|r| r.mass_earth.is_some()));
    Ok(mass_radius_figure(planets, &curves, config.highlight.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::CatalogOrigin;
    use crate::plot::figure::Element;
    use std::fs;
    use std::path::PathBuf;

    const CATALOG: &str = "\
pl_name,disc_facility,pl_rade,pl_radeerr1,pl_radeerr2,pl_bmasse,pl_bmasseerr1,pl_bmasseerr2,pl_eqt,sy_jmag,st_rad
GJ 1214 b,MEarth Project,2.742,0.05,-0.05,8.17,0.43,-0.43,596,9.750,0.215
GJ 1214 b,MEarth Project,2.85,0.2,-0.2,6.26,0.9,-0.9,555,9.750,0.211
TOI-270 d,Transiting Exoplanet Survey Satellite (TESS),2.13,0.06,-0.06,4.78,0.43,-0.43,387,9.099,0.38
Kepler-138 d,Kepler,1.51,0.04,-0.04,,,,,12.1,0.53
";

    fn input_config(dir: &std::path::Path) -> CatalogConfig {
        let path = dir.join("catalog.csv");
        fs::write(&path, CATALOG).unwrap();
        CatalogConfig {
            input: Some(path),
            cache_dir: dir.to_path_buf(),
            ..CatalogConfig::default()
        }
    }

    #[test]
    fn ranks_unique_planets_from_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let run = load_catalog_run(&input_config(dir.path())).unwrap();
        assert_eq!(run.source.origin, CatalogOrigin::Input);
        assert_eq!(run.records().len(), 4);

        let ranked = rank_planets(run.records());
        let names: Vec<&str> = ranked.iter().map(|r| r.record.name.as_str()).collect();

        // GJ 1214 b appears once (its higher-TSM solution); Kepler-138 d has no mass.
        assert_eq!(names.len(), 2);
        assert!(names.contains(&"GJ 1214 b"));
        assert!(names.contains(&"TOI-270 d"));
        assert!(ranked[0].tsm >= ranked[1].tsm);

        let gj = ranked.iter().find(|r| r.record.name == "GJ 1214 b").unwrap();
        assert_eq!(gj.record.mass_earth, Some(6.26));
        assert!(gj.class.atm_characterized);

        let toi = ranked.iter().find(|r| r.record.name == "TOI-270 d").unwrap();
        assert!(toi.class.tess_discovered);
    }

    #[test]
    fn mass_figure_uses_first_catalog_row_per_name() {
        let dir = tempfile::tempdir().unwrap();
        let run = load_catalog_run(&input_config(dir.path())).unwrap();
        let config = MassPlotConfig {
            output: PathBuf::from("unused.png"),
            models_dir: dir.path().join("no-models"),
            highlight: None,
        };

        let fig = build_mass_figure(run.records(), &config).unwrap();
        let marker_x: Vec<f64> = fig
            .elements()
            .into_iter()
            .filter_map(|e| match e {
                Element::Marker(m) => Some(m.at.0),
                _ => None,
            })
            .collect();
        assert_eq!(marker_x, vec![8.17, 4.78]);
    }

    #[test]
    fn invalid_query_bounds_are_rejected() {
        let config = CatalogConfig {
            max_teq_k: f64::NAN,
            ..CatalogConfig::default()
        };
        assert_eq!(load_catalog_run(&config).unwrap_err().exit_code(), 2);

        let config = CatalogConfig {
            max_radius_earth: 0.0,
            ..CatalogConfig::default()
        };
        assert_eq!(validate_catalog_config(&config).unwrap_err().exit_code(), 2);
    }
}
