//! Shared domain types.
//!
//! Records are transient: they are produced once per run from the catalog table,
//! scored, rendered, and dropped. Only the catalog table itself is cached on disk.

use std::path::PathBuf;

use serde::Serialize;

/// Equilibrium temperatures (K) where photochemical hazes may mute spectra.
pub const HAZY_ZONE_K: (f64, f64) = (270.0, 600.0);

/// One catalog row.
///
/// Names are not unique: the archive lists a planet once per discovery/solution
/// reference. Numeric fields are `None` when the archive left them blank.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanetRecord {
    pub name: String,
    pub discovery_facility: String,

    /// Planet radius (R⊕).
    pub radius_earth: Option<f64>,
    pub radius_err_up: Option<f64>,
    /// Lower radius error, stored as an absolute value.
    pub radius_err_down: Option<f64>,

    /// Planet mass (M⊕).
    pub mass_earth: Option<f64>,
    pub mass_err_up: Option<f64>,
    /// Lower mass error, stored as an absolute value.
    pub mass_err_down: Option<f64>,

    /// Equilibrium temperature (K).
    pub eq_temp_k: Option<f64>,
    /// Host star radius (R☉).
    pub stellar_radius_solar: Option<f64>,
    /// Host star apparent J-band magnitude.
    pub j_mag: Option<f64>,
}

/// Display-only classification of an emitted planet.
///
/// The two flags are independent: a TESS discovery can also be characterized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub atm_characterized: bool,
    pub tess_discovered: bool,
}

/// A planet drawn on top of the catalog population (the "our target" marker).
#[derive(Debug, Clone, PartialEq)]
pub struct Highlight {
    pub name: String,
    pub radius_earth: f64,
    pub radius_err: f64,
    pub mass_earth: f64,
    pub mass_err: f64,
    pub eq_temp_k: f64,
    pub tsm: f64,
}

impl Highlight {
    /// TOI-1759 b, the planet these diagrams were originally made for.
    pub fn toi_1759b() -> Self {
        Self {
            name: "TOI-1759b".to_string(),
            radius_earth: 3.16,
            radius_err: 0.11,
            mass_earth: 10.84,
            mass_err: 1.95,
            eq_temp_k: 443.0,
            tsm: 80.855296,
        }
    }
}

/// Theoretical composition curves overlaid on the mass-radius diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompositionModel {
    Fe,
    Earth,
    RockWater,
    H2,
    H2Five,
}

impl CompositionModel {
    pub const ALL: [CompositionModel; 5] = [
        CompositionModel::Fe,
        CompositionModel::Earth,
        CompositionModel::RockWater,
        CompositionModel::H2,
        CompositionModel::H2Five,
    ];

    /// File stem of the model table inside the models directory.
    pub fn file_stem(self) -> &'static str {
        match self {
            CompositionModel::Fe => "Fe",
            CompositionModel::Earth => "Earth",
            CompositionModel::RockWater => "RockWater",
            CompositionModel::H2 => "H2",
            CompositionModel::H2Five => "H2-5",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CompositionModel::Fe => "100% Fe",
            CompositionModel::Earth => "100% MgSiO₃",
            CompositionModel::RockWater => "100% H₂O",
            CompositionModel::H2 => "2% H₂",
            CompositionModel::H2Five => "5% H₂",
        }
    }
}

/// Where the catalog table comes from and which planets the query selects.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Read this file instead of the dated cache (never fetches).
    pub input: Option<PathBuf>,
    pub cache_dir: PathBuf,
    /// Re-query the archive even if today's cache file exists.
    pub refresh: bool,
    pub max_teq_k: f64,
    pub max_radius_earth: f64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            input: None,
            cache_dir: PathBuf::from("."),
            refresh: false,
            max_teq_k: 1000.0,
            max_radius_earth: 4.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TeqPlotConfig {
    pub output: PathBuf,
    pub highlight: Option<Highlight>,
    /// Print the ranked TSM table while plotting.
    pub list: bool,
}

#[derive(Debug, Clone)]
pub struct MassPlotConfig {
    pub output: PathBuf,
    pub models_dir: PathBuf,
    pub highlight: Option<Highlight>,
}

#[derive(Debug, Clone)]
pub struct RankConfig {
    /// Print at most this many rows (`None` prints everything).
    pub top: Option<usize>,
    pub export: Option<PathBuf>,
}
