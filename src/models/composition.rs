//! Theoretical mass-radius composition curves.
//!
//! Each model is a two-column text table (`mass radius`, Earth units) stored as
//! `<models_dir>/<stem>.txt`. A table is turned into a plottable curve by:
//! - linear interpolation with extrapolation
//! - resampling on a log-spaced mass grid between the table extremes
//! - Gaussian smoothing along the resampled grid (sigma in samples)

use std::fs;
use std::path::Path;

use log::{debug, warn};

use crate::domain::CompositionModel;
use crate::error::AppError;
use crate::math::{DEFAULT_TRUNCATE, LinearInterp, gaussian_filter1d, logspace};

pub const CURVE_SAMPLES: usize = 10_000;
pub const SMOOTHING_SIGMA: f64 = 300.0;

/// A resampled, smoothed curve ready for drawing.
#[derive(Debug, Clone)]
pub struct CompositionCurve {
    pub model: CompositionModel,
    /// `(mass, radius)` pairs with increasing mass.
    pub points: Vec<(f64, f64)>,
}

/// Load every model table found in `models_dir`.
///
/// Missing tables are skipped with a warning; unreadable or malformed ones are errors.
pub fn load_curves(models_dir: &Path) -> Result<Vec<CompositionCurve>, AppError> {
    let mut curves = Vec::new();
    for model in CompositionModel::ALL {
        let path = models_dir.join(format!("{}.txt", model.file_stem()));
        if !path.exists() {
            warn!(
                "Composition model '{}' not found at {}; skipping.",
                model.label(),
                path.display()
            );
            continue;
        }
        let table = read_model_table(&path)?;
        curves.push(build_curve(model, table, CURVE_SAMPLES, SMOOTHING_SIGMA)?);
        debug!("Loaded composition model '{}' from {}", model.label(), path.display());
    }
    Ok(curves)
}

/// Parse a whitespace-separated `mass radius` table. Extra columns are ignored.
pub fn read_model_table(path: &Path) -> Result<Vec<(f64, f64)>, AppError> {
    let text = fs::read_to_string(path)
        .map_err(|e| AppError::usage(format!("Failed to read model table '{}': {e}", path.display())))?;

    let mut table = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut cols = line.split_whitespace();
        let (Some(m), Some(r)) = (cols.next(), cols.next()) else {
            return Err(AppError::usage(format!(
                "{}:{}: expected two columns (mass radius).",
                path.display(),
                idx + 1
            )));
        };
        let parse = |s: &str| {
            s.parse::<f64>().map_err(|e| {
                AppError::usage(format!("{}:{}: invalid number '{s}': {e}", path.display(), idx + 1))
            })
        };
        table.push((parse(m)?, parse(r)?));
    }

    Ok(table)
}

/// Resample and smooth a model table into a curve of `samples` points.
pub fn build_curve(
    model: CompositionModel,
    table: Vec<(f64, f64)>,
    samples: usize,
    sigma: f64,
) -> Result<CompositionCurve, AppError> {
    let interp = LinearInterp::new(table).ok_or_else(|| {
        AppError::usage(format!(
            "Model '{}' needs at least two distinct finite masses.",
            model.label()
        ))
    })?;

    if interp.x_min() <= 0.0 {
        return Err(AppError::usage(format!(
            "Model '{}' has non-positive masses; cannot build a log-spaced grid.",
            model.label()
        )));
    }

    let masses = logspace(interp.x_min().log10(), interp.x_max().log10(), samples);
    let radii: Vec<f64> = masses.iter().map(|&m| interp.eval(m)).collect();
    let smoothed = gaussian_filter1d(&radii, sigma, DEFAULT_TRUNCATE);

    Ok(CompositionCurve {
        model,
        points: masses.into_iter().zip(smoothed).collect(),
    })
}
