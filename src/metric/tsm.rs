//! Transmission spectroscopy metric (Kempton et al. 2018).
//!
//! `TSM = S × (Rp³ × Teq) / (Mp × R*²) × 10^(−mJ/5)`
//!
//! with `Rp`/`Mp` in Earth units, `R*` in solar radii, and `S` a radius-bucketed
//! scale factor. No bounds checking: a zero mass or stellar radius yields a
//! non-finite value which is passed through as-is.

use crate::domain::PlanetRecord;

/// Radius-bucketed scale factor.
///
/// The buckets leave `2.75` itself uncovered, so it falls through to the default
/// of `1.0` together with everything at or above `4.0` (and NaN).
pub fn scale_factor(radius: f64) -> f64 {
    if radius < 1.5 {
        0.190
    } else if (1.5..2.75).contains(&radius) {
        1.26
    } else if radius > 2.75 && radius < 4.0 {
        1.28
    } else {
        1.0
    }
}

/// TSM for a single planet.
pub fn tsm(radius: f64, mass: f64, eq_temp: f64, stellar_radius: f64, j_mag: f64) -> f64 {
    scale_factor(radius) * ((radius.powi(3) * eq_temp) / (mass * stellar_radius.powi(2)))
        * 10f64.powf(-j_mag / 5.0)
}

/// Column-wise TSM over parallel per-planet sequences.
///
/// Output order matches input order. Callers pass equal-length columns; NaN
/// inputs produce NaN outputs.
pub fn compute_tsm(
    radius: &[f64],
    mass: &[f64],
    eq_temp: &[f64],
    stellar_radius: &[f64],
    j_mag: &[f64],
) -> Vec<f64> {
    debug_assert!(
        [mass.len(), eq_temp.len(), stellar_radius.len(), j_mag.len()]
            .iter()
            .all(|&n| n == radius.len()),
        "TSM input columns must have equal length"
    );

    radius
        .iter()
        .zip(mass)
        .zip(eq_temp)
        .zip(stellar_radius)
        .zip(j_mag)
        .map(|((((&r, &m), &t), &rs), &j)| tsm(r, m, t, rs, j))
        .collect()
}

/// A catalog row paired with its TSM (`None` when any input is missing).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scored<'a> {
    pub record: &'a PlanetRecord,
    pub tsm: Option<f64>,
}

/// Score every record, keeping input order.
pub fn score_records(records: &[PlanetRecord]) -> Vec<Scored<'_>> {
    let column = |f: fn(&PlanetRecord) -> Option<f64>| -> Vec<f64> {
        records.iter().map(|r| f(r).unwrap_or(f64::NAN)).collect()
    };

    let values = compute_tsm(
        &column(|r| r.radius_earth),
        &column(|r| r.mass_earth),
        &column(|r| r.eq_temp_k),
        &column(|r| r.stellar_radius_solar),
        &column(|r| r.j_mag),
    );

    records
        .iter()
        .zip(values)
        .map(|(record, value)| Scored {
            record,
            tsm: has_tsm_inputs(record).then_some(value),
        })
        .collect()
}

fn has_tsm_inputs(record: &PlanetRecord) -> bool {
    record.radius_earth.is_some()
        && record.mass_earth.is_some()
        && record.eq_temp_k.is_some()
        && record.stellar_radius_solar.is_some()
        && record.j_mag.is_some()
}
