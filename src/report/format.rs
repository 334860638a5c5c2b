//! Formatted terminal output for the TSM ranking.
//!
//! Marks in the first column:
//! - `**` equilibrium temperature below the upper edge of the hazy zone
//! - `^^` atmosphere already characterized

use crate::domain::HAZY_ZONE_K;
use crate::metric::RankedPlanet;

/// Format ranked planets as a fixed-width table (in the given order).
pub fn format_ranking(planets: &[RankedPlanet<'_>]) -> String {
    let mut out = String::new();
    out.push_str(
        format!(
            "{:<4} {:>4} {:<24} {:>7} {:>6} {:>6} {:>9} {:>7} {:>7}",
            "", "#", "name", "teq", "jmag", "rp", "tsm", "mass", "rstar"
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(&format!(
        "{:-<4} {:-<4} {:-<24} {:-<7} {:-<6} {:-<6} {:-<9} {:-<7} {:-<7}\n",
        "", "", "", "", "", "", "", "", ""
    ));

    for (idx, p) in planets.iter().enumerate() {
        let r = p.record;
        out.push_str(
            format!(
                "{:<4} {:>4} {:<24} {:>7} {:>6} {:>6} {:>9} {:>7} {:>7}",
                marks(p),
                idx + 1,
                truncate(&r.name, 24),
                fmt_opt(r.eq_temp_k, 0),
                fmt_opt(r.j_mag, 2),
                fmt_opt(r.radius_earth, 2),
                format!("{:.2}", p.tsm),
                fmt_opt(r.mass_earth, 2),
                fmt_opt(r.stellar_radius_solar, 3),
            )
            .trim_end(),
        );
        out.push('\n');
    }

    out
}

/// One-line summary printed after the table.
pub fn format_summary(planets: &[RankedPlanet<'_>]) -> String {
    let hazy = planets.iter().filter(|p| in_hazy_band(p)).count();
    let charact = planets.iter().filter(|p| p.class.atm_characterized).count();
    let tess = planets.iter().filter(|p| p.class.tess_discovered).count();
    format!(
        "{} planets ranked | {hazy} below {:.0} K | {charact} characterized | {tess} from TESS",
        planets.len(),
        HAZY_ZONE_K.1
    )
}

fn marks(p: &RankedPlanet<'_>) -> String {
    let mut m = String::new();
    if in_hazy_band(p) {
        m.push_str("**");
    }
    if p.class.atm_characterized {
        m.push_str("^^");
    }
    m
}

fn in_hazy_band(p: &RankedPlanet<'_>) -> bool {
    p.record.eq_temp_k.is_some_and(|t| t < HAZY_ZONE_K.1)
}

fn fmt_opt(v: Option<f64>, decimals: usize) -> String {
    match v {
        Some(v) => format!("{v:.decimals$}"),
        None => "-".to_string(),
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max - 1).collect();
    out.push('.');
    out
}
