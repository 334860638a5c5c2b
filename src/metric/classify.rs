//! Display classification of emitted planets.

use crate::domain::{Classification, PlanetRecord};

/// Planets with published transmission spectra.
pub const ATM_CHARACTERIZED: [&str; 15] = [
    "GJ 1214 b",
    "K2-18 b",
    "HD 3167 c",
    "HD 97658 b",
    "LHS 1140 b",
    "Kepler-51 b",
    "Kepler-51 d",
    "GJ 436 b",
    "GJ 3470 b",
    "HAT-P-11 b",
    "GJ 1132 b",
    "TRAPPIST-1 d",
    "TRAPPIST-1 e",
    "TRAPPIST-1 f",
    "TRAPPIST-1 g",
];

pub fn classify(record: &PlanetRecord) -> Classification {
    Classification {
        atm_characterized: ATM_CHARACTERIZED.contains(&record.name.as_str()),
        tess_discovered: record.discovery_facility.contains("TESS"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, facility: &str) -> PlanetRecord {
        PlanetRecord {
            name: name.to_string(),
            discovery_facility: facility.to_string(),
            ..PlanetRecord::default()
        }
    }

    #[test]
    fn flags_are_independent() {
        let c = classify(&record("K2-18 b", "K2"));
        assert!(c.atm_characterized);
        assert!(!c.tess_discovered);

        let c = classify(&record("TOI-270 d", "Transiting Exoplanet Survey Satellite (TESS)"));
        assert!(!c.atm_characterized);
        assert!(c.tess_discovered);

        let c = classify(&record("TRAPPIST-1 e", "TESS"));
        assert!(c.atm_characterized && c.tess_discovered);
    }

    #[test]
    fn name_match_is_exact() {
        assert!(!classify(&record("K2-18b", "")).atm_characterized);
        assert!(!classify(&record("GJ 1214 b", "tess")).tess_discovered);
    }
}
