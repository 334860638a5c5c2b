//! Deduplicated traversal orders used by the renderers.
//!
//! The archive lists a planet once per solution reference, so both diagrams draw
//! each name once: the first occurrence in traversal order wins and later rows
//! with the same name are dropped silently.

use std::collections::HashSet;

use crate::domain::{Classification, PlanetRecord};
use crate::metric::classify::classify;
use crate::metric::tsm::Scored;

/// Anything that borrows a catalog row for `'a`.
pub trait AsRecord<'a> {
    fn record(&self) -> &'a PlanetRecord;
}

impl<'a> AsRecord<'a> for &'a PlanetRecord {
    fn record(&self) -> &'a PlanetRecord {
        *self
    }
}

impl<'a> AsRecord<'a> for Scored<'a> {
    fn record(&self) -> &'a PlanetRecord {
        self.record
    }
}

/// Iterator adapter yielding only the first item seen for each planet name.
pub struct UniqueByName<'a, I> {
    inner: I,
    seen: HashSet<&'a str>,
}

impl<'a, I> Iterator for UniqueByName<'a, I>
where
    I: Iterator,
    I::Item: AsRecord<'a>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        for item in self.inner.by_ref() {
            if self.seen.insert(item.record().name.as_str()) {
                return Some(item);
            }
        }
        None
    }
}

pub fn unique_by_name<'a, I>(items: I) -> UniqueByName<'a, I::IntoIter>
where
    I: IntoIterator,
    I::Item: AsRecord<'a>,
{
    UniqueByName {
        inner: items.into_iter(),
        seen: HashSet::new(),
    }
}

/// A planet emitted by [`ordered_unique_by_metric`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedPlanet<'a> {
    pub record: &'a PlanetRecord,
    pub tsm: f64,
    pub class: Classification,
}

impl<'a> AsRecord<'a> for RankedPlanet<'a> {
    fn record(&self) -> &'a PlanetRecord {
        self.record
    }
}

pub type OrderedByMetric<'a> = UniqueByName<'a, std::vec::IntoIter<RankedPlanet<'a>>>;

/// Unique-by-name planets in descending TSM order.
///
/// Rows without a defined TSM (missing input or NaN) are skipped. Ties keep
/// catalog order. The sort happens up front; deduplication runs lazily as the
/// iterator is consumed.
pub fn ordered_unique_by_metric<'a>(rows: impl IntoIterator<Item = Scored<'a>>) -> OrderedByMetric<'a> {
    let mut ranked: Vec<RankedPlanet<'a>> = rows
        .into_iter()
        .filter_map(|s| {
            let tsm = s.tsm.filter(|v| !v.is_nan())?;
            Some(RankedPlanet {
                record: s.record,
                tsm,
                class: classify(s.record),
            })
        })
        .collect();

    ranked.sort_by(|a, b| b.tsm.total_cmp(&a.tsm));

    unique_by_name(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> PlanetRecord {
        PlanetRecord {
            name: name.to_string(),
            ..PlanetRecord::default()
        }
    }

    #[test]
    fn first_occurrence_by_metric_wins() {
        let a_low = named("A");
        let a_high = named("A");
        let b = named("B");
        let rows = vec![
            Scored { record: &a_low, tsm: Some(50.0) },
            Scored { record: &a_high, tsm: Some(80.0) },
            Scored { record: &b, tsm: Some(60.0) },
        ];

        let out: Vec<(&str, f64)> = ordered_unique_by_metric(rows)
            .map(|r| (r.record.name.as_str(), r.tsm))
            .collect();

        assert_eq!(out, vec![("A", 80.0), ("B", 60.0)]);
    }

    #[test]
    fn missing_and_nan_metrics_are_skipped() {
        let a = named("A");
        let b = named("B");
        let c = named("C");
        let d = named("D");
        let rows = vec![
            Scored { record: &a, tsm: None },
            Scored { record: &b, tsm: Some(f64::NAN) },
            Scored { record: &c, tsm: Some(1.0) },
            Scored { record: &d, tsm: Some(f64::INFINITY) },
        ];

        let names: Vec<&str> = ordered_unique_by_metric(rows)
            .map(|r| r.record.name.as_str())
            .collect();

        assert_eq!(names, vec!["D", "C"]);
    }

    #[test]
    fn skipped_row_does_not_claim_the_name() {
        // A row without a metric must not block a later row of the same planet.
        let a_missing = named("A");
        let a = named("A");
        let rows = vec![
            Scored { record: &a_missing, tsm: None },
            Scored { record: &a, tsm: Some(3.0) },
        ];

        assert_eq!(ordered_unique_by_metric(rows).count(), 1);
    }

    #[test]
    fn output_is_unique_and_descending() {
        let names = ["A", "B", "C", "A", "B", "D", "C", "E"];
        let metrics = [5.0, 9.0, 1.0, 7.0, 2.0, 4.0, 8.0, 4.0];
        let records: Vec<PlanetRecord> = names.iter().map(|n| named(n)).collect();
        let rows: Vec<Scored> = records
            .iter()
            .zip(metrics)
            .map(|(record, m)| Scored { record, tsm: Some(m) })
            .collect();

        let out: Vec<RankedPlanet> = ordered_unique_by_metric(rows).collect();

        let mut seen = HashSet::new();
        for r in &out {
            assert!(seen.insert(r.record.name.clone()), "duplicate {}", r.record.name);
        }
        assert!(out.windows(2).all(|w| w[0].tsm >= w[1].tsm));
        assert_eq!(out.len(), 5);
        // Equal metrics keep catalog order: D precedes E.
        let tail: Vec<&str> = out[3..].iter().map(|r| r.record.name.as_str()).collect();
        assert_eq!(tail, vec!["D", "E"]);
    }

    #[test]
    fn partially_consumed_sequence_remembers_emitted_names() {
        let a_high = named("A");
        let a_low = named("A");
        let b = named("B");
        let rows = vec![
            Scored { record: &a_high, tsm: Some(9.0) },
            Scored { record: &a_low, tsm: Some(8.0) },
            Scored { record: &b, tsm: Some(7.0) },
        ];

        let mut seq = ordered_unique_by_metric(rows);
        let first = seq.next().unwrap();
        assert_eq!((first.record.name.as_str(), first.tsm), ("A", 9.0));

        let rest: Vec<(&str, f64)> = seq.by_ref().map(|r| (r.record.name.as_str(), r.tsm)).collect();
        assert_eq!(rest, vec![("B", 7.0)]);

        // Exhausted, not restarted.
        assert!(seq.next().is_none());
    }

    #[test]
    fn unique_by_name_keeps_catalog_order() {
        let records = vec![named("X"), named("Y"), named("X"), named("Z")];
        let names: Vec<&str> = unique_by_name(records.iter())
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["X", "Y", "Z"]);
    }

    #[test]
    fn classification_travels_with_the_row() {
        let record = PlanetRecord {
            name: "GJ 436 b".to_string(),
            discovery_facility: "TESS".to_string(),
            ..PlanetRecord::default()
        };
        let out: Vec<RankedPlanet> =
            ordered_unique_by_metric([Scored { record: &record, tsm: Some(10.0) }]).collect();
        assert!(out[0].class.atm_characterized);
        assert!(out[0].class.tess_discovered);
    }
}
