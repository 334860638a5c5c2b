//! Mass vs radius with error bars and composition curves (log mass axis).

use crate::domain::{CompositionModel, Highlight, PlanetRecord};
use crate::models::CompositionCurve;
use crate::plot::figure::{AxisScale, Element, ErrorBar, Figure, Marker, Polyline, Rgba, palette};

pub const X_RANGE_EARTH: (f64, f64) = (0.5, 30.0);
pub const Y_RANGE_EARTH: (f64, f64) = (0.3, 4.0);

pub fn model_color(model: CompositionModel) -> Rgba {
    match model {
        CompositionModel::Fe => palette::GREY,
        CompositionModel::Earth => palette::PERU,
        CompositionModel::RockWater => palette::ROYAL_BLUE,
        CompositionModel::H2 | CompositionModel::H2Five => palette::SEA_GREEN,
    }
}

/// Build the mass-radius figure.
///
/// `planets` is drawn as given; callers pass one row per planet (see
/// `metric::unique_by_name`). Rows without a mass or radius are skipped.
pub fn mass_radius_figure<'a>(
    planets: impl IntoIterator<Item = &'a PlanetRecord>,
    curves: &[CompositionCurve],
    highlight: Option<&Highlight>,
) -> Figure {
    let mut fig = Figure::new(X_RANGE_EARTH, Y_RANGE_EARTH, AxisScale::Log10)
        .with_labels("Planetary mass (M⊕)", "Planetary radius (R⊕)");

    if let Some(h) = highlight {
        let at = (h.mass_earth, h.radius_earth);
        fig.push(
            2,
            Element::ErrorBar(ErrorBar {
                at,
                x_err: Some((h.mass_err, h.mass_err)),
                y_err: Some((h.radius_err, h.radius_err)),
                color: palette::CORNFLOWER_BLUE,
                width_px: 1,
            }),
        );
        fig.push(
            2,
            Element::Marker(Marker {
                at,
                size_pt: 10.0,
                face: Some(palette::CORNFLOWER_BLUE),
                edge: Some(palette::CORNFLOWER_BLUE),
            }),
        );
    }

    for p in planets {
        let (Some(mass), Some(radius)) = (p.mass_earth, p.radius_earth) else {
            continue;
        };
        let at = (mass, radius);

        fig.push(
            2,
            Element::ErrorBar(ErrorBar {
                at,
                x_err: err_pair(p.mass_err_down, p.mass_err_up),
                y_err: err_pair(p.radius_err_down, p.radius_err_up),
                color: palette::GREY.alpha(0.2),
                width_px: 1,
            }),
        );
        fig.push(
            2,
            Element::Marker(Marker {
                at,
                size_pt: 7.0,
                face: Some(palette::GREY),
                edge: Some(palette::GREY),
            }),
        );
    }

    for curve in curves {
        fig.push(
            2,
            Element::Polyline(Polyline {
                points: curve.points.clone(),
                color: model_color(curve.model).alpha(0.7),
                width_px: 2,
                label: Some(curve.model.label().to_string()),
            }),
        );
    }

    fig
}

/// Error pair when at least one side is known; the other side counts as zero.
fn err_pair(down: Option<f64>, up: Option<f64>) -> Option<(f64, f64)> {
    match (down, up) {
        (None, None) => None,
        (d, u) => Some((d.unwrap_or(0.0), u.unwrap_or(0.0))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_mass(name: &str, mass: Option<f64>) -> PlanetRecord {
        PlanetRecord {
            name: name.to_string(),
            radius_earth: Some(2.0),
            mass_earth: mass,
            mass_err_up: Some(0.5),
            mass_err_down: Some(0.4),
            ..PlanetRecord::default()
        }
    }

    #[test]
    fn skips_planets_without_mass_and_draws_error_bars() {
        let planets = [with_mass("A", Some(5.0)), with_mass("B", None)];
        let fig = mass_radius_figure(planets.iter(), &[], None);

        let bars: Vec<&ErrorBar> = fig
            .elements()
            .into_iter()
            .filter_map(|e| match e {
                Element::ErrorBar(b) => Some(b),
                _ => None,
            })
            .collect();
        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].at, (5.0, 2.0));
        assert_eq!(bars[0].x_err, Some((0.4, 0.5)));
        assert_eq!(bars[0].y_err, None);
        assert_eq!(fig.x_scale, AxisScale::Log10);
    }

    #[test]
    fn curves_are_drawn_with_labels_after_planets() {
        let curve = CompositionCurve {
            model: CompositionModel::RockWater,
            points: vec![(1.0, 1.2), (10.0, 2.3)],
        };
        let planets = [with_mass("A", Some(5.0))];
        let fig = mass_radius_figure(planets.iter(), &[curve], Some(&Highlight::toi_1759b()));

        let last = fig.elements().into_iter().last().unwrap();
        match last {
            Element::Polyline(line) => {
                assert_eq!(line.label.as_deref(), Some("100% H₂O"));
                assert_eq!(line.color, palette::ROYAL_BLUE.alpha(0.7));
            }
            other => panic!("expected curve last, got {other:?}"),
        }
    }

    #[test]
    fn partial_errors_default_to_zero() {
        assert_eq!(err_pair(None, Some(1.0)), Some((0.0, 1.0)));
        assert_eq!(err_pair(None, None), None);
    }
}
