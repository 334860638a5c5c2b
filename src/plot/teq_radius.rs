//! Equilibrium temperature vs radius, with circles sized by TSM.

use crate::domain::{HAZY_ZONE_K, Highlight};
use crate::metric::RankedPlanet;
use crate::plot::figure::{AxisScale, Band, Element, Figure, Label, Marker, Polyline, palette};

pub const X_RANGE_K: (f64, f64) = (100.0, 850.0);
pub const Y_RANGE_EARTH: (f64, f64) = (0.3, 4.0);

/// Legend entries: `(tsm, radius row, label x, label y offset)`.
const TSM_LEGEND: [(f64, f64, f64, f64); 3] = [
    (10.0, 2.9, 140.0, 0.05),
    (50.0, 3.3, 141.0, 0.06),
    (100.0, 3.7, 134.0, 0.1),
];
const TSM_LEGEND_X: f64 = 150.0;

/// Marker diameter (points) for a given TSM.
pub fn tsm_marker_size(tsm: f64) -> f64 {
    tsm / 8.0
}

/// Build the temperature-radius figure from planets in ranking order.
pub fn teq_radius_figure(planets: &[RankedPlanet<'_>], highlight: Option<&Highlight>) -> Figure {
    let mut fig = Figure::new(X_RANGE_K, Y_RANGE_EARTH, AxisScale::Linear)
        .with_labels("Equilibrium temperature (K)", "Planetary radius (R⊕)");

    fig.push(
        1,
        Element::Band(Band {
            x: HAZY_ZONE_K,
            y: (0.0, 4.2),
            color: palette::GREY.alpha(0.2),
        }),
    );
    fig.push(
        1,
        Element::Label(Label {
            text: "Hazy zone?".to_string(),
            at: (280.0, 0.5),
            size_pt: 20.0,
            color: palette::GREY,
        }),
    );

    if let Some(h) = highlight {
        fig.push(
            2,
            Element::Label(Label {
                text: h.name.clone(),
                at: (h.eq_temp_k + 12.0, h.radius_earth + 0.04),
                size_pt: 11.0,
                color: palette::BLACK,
            }),
        );
        fig.push(
            2,
            Element::Marker(Marker {
                at: (h.eq_temp_k, h.radius_earth),
                size_pt: tsm_marker_size(h.tsm),
                face: Some(palette::CORNFLOWER_BLUE),
                edge: Some(palette::BLUE),
            }),
        );
    }

    for p in planets {
        let (Some(teq), Some(radius)) = (p.record.eq_temp_k, p.record.radius_earth) else {
            continue;
        };
        let at = (teq, radius);
        let size_pt = tsm_marker_size(p.tsm);

        let marker = if p.class.atm_characterized {
            Marker {
                at,
                size_pt,
                face: None,
                edge: Some(palette::ORANGE_RED),
            }
        } else {
            Marker {
                at,
                size_pt,
                face: Some(palette::WHITE.alpha(0.1)),
                edge: Some(palette::BLACK.alpha(0.1)),
            }
        };
        fig.push(2, Element::Marker(marker));

        if p.class.tess_discovered {
            fig.push(
                2,
                Element::Marker(Marker {
                    at,
                    size_pt,
                    face: Some(palette::WHITE.alpha(0.5)),
                    edge: Some(palette::BLACK.alpha(0.5)),
                }),
            );
        }
    }

    push_tsm_legend(&mut fig);
    fig
}

fn push_tsm_legend(fig: &mut Figure) {
    for (tsm, row, label_x, label_dy) in TSM_LEGEND {
        fig.push(
            3,
            Element::Label(Label {
                text: format!("{tsm}"),
                at: (label_x, row + label_dy),
                size_pt: 10.0,
                color: palette::BLACK,
            }),
        );
        fig.push(
            3,
            Element::Marker(Marker {
                at: (TSM_LEGEND_X, row),
                size_pt: tsm_marker_size(tsm),
                face: Some(palette::WHITE),
                edge: Some(palette::BLACK),
            }),
        );
    }

    fig.push(
        3,
        Element::Polyline(Polyline {
            points: vec![(180.0, 3.9), (180.0, 2.9)],
            color: palette::BLACK,
            width_px: 1,
            label: None,
        }),
    );
    fig.push(
        3,
        Element::Label(Label {
            text: "TSM".to_string(),
            at: (188.0, 2.95),
            size_pt: 12.0,
            color: palette::BLACK,
        }),
    );
}
