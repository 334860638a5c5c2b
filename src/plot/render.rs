//! Draw a [`Figure`] to a PNG or SVG file with Plotters.
//!
//! The backend is picked from the output extension. Elements whose anchor lies
//! outside the axis ranges are dropped and bands/bars are clamped to the plot
//! area, since Plotters does not clip series to the chart.

use std::path::Path;

use log::{debug, info};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::error::AppError;
use crate::plot::figure::{AxisScale, Element, Figure, Rgba, pt_to_px};

/// Render `fig` to `path` (`.png` or `.svg`).
pub fn render_figure(fig: &Figure, path: &Path) -> Result<(), AppError> {
    validate_ranges(fig)?;

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let render_err = |e: &dyn std::fmt::Display| {
        AppError::external(format!("Failed to render '{}': {e}", path.display()))
    };
    match ext.as_str() {
        "png" => draw(BitMapBackend::new(path, fig.size_px).into_drawing_area(), fig)
            .map_err(|e| render_err(&e))?,
        "svg" => draw(SVGBackend::new(path, fig.size_px).into_drawing_area(), fig)
            .map_err(|e| render_err(&e))?,
        other => {
            return Err(AppError::usage(format!(
                "Unsupported figure extension '.{other}' (expected .png or .svg)."
            )));
        }
    }

    info!("Wrote {}", path.display());
    Ok(())
}

fn validate_ranges(fig: &Figure) -> Result<(), AppError> {
    let (x0, x1) = fig.x_range;
    let (y0, y1) = fig.y_range;
    if !(x0.is_finite() && x1.is_finite() && y0.is_finite() && y1.is_finite()) || x1 <= x0 || y1 <= y0 {
        return Err(AppError::usage("Figure axis ranges must be finite and increasing."));
    }
    if fig.x_scale == AxisScale::Log10 && x0 <= 0.0 {
        return Err(AppError::usage("Log-scaled axis range must be positive."));
    }
    Ok(())
}

type DrawResult<DB> = Result<(), DrawingAreaErrorKind<<DB as DrawingBackend>::ErrorType>>;

fn draw<DB: DrawingBackend>(root: DrawingArea<DB, Shift>, fig: &Figure) -> DrawResult<DB> {
    root.fill(&WHITE)?;

    let (x0, x1) = fig.x_range;
    let (y0, y1) = fig.y_range;
    let axis_font = ("sans-serif", pt_to_px(fig.axis_label_pt));
    let tick_font = ("sans-serif", pt_to_px(fig.tick_label_pt));

    let mut builder = ChartBuilder::on(&root);
    builder.margin(15).x_label_area_size(55).y_label_area_size(65);

    match fig.x_scale {
        AxisScale::Linear => {
            let mut chart = builder.build_cartesian_2d(x0..x1, y0..y1)?;
            chart
                .configure_mesh()
                .disable_mesh()
                .x_desc(fig.x_label.as_str())
                .y_desc(fig.y_label.as_str())
                .axis_desc_style(axis_font)
                .label_style(tick_font)
                .draw()?;
            draw_elements(&mut chart, fig)?;
        }
        AxisScale::Log10 => {
            let mut chart = builder.build_cartesian_2d((x0..x1).log_scale(), y0..y1)?;
            chart
                .configure_mesh()
                .disable_mesh()
                .x_desc(fig.x_label.as_str())
                .y_desc(fig.y_label.as_str())
                .axis_desc_style(axis_font)
                .label_style(tick_font)
                .draw()?;
            draw_elements(&mut chart, fig)?;
        }
    }

    root.present()?;
    Ok(())
}

fn draw_elements<'a, DB, CT>(chart: &mut ChartContext<'a, DB, CT>, fig: &Figure) -> DrawResult<DB>
where
    DB: DrawingBackend + 'a,
    CT: CoordTranslate<From = (f64, f64)>,
{
    let mut labelled = false;
    let mut skipped = 0usize;

    for element in fig.elements() {
        match element {
            Element::Marker(m) => {
                let radius = pt_to_px(m.size_pt) / 2.0;
                if !fig.contains(m.at) || !(radius.is_finite() && radius > 0.0) {
                    skipped += 1;
                    continue;
                }
                let radius = radius.round().max(1.0) as i32;
                if let Some(face) = m.face {
                    chart.draw_series(std::iter::once(Circle::new(m.at, radius, color(face).filled())))?;
                }
                if let Some(edge) = m.edge {
                    chart.draw_series(std::iter::once(Circle::new(
                        m.at,
                        radius,
                        color(edge).stroke_width(1),
                    )))?;
                }
            }
            Element::ErrorBar(bar) => {
                if !fig.contains(bar.at) {
                    skipped += 1;
                    continue;
                }
                let (x, y) = bar.at;
                let style = color(bar.color).stroke_width(bar.width_px);
                if let Some((lo, hi)) = bar.x_err {
                    let from = clamp_x(fig, x - lo);
                    let to = clamp_x(fig, x + hi);
                    chart.draw_series(std::iter::once(PathElement::new(vec![(from, y), (to, y)], style)))?;
                }
                if let Some((lo, hi)) = bar.y_err {
                    let from = clamp_y(fig, y - lo);
                    let to = clamp_y(fig, y + hi);
                    chart.draw_series(std::iter::once(PathElement::new(vec![(x, from), (x, to)], style)))?;
                }
            }
            Element::Polyline(line) => {
                let points: Vec<(f64, f64)> = line.points.iter().copied().filter(|&p| fig.contains(p)).collect();
                if points.len() < 2 {
                    skipped += 1;
                    continue;
                }
                let style = color(line.color).stroke_width(line.width_px);
                let anno = chart.draw_series(std::iter::once(PathElement::new(points, style)))?;
                if let Some(label) = &line.label {
                    labelled = true;
                    anno.label(label.as_str())
                        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
                }
            }
            Element::Band(band) => {
                let corners = [
                    (clamp_x(fig, band.x.0), clamp_y(fig, band.y.0)),
                    (clamp_x(fig, band.x.1), clamp_y(fig, band.y.1)),
                ];
                chart.draw_series(std::iter::once(Rectangle::new(corners, color(band.color).filled())))?;
            }
            Element::Label(label) => {
                if !fig.contains(label.at) {
                    skipped += 1;
                    continue;
                }
                let style = ("sans-serif", pt_to_px(label.size_pt))
                    .into_font()
                    .color(&color(label.color))
                    .pos(Pos::new(HPos::Left, VPos::Bottom));
                chart.draw_series(std::iter::once(Text::new(label.text.clone(), label.at, style)))?;
            }
        }
    }

    if labelled {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::LowerRight)
            .background_style(WHITE.mix(0.9))
            .border_style(BLACK)
            .label_font(("sans-serif", pt_to_px(10.0)))
            .draw()?;
    }

    if skipped > 0 {
        debug!("Skipped {skipped} elements outside the axis ranges");
    }
    Ok(())
}

fn color(c: Rgba) -> RGBAColor {
    RGBAColor(c.r, c.g, c.b, c.a)
}

fn clamp_x(fig: &Figure, x: f64) -> f64 {
    x.clamp(fig.x_range.0, fig.x_range.1)
}

fn clamp_y(fig: &Figure, y: f64) -> f64 {
    y.clamp(fig.y_range.0, fig.y_range.1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::figure::{Label, Marker, palette};

    fn small_figure() -> Figure {
        let mut fig = Figure::new((0.0, 10.0), (0.0, 5.0), AxisScale::Linear).with_labels("x", "y");
        fig.push(
            2,
            Element::Marker(Marker {
                at: (5.0, 2.5),
                size_pt: 8.0,
                face: Some(palette::WHITE),
                edge: Some(palette::BLACK),
            }),
        );
        fig.push(
            2,
            Element::Marker(Marker {
                at: (50.0, 2.5),
                size_pt: f64::INFINITY,
                face: None,
                edge: Some(palette::BLACK),
            }),
        );
        fig.push(
            1,
            Element::Label(Label {
                text: "note".to_string(),
                at: (1.0, 1.0),
                size_pt: 10.0,
                color: palette::GREY,
            }),
        );
        fig
    }

    #[test]
    fn renders_svg_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fig.svg");

        render_figure(&small_figure(), &path).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("<circle"));
    }

    #[test]
    fn renders_temperature_radius_png_and_svg() {
        use crate::domain::{Classification, Highlight, PlanetRecord};
        use crate::metric::RankedPlanet;
        use crate::plot::teq_radius_figure;

        let record = PlanetRecord {
            name: "TOI-270 d".to_string(),
            eq_temp_k: Some(387.0),
            radius_earth: Some(2.13),
            ..PlanetRecord::default()
        };
        let ranked = [RankedPlanet {
            record: &record,
            tsm: 103.4,
            class: Classification { atm_characterized: false, tess_discovered: true },
        }];
        let fig = teq_radius_figure(&ranked, Some(&Highlight::toi_1759b()));
        let dir = tempfile::tempdir().unwrap();

        let png = dir.path().join("teq_rp.png");
        render_figure(&fig, &png).unwrap();
        assert!(std::fs::metadata(&png).unwrap().len() > 0);

        let svg = dir.path().join("teq_rp.svg");
        render_figure(&fig, &svg).unwrap();
        assert!(std::fs::read_to_string(&svg).unwrap().contains("<svg"));
    }

    #[test]
    fn renders_log_scaled_mass_radius_with_clamped_error_bars() {
        use crate::domain::{CompositionModel, Highlight, PlanetRecord};
        use crate::models::CompositionCurve;
        use crate::plot::mass_radius_figure;

        // Lower mass error reaches past zero, below the log axis minimum.
        let wide = PlanetRecord {
            name: "Kepler-11 f".to_string(),
            mass_earth: Some(5.0),
            mass_err_down: Some(6.0),
            mass_err_up: Some(2.0),
            radius_earth: Some(2.5),
            radius_err_down: Some(0.2),
            radius_err_up: Some(0.2),
            ..PlanetRecord::default()
        };
        let curve = CompositionCurve {
            model: CompositionModel::Earth,
            points: vec![(0.5, 0.8), (5.0, 1.6), (30.0, 2.4)],
        };
        let fig = mass_radius_figure([&wide], &[curve], Some(&Highlight::toi_1759b()));
        assert_eq!(fig.x_scale, AxisScale::Log10);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mp_rp.svg");
        render_figure(&fig, &path).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("<circle"));
    }

    #[test]
    fn rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let err = render_figure(&small_figure(), &dir.path().join("fig.pdf")).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn rejects_non_positive_log_range() {
        let fig = Figure::new((0.0, 30.0), (0.3, 4.0), AxisScale::Log10);
        let dir = tempfile::tempdir().unwrap();
        let err = render_figure(&fig, &dir.path().join("fig.svg")).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
