//! Piecewise-linear interpolation and log-spaced grids.

/// Piecewise-linear interpolant over a table of `(x, y)` samples.
///
/// Outside the table range the first/last segment is extended linearly.
#[derive(Debug, Clone)]
pub struct LinearInterp {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl LinearInterp {
    /// Build an interpolant; points may come in any order.
    ///
    /// Returns `None` unless there are at least two finite points with distinct x.
    pub fn new(mut points: Vec<(f64, f64)>) -> Option<Self> {
        points.retain(|(x, y)| x.is_finite() && y.is_finite());
        points.sort_by(|a, b| a.0.total_cmp(&b.0));

        if points.len() < 2 || points.windows(2).any(|w| w[0].0 == w[1].0) {
            return None;
        }

        let (xs, ys) = points.into_iter().unzip();
        Some(Self { xs, ys })
    }

    pub fn x_min(&self) -> f64 {
        self.xs[0]
    }

    pub fn x_max(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }

    pub fn eval(&self, x: f64) -> f64 {
        let n = self.xs.len();
        // Index of the segment [k, k + 1] to use, clamped to the end segments.
        let k = self.xs.partition_point(|&v| v <= x).clamp(1, n - 1) - 1;

        let (x0, x1) = (self.xs[k], self.xs[k + 1]);
        let (y0, y1) = (self.ys[k], self.ys[k + 1]);
        y0 + (x - x0) * (y1 - y0) / (x1 - x0)
    }
}

/// `n` values spaced evenly in log10 between `10^start_exp` and `10^stop_exp`.
pub fn logspace(start_exp: f64, stop_exp: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![10f64.powf(start_exp)],
        _ => {
            let step = (stop_exp - start_exp) / (n as f64 - 1.0);
            (0..n)
                .map(|i| 10f64.powf(start_exp + step * i as f64))
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn interpolates_inside_and_extrapolates_outside() {
        let f = LinearInterp::new(vec![(2.0, 20.0), (1.0, 10.0), (4.0, 30.0)]).unwrap();

        assert_relative_eq!(f.eval(1.0), 10.0);
        assert_relative_eq!(f.eval(1.5), 15.0);
        assert_relative_eq!(f.eval(3.0), 25.0);
        assert_relative_eq!(f.eval(4.0), 30.0);

        // Extended from the first and last segments.
        assert_relative_eq!(f.eval(0.0), 0.0);
        assert_relative_eq!(f.eval(6.0), 40.0);
    }

    #[test]
    fn rejects_degenerate_tables() {
        assert!(LinearInterp::new(vec![(1.0, 1.0)]).is_none());
        assert!(LinearInterp::new(vec![(1.0, 1.0), (1.0, 2.0)]).is_none());
        assert!(LinearInterp::new(vec![(1.0, 1.0), (f64::NAN, 2.0)]).is_none());
    }

    #[test]
    fn logspace_endpoints() {
        let v = logspace(-1.0, 2.0, 4);
        assert_eq!(v.len(), 4);
        assert_relative_eq!(v[0], 0.1, max_relative = 1e-12);
        assert_relative_eq!(v[1], 1.0, max_relative = 1e-12);
        assert_relative_eq!(v[3], 100.0, max_relative = 1e-12);
        assert!(logspace(0.0, 1.0, 0).is_empty());
    }
}
