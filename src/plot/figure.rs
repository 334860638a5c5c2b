//! Render-independent figure description.
//!
//! A `Figure` is plain data: axis setup plus a z-ordered list of elements in data
//! coordinates. Builders (`teq_radius`, `mass_radius`) fill one in and
//! `render::render_figure` draws it. Nothing is global: each diagram owns its
//! own `Figure` value.
//!
//! Sizes follow print conventions: marker diameters and font sizes are in points
//! and converted to pixels at [`DPI`].

/// Pixels per inch used to convert point sizes.
pub const DPI: f64 = 100.0;

/// Default canvas: 8 × 6 inches.
pub const DEFAULT_SIZE_PX: (u32, u32) = (800, 600);

/// Convert a size in points to pixels.
pub fn pt_to_px(pt: f64) -> f64 {
    pt * DPI / 72.0
}

/// An sRGB color with straight alpha in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }
}

pub mod palette {
    use super::Rgba;

    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const GREY: Rgba = Rgba::rgb(128, 128, 128);
    pub const BLUE: Rgba = Rgba::rgb(0, 0, 255);
    pub const CORNFLOWER_BLUE: Rgba = Rgba::rgb(100, 149, 237);
    pub const ORANGE_RED: Rgba = Rgba::rgb(255, 69, 0);
    pub const PERU: Rgba = Rgba::rgb(205, 133, 63);
    pub const ROYAL_BLUE: Rgba = Rgba::rgb(65, 105, 225);
    pub const SEA_GREEN: Rgba = Rgba::rgb(46, 139, 87);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisScale {
    Linear,
    Log10,
}

/// Circle marker. `face: None` leaves the interior transparent.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub at: (f64, f64),
    /// Diameter in points.
    pub size_pt: f64,
    pub face: Option<Rgba>,
    pub edge: Option<Rgba>,
}

/// Asymmetric error bars; each pair is `(below, above)` as positive offsets.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorBar {
    pub at: (f64, f64),
    pub x_err: Option<(f64, f64)>,
    pub y_err: Option<(f64, f64)>,
    pub color: Rgba,
    pub width_px: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub points: Vec<(f64, f64)>,
    pub color: Rgba,
    pub width_px: u32,
    /// Shown in the legend box when set.
    pub label: Option<String>,
}

/// Filled axis-aligned rectangle spanning `x.0..x.1` × `y.0..y.1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Band {
    pub x: (f64, f64),
    pub y: (f64, f64),
    pub color: Rgba,
}

/// Text anchored at its bottom-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub at: (f64, f64),
    pub size_pt: f64,
    pub color: Rgba,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Marker(Marker),
    ErrorBar(ErrorBar),
    Polyline(Polyline),
    Band(Band),
    Label(Label),
}

#[derive(Debug, Clone)]
pub struct Figure {
    pub size_px: (u32, u32),
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    pub x_scale: AxisScale,
    pub x_label: String,
    pub y_label: String,
    /// Axis description size (points).
    pub axis_label_pt: f64,
    /// Tick label size (points).
    pub tick_label_pt: f64,
    layers: Vec<(i32, Element)>,
}

impl Figure {
    pub fn new(x_range: (f64, f64), y_range: (f64, f64), x_scale: AxisScale) -> Self {
        Self {
            size_px: DEFAULT_SIZE_PX,
            x_range,
            y_range,
            x_scale,
            x_label: String::new(),
            y_label: String::new(),
            axis_label_pt: 14.0,
            tick_label_pt: 12.0,
            layers: Vec::new(),
        }
    }

    pub fn with_labels(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }

    /// Add an element at depth `z`; higher `z` is drawn on top, equal `z` in
    /// insertion order.
    pub fn push(&mut self, z: i32, element: Element) {
        self.layers.push((z, element));
    }

    /// Elements in drawing order.
    pub fn elements(&self) -> Vec<&Element> {
        let mut ordered: Vec<&(i32, Element)> = self.layers.iter().collect();
        ordered.sort_by_key(|(z, _)| *z);
        ordered.into_iter().map(|(_, e)| e).collect()
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn contains(&self, (x, y): (f64, f64)) -> bool {
        let (x0, x1) = self.x_range;
        let (y0, y1) = self.y_range;
        x.is_finite() && y.is_finite() && x >= x0 && x <= x1 && y >= y0 && y <= y1
    }
}
