//! Static figures.
//!
//! - render-independent figure description (`figure`)
//! - per-diagram builders (`teq_radius`, `mass_radius`)
//! - Plotters PNG/SVG rendering (`render`)

pub mod figure;
pub mod mass_radius;
pub mod render;
pub mod teq_radius;

pub use figure::Figure;
pub use mass_radius::mass_radius_figure;
pub use render::render_figure;
pub use teq_radius::teq_radius_figure;
