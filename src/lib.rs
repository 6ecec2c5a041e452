/// Core mesh definitions for building simple 2D visual stimuli
///
pub mod display;
pub mod error;
pub mod patterns;
pub mod raster;

use ndarray::{Array1, Array2, ArrayView2};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use crate::display::{show, Animation, FrameSink, GrayFrames, SinkControl, DISPLAY_RANGE};
pub use crate::error::{Result, StimulusError};
pub use crate::patterns::{Gabor, Gaussian, Grating, Pattern, SpatialFrequency, Spot, Stimulus};
pub use crate::raster::{load_image, normalize_image};

/// One value per mesh sample, shaped (rows, cols) like the mesh it came from.
pub type Field = Array2<f64>;

/// Upper bound on samples along a single axis.
pub const MAX_AXIS_SAMPLES: usize = 1 << 16;

/// Size and sampling density of the visual field, in degrees
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FieldConfig {
    pub x_deg: f64,              // horizontal size of the field, default = 10
    pub y_deg: f64,              // vertical size of the field, default = 10
    pub pix_per_deg: f64,        // samples per degree along both axes, default = 10
    pub center: (f64, f64),      // where the field is centered, default = (0, 0)
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            x_deg: 10.0,
            y_deg: 10.0,
            pix_per_deg: 10.0,
            center: (0.0, 0.0),
        }
    }
}

impl FieldConfig {
    pub fn new(x_deg: f64, y_deg: f64, pix_per_deg: f64) -> FieldConfig {
        FieldConfig {
            x_deg,
            y_deg,
            pix_per_deg,
            ..FieldConfig::default()
        }
    }

    pub fn with_center(mut self, x: f64, y: f64) -> FieldConfig {
        self.center = (x, y);
        self
    }

    // Number of samples along each axis as (cols, rows)
    pub fn samples(&self) -> (usize, usize) {
        (
            sample_count(self.x_deg, self.pix_per_deg),
            sample_count(self.y_deg, self.pix_per_deg),
        )
    }

    pub fn from_json(serialized: &str) -> serde_json::Result<FieldConfig> {
        serde_json::from_str(serialized)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Bounding coordinates of a mesh, as passed to an image viewer
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Extents {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl Extents {
    // (xmin, xmax, ymin, ymax)
    pub fn as_array(&self) -> [f64; 4] {
        [self.xmin, self.xmax, self.ymin, self.ymax]
    }
}

/// X and Y coordinates of every sample point in a rectangular field.
///
/// Both arrays are shaped (rows, cols). X varies along columns and Y varies
/// along rows, growing with the row index. The arrays are only built here,
/// so their shapes always agree.
#[derive(Serialize, Debug, Clone)]
pub struct Mesh {
    x: Array2<f64>,
    y: Array2<f64>,
    extents: Extents,
    size: (f64, f64),
}

impl Mesh {
    pub fn new(config: &FieldConfig) -> Mesh {
        let (cols, rows) = config.samples();
        let xs = axis(config.x_deg, cols, config.center.0);
        let ys = axis(config.y_deg, rows, config.center.1);
        debug!(
            rows,
            cols,
            x_deg = config.x_deg,
            y_deg = config.y_deg,
            "building coordinate mesh"
        );
        Mesh::from_axes(&xs, &ys, (nominal(config.x_deg), nominal(config.y_deg)))
    }

    // Shorthand for a centered field of the given size
    pub fn xycoords(x_deg: f64, y_deg: f64, pix_per_deg: f64) -> Mesh {
        Mesh::new(&FieldConfig::new(x_deg, y_deg, pix_per_deg))
    }

    // A square mesh running from -1 to 1 along both axes with n_points per axis
    pub fn normalized(n_points: usize) -> Mesh {
        let n = n_points.max(1);
        let line = axis(2.0, n, 0.0);
        Mesh::from_axes(&line, &line, (2.0, 2.0))
    }

    fn from_axes(xs: &Array1<f64>, ys: &Array1<f64>, size: (f64, f64)) -> Mesh {
        let dims = (ys.len(), xs.len());
        let x = Array2::from_shape_fn(dims, |(_, j)| xs[j]);
        let y = Array2::from_shape_fn(dims, |(i, _)| ys[i]);
        let extents = Extents {
            xmin: xs[0],
            xmax: xs[xs.len() - 1],
            ymin: ys[0],
            ymax: ys[ys.len() - 1],
        };
        Mesh { x, y, extents, size }
    }

    pub fn x(&self) -> ArrayView2<f64> {
        self.x.view()
    }

    pub fn y(&self) -> ArrayView2<f64> {
        self.y.view()
    }

    pub fn extents(&self) -> Extents {
        self.extents
    }

    // (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        self.x.dim()
    }

    // Nominal horizontal size of the field
    pub fn width(&self) -> f64 {
        self.size.0
    }

    // Nominal vertical size of the field
    pub fn height(&self) -> f64 {
        self.size.1
    }

    pub fn center(&self) -> (f64, f64) {
        (
            (self.extents.xmin + self.extents.xmax) / 2.0,
            (self.extents.ymin + self.extents.ymax) / 2.0,
        )
    }

    pub fn zeros(&self) -> Field {
        Field::zeros(self.shape())
    }
}

// Samples along one axis; anything that is not a finite positive size and density gets a
// single sample, and huge fields are capped at MAX_AXIS_SAMPLES
fn sample_count(extent: f64, density: f64) -> usize {
    let n = (extent * density).round();
    if extent > 0.0 && density > 0.0 && n.is_finite() && n >= 1.0 {
        (n as usize).min(MAX_AXIS_SAMPLES)
    } else {
        1
    }
}

fn nominal(extent: f64) -> f64 {
    if extent.is_finite() {
        extent.max(0.0)
    } else {
        0.0
    }
}

// Evenly spaced points covering extent, endpoints included. A lone sample sits at the center.
fn axis(extent: f64, n: usize, offset: f64) -> Array1<f64> {
    if n <= 1 {
        return Array1::from_elem(1, offset);
    }
    let half = extent / 2.0;
    Array1::linspace(offset - half, offset + half, n)
}
