/// Gaussian envelopes that fade all the way to zero
///
use serde::{Deserialize, Serialize};

use super::Pattern;
use crate::{Field, Mesh};

pub const DEFAULT_MIN_VAL: f64 = 0.01;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct Gaussian {
    pub x_std: f64,
    pub y_std: f64,
    pub center: (f64, f64),
    pub min_val: f64,       // values at or below this are set to 0
}

impl Default for Gaussian {
    fn default() -> Self {
        Gaussian {
            x_std: 1.0,
            y_std: 1.0,
            center: (0.0, 0.0),
            min_val: DEFAULT_MIN_VAL,
        }
    }
}

impl Gaussian {
    pub fn new(x_std: f64, y_std: f64) -> Gaussian {
        Gaussian {
            x_std,
            y_std,
            ..Gaussian::default()
        }
    }

    pub fn with_center(mut self, x: f64, y: f64) -> Gaussian {
        self.center = (x, y);
        self
    }

    pub fn with_min_val(mut self, min_val: f64) -> Gaussian {
        self.min_val = min_val;
        self
    }

    // The bell curve before clipping, exactly 1 at the center
    pub fn envelope_at(&self, x: f64, y: f64) -> f64 {
        let ex = axis_term(x - self.center.0, self.x_std);
        let ey = axis_term(y - self.center.1, self.y_std);
        (-(ex + ey)).exp()
    }
}

impl Pattern for Gaussian {
    fn value_at(&self, x: f64, y: f64) -> f64 {
        let z = self.envelope_at(x, y);
        if z <= self.min_val {
            0.0
        } else {
            z
        }
    }
}

// A non-positive std collapses the axis to its center line
fn axis_term(d: f64, std: f64) -> f64 {
    if std > 0.0 {
        d.powi(2) / (2.0 * std.powi(2))
    } else if d == 0.0 {
        0.0
    } else {
        f64::INFINITY
    }
}

pub fn gaussian(mesh: &Mesh, x_std: f64, y_std: f64, center: (f64, f64), min_val: f64) -> Field {
    Gaussian::new(x_std, y_std)
        .with_center(center.0, center.1)
        .with_min_val(min_val)
        .render(mesh)
}
