/// Rectangular spots with hard edges
///
use serde::{Deserialize, Serialize};

use super::Pattern;
use crate::{Field, Mesh};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct Spot {
    pub center: (f64, f64),
    pub half_width: f64,
    pub half_height: f64,
    pub value: f64,         // fill inside the spot, 1 = white, -1 = black
}

impl Default for Spot {
    fn default() -> Self {
        Spot {
            center: (0.0, 0.0),
            half_width: 1.0,
            half_height: 1.0,
            value: 1.0,
        }
    }
}

impl Spot {
    pub fn new(center: (f64, f64), half_width: f64, half_height: f64, value: f64) -> Spot {
        Spot {
            center,
            half_width,
            half_height,
            value,
        }
    }
}

impl Pattern for Spot {
    fn value_at(&self, x: f64, y: f64) -> f64 {
        let inside = (x - self.center.0).abs() < self.half_width && (y - self.center.1).abs() < self.half_height;
        if inside {
            self.value
        } else {
            0.0
        }
    }
}

pub fn spot(mesh: &Mesh, center: (f64, f64), half_width: f64, half_height: f64, value: f64) -> Field {
    Spot::new(center, half_width, half_height, value).render(mesh)
}
