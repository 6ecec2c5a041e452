/// Sinusoidal gratings
///
use ndarray::Array3;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use super::Pattern;
use crate::{Field, Mesh};

/// How a spatial frequency is expressed.
///
/// Gratings store cycles per unit of the mesh coordinates (cycles per degree
/// for a `FieldConfig` mesh). `CyclesPerField` counts cycles across the full
/// horizontal extent of a mesh and is converted by dividing by its width, so
/// 4 cycles per field on the normalized [-1, 1] mesh is 2 cycles per unit.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub enum SpatialFrequency {
    CyclesPerUnit(f64),
    CyclesPerField(f64),
}

impl SpatialFrequency {
    pub fn per_unit(&self, field_width: f64) -> f64 {
        match *self {
            SpatialFrequency::CyclesPerUnit(sf) => sf,
            SpatialFrequency::CyclesPerField(cycles) => {
                if field_width > 0.0 {
                    cycles / field_width
                } else {
                    0.0
                }
            }
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct Grating {
    pub sf: f64,            // cycles per unit, default = 1
    pub orientation: f64,   // degrees, 0 = luminance varies along x
    pub phase: f64,         // degrees
}

impl Default for Grating {
    fn default() -> Self {
        Grating {
            sf: 1.0,
            orientation: 0.0,
            phase: 0.0,
        }
    }
}

impl Grating {
    pub fn new(sf: f64, orientation: f64, phase: f64) -> Grating {
        Grating { sf, orientation, phase }
    }

    pub fn with_frequency(freq: SpatialFrequency, orientation: f64, phase: f64, mesh: &Mesh) -> Grating {
        Grating::new(freq.per_unit(mesh.width()), orientation, phase)
    }

    // Same grating with the phase advanced by the given number of degrees
    pub fn shifted(&self, degrees: f64) -> Grating {
        Grating {
            phase: self.phase + degrees,
            ..*self
        }
    }
}

impl Pattern for Grating {
    fn value_at(&self, x: f64, y: f64) -> f64 {
        let orient = self.orientation.to_radians();
        let a = orient.cos() * self.sf * 2.0 * PI;
        let b = orient.sin() * self.sf * 2.0 * PI;
        (a * x + b * y + self.phase.to_radians()).cos()
    }
}

pub fn grating(mesh: &Mesh, sf: f64, orient: f64, phase: f64) -> Field {
    Grating::new(sf, orient, phase).render(mesh)
}

// One full drift cycle: frame k is the grating shifted by k/n of a period
pub fn drifting_grating(mesh: &Mesh, grating: &Grating, n_frames: usize) -> Array3<f64> {
    let n = n_frames.max(1);
    let (rows, cols) = mesh.shape();
    let mut frames = Array3::<f64>::zeros((n, rows, cols));
    for (k, mut frame) in frames.outer_iter_mut().enumerate() {
        let step = grating.shifted(360.0 * k as f64 / n as f64);
        frame.assign(&step.render(mesh));
    }
    frames
}
