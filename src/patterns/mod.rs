/// Closed-form scalar fields evaluated over a coordinate mesh
///
pub mod gabor;
pub mod gaussian;
pub mod grating;
pub mod spot;

pub use self::gabor::*;
pub use self::gaussian::*;
pub use self::grating::*;
pub use self::spot::*;

use ndarray::Zip;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::{Field, Mesh};

/// A stimulus that can be evaluated at any point of the visual field.
pub trait Pattern {
    fn value_at(&self, x: f64, y: f64) -> f64;

    // Evaluate the pattern at every sample of the mesh
    fn render(&self, mesh: &Mesh) -> Field {
        Zip::from(mesh.x())
            .and(mesh.y())
            .map_collect(|&x, &y| self.value_at(x, y))
    }
}

/// Declarative description of a single pattern, e.g. `{"kind": "grating", "sf": 2.0}`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Stimulus {
    Grating(Grating),
    Gaussian(Gaussian),
    Spot(Spot),
    Gabor(Gabor),
}

impl Stimulus {
    pub fn from_json(serialized: &str) -> Result<Stimulus> {
        Ok(serde_json::from_str(serialized)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Pattern for Stimulus {
    fn value_at(&self, x: f64, y: f64) -> f64 {
        match self {
            Stimulus::Grating(g) => g.value_at(x, y),
            Stimulus::Gaussian(g) => g.value_at(x, y),
            Stimulus::Spot(s) => s.value_at(x, y),
            Stimulus::Gabor(g) => g.value_at(x, y),
        }
    }
}
