/// Gabor patches: a grating windowed by a gaussian
///
use serde::{Deserialize, Serialize};

use super::{Gaussian, Grating, Pattern};
use crate::{Field, Mesh};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(default)]
pub struct Gabor {
    pub grating: Grating,
    pub envelope: Gaussian,
}

impl Gabor {
    pub fn new(grating: Grating, envelope: Gaussian) -> Gabor {
        Gabor { grating, envelope }
    }
}

impl Pattern for Gabor {
    fn value_at(&self, x: f64, y: f64) -> f64 {
        self.grating.value_at(x, y) * self.envelope.value_at(x, y)
    }
}

pub fn gabor(mesh: &Mesh, grating: Grating, envelope: Gaussian) -> Field {
    Gabor::new(grating, envelope).render(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldConfig;

    #[test]
    fn test_product_of_fields() {
        let mesh = Mesh::new(&FieldConfig::new(4.0, 4.0, 8.0));
        let grating = Grating::new(1.0, 30.0, 45.0);
        let envelope = Gaussian::new(1.0, 0.5);

        let patch = gabor(&mesh, grating, envelope);
        let expected = grating.render(&mesh) * envelope.render(&mesh);
        assert_eq!(patch, expected);

        // fades to neutral gray outside the envelope
        assert_eq!(patch[[0, 0]], 0.0);
        assert!(patch.iter().all(|v| v.abs() <= 1.0));
    }
}
