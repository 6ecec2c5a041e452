/// Loading raster images as normalized fields
///
use image::{DynamicImage, GenericImageView};
use ndarray::{s, Array2, Array3, Axis};
use std::path::Path;
use tracing::{debug, warn};

use crate::error::Result;
use crate::Field;

// Decode an image file into a resolution x resolution field scaled to [-1, 1]
pub fn load_image<P: AsRef<Path>>(path: P, resolution: usize) -> Result<Field> {
    let path = path.as_ref();
    let img = image::open(path)?;
    debug!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        resolution,
        "decoded image"
    );
    Ok(normalize_image(&img, resolution))
}

pub fn normalize_image(img: &DynamicImage, resolution: usize) -> Field {
    let gray = to_grayscale(&channels(img));
    let square = crop_square(&gray);
    rescale(&resample_bilinear(&square, resolution))
}

/// Pixel values as a (rows, cols, channels) array in [0, 1].
///
/// Gray images give one channel and color images give R, G and B. Alpha is dropped.
pub fn channels(img: &DynamicImage) -> Array3<f64> {
    let (w, h) = (img.width() as usize, img.height() as usize);
    if img.color().has_color() {
        let rgb = img.to_rgb32f();
        Array3::from_shape_fn((h, w, 3), |(i, j, c)| f64::from(rgb.get_pixel(j as u32, i as u32)[c]))
    } else {
        let luma = img.to_luma32f();
        Array3::from_shape_fn((h, w, 1), |(i, j, _)| f64::from(luma.get_pixel(j as u32, i as u32)[0]))
    }
}

// Plain average over the channel axis
pub fn to_grayscale(pixels: &Array3<f64>) -> Field {
    let (rows, cols, _) = pixels.dim();
    pixels
        .mean_axis(Axis(2))
        .unwrap_or_else(|| Field::zeros((rows, cols)))
}

// Largest square anchored at the top-left corner
pub fn crop_square(field: &Field) -> Field {
    let (rows, cols) = field.dim();
    let n = rows.min(cols);
    field.slice(s![..n, ..n]).to_owned()
}

/// Bilinear resampling of a square field to resolution x resolution.
///
/// Output pixel centers map onto input pixel centers, and lookups past the
/// last row or column are clamped to the edge.
pub fn resample_bilinear(field: &Field, resolution: usize) -> Field {
    let n = resolution.max(1);
    let (rows, cols) = field.dim();
    if rows == 0 || cols == 0 {
        return Field::zeros((n, n));
    }
    let sy = rows as f64 / n as f64;
    let sx = cols as f64 / n as f64;
    Array2::from_shape_fn((n, n), |(i, j)| {
        let fy = ((i as f64 + 0.5) * sy - 0.5).max(0.0).min((rows - 1) as f64);
        let fx = ((j as f64 + 0.5) * sx - 0.5).max(0.0).min((cols - 1) as f64);
        let (y0, x0) = (fy.floor() as usize, fx.floor() as usize);
        let (y1, x1) = ((y0 + 1).min(rows - 1), (x0 + 1).min(cols - 1));
        let (ty, tx) = (fy - y0 as f64, fx - x0 as f64);

        field[[y0, x0]] * (1.0 - tx) * (1.0 - ty)
            + field[[y0, x1]] * tx * (1.0 - ty)
            + field[[y1, x0]] * (1.0 - tx) * ty
            + field[[y1, x1]] * tx * ty
    })
}

/// Min-max scaling to [-1, 1].
///
/// A uniform image has no range to stretch and comes back as all zeros (neutral gray).
pub fn rescale(field: &Field) -> Field {
    let (min, max) = field
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    if !(max > min) {
        warn!(min, max, "image has no contrast, returning a blank field");
        return Field::zeros(field.dim());
    }
    field.mapv(|v| 2.0 * (v - min) / (max - min) - 1.0)
}
