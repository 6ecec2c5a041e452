/// Showing fields and cycling through animation frames
///
use image::{GrayImage, Luma};
use ndarray::{Array3, ArrayView2, Axis};
use std::path::Path;
use std::thread;
use std::time::Duration;
use tracing::{debug, trace};

use crate::error::{Result, StimulusError};
use crate::Field;

/// Values are always drawn against this fixed range: -1 is black, 0 gray and +1 white.
pub const DISPLAY_RANGE: (f64, f64) = (-1.0, 1.0);

pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkControl {
    Continue,
    Closed,
}

/// Anything that can put a field on screen (or on disk).
pub trait FrameSink {
    fn draw(&mut self, frame: ArrayView2<f64>) -> Result<SinkControl>;
}

// Draw a single field, passing back whether the sink is still open
pub fn show<S: FrameSink>(field: &Field, sink: &mut S) -> Result<SinkControl> {
    sink.draw(field.view())
}

/// A stack of equally sized frames played in a loop.
#[derive(Debug, Clone)]
pub struct Animation {
    frames: Array3<f64>,    // (frame, rows, cols)
    index: usize,
    interval: Duration,
}

impl Animation {
    pub fn new(frames: Array3<f64>) -> Result<Animation> {
        if frames.len_of(Axis(0)) == 0 {
            return Err(StimulusError::EmptySequence);
        }
        Ok(Animation {
            frames,
            index: 0,
            interval: DEFAULT_INTERVAL,
        })
    }

    pub fn from_fields(fields: &[Field]) -> Result<Animation> {
        let first = fields.first().ok_or(StimulusError::EmptySequence)?;
        let expected = first.dim();
        let mut frames = Array3::<f64>::zeros((fields.len(), expected.0, expected.1));
        for (mut frame, field) in frames.outer_iter_mut().zip(fields) {
            if field.dim() != expected {
                return Err(StimulusError::ShapeMismatch {
                    expected,
                    found: field.dim(),
                });
            }
            frame.assign(field);
        }
        Animation::new(frames)
    }

    pub fn with_interval(mut self, interval: Duration) -> Animation {
        self.interval = interval;
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn len(&self) -> usize {
        self.frames.len_of(Axis(0))
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn current_frame(&self) -> ArrayView2<f64> {
        self.frames.index_axis(Axis(0), self.index)
    }

    // Step to the next frame, wrapping around after the last one
    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % self.len();
        self.index
    }

    pub fn tick<S: FrameSink>(&mut self, sink: &mut S) -> Result<SinkControl> {
        let index = self.advance();
        trace!(index, "animation tick");
        sink.draw(self.current_frame())
    }

    /// Draws the current frame, then keeps ticking every interval until the sink closes.
    ///
    /// Returns the number of ticks played.
    pub fn run<S: FrameSink>(&mut self, sink: &mut S) -> Result<usize> {
        debug!(frames = self.len(), interval = ?self.interval, "starting animation");
        let mut ticks = 0;
        if sink.draw(self.current_frame())? == SinkControl::Closed {
            return Ok(ticks);
        }
        loop {
            thread::sleep(self.interval);
            ticks += 1;
            if self.tick(sink)? == SinkControl::Closed {
                return Ok(ticks);
            }
        }
    }
}

// Map the display range onto 0..=255, clamping anything outside it
pub fn to_gray_image(frame: ArrayView2<f64>) -> GrayImage {
    let (rows, cols) = frame.dim();
    let (lo, hi) = DISPLAY_RANGE;
    GrayImage::from_fn(cols as u32, rows as u32, |x, y| {
        let v = frame[[y as usize, x as usize]].max(lo).min(hi);
        Luma([((v - lo) / (hi - lo) * 255.0).round() as u8])
    })
}

pub fn save_png<P: AsRef<Path>>(field: &Field, path: P) -> Result<()> {
    to_gray_image(field.view()).save(path.as_ref())?;
    Ok(())
}

/// Collects every drawn frame as an 8-bit image, closing once `limit` frames are in.
#[derive(Debug, Default)]
pub struct GrayFrames {
    pub frames: Vec<GrayImage>,
    limit: Option<usize>,
}

impl GrayFrames {
    pub fn new() -> GrayFrames {
        GrayFrames::default()
    }

    pub fn with_limit(limit: usize) -> GrayFrames {
        GrayFrames {
            frames: Vec::new(),
            limit: Some(limit),
        }
    }
}

impl FrameSink for GrayFrames {
    fn draw(&mut self, frame: ArrayView2<f64>) -> Result<SinkControl> {
        self.frames.push(to_gray_image(frame));
        match self.limit {
            Some(limit) if self.frames.len() >= limit => Ok(SinkControl::Closed),
            _ => Ok(SinkControl::Continue),
        }
    }
}
