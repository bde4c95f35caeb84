//! Rainbow gradient that sweeps along the strip.

use std::io::Write;

use super::Pattern;
use crate::strip::Strip;

/// Hue advance per frame, in degrees.
const HUE_SPEED: u32 = 2;

/// Spreads almost one full hue circle over the strip and rotates it.
#[derive(Debug, Clone)]
pub struct GradientSweep {
    offset: u32,
    step: f64,
}

impl GradientSweep {
    /// `len` must be the length of the strip this pattern will drive.
    pub fn new(len: usize) -> Self {
        GradientSweep {
            offset: 0,
            step: 359.0 / len as f64,
        }
    }

    /// Hue of the first LED on the next frame.
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Hue LED `index` gets on the next frame. The per-index term is truncated.
    pub fn hue_at(&self, index: usize) -> u32 {
        (self.offset + (self.step * index as f64) as u32) % 360
    }
}

impl Pattern for GradientSweep {
    fn advance<W: Write>(&mut self, strip: &mut Strip<W>) {
        for (index, led) in strip.iter_mut().enumerate() {
            led.set_hsv(self.hue_at(index) as f64, 100.0, 100.0);
        }
        self.offset = (self.offset + HUE_SPEED) % 360;
    }
}
