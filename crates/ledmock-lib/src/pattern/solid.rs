//! One color across the whole strip, cycling through the hue circle.

use std::io::Write;

use super::Pattern;
use crate::strip::Strip;

#[derive(Debug, Clone, Default)]
pub struct SolidCycle {
    hue: u32,
}

impl SolidCycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hue painted on the next frame.
    pub fn hue(&self) -> u32 {
        self.hue
    }
}

impl Pattern for SolidCycle {
    fn advance<W: Write>(&mut self, strip: &mut Strip<W>) {
        for led in strip.iter_mut() {
            led.set_hsv(self.hue as f64, 100.0, 100.0);
        }
        self.hue = (self.hue + 1) % 360;
    }
}
