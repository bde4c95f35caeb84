//! Night rider — a red dot bouncing end to end, leaving a slow fade behind it.
//!
//! Each frame paints the current position red, moves one LED, and then dims
//! the whole strip by 10/256. The direction flips once the dot reaches
//! either end, so each end LED is painted once per pass.

use std::io::Write;

use super::Pattern;
use crate::led::Led;
use crate::strip::Strip;

/// Per-frame dimming applied to every LED.
const FADE_BY: u8 = 10;

const RED: Led = Led::new(255, 0, 0);

#[derive(Debug, Clone)]
pub struct NightRider {
    position: isize,
    step: isize,
}

impl NightRider {
    /// Black out `strip` and start the dot at LED 0, moving up.
    pub fn new<W: Write>(strip: &mut Strip<W>) -> Self {
        for led in strip.iter_mut() {
            *led = Led::BLACK;
        }
        NightRider {
            position: 0,
            step: 1,
        }
    }

    /// LED painted on the next frame.
    pub fn position(&self) -> usize {
        self.position as usize
    }

    /// `+1` moving up the strip, `-1` moving down.
    pub fn direction(&self) -> isize {
        self.step
    }
}

impl Pattern for NightRider {
    fn advance<W: Write>(&mut self, strip: &mut Strip<W>) {
        let last = strip.len() as isize - 1;
        if let Ok(led) = strip.get_mut(self.position) {
            *led = RED;
        }

        self.position = (self.position + self.step).clamp(0, last);
        if self.position >= last || self.position <= 0 {
            self.step = -self.step;
        }

        for led in strip.iter_mut() {
            led.fade_to_black_by(FADE_BY);
        }
    }
}
