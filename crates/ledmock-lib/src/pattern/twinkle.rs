//! Random twinkle — each LED waits a random delay, then flickers once.
//!
//! Every LED runs its own two-state machine. A waiting LED counts its delay
//! down without touching its color. When the countdown reaches zero it turns
//! active and walks the brightness curve from its end back toward the start,
//! then draws a fresh delay and waits again.

use std::f64::consts::PI;
use std::io::Write;

use rand::Rng;

use super::Pattern;
use crate::config::{MAX_FLICKER_LENGTH, TwinkleSettings};
use crate::strip::Strip;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Flicker {
    countdown: u32,
    waiting: bool,
}

pub struct Twinkle<R: Rng> {
    hue: u16,
    min_delay: u32,
    max_delay: u32,
    last_level: u32,
    levels: Vec<u8>,
    states: Vec<Flicker>,
    rng: R,
}

/// Brightness (percent) over one flicker of `length` frames: two dips to zero
/// with a full-brightness peak between them.
pub fn brightness_curve(length: usize) -> Vec<u8> {
    (0..length)
        .map(|k| ((50.0 * (4.0 * PI / length as f64 * k as f64).cos() - 50.0).abs() + 0.5) as u8)
        .collect()
}

fn draw_delay(rng: &mut impl Rng, min: u32, max: u32) -> u32 {
    rng.gen_range(min..=max)
}

impl<R: Rng> Twinkle<R> {
    /// Black out `strip` and start every LED waiting on a random delay.
    ///
    /// Swapped delay bounds are reordered. The flicker length is clamped to
    /// `1..=MAX_FLICKER_LENGTH`.
    pub fn new<W: Write>(
        strip: &mut Strip<W>,
        hue: u16,
        settings: &TwinkleSettings,
        mut rng: R,
    ) -> Self {
        let min_delay = settings.min_flicker_delay.min(settings.max_flicker_delay);
        let max_delay = settings.min_flicker_delay.max(settings.max_flicker_delay);
        let length = settings.flicker_length.clamp(1, MAX_FLICKER_LENGTH);

        for led in strip.iter_mut() {
            led.set_hsv(0.0, 0.0, 0.0);
        }
        let states = (0..strip.len())
            .map(|_| Flicker {
                countdown: draw_delay(&mut rng, min_delay, max_delay),
                waiting: true,
            })
            .collect();

        Twinkle {
            hue,
            min_delay,
            max_delay,
            last_level: length - 1,
            levels: brightness_curve(length as usize),
            states,
            rng,
        }
    }

    pub fn hue(&self) -> u16 {
        self.hue
    }

    pub fn levels(&self) -> &[u8] {
        &self.levels
    }

    /// Frames left before LED `index` changes state.
    pub fn countdown(&self, index: usize) -> Option<u32> {
        self.states.get(index).map(|s| s.countdown)
    }

    pub fn is_waiting(&self, index: usize) -> Option<bool> {
        self.states.get(index).map(|s| s.waiting)
    }
}

impl<R: Rng> Pattern for Twinkle<R> {
    fn advance<W: Write>(&mut self, strip: &mut Strip<W>) {
        for (led, state) in strip.iter_mut().zip(self.states.iter_mut()) {
            if state.countdown == 0 {
                state.countdown = if state.waiting {
                    self.last_level
                } else {
                    draw_delay(&mut self.rng, self.min_delay, self.max_delay)
                };
                state.waiting = !state.waiting;
            }
            if !state.waiting {
                let level = self.levels[state.countdown as usize];
                led.set_hsv(self.hue as f64, 100.0, level as f64);
            }
            state.countdown = state.countdown.saturating_sub(1);
        }
    }
}
