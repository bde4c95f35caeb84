//! A single hue whose saturation rolls along the strip as a sine wave.

use std::f64::consts::PI;
use std::io::Write;

use super::Pattern;
use crate::strip::Strip;

/// LEDs per full sine period.
const PERIOD: f64 = 100.0;

#[derive(Debug, Clone)]
pub struct SaturationFader {
    hue: u16,
    offset: usize,
}

impl SaturationFader {
    pub fn new(hue: u16) -> Self {
        SaturationFader { hue, offset: 0 }
    }

    pub fn hue(&self) -> u16 {
        self.hue
    }

    /// Phase offset applied on the next frame.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

/// Saturation (percent) at wave position `phase`, rounded half up.
pub fn saturation_at(phase: usize) -> u8 {
    ((2.0 * PI / PERIOD * phase as f64).sin() * 50.0 + 50.5) as u8
}

impl Pattern for SaturationFader {
    fn advance<W: Write>(&mut self, strip: &mut Strip<W>) {
        for (index, led) in strip.iter_mut().enumerate() {
            let saturation = saturation_at(index + self.offset);
            led.set_hsv(self.hue as f64, saturation as f64, 100.0);
        }
        self.offset = (self.offset + 1) % strip.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::led::Led;

    #[test]
    fn saturation_wave_samples() {
        let samples: Vec<u8> = (0..=100).step_by(5).map(saturation_at).collect();
        assert_eq!(
            samples,
            vec![
                50, 65, 79, 90, 98, 100, 98, 90, 79, 65, 50, 35, 21, 10, 2, 0, 2, 10, 21, 35, 50
            ]
        );
    }

    #[test]
    fn saturation_within_percent_range() {
        assert!((0..1000).map(saturation_at).all(|s| s <= 100));
    }

    #[test]
    fn applies_wave_at_full_value() {
        let mut s = Strip::with_width(30, "*", 0, Vec::new()).unwrap();
        let mut fader = SaturationFader::new(200);
        fader.advance(&mut s);
        for (i, led) in s.iter().enumerate() {
            let mut expected = Led::BLACK;
            expected.set_hsv(200.0, saturation_at(i) as f64, 100.0);
            assert_eq!(*led, expected, "index {i}");
        }
    }

    #[test]
    fn offset_wraps_at_strip_length() {
        let mut s = Strip::with_width(4, "*", 0, Vec::new()).unwrap();
        let mut fader = SaturationFader::new(0);
        let offsets: Vec<usize> = (0..6)
            .map(|_| {
                fader.advance(&mut s);
                fader.offset()
            })
            .collect();
        assert_eq!(offsets, vec![1, 2, 3, 0, 1, 2]);
    }
}
