//! Bell curve — one color, dim at both strip ends and brightest in the middle.
//!
//! LED `i` of `N` takes brightness `cubicwave8(⌊255/N · i⌋)` and is dimmed
//! with [`Led::scale_video`], so any nonzero level keeps a lit channel lit.
//! The profile is static; every frame repaints it.

use std::io::Write;

use super::Pattern;
use crate::led::Led;
use crate::led::math8::cubicwave8;
use crate::strip::Strip;

#[derive(Debug, Clone)]
pub struct BellCurve {
    color: Led,
}

/// Brightness (0-255) of LED `index` on a strip of `len` LEDs.
pub fn bell_level(index: usize, len: usize) -> u8 {
    let phase = 255.0_f32 / len as f32 * index as f32;
    cubicwave8(phase as u8)
}

impl BellCurve {
    pub fn new(color: Led) -> Self {
        BellCurve { color }
    }

    pub fn color(&self) -> Led {
        self.color
    }
}

impl Pattern for BellCurve {
    fn advance<W: Write>(&mut self, strip: &mut Strip<W>) {
        let len = strip.len();
        for (i, led) in strip.iter_mut().enumerate() {
            *led = self.color;
            led.scale_video(bell_level(i, len));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(size: usize) -> Strip<Vec<u8>> {
        Strip::with_width(size, "*", 0, Vec::new()).unwrap()
    }

    #[test]
    fn levels_for_four_leds() {
        let levels: Vec<u8> = (0..4).map(|i| bell_level(i, 4)).collect();
        assert_eq!(levels, vec![0, 126, 255, 128]);
    }

    #[test]
    fn gray_profile_for_four_leds() {
        let mut s = strip(4);
        BellCurve::new(Led::new(128, 128, 128)).advance(&mut s);
        let reds: Vec<u8> = s.iter().map(Led::red).collect();
        assert_eq!(reds, vec![0, 64, 128, 65]);
    }

    #[test]
    fn first_led_dark_peak_in_middle() {
        let len = 66;
        let mut s = strip(len);
        BellCurve::new(Led::new(255, 255, 255)).advance(&mut s);
        assert_eq!(*s.get(0).unwrap(), Led::BLACK);
        let peak = s.iter().map(Led::red).max().unwrap();
        assert_eq!(peak, 255);
        let middle = s.get(33).unwrap().red();
        assert!(middle >= 250, "middle {middle}");
    }

    #[test]
    fn off_channels_stay_off() {
        let mut s = strip(10);
        BellCurve::new(Led::new(200, 0, 0)).advance(&mut s);
        assert!(s.iter().all(|led| led.green() == 0 && led.blue() == 0));
    }

    #[test]
    fn single_led_is_dark() {
        let mut s = strip(1);
        BellCurve::new(Led::WHITE).advance(&mut s);
        assert_eq!(*s.get(0).unwrap(), Led::BLACK);
    }

    #[test]
    fn stable_across_frames() {
        let mut s = strip(9);
        let mut bell = BellCurve::new(Led::new(0, 90, 180));
        bell.advance(&mut s);
        let first: Vec<Led> = s.iter().copied().collect();
        bell.advance(&mut s);
        let second: Vec<Led> = s.iter().copied().collect();
        assert_eq!(first, second);
        assert_eq!(bell.color(), Led::new(0, 90, 180));
    }
}
