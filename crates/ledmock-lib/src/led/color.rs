//! The `Led` value type and its color conversions.
//!
//! Every channel write goes through [`Led::set_channel`], which reduces the
//! value modulo 256. Out-of-range input wraps; it is never rejected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::hsv::hsv_to_rgb;
use super::math8::{scale8, scale8_video};
use crate::error::LedmockError;

/// One of the three color channels of an [`Led`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

/// One simulated LED.
///
/// Serializes as a `#RRGGBB` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Led {
    red: u8,
    green: u8,
    blue: u8,
}

impl Default for Led {
    fn default() -> Self {
        Led::WHITE
    }
}

impl Led {
    /// Full white, the state every strip starts in.
    pub const WHITE: Led = Led::new(255, 255, 255);
    /// All channels off.
    pub const BLACK: Led = Led::new(0, 0, 0);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Led { red, green, blue }
    }

    pub fn red(&self) -> u8 {
        self.red
    }

    pub fn green(&self) -> u8 {
        self.green
    }

    pub fn blue(&self) -> u8 {
        self.blue
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        (self.red, self.green, self.blue)
    }

    pub fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }

    /// Store `value mod 256` in `channel`.
    ///
    /// Negative values wrap the same way: `-1` stores 255.
    pub fn set_channel(&mut self, channel: Channel, value: i64) {
        let wrapped = value.rem_euclid(256) as u8;
        match channel {
            Channel::Red => self.red = wrapped,
            Channel::Green => self.green = wrapped,
            Channel::Blue => self.blue = wrapped,
        }
    }

    pub fn set_red(&mut self, value: i64) {
        self.set_channel(Channel::Red, value);
    }

    pub fn set_green(&mut self, value: i64) {
        self.set_channel(Channel::Green, value);
    }

    pub fn set_blue(&mut self, value: i64) {
        self.set_channel(Channel::Blue, value);
    }

    /// Set all three channels in one update.
    pub fn set_rgb(&mut self, red: i64, green: i64, blue: i64) {
        self.set_red(red);
        self.set_green(green);
        self.set_blue(blue);
    }

    /// Set the color from hue (degrees, `[0, 360)`), saturation and value
    /// (percent, `[0, 100]`).
    ///
    /// Each normalized output channel is scaled by 255 and truncated toward
    /// zero, not rounded: HSV(0, 0, 50) is (127, 127, 127).
    pub fn set_hsv(&mut self, hue: f64, saturation: f64, value: f64) {
        let (r, g, b) = hsv_to_rgb(hue / 360.0, saturation / 100.0, value / 100.0);
        self.set_rgb((r * 255.0) as i64, (g * 255.0) as i64, (b * 255.0) as i64);
    }

    /// Multiply every channel by `factor`, truncating toward zero.
    pub fn scale(&mut self, factor: f64) {
        self.set_rgb(
            (self.red as f64 * factor) as i64,
            (self.green as f64 * factor) as i64,
            (self.blue as f64 * factor) as i64,
        );
    }

    /// Scale every channel by `level / 256`; lit channels stay lit.
    pub fn scale_video(&mut self, level: u8) {
        self.red = scale8_video(self.red, level);
        self.green = scale8_video(self.green, level);
        self.blue = scale8_video(self.blue, level);
    }

    /// Dim every channel by `amount / 256` of its brightness.
    pub fn fade_to_black_by(&mut self, amount: u8) {
        let keep = 255 - amount;
        self.red = scale8(self.red, keep);
        self.green = scale8(self.green, keep);
        self.blue = scale8(self.blue, keep);
    }

    /// The 24-bit foreground color escape for this LED: `ESC[38;2;R;G;Bm`.
    pub fn color_code(&self) -> String {
        format!("\x1B[38;2;{};{};{}m", self.red, self.green, self.blue)
    }
}

/// Formats as `#RRGGBB`.
impl fmt::Display for Led {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

/// Parses `#RRGGBB` (the `#` is optional, hex digits in either case).
impl FromStr for Led {
    type Err = LedmockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let invalid = || LedmockError::InvalidColor(s.to_string());
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |at: usize| u8::from_str_radix(&hex[at..at + 2], 16).map_err(|_| invalid());
        Ok(Led::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Led {
    type Error = LedmockError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Led> for String {
    fn from(led: Led) -> Self {
        led.to_string()
    }
}
