//! A single simulated LED — RGB channels, HSV assignment, terminal color code.

mod color;
mod hsv;
pub mod math8;

pub use color::{Channel, Led};
pub use hsv::hsv_to_rgb;
