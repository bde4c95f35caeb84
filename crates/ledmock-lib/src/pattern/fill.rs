//! Solid fill — the whole strip in one fixed color.

use std::io::Write;

use super::Pattern;
use crate::led::Led;
use crate::strip::Strip;

#[derive(Debug, Clone)]
pub struct ColorFill {
    color: Led,
}

impl ColorFill {
    pub fn new(color: Led) -> Self {
        ColorFill { color }
    }

    pub fn color(&self) -> Led {
        self.color
    }
}

impl Pattern for ColorFill {
    fn advance<W: Write>(&mut self, strip: &mut Strip<W>) {
        for led in strip.iter_mut() {
            *led = self.color;
        }
    }
}
