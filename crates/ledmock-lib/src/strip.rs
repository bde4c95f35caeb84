//! The LED strip — fixed-size LED storage, bounds-checked access, rendering.
//!
//! A [`Strip`] owns its output sink. The header (label and index ruler) is
//! written once at construction; [`Strip::render`] repaints the whole strip
//! on the row below it every frame, whether or not any LED changed.

use std::fmt::Write as _;
use std::io::Write;

use crate::error::{LedmockError, Result};
use crate::led::Led;
use crate::term;

/// Default LED glyph (U+25CF BLACK CIRCLE).
pub const DEFAULT_SYMBOL: &str = "\u{25CF}";

/// Ruler tick spacing, in LEDs.
const TICK_SPACING: usize = 10;

/// Minimum distance from the last tick before the final index gets its own label.
const MIN_TAIL_LABEL_GAP: usize = 4;

pub struct Strip<W: Write> {
    leds: Vec<Led>,
    symbol: String,
    prefix: String,
    out: W,
}

impl<W: Write> Strip<W> {
    /// Create a strip of `size` white LEDs centered in the current terminal.
    pub fn new(size: usize, symbol: &str, out: W) -> Result<Self> {
        let (columns, _rows) = term::terminal_size();
        Self::with_width(size, symbol, usize::from(columns), out)
    }

    /// Create a strip centered in a terminal `width` columns wide.
    ///
    /// Writes the header to `out` before returning.
    pub fn with_width(size: usize, symbol: &str, width: usize, out: W) -> Result<Self> {
        if size == 0 {
            return Err(LedmockError::InvalidSize(size));
        }
        let mut strip = Strip {
            leds: vec![Led::WHITE; size],
            symbol: symbol.to_string(),
            prefix: " ".repeat(width.saturating_sub(size) / 2),
            out,
        };
        let header = header(size, &strip.prefix);
        strip.out.write_all(header.as_bytes())?;
        strip.out.flush()?;
        log::debug!("strip of {size} LEDs, left padding {}", strip.prefix.len());
        Ok(strip)
    }

    pub fn len(&self) -> usize {
        self.leds.len()
    }

    /// Always false: a strip holds at least one LED.
    pub fn is_empty(&self) -> bool {
        self.leds.is_empty()
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Left padding written before the header lines and every frame.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    fn checked(&self, index: isize) -> Result<usize> {
        usize::try_from(index)
            .ok()
            .filter(|&i| i < self.leds.len())
            .ok_or(LedmockError::OutOfRange {
                index,
                len: self.leds.len(),
            })
    }

    pub fn get(&self, index: isize) -> Result<&Led> {
        let i = self.checked(index)?;
        Ok(&self.leds[i])
    }

    pub fn get_mut(&mut self, index: isize) -> Result<&mut Led> {
        let i = self.checked(index)?;
        Ok(&mut self.leds[i])
    }

    pub fn set(&mut self, index: isize, led: Led) -> Result<()> {
        *self.get_mut(index)? = led;
        Ok(())
    }

    /// LEDs in index order. Reverse with `.rev()` or [`Strip::iter_rev`].
    pub fn iter(&self) -> std::slice::Iter<'_, Led> {
        self.leds.iter()
    }

    pub fn iter_rev(&self) -> std::iter::Rev<std::slice::Iter<'_, Led>> {
        self.leds.iter().rev()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Led> {
        self.leds.iter_mut()
    }

    /// The frame body: every LED's color code followed by the symbol.
    pub fn frame(&self) -> String {
        let mut body = String::with_capacity(self.leds.len() * (20 + self.symbol.len()));
        for led in &self.leds {
            body.push_str(&led.color_code());
            body.push_str(&self.symbol);
        }
        body
    }

    /// Repaint the strip on its fixed row.
    pub fn render(&mut self) -> std::io::Result<()> {
        let mut line = String::new();
        line.push_str(term::STRIP_ROW);
        line.push_str(&self.prefix);
        line.push_str(&self.frame());
        line.push_str(term::CLEAR_TO_EOL);
        line.push('\r');
        self.out.write_all(line.as_bytes())?;
        self.out.flush()
    }

    /// The output sink.
    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn into_output(self) -> W {
        self.out
    }
}

impl<'a, W: Write> IntoIterator for &'a Strip<W> {
    type Item = &'a Led;
    type IntoIter = std::slice::Iter<'a, Led>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Screen reset, LED count label, and the two-line index ruler.
///
/// Ticks are labelled every 10 LEDs with the label's last digit on the tick
/// column. The final index is labelled as well when it sits at least 4
/// columns past the last tick.
fn header(size: usize, prefix: &str) -> String {
    let mut out = String::new();
    out.push_str(term::RESET_SCREEN);
    let _ = write!(out, "{prefix}Using {size} LEDs\n\n\n");

    let tail = (size - 1) % TICK_SPACING;

    out.push_str(prefix);
    for i in (0..size).step_by(TICK_SPACING) {
        if i == 0 {
            out.push('0');
        } else {
            let _ = write!(out, "{i:>width$}", width = TICK_SPACING);
        }
    }
    if tail >= MIN_TAIL_LABEL_GAP {
        let _ = write!(out, "{:>tail$}", size - 1);
    }
    out.push('\n');

    out.push_str(prefix);
    for i in (0..size).step_by(TICK_SPACING) {
        if i > 0 {
            out.push_str(&" ".repeat(TICK_SPACING - 1));
        }
        out.push('|');
    }
    if tail >= MIN_TAIL_LABEL_GAP {
        let _ = write!(out, "{:>tail$}", '|');
    }
    out.push('\n');
    out
}
