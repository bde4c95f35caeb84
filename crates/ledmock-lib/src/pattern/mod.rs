//! Animation patterns — per-frame state machines that drive a [`Strip`].
//!
//! The set of patterns is closed: [`PatternKind`] names them and
//! [`AnyPattern`] dispatches to the selected one. Each pattern keeps only its
//! own motion state and never holds the strip; the driver hands it in on
//! every frame.

mod bell;
mod fader;
mod fill;
mod gradient;
mod rider;
mod scanner;
mod solid;
mod twinkle;

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::config::TwinkleSettings;
use crate::error::LedmockError;
use crate::led::Led;
use crate::strip::Strip;

pub use bell::{BellCurve, bell_level};
pub use fader::{SaturationFader, saturation_at};
pub use fill::ColorFill;
pub use gradient::GradientSweep;
pub use rider::NightRider;
pub use scanner::{Scanner, TRAIL_LEN};
pub use solid::SolidCycle;
pub use twinkle::{Twinkle, brightness_curve};

/// One frame of animation.
pub trait Pattern {
    /// Advance one frame, mutating LEDs of `strip` in place.
    fn advance<W: Write>(&mut self, strip: &mut Strip<W>);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    Gradient,
    Solid,
    Scanner,
    Twinkle,
    Fader,
    Color,
    BellCurve,
    NightRider,
}

impl PatternKind {
    pub const ALL: [PatternKind; 8] = [
        PatternKind::Gradient,
        PatternKind::Solid,
        PatternKind::Scanner,
        PatternKind::Twinkle,
        PatternKind::Fader,
        PatternKind::Color,
        PatternKind::BellCurve,
        PatternKind::NightRider,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PatternKind::Gradient => "gradient",
            PatternKind::Solid => "solid",
            PatternKind::Scanner => "scanner",
            PatternKind::Twinkle => "twinkle",
            PatternKind::Fader => "fader",
            PatternKind::Color => "color",
            PatternKind::BellCurve => "bellcurve",
            PatternKind::NightRider => "nightrider",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            PatternKind::Gradient => "Rainbow gradient sweeping along the strip",
            PatternKind::Solid => "Whole strip in one color, cycling through hues",
            PatternKind::Scanner => "Red beam bouncing end to end with a fading tail",
            PatternKind::Twinkle => "LEDs flicker at random intervals",
            PatternKind::Fader => "Saturation wave rolling along a single hue",
            PatternKind::Color => "Whole strip in one fixed color",
            PatternKind::BellCurve => "One color, dark at the ends and brightest in the middle",
            PatternKind::NightRider => "Red dot bouncing end to end with a slow fade",
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PatternKind {
    type Err = LedmockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        PatternKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| LedmockError::UnknownPattern(s.to_string()))
    }
}

/// The selected pattern, dispatched by variant.
pub enum AnyPattern {
    Gradient(GradientSweep),
    Solid(SolidCycle),
    Scanner(Scanner),
    Twinkle(Twinkle<StdRng>),
    Fader(SaturationFader),
    Color(ColorFill),
    BellCurve(BellCurve),
    NightRider(NightRider),
}

impl AnyPattern {
    /// Construct `kind` for `strip`.
    ///
    /// `hue` applies to twinkle and fader; when `None` a random hue is drawn
    /// from `rng`, which twinkle then keeps for its flicker delays. `color`
    /// applies to color and bellcurve.
    pub fn build<W: Write>(
        kind: PatternKind,
        strip: &mut Strip<W>,
        hue: Option<u16>,
        color: Led,
        twinkle: &TwinkleSettings,
        mut rng: StdRng,
    ) -> Self {
        let hue = hue.unwrap_or_else(|| rng.gen_range(0..360));
        log::debug!("building {kind} pattern for {} LEDs", strip.len());
        match kind {
            PatternKind::Gradient => AnyPattern::Gradient(GradientSweep::new(strip.len())),
            PatternKind::Solid => AnyPattern::Solid(SolidCycle::new()),
            PatternKind::Scanner => AnyPattern::Scanner(Scanner::new()),
            PatternKind::Twinkle => AnyPattern::Twinkle(Twinkle::new(strip, hue, twinkle, rng)),
            PatternKind::Fader => AnyPattern::Fader(SaturationFader::new(hue)),
            PatternKind::Color => AnyPattern::Color(ColorFill::new(color)),
            PatternKind::BellCurve => AnyPattern::BellCurve(BellCurve::new(color)),
            PatternKind::NightRider => AnyPattern::NightRider(NightRider::new(strip)),
        }
    }

    pub fn kind(&self) -> PatternKind {
        match self {
            AnyPattern::Gradient(_) => PatternKind::Gradient,
            AnyPattern::Solid(_) => PatternKind::Solid,
            AnyPattern::Scanner(_) => PatternKind::Scanner,
            AnyPattern::Twinkle(_) => PatternKind::Twinkle,
            AnyPattern::Fader(_) => PatternKind::Fader,
            AnyPattern::Color(_) => PatternKind::Color,
            AnyPattern::BellCurve(_) => PatternKind::BellCurve,
            AnyPattern::NightRider(_) => PatternKind::NightRider,
        }
    }
}

impl Pattern for AnyPattern {
    fn advance<W: Write>(&mut self, strip: &mut Strip<W>) {
        match self {
            AnyPattern::Gradient(p) => p.advance(strip),
            AnyPattern::Solid(p) => p.advance(strip),
            AnyPattern::Scanner(p) => p.advance(strip),
            AnyPattern::Twinkle(p) => p.advance(strip),
            AnyPattern::Fader(p) => p.advance(strip),
            AnyPattern::Color(p) => p.advance(strip),
            AnyPattern::BellCurve(p) => p.advance(strip),
            AnyPattern::NightRider(p) => p.advance(strip),
        }
    }
}
