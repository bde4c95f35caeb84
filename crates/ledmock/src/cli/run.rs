//! `run` subcommand — draw a pattern until Ctrl+C or the frame limit.

use std::io;
use std::path::Path;

use clap::Args;
use ledmock_lib::driver;
use ledmock_lib::led::Led;
use ledmock_lib::pattern::AnyPattern;
use ledmock_lib::strip::Strip;
use ledmock_lib::term::OutputGuard;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::{Config, PatternKind, RUNNING, Result};

#[derive(Args, Debug, Default)]
pub struct RunOptions {
    /// Pattern to draw (see `ledmock patterns`)
    pub pattern: Option<PatternKind>,

    /// Number of LEDs on the strip
    #[arg(long)]
    pub leds: Option<usize>,

    /// Glyph drawn for each LED
    #[arg(long)]
    pub symbol: Option<String>,

    /// Pause after each frame, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Stop after this many frames (default: run until Ctrl+C)
    #[arg(long)]
    pub frames: Option<u64>,

    /// Seed for the random source, for reproducible twinkle runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Hue (0-359) for twinkle and fader
    #[arg(long)]
    pub hue: Option<u16>,

    /// Fill color (#RRGGBB) for color and bellcurve
    #[arg(long)]
    pub color: Option<Led>,
}

impl RunOptions {
    /// Overlay the flags that were given onto `config`.
    fn apply(&self, config: &mut Config) {
        if let Some(pattern) = self.pattern {
            config.pattern = pattern;
        }
        if let Some(leds) = self.leds {
            config.leds = leds;
        }
        if let Some(ref symbol) = self.symbol {
            config.symbol = symbol.clone();
        }
        if let Some(delay) = self.delay_ms {
            config.frame_delay_ms = delay;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.hue.is_some() {
            config.hue = self.hue;
        }
        if let Some(color) = self.color {
            config.color = color;
        }
    }
}

pub(super) fn cmd_run(opts: &RunOptions, config_path: Option<&Path>) -> Result<()> {
    let mut config = super::load_config(config_path);
    opts.apply(&mut config);
    config.check()?;

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // Declared before the strip so it drops after it: the restore sequence
    // is the last thing written on every exit path.
    let _guard = OutputGuard::new(io::stdout());

    let mut strip = Strip::new(config.leds, &config.symbol, io::stdout())?;
    let mut pattern = AnyPattern::build(
        config.pattern,
        &mut strip,
        config.hue,
        config.color,
        &config.twinkle,
        rng,
    );
    log::info!(
        "[run] {} on {} LEDs, {} ms per frame",
        pattern.kind(),
        strip.len(),
        config.frame_delay_ms
    );
    if matches!(config.pattern, PatternKind::Color | PatternKind::BellCurve) {
        log::info!("[run] color {}", config.color);
    }

    let frames = driver::run(
        &mut pattern,
        &mut strip,
        config.frame_delay(),
        &RUNNING,
        opts.frames,
    )?;
    log::info!("[run] drew {frames} frames");
    Ok(())
}
