//! Application configuration — TOML-based, platform-aware paths.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::led::Led;
use crate::pattern::PatternKind;
use crate::strip::DEFAULT_SYMBOL;

/// Header comment prepended to saved config files.
const CONFIG_HEADER: &str = "# ledmock configuration\n\n";

/// Longest accepted flicker, in frames. The brightness curve holds one byte
/// per frame.
pub const MAX_FLICKER_LENGTH: u32 = 10_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Number of LEDs on the strip. Default: 100.
    #[serde(default = "default_leds")]
    pub leds: usize,

    /// Glyph drawn for each LED. Default: "●".
    #[serde(default = "default_symbol")]
    pub symbol: String,

    /// Pattern to run. Default: "fader".
    #[serde(default = "default_pattern")]
    pub pattern: PatternKind,

    /// Pause after each rendered frame, in milliseconds. Default: 10.
    #[serde(default = "default_frame_delay_ms")]
    pub frame_delay_ms: u64,

    /// Hue (0-359) for twinkle and fader. Unset = random per run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hue: Option<u16>,

    /// Seed for the random source. Unset = seeded from the OS.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Fill color for the color and bellcurve patterns. Default: "#808080".
    #[serde(default = "default_color")]
    pub color: Led,

    #[serde(default)]
    pub twinkle: TwinkleSettings,
}

/// Flicker timing for the twinkle pattern, in frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwinkleSettings {
    /// Shortest wait between flickers. Default: 50.
    #[serde(default = "default_min_flicker_delay")]
    pub min_flicker_delay: u32,

    /// Longest wait between flickers. Default: 500.
    #[serde(default = "default_max_flicker_delay")]
    pub max_flicker_delay: u32,

    /// Frames one flicker lasts. Default: 150.
    #[serde(default = "default_flicker_length")]
    pub flicker_length: u32,
}

fn default_leds() -> usize {
    100
}
fn default_symbol() -> String {
    DEFAULT_SYMBOL.into()
}
fn default_pattern() -> PatternKind {
    PatternKind::Fader
}
fn default_frame_delay_ms() -> u64 {
    10
}
fn default_color() -> Led {
    Led::new(128, 128, 128)
}
fn default_min_flicker_delay() -> u32 {
    50
}
fn default_max_flicker_delay() -> u32 {
    500
}
fn default_flicker_length() -> u32 {
    150
}

impl Default for TwinkleSettings {
    fn default() -> Self {
        TwinkleSettings {
            min_flicker_delay: default_min_flicker_delay(),
            max_flicker_delay: default_max_flicker_delay(),
            flicker_length: default_flicker_length(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            leds: default_leds(),
            symbol: default_symbol(),
            pattern: default_pattern(),
            frame_delay_ms: default_frame_delay_ms(),
            hue: None,
            seed: None,
            color: default_color(),
            twinkle: TwinkleSettings::default(),
        }
    }
}

/// Validation errors that [`Config::validate`] can return.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// `leds` is zero.
    NoLeds,
    /// `symbol` is empty.
    EmptySymbol,
    /// `hue` is 360 or more.
    HueOutOfRange(u16),
    /// `twinkle.min_flicker_delay` exceeds `twinkle.max_flicker_delay`.
    FlickerDelayOrder { min: u32, max: u32 },
    /// `twinkle.flicker_length` is zero.
    NoFlickerLength,
    /// `twinkle.flicker_length` exceeds [`MAX_FLICKER_LENGTH`].
    FlickerTooLong(u32),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NoLeds => write!(f, "leds must be at least 1"),
            ValidationError::EmptySymbol => write!(f, "symbol cannot be empty"),
            ValidationError::HueOutOfRange(h) => write!(f, "hue {h} is outside 0-359"),
            ValidationError::FlickerDelayOrder { min, max } => write!(
                f,
                "twinkle.min_flicker_delay ({min}) exceeds twinkle.max_flicker_delay ({max})"
            ),
            ValidationError::NoFlickerLength => {
                write!(f, "twinkle.flicker_length must be at least 1")
            }
            ValidationError::FlickerTooLong(len) => write!(
                f,
                "twinkle.flicker_length ({len}) exceeds {MAX_FLICKER_LENGTH}"
            ),
        }
    }
}

impl Config {
    /// Platform-specific config directory.
    pub fn dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ledmock"))
    }

    /// Full path to config file.
    pub fn path() -> Option<PathBuf> {
        Self::dir().map(|d| d.join("config.toml"))
    }

    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms)
    }

    /// Load config from disk, or return defaults if not found.
    pub fn load() -> Self {
        let (config, warnings) = Self::load_with_warnings();
        for w in &warnings {
            log::warn!("{w}");
        }
        config
    }

    /// Save config to an arbitrary path atomically (write to temp file, then rename).
    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let serialized = toml::to_string_pretty(self).map_err(std::io::Error::other)?;
        let contents = format!("{CONFIG_HEADER}{serialized}");
        let tmp = path.with_extension("toml.tmp");
        std::fs::write(&tmp, &contents)?;
        match std::fs::rename(&tmp, path) {
            Ok(()) => Ok(()),
            Err(_) => {
                // Rename can fail across filesystems; fall back to direct write + cleanup
                let result = std::fs::write(path, &contents);
                let _ = std::fs::remove_file(&tmp);
                result
            }
        }
    }

    /// Load config from an arbitrary path, returning the config and any parse warnings.
    ///
    /// Returns `(defaults, [])` if the file doesn't exist.
    /// Returns `(defaults, [warning])` if the file exists but can't be parsed.
    pub fn load_from(path: &Path) -> (Self, Vec<String>) {
        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => (config, vec![]),
                Err(e) => {
                    let warning = format!(
                        "config parse error ({}), using defaults: {e}",
                        path.display()
                    );
                    (Self::default(), vec![warning])
                }
            },
            Err(_) => (Self::default(), vec![]),
        }
    }

    /// Load config from the default path, returning the config and any parse warnings.
    pub fn load_with_warnings() -> (Self, Vec<String>) {
        let Some(path) = Self::path() else {
            return (Self::default(), vec![]);
        };
        Self::load_from(&path)
    }

    /// Validate the entire config, collecting all errors.
    pub fn validate(&self) -> std::result::Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.leds == 0 {
            errors.push(ValidationError::NoLeds);
        }
        if self.symbol.is_empty() {
            errors.push(ValidationError::EmptySymbol);
        }
        if let Some(hue) = self.hue
            && hue >= 360
        {
            errors.push(ValidationError::HueOutOfRange(hue));
        }
        let t = &self.twinkle;
        if t.min_flicker_delay > t.max_flicker_delay {
            errors.push(ValidationError::FlickerDelayOrder {
                min: t.min_flicker_delay,
                max: t.max_flicker_delay,
            });
        }
        if t.flicker_length == 0 {
            errors.push(ValidationError::NoFlickerLength);
        }
        if t.flicker_length > MAX_FLICKER_LENGTH {
            errors.push(ValidationError::FlickerTooLong(t.flicker_length));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// [`Config::validate`] folded into a single [`crate::LedmockError::Config`].
    pub fn check(&self) -> crate::error::Result<()> {
        self.validate().map_err(|errors| {
            let joined: Vec<String> = errors.iter().map(ToString::to_string).collect();
            crate::LedmockError::Config(joined.join("; "))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── defaults ──

    #[test]
    fn defaults() {
        let c = Config::default();
        assert_eq!(c.leds, 100);
        assert_eq!(c.symbol, "\u{25CF}");
        assert_eq!(c.pattern, PatternKind::Fader);
        assert_eq!(c.frame_delay(), Duration::from_millis(10));
        assert_eq!(c.hue, None);
        assert_eq!(c.twinkle.min_flicker_delay, 50);
        assert_eq!(c.twinkle.max_flicker_delay, 500);
        assert_eq!(c.twinkle.flicker_length, 150);
        assert_eq!(c.color, Led::new(128, 128, 128));
        assert!(c.validate().is_ok());
    }

    #[test]
    fn path_ends_with_config_toml() {
        if let Some(p) = Config::path() {
            assert!(p.ends_with("ledmock/config.toml"));
        }
    }

    // ── parsing ──

    #[test]
    fn empty_file_gives_defaults() {
        let c: Config = toml::from_str("").unwrap();
        assert_eq!(c, Config::default());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let c: Config = toml::from_str(
            "leds = 30\npattern = \"scanner\"\n[twinkle]\nflicker_length = 40\n",
        )
        .unwrap();
        assert_eq!(c.leds, 30);
        assert_eq!(c.pattern, PatternKind::Scanner);
        assert_eq!(c.twinkle.flicker_length, 40);
        assert_eq!(c.twinkle.min_flicker_delay, 50);
        assert_eq!(c.symbol, "\u{25CF}");
    }

    #[test]
    fn color_parses_from_hex() {
        let c: Config = toml::from_str("pattern = \"bellcurve\"\ncolor = \"#FF8000\"\n").unwrap();
        assert_eq!(c.pattern, PatternKind::BellCurve);
        assert_eq!(c.color, Led::new(255, 128, 0));
    }

    #[test]
    fn malformed_color_fails_to_parse() {
        let err = toml::from_str::<Config>("color = \"orange\"").unwrap_err();
        assert!(err.to_string().contains("expected #RRGGBB"));
    }

    #[test]
    fn color_saved_as_hex() {
        let text = toml::to_string_pretty(&Config::default()).unwrap();
        assert!(text.contains("color = \"#808080\""));
    }

    #[test]
    fn unknown_pattern_fails_to_parse() {
        assert!(toml::from_str::<Config>("pattern = \"plasma\"").is_err());
    }

    // ── load / save ──

    #[test]
    fn load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let (c, warnings) = Config::load_from(&dir.path().join("nope.toml"));
        assert_eq!(c, Config::default());
        assert!(warnings.is_empty());
    }

    #[test]
    fn load_garbage_warns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "leds = [[[").unwrap();
        let (c, warnings) = Config::load_from(&path);
        assert_eq!(c, Config::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("config parse error"));
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub").join("config.toml");
        let config = Config {
            leds: 42,
            symbol: "#".into(),
            pattern: PatternKind::Twinkle,
            frame_delay_ms: 25,
            hue: Some(200),
            seed: Some(9),
            color: Led::new(1, 2, 3),
            twinkle: TwinkleSettings {
                min_flicker_delay: 5,
                max_flicker_delay: 10,
                flicker_length: 20,
            },
        };
        config.save_to(&path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with(CONFIG_HEADER));
        let (loaded, warnings) = Config::load_from(&path);
        assert!(warnings.is_empty());
        assert_eq!(loaded, config);
        assert!(!path.with_extension("toml.tmp").exists());
    }

    // ── validation ──

    #[test]
    fn validate_collects_every_error() {
        let config = Config {
            leds: 0,
            symbol: String::new(),
            hue: Some(360),
            twinkle: TwinkleSettings {
                min_flicker_delay: 10,
                max_flicker_delay: 5,
                flicker_length: 0,
            },
            ..Config::default()
        };
        let errors = config.validate().unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::NoLeds,
                ValidationError::EmptySymbol,
                ValidationError::HueOutOfRange(360),
                ValidationError::FlickerDelayOrder { min: 10, max: 5 },
                ValidationError::NoFlickerLength,
            ]
        );
    }

    #[test]
    fn flicker_length_bounded() {
        let mut config = Config::default();
        config.twinkle.flicker_length = MAX_FLICKER_LENGTH;
        assert!(config.validate().is_ok());
        config.twinkle.flicker_length = u32::MAX;
        assert_eq!(
            config.validate().unwrap_err(),
            vec![ValidationError::FlickerTooLong(u32::MAX)]
        );
    }

    #[test]
    fn check_joins_messages() {
        let config = Config {
            leds: 0,
            hue: Some(400),
            ..Config::default()
        };
        let err = config.check().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Config error: leds must be at least 1; hue 400 is outside 0-359"
        );
    }

    #[test]
    fn hue_359_is_valid() {
        let config = Config {
            hue: Some(359),
            ..Config::default()
        };
        assert!(config.check().is_ok());
    }
}
