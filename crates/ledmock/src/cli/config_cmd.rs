//! `config` subcommand — show current configuration and file path.

use std::path::Path;

use super::{Config, ConfigOutput, Result, kv, kv_indent, kv_width};

pub(super) fn cmd_config(json: bool, init: bool, custom_path: Option<&Path>) -> Result<()> {
    let config_path = custom_path.map(|p| p.to_path_buf()).or_else(Config::path);

    if init {
        match &config_path {
            Some(p) if p.exists() => log::warn!("{} already exists, not overwritten", p.display()),
            Some(p) => {
                Config::default().save_to(p)?;
                log::info!("wrote default config to {}", p.display());
            }
            None => log::warn!("no config directory, nothing written"),
        }
    }

    let config = super::load_config(custom_path);
    let config_exists = config_path.as_ref().is_some_and(|p| p.exists());
    let problems: Vec<String> = match config.validate() {
        Ok(()) => vec![],
        Err(errors) => errors.iter().map(ToString::to_string).collect(),
    };

    if json {
        let output = ConfigOutput {
            config_file: config_path.as_ref().map(|p| p.display().to_string()),
            config_file_exists: config_exists,
            settings: config,
            problems,
        };
        println!("{}", serde_json::to_string_pretty(&output).unwrap());
        return Ok(());
    }

    // Human-readable output
    let w = kv_width(
        &["Config file:"],
        &[
            "leds:",
            "symbol:",
            "pattern:",
            "frame_delay_ms:",
            "hue:",
            "seed:",
            "color:",
            "min_flicker_delay:",
            "max_flicker_delay:",
            "flicker_length:",
        ],
    );

    match &config_path {
        Some(p) => {
            if config_exists {
                kv("Config file:", format_args!("{} (loaded)", p.display()), w);
            } else {
                kv(
                    "Config file:",
                    format_args!("{} (not found, using defaults)", p.display()),
                    w,
                );
            }
        }
        None => kv("Config file:", "(no config directory)", w),
    }
    println!();

    let or_random = |v: Option<String>| v.unwrap_or_else(|| "(random)".to_string());

    println!("Settings:");
    kv_indent("leds:", config.leds, w);
    kv_indent("symbol:", &config.symbol, w);
    kv_indent("pattern:", config.pattern, w);
    kv_indent("frame_delay_ms:", config.frame_delay_ms, w);
    kv_indent("hue:", or_random(config.hue.map(|h| h.to_string())), w);
    kv_indent("seed:", or_random(config.seed.map(|s| s.to_string())), w);
    kv_indent("color:", config.color, w);
    println!();

    println!("Twinkle:");
    kv_indent("min_flicker_delay:", config.twinkle.min_flicker_delay, w);
    kv_indent("max_flicker_delay:", config.twinkle.max_flicker_delay, w);
    kv_indent("flicker_length:", config.twinkle.flicker_length, w);

    if !problems.is_empty() {
        println!();
        println!("Problems:");
        for p in &problems {
            println!("  {p}");
        }
    }
    Ok(())
}
