//! CLI subcommands — run a pattern, list patterns, show configuration.

mod config_cmd;
mod patterns;
mod run;

use std::path::Path;

use clap::Subcommand;
use serde::Serialize;

pub(super) use crate::RUNNING;
pub(super) use ledmock_lib::config::Config;
pub(super) use ledmock_lib::error::Result;
pub(super) use ledmock_lib::pattern::PatternKind;

const PADDING: usize = 2;

/// Compute alignment width for a command's key-value output.
/// Ensures at least PADDING spaces after the longest key in either level,
/// with top-level and indent values aligned to the same column.
pub(super) fn kv_width(top: &[&str], indent: &[&str]) -> usize {
    let top_max = top.iter().map(|k| k.len()).max().unwrap_or(0);
    let indent_max = indent.iter().map(|k| k.len()).max().unwrap_or(0);
    let top_need = if top.is_empty() { 0 } else { top_max + PADDING };
    // Indent keys lose 2 chars of inner width to the "  " prefix
    let indent_need = if indent.is_empty() {
        0
    } else {
        indent_max + PADDING + 2
    };
    top_need.max(indent_need)
}

pub(super) fn format_kv(key: &str, value: impl std::fmt::Display, w: usize) -> String {
    format!("{key:<width$}{value}", width = w)
}

pub(super) fn kv(key: &str, value: impl std::fmt::Display, w: usize) {
    println!("{}", format_kv(key, value, w));
}

pub(super) fn kv_indent(key: &str, value: impl std::fmt::Display, w: usize) {
    println!("  {}", format_kv(key, value, w - 2));
}

/// Load config from `path` if given, else from the platform default.
pub(super) fn load_config(path: Option<&Path>) -> Config {
    match path {
        Some(p) => {
            let (config, warnings) = Config::load_from(p);
            for w in &warnings {
                log::warn!("{w}");
            }
            config
        }
        None => Config::load(),
    }
}

// ── JSON output structs ──

#[derive(Serialize)]
pub(super) struct PatternJson {
    pub name: &'static str,
    pub description: &'static str,
    pub default: bool,
}

#[derive(Serialize)]
pub(super) struct PatternsOutput {
    pub count: usize,
    pub patterns: Vec<PatternJson>,
}

#[derive(Serialize)]
pub(super) struct ConfigOutput {
    pub config_file: Option<String>,
    pub config_file_exists: bool,
    pub settings: Config,
    pub problems: Vec<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Draw a pattern on a simulated strip (Ctrl+C to stop)
    Run(run::RunOptions),

    /// List available patterns
    Patterns,

    /// Show current configuration and file path
    Config {
        /// Write a config file with default settings if none exists
        #[arg(long)]
        init: bool,
    },
}

/// Warn if `--json` was passed to a command that doesn't support it.
fn warn_json_unsupported(cmd_name: &str) {
    log::warn!("--json is not supported for `{cmd_name}` (ignored)");
}

pub fn run(cmd: Command, json: bool, config_path: Option<&Path>) -> Result<()> {
    match cmd {
        Command::Run(opts) => {
            if json {
                warn_json_unsupported("run");
            }
            run::cmd_run(&opts, config_path)
        }
        Command::Patterns => patterns::cmd_patterns(json, config_path),
        Command::Config { init } => config_cmd::cmd_config(json, init, config_path),
    }
}


#[cfg(test)]
mod json_struct_tests {
    use super::*;

    #[test]
    fn patterns_output_fields() {
        let output = PatternsOutput {
            count: 1,
            patterns: vec![PatternJson {
                name: "solid",
                description: "d",
                default: false,
            }],
        };
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["count"], 1);
        assert_eq!(json["patterns"][0]["name"], "solid");
        assert_eq!(json["patterns"][0]["default"], false);
    }

    #[test]
    fn config_output_fields() {
        let output = ConfigOutput {
            config_file: None,
            config_file_exists: false,
            settings: Config::default(),
            problems: vec![],
        };
        let json = serde_json::to_value(&output).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        assert!(json["config_file"].is_null());
        assert_eq!(json["settings"]["leds"], 100);
        assert_eq!(json["settings"]["pattern"], "fader");
        assert_eq!(json["settings"]["twinkle"]["flicker_length"], 150);
        assert_eq!(json["settings"]["color"], "#808080");
    }
}
