//! `patterns` subcommand — list the available patterns.

use std::path::Path;

use super::{PatternJson, PatternKind, PatternsOutput, Result, kv, kv_width};

pub(super) fn cmd_patterns(json: bool, config_path: Option<&Path>) -> Result<()> {
    let default = super::load_config(config_path).pattern;

    if json {
        let patterns: Vec<PatternJson> = PatternKind::ALL
            .into_iter()
            .map(|kind| PatternJson {
                name: kind.name(),
                description: kind.description(),
                default: kind == default,
            })
            .collect();
        let output = PatternsOutput {
            count: patterns.len(),
            patterns,
        };
        println!("{}", serde_json::to_string_pretty(&output).unwrap());
        return Ok(());
    }

    let names: Vec<&str> = PatternKind::ALL.iter().map(|k| k.name()).collect();
    let w = kv_width(&names, &[]);
    for kind in PatternKind::ALL {
        let marker = if kind == default { " (default)" } else { "" };
        kv(kind.name(), format_args!("{}{marker}", kind.description()), w);
    }
    Ok(())
}
