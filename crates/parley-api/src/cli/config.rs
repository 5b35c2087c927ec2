//! `parley config` -- print the effective configuration.

use std::path::Path;

use parley_types::config::RelayConfig;

pub fn show_config(config: &RelayConfig, path: &Path, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(config)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} Effective configuration (file: {})",
        console::style("⚙").bold(),
        console::style(path.display()).dim()
    );
    println!();
    for line in toml::to_string_pretty(config)?.lines() {
        println!("  {line}");
    }
    println!();
    Ok(())
}
