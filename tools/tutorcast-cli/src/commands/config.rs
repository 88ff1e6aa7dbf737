//! Show or initialize the configuration.

use tutorcast_common::config::{config_file_path, AppConfig};

pub fn run(config: &AppConfig, init: bool) -> anyhow::Result<()> {
    let path = config_file_path();

    if init {
        if path.exists() {
            println!("Config already exists at {}", path.display());
            return Ok(());
        }
        let written = AppConfig::default()
            .save()
            .map_err(|e| anyhow::anyhow!("Failed to write config to {}: {e}", path.display()))?;
        println!("Wrote default config to {}", written.display());
        return Ok(());
    }

    println!("# {}", path.display());
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
