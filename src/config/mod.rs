use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
mod types;

pub use types::*;

pub fn load_user_config() -> Result<Config> {
    let config_dir = get_config_directory()?;
    let config_file_path = config_dir.join("config.toml");

    fs::create_dir_all(&config_dir)
        .with_context(|| format!("Failed to create config directory: {:?}", config_dir))?;

    if !config_file_path.exists() {
        create_default_config(&config_file_path)?;
    }

    let config_content = fs::read_to_string(&config_file_path)
        .with_context(|| format!("Failed to read config file: {:?}", config_file_path))?;

    let config: Result<Config, toml::de::Error> = toml::from_str(&config_content);
    let mut config = match config {
        Ok(cfg) => cfg,
        Err(e) => {
            // Parse failure: back up the old file and rebuild from defaults.
            let bak_path = config_file_path.with_extension("bak");
            fs::rename(&config_file_path, &bak_path)
                .with_context(|| format!("Failed to backup old config to {:?}", bak_path))?;
            create_default_config(&config_file_path)?;
            let config_content = fs::read_to_string(&config_file_path).with_context(|| {
                format!("Failed to read new config file: {:?}", config_file_path)
            })?;
            let config: Config = toml::from_str(&config_content)
                .with_context(|| "Failed to parse new config file")?;
            println!(
                "Config parse error: {}. Old config has been backed up to {:?}, new config created.",
                e, bak_path
            );
            config
        }
    };

    apply_env_overrides(&mut config);
    Ok(config)
}

/// The config file wins; the environment fills the gaps. `OPENAI_API_KEY`
/// supplies a credential when the file leaves one blank, and `PORT`
/// overrides the listen port (the usual hosting-platform convention).
fn apply_env_overrides(config: &mut Config) {
    if config.ai.api_key.trim().is_empty() {
        if let Ok(key) = std::env::var("OPENAI_API_KEY") {
            config.ai.api_key = key;
        }
    }
    if let Ok(port) = std::env::var("PORT") {
        match port.parse::<u16>() {
            Ok(p) => config.server.port = p,
            Err(_) => println!("Ignoring unparseable PORT value: {}", port),
        }
    }
}

fn get_config_directory() -> Result<PathBuf> {
    if let Some(config_dir) = dirs::config_dir() {
        Ok(config_dir.join("schoolchat"))
    } else {
        anyhow::bail!("Could not determine config directory")
    }
}

fn create_default_config(config_path: &PathBuf) -> Result<()> {
    let default_cfg = Config::default();
    let default_content = toml::to_string_pretty(&default_cfg)
        .map_err(|e| anyhow::anyhow!("Failed to serialize default config: {}", e))?;
    fs::write(config_path, default_content)
        .with_context(|| format!("Failed to write default config to {:?}", config_path))?;
    println!("Created default config file at: {:?}", config_path);
    Ok(())
}
