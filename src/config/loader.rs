// Configuration loader
// Reads optional launch.toml overrides on top of the built-in defaults

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::settings::LaunchConfig;

/// Config file looked up in the working directory when no path is given
const DEFAULT_CONFIG_FILE: &str = "launch.toml";

/// Load the launch configuration.
///
/// An explicit `path` must exist; the default `launch.toml` lookup falls
/// back to the built-in defaults when the file is absent.
pub fn load_config(path: Option<&Path>) -> Result<LaunchConfig> {
    let config_path = match path {
        Some(explicit) => explicit,
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if !default_path.exists() {
                return Ok(LaunchConfig::default());
            }
            default_path
        }
    };

    let contents = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;

    parse_config(&contents)
        .with_context(|| format!("Failed to parse {}", config_path.display()))
}

fn parse_config(contents: &str) -> Result<LaunchConfig> {
    // Parse TOML into a temp struct so every field stays optional
    #[derive(serde::Deserialize)]
    struct TomlConfig {
        prepare_program: Option<PathBuf>,
        pretrain_program: Option<PathBuf>,
        train_cfg: Option<PathBuf>,
        model_cfg: Option<PathBuf>,
        data_file: Option<PathBuf>,
        vocab: Option<PathBuf>,
        save_dir: Option<PathBuf>,
        max_len: Option<usize>,
        max_pred: Option<usize>,
        mask_prob: Option<f64>,
    }

    let toml_config: TomlConfig = toml::from_str(contents)?;

    let mut config = LaunchConfig::default();
    if let Some(v) = toml_config.prepare_program {
        config.prepare_program = v;
    }
    if let Some(v) = toml_config.pretrain_program {
        config.pretrain_program = v;
    }
    if let Some(v) = toml_config.train_cfg {
        config.train_cfg = v;
    }
    if let Some(v) = toml_config.model_cfg {
        config.model_cfg = v;
    }
    if let Some(v) = toml_config.data_file {
        config.data_file = v;
    }
    if let Some(v) = toml_config.vocab {
        config.vocab = v;
    }
    if let Some(v) = toml_config.save_dir {
        config.save_dir = v;
    }
    if let Some(v) = toml_config.max_len {
        config.max_len = v;
    }
    if let Some(v) = toml_config.max_pred {
        config.max_pred = v;
    }
    if let Some(v) = toml_config.mask_prob {
        config.mask_prob = v;
    }

    Ok(config)
}
