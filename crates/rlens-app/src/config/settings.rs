//! Settings loader for `config.toml`

use std::path::{Path, PathBuf};

use rlens_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "reddit-lens";

/// Environment variable that overrides `api.base_url`
pub const API_URL_ENV_VAR: &str = "RLENS_API_URL";

const DEFAULT_CONFIG: &str = r#"# Reddit Lens configuration

[api]
base_url = "https://reddit-analyzer-backend-3w6f.onrender.com"
timeout_secs = 90         # 0 waits forever
connect_timeout_secs = 10

[ui]
display_mode = "dark"     # "dark" or "light"
# start_panel = "insights"  # open a panel instead of the landing view
"#;

/// `<config_dir>/reddit-lens/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `path`, falling back to defaults
///
/// A missing file is normal. A file that cannot be read or parsed is logged
/// and ignored.
pub fn load_settings(path: &Path) -> Settings {
    if !path.exists() {
        debug!("No config file at {:?}, using defaults", path);
        return Settings::default();
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            Settings::default()
        }
    }
}

/// Apply `RLENS_API_URL` on top of file settings
pub fn apply_env_overrides(settings: &mut Settings) {
    if let Ok(url) = std::env::var(API_URL_ENV_VAR) {
        let url = url.trim();
        if !url.is_empty() {
            debug!("{} overrides api.base_url", API_URL_ENV_VAR);
            settings.api.base_url = url.to_string();
        }
    }
}

/// Write the commented default config to `path`. Never overwrites.
pub fn init_config_file(path: &Path) -> Result<()> {
    if path.exists() {
        return Err(Error::ConfigExists {
            path: path.to_path_buf(),
        });
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", parent, e)))?;
    }
    std::fs::write(path, DEFAULT_CONFIG)
        .map_err(|e| Error::config(format!("Failed to write {:?}: {}", path, e)))?;

    info!("Created default config at {:?}", path);
    Ok(())
}
