//! Configuration file parsing for Reddit Lens
//!
//! Settings live in `<config_dir>/reddit-lens/config.toml`; see
//! [`default_config_path`].

pub mod settings;
pub mod types;

pub use settings::{
    apply_env_overrides, default_config_path, init_config_file, load_settings, API_URL_ENV_VAR,
};
pub use types::*;
