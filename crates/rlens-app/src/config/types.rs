//! Configuration types

use std::time::Duration;

use rlens_core::{DisplayMode, PanelId};
use rlens_gateway::HttpGatewayConfig;
use serde::{Deserialize, Serialize};

/// Address of the hosted analysis service.
pub const DEFAULT_BASE_URL: &str = "https://reddit-analyzer-backend-3w6f.onrender.com";

/// Settings from `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Remote service settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Base address every endpoint path is appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Whole-request timeout in seconds. 0 disables it.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connect timeout in seconds. 0 disables it.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl ApiSettings {
    pub fn gateway_config(&self) -> HttpGatewayConfig {
        HttpGatewayConfig {
            base_url: self.base_url.clone(),
            timeout: seconds(self.timeout_secs),
            connect_timeout: seconds(self.connect_timeout_secs),
        }
    }
}

fn seconds(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}

/// UI settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// "dark" (default) or "light"
    #[serde(default)]
    pub display_mode: DisplayMode,

    /// Panel to open on startup; omit or set to "landing" to start on the
    /// landing view
    #[serde(
        default,
        deserialize_with = "deserialize_start_panel",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_panel: Option<PanelId>,
}

/// Keyword accepted wherever a start panel is expected
pub const LANDING_KEYWORD: &str = "landing";

/// Parse a `--panel`/`start_panel` value: a panel id, or `landing` for none.
pub fn parse_start_panel(value: &str) -> rlens_core::Result<Option<PanelId>> {
    if value.trim().eq_ignore_ascii_case(LANDING_KEYWORD) {
        return Ok(None);
    }
    value.parse().map(Some)
}

fn deserialize_start_panel<'de, D>(deserializer: D) -> Result<Option<PanelId>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw {
        Some(value) => parse_start_panel(&value).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

// Render's free tier can take most of a minute to wake the service.
fn default_timeout_secs() -> u64 {
    90
}

fn default_connect_timeout_secs() -> u64 {
    10
}
