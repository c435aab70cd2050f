use serde::Deserialize;
use tokio::time::Duration;

use dispatch::Policy;

use crate::render::OutputFormat;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RenderConfig {
    pub policy: Policy,
    /// Quiet period in milliseconds before the display is redrawn
    pub delay: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            policy: Policy::Debounce,
            delay: 50,
        }
    }
}

impl RenderConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.delay)
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub render: RenderConfig,
    pub output: OutputFormat,
}

impl Config {
    /// Reads `APP_RENDER_POLICY`, `APP_RENDER_DELAY` and `APP_OUTPUT`
    pub fn from_env() -> Result<Self, ::config::ConfigError> {
        let mut cfg = ::config::Config::new();
        cfg.merge(::config::Environment::new().prefix("APP").separator("_"))?;
        cfg.try_into()
    }
}
