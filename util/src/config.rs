//! Loop configuration stored as TOML.
//!
//! ```toml
//! rate_hz = 50
//! wakeup_compensation_ms = 2 # optional
//! ```

use std::{fs, path::Path};

use anyhow::{ensure, Context};
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoopConfig {
    /// Target loop frequency in Hz, must be positive
    pub rate_hz: u32,

    #[serde(default = "default_wakeup_compensation_ms")]
    pub wakeup_compensation_ms: u64,
}

fn default_wakeup_compensation_ms() -> u64 {
    crate::rate::DEFAULT_WAKEUP_COMPENSATION.as_millis() as u64
}

impl LoopConfig {
    pub fn new(rate_hz: u32) -> Self {
        Self {
            rate_hz,
            wakeup_compensation_ms: default_wakeup_compensation_ms(),
        }
    }

    /// Load and validate a config file
    pub fn load<P: AsRef<Path>>(p: P) -> anyhow::Result<Self> {
        let p = p.as_ref();
        let text = fs::read_to_string(p)
            .with_context(|| format!("could not read loop config {}", p.display()))?;
        let config = Self::from_toml_str(&text)
            .with_context(|| format!("invalid loop config {}", p.display()))?;
        debug!("Loaded loop config from {}: {:?}", p.display(), config);
        Ok(config)
    }

    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Write the config to a file as TOML
    pub fn store<P: AsRef<Path>>(&self, p: P) -> anyhow::Result<()> {
        let serialized = toml::to_string_pretty(self)?;
        fs::write(p, serialized)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(self.rate_hz > 0, "rate_hz must be positive");
        Ok(())
    }
}
