//! # Configuration
//!
//! Optional TOML configuration for the CLI surface. Every field has a
//! default, so running without a config file works out of the box; a file
//! only needs the keys it wants to override.
//!
//! ```toml
//! # stegotext.toml
//! output_suffix = "-hidden"
//! ```

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Load a TOML configuration file and deserialize it into the specified
/// type.
pub fn load_config<T>(path: &Path) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// CLI-surface settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StegoConfig {
    /// Suffix appended to the input file stem when deriving the default
    /// output path (output is always PNG).
    pub output_suffix: String,
}

impl Default for StegoConfig {
    fn default() -> Self {
        Self {
            output_suffix: "_encrypted".to_string(),
        }
    }
}
