//! Engine options from a TOML file.
//!
//! ```toml
//! age_key = "fractional"
//! warn_on_rejection = false
//! ```

use std::fs;
use std::path::Path;

use anthro_model::{AgeKeyMode, EngineOptions};
use anyhow::{Context, Result};
use tracing::{debug, info};

/// Load options from `path`, or the defaults when no file is given.
pub fn load_options(path: Option<&Path>) -> Result<EngineOptions> {
    let Some(path) = path else {
        debug!("no config file, using default engine options");
        return Ok(EngineOptions::default());
    };
    let content =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let options =
        parse_options(&content).with_context(|| format!("parse config {}", path.display()))?;
    info!(path = %path.display(), "loaded engine options");
    Ok(options)
}

pub fn parse_options(content: &str) -> Result<EngineOptions> {
    Ok(toml::from_str(content)?)
}

/// Command-line flags win over the file.
pub fn apply_overrides(options: EngineOptions, fractional_age: bool) -> EngineOptions {
    if fractional_age {
        options.with_age_key(AgeKeyMode::Fractional)
    } else {
        options
    }
}
