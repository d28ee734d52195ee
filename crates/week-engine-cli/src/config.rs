use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;
use week_engine::{FormatOptions, WeekConvention};

/// Settings file contents. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeekcalToml {
    /// First day of the week, number or weekday name.
    #[serde(default)]
    pub first_day: Option<WeekConvention>,

    /// Default template for `format`.
    #[serde(default)]
    pub template: Option<String>,
}

impl WeekcalToml {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("invalid config {}", path.display()))
    }
}

/// Resolve effective settings: built-in defaults, then the settings file,
/// then flags and environment.
pub fn resolve(
    config: Option<&Path>,
    first_day: Option<WeekConvention>,
    template: Option<String>,
) -> Result<FormatOptions> {
    let file = match config {
        Some(path) => WeekcalToml::load(path)?,
        None => WeekcalToml::default(),
    };

    let defaults = FormatOptions::default();
    let options = FormatOptions {
        convention: first_day.or(file.first_day).unwrap_or(defaults.convention),
        template: template.or(file.template).unwrap_or(defaults.template),
    };
    debug!(
        convention = %options.convention,
        template = %options.template,
        "resolved settings"
    );
    Ok(options)
}
