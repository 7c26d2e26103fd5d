//! `mdlite.toml` loading.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use mdlite_core::{RenderOptions, Style};
use serde::Deserialize;

/// File looked up in the current directory when no `--config` is given.
pub const CONFIG_FILE: &str = "mdlite.toml";

#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub render: RenderConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    pub header_markers: bool,
    pub header_marker: String,
    pub rule_char: char,
    pub rule_width: usize,
    pub image_placeholder: String,
    pub ansi: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        let options = RenderOptions::default();
        Self {
            header_markers: options.header_markers,
            header_marker: options.header_marker,
            rule_char: options.rule_char,
            rule_width: options.rule_width,
            image_placeholder: options.image_placeholder,
            ansi: options.style == Style::Ansi,
        }
    }
}

impl RenderConfig {
    /// Renderer options, with `force_ansi` overriding the `ansi` key.
    pub fn to_options(&self, force_ansi: bool) -> RenderOptions {
        RenderOptions {
            style: if self.ansi || force_ansi {
                Style::Ansi
            } else {
                Style::Plain
            },
            header_markers: self.header_markers,
            header_marker: self.header_marker.clone(),
            rule_char: self.rule_char,
            rule_width: self.rule_width,
            image_placeholder: self.image_placeholder.clone(),
        }
    }
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config '{}'", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("invalid config '{}'", path.display()))
    }
}

/// Load the configuration.
///
/// An explicit path must exist. Otherwise [`CONFIG_FILE`] in `dir` is used
/// when present, and defaults when not. Returns the file actually read.
pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<(Config, Option<PathBuf>)> {
    if let Some(path) = explicit {
        if !path.is_file() {
            bail!("config file '{}' not found", path.display());
        }
        return Ok((Config::from_file(path)?, Some(path.to_path_buf())));
    }

    let candidate = dir.join(CONFIG_FILE);
    if candidate.is_file() {
        let config = Config::from_file(&candidate)?;
        return Ok((config, Some(candidate)));
    }

    Ok((Config::default(), None))
}
