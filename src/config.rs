//! Configuration file support for site-inspector.
//!
//! Operator defaults live in `site-inspector.config.yml`, found next to the session
//! file or passed with `--config`. Every key is optional.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::application::dto::OutputFormat;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "site-inspector.config.yml";

/// Keys accepted in `site-inspector.config.yml`
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub webhook_url: Option<String>,
    pub debug_mode: Option<bool>,
    pub sis_threshold: Option<f64>,
    pub compliance_threshold: Option<f64>,
    /// Anything else in the file; reported, never applied
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Parsed `format`; `None` when the key is absent.
    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.format
            .as_deref()
            .map(|format| format.parse::<OutputFormat>().map_err(anyhow::Error::msg))
            .transpose()
    }
}

/// Reads, parses and validates the config at `path`.
///
/// A missing or unreadable file is an error; an empty file is the default config.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty file deserializes to YAML null
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    tracing::debug!(path = %path.display(), ?config, "loaded config file");
    Ok(config)
}

/// Loads `dir/site-inspector.config.yml` when present.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let candidate = dir.join(CONFIG_FILENAME);
    if candidate.is_file() {
        load_config_from_path(&candidate).map(Some)
    } else {
        Ok(None)
    }
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Err(e) = config.output_format() {
        bail!(
            "Invalid config: format: {}\n\n💡 Hint: Use 'docx' or 'markdown'.",
            e
        );
    }

    if let Some(ref url) = config.webhook_url {
        if url.trim().is_empty() {
            bail!(
                "Invalid config: webhook_url must not be empty.\n\n\
                 💡 Hint: Remove the key or set it to the full URL of the metrics webhook."
            );
        }
    }

    for (key, value) in [
        ("sis_threshold", config.sis_threshold),
        ("compliance_threshold", config.compliance_threshold),
    ] {
        if let Some(value) = value {
            if !value.is_finite() || value < 0.0 {
                bail!(
                    "Invalid config: {} must be a non-negative number (got {}).",
                    key,
                    value
                );
            }
        }
    }

    if let Some(value) = config.compliance_threshold {
        if value > 100.0 {
            bail!(
                "Invalid config: compliance_threshold must be between 0 and 100 (got {}).\n\n\
                 💡 Hint: The compliance threshold is a percentage.",
                value
            );
        }
    }

    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
