//! Configuration file loading and parsing
//!
//! Scaffolding defaults live in an optional `kindling.yaml` next to the
//! project being generated. Command-line flags always take precedence over
//! file values; the file only supplies fallbacks, so a missing config file
//! is not an error.

use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use std::fs;

/// Configuration file names to search for
pub const CONFIG_FILE_NAMES: &[&str] = &["kindling.yaml", "kindling.yml"];

/// Default template source directory, relative to the working directory
pub const DEFAULT_TEMPLATE: &str = "templates/base";

/// Raw contents of a kindling configuration file.
///
/// Every field is optional; resolution against built-in defaults happens at
/// the CLI layer where flag overrides are known.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Project name used for the staging prefix and archive base name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Template source directory, relative to the config file's directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<Utf8PathBuf>,

    /// Directory the output archive is written to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<Utf8PathBuf>,

    /// Deflate compression level (1-9)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compression_level: Option<u32>,

    /// Additional exclusion glob patterns
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,
}

/// Loaded kindling configuration
#[derive(Debug, Clone)]
pub struct KindlingConfig {
    /// The parsed configuration (defaults when no file was found)
    pub config: ConfigFile,

    /// Path to the configuration file, if one was loaded
    pub config_path: Option<Utf8PathBuf>,

    /// Directory relative paths in the config resolve against
    pub working_dir: Utf8PathBuf,
}

impl KindlingConfig {
    /// Load configuration from the specified path or search the working
    /// directory for one of [`CONFIG_FILE_NAMES`].
    ///
    /// An explicit path that does not exist is an error; absence of any
    /// config file during search yields defaults.
    pub fn load(path: Option<&Utf8Path>) -> Result<Self> {
        let cwd = std::env::current_dir().map_err(|e| Error::working_dir(e.to_string()))?;
        let cwd = Utf8PathBuf::from_path_buf(cwd)
            .map_err(|p| Error::working_dir(format!("not valid UTF-8: {}", p.display())))?;
        Self::load_from(&cwd, path)
    }

    /// Load configuration resolving relative lookups against `working_dir`.
    pub fn load_from(working_dir: &Utf8Path, path: Option<&Utf8Path>) -> Result<Self> {
        if let Some(p) = path {
            let content = fs::read_to_string(p).map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Error::config_not_found(p.as_str())
                } else {
                    Error::Io(e)
                }
            })?;

            let config: ConfigFile = serde_yaml_ng::from_str(&content)?;
            let config_dir = p
                .parent()
                .map(|d| d.to_owned())
                .unwrap_or_else(|| working_dir.to_owned());

            return Ok(Self {
                config,
                config_path: Some(p.to_owned()),
                working_dir: config_dir,
            });
        }

        for name in CONFIG_FILE_NAMES {
            let candidate = working_dir.join(name);
            if candidate.is_file() {
                tracing::debug!("loading configuration from {}", candidate);
                let content = fs::read_to_string(&candidate)?;
                let config: ConfigFile = serde_yaml_ng::from_str(&content)?;
                return Ok(Self {
                    config,
                    config_path: Some(candidate),
                    working_dir: working_dir.to_owned(),
                });
            }
        }

        Ok(Self {
            config: ConfigFile::default(),
            config_path: None,
            working_dir: working_dir.to_owned(),
        })
    }
}
