//! Effective scaffold settings.
//!
//! Three layers feed a run: command-line flags, the optional config file,
//! and built-in defaults, in that order of precedence. Exclusion patterns
//! are the exception: file patterns and flag patterns are combined.

use camino::{Utf8Path, Utf8PathBuf};
use kindling_core::{KindlingConfig, DEFAULT_TEMPLATE};
use kindling_scaffold::DEFAULT_COMPRESSION_LEVEL;
use serde::Serialize;

/// Flag-level overrides for a scaffold run.
#[derive(Debug, Default)]
pub struct Overrides {
    pub name: Option<String>,
    pub template: Option<Utf8PathBuf>,
    pub output_dir: Option<Utf8PathBuf>,
    pub compression_level: Option<u32>,
    pub exclude: Vec<String>,
}

/// Fully resolved settings for a scaffold run.
#[derive(Debug, Clone, Serialize)]
pub struct Settings {
    /// Project name, if any layer supplied one
    pub name: Option<String>,

    /// Template source directory (absolute)
    pub template: Utf8PathBuf,

    /// Output directory (absolute)
    pub output_dir: Utf8PathBuf,

    /// Deflate compression level (1-9)
    pub compression_level: u32,

    /// Combined exclusion patterns
    pub exclude: Vec<String>,
}

impl Settings {
    /// Resolves settings from flags, config file, and defaults. Relative
    /// paths resolve against the config's working directory.
    pub fn resolve(loaded: &KindlingConfig, overrides: Overrides) -> Self {
        let cfg = &loaded.config;

        let template = overrides
            .template
            .or_else(|| cfg.template.clone())
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_TEMPLATE));

        let output_dir = match overrides.output_dir.or_else(|| cfg.output_dir.clone()) {
            Some(dir) => absolutize(&loaded.working_dir, dir),
            None => loaded.working_dir.clone(),
        };

        let mut exclude = cfg.exclude.clone();
        exclude.extend(overrides.exclude);

        Self {
            name: overrides.name.or_else(|| cfg.name.clone()),
            template: absolutize(&loaded.working_dir, template),
            output_dir,
            compression_level: overrides
                .compression_level
                .or(cfg.compression_level)
                .unwrap_or(DEFAULT_COMPRESSION_LEVEL),
            exclude,
        }
    }
}

fn absolutize(base: &Utf8Path, path: Utf8PathBuf) -> Utf8PathBuf {
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kindling_core::ConfigFile;

    fn loaded_with(config: ConfigFile) -> KindlingConfig {
        KindlingConfig {
            config,
            config_path: None,
            working_dir: Utf8PathBuf::from("/work"),
        }
    }

    #[test]
    fn test_defaults_apply_when_nothing_set() {
        let settings = Settings::resolve(&loaded_with(ConfigFile::default()), Overrides::default());

        assert!(settings.name.is_none());
        assert_eq!(settings.template, "/work/templates/base");
        assert_eq!(settings.output_dir, "/work");
        assert_eq!(settings.compression_level, DEFAULT_COMPRESSION_LEVEL);
        assert!(settings.exclude.is_empty());
    }

    #[test]
    fn test_flags_override_config() {
        let config = ConfigFile {
            name: Some("from-config".to_string()),
            template: Some(Utf8PathBuf::from("templates/other")),
            compression_level: Some(3),
            ..Default::default()
        };
        let overrides = Overrides {
            name: Some("from-flag".to_string()),
            compression_level: Some(9),
            ..Default::default()
        };

        let settings = Settings::resolve(&loaded_with(config), overrides);

        assert_eq!(settings.name.as_deref(), Some("from-flag"));
        assert_eq!(settings.template, "/work/templates/other");
        assert_eq!(settings.compression_level, 9);
    }

    #[test]
    fn test_absolute_paths_pass_through() {
        let overrides = Overrides {
            template: Some(Utf8PathBuf::from("/srv/templates/base")),
            output_dir: Some(Utf8PathBuf::from("/srv/out")),
            ..Default::default()
        };

        let settings = Settings::resolve(&loaded_with(ConfigFile::default()), overrides);

        assert_eq!(settings.template, "/srv/templates/base");
        assert_eq!(settings.output_dir, "/srv/out");
    }

    #[test]
    fn test_exclude_patterns_combine() {
        let config = ConfigFile {
            exclude: vec!["*.log".to_string()],
            ..Default::default()
        };
        let overrides = Overrides {
            exclude: vec!["tmp/**".to_string()],
            ..Default::default()
        };

        let settings = Settings::resolve(&loaded_with(config), overrides);

        assert_eq!(settings.exclude, vec!["*.log", "tmp/**"]);
    }
}
