//! Configuration management commands

use anyhow::{anyhow, Context, Result};
use camino::Utf8Path;
use std::fs;

use kindling_core::{ConfigFile, KindlingConfig, DEFAULT_TEMPLATE};
use kindling_scaffold::DEFAULT_COMPRESSION_LEVEL;

use crate::cli::{ConfigCommands, ConfigInitArgs, ConfigShowArgs};
use crate::output;
use crate::settings::{Overrides, Settings};

pub async fn run(cmd: ConfigCommands, config_path: Option<&Utf8Path>) -> Result<()> {
    match cmd {
        ConfigCommands::Init(args) => init(args),
        ConfigCommands::Show(args) => show(args, config_path),
    }
}

/// Write a starter kindling.yaml
fn init(args: ConfigInitArgs) -> Result<()> {
    if args.output.exists() && !args.force {
        return Err(anyhow!(
            "Config file already exists: {} (use --force to overwrite)",
            args.output
        ));
    }

    let config = ConfigFile {
        name: args.name,
        template: Some(DEFAULT_TEMPLATE.into()),
        output_dir: Some(".".into()),
        compression_level: Some(DEFAULT_COMPRESSION_LEVEL),
        exclude: vec![],
    };

    let yaml = serde_yaml_ng::to_string(&config)?;
    fs::write(&args.output, yaml)
        .with_context(|| format!("Failed to write config file: {}", args.output))?;

    output::success(&format!("Wrote {}", args.output));
    Ok(())
}

/// Show the resolved configuration
fn show(args: ConfigShowArgs, config_path: Option<&Utf8Path>) -> Result<()> {
    let loaded = KindlingConfig::load(config_path).context("Failed to load configuration")?;
    let settings = Settings::resolve(&loaded, Overrides::default());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&settings)?);
        return Ok(());
    }

    output::header("Configuration");
    match &loaded.config_path {
        Some(path) => output::kv("Config file", path.as_str()),
        None => output::kv("Config file", "(none, using defaults)"),
    }
    output::kv("Project name", settings.name.as_deref().unwrap_or("(unset)"));
    output::kv("Template", settings.template.as_str());
    output::kv("Output", settings.output_dir.as_str());
    output::kv(
        "Compression level",
        &settings.compression_level.to_string(),
    );
    if !settings.exclude.is_empty() {
        output::kv("Exclude", &settings.exclude.join(", "));
    }

    Ok(())
}
