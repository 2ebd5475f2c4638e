//! `kindling new` command handler

use anyhow::{anyhow, Context, Result};
use camino::Utf8Path;

use kindling_core::KindlingConfig;
use kindling_scaffold::{
    ArchiveConfig, Error as ScaffoldError, ExclusionConfig, ScaffoldOptions, Scaffolder,
    TemplateDirSource,
};

use crate::cli::NewArgs;
use crate::output;
use crate::settings::{Overrides, Settings};

/// Scaffold a project from a template and package it as a zip
pub async fn run(args: NewArgs, config_path: Option<&Utf8Path>) -> Result<()> {
    let loaded = KindlingConfig::load(config_path).context("Failed to load configuration")?;
    if let Some(path) = &loaded.config_path {
        tracing::debug!("using configuration from {}", path);
    }

    let settings = Settings::resolve(
        &loaded,
        Overrides {
            name: args.name,
            template: args.template,
            output_dir: args.output_dir,
            compression_level: args.compression_level,
            exclude: args.exclude,
        },
    );

    let name = settings.name.clone().ok_or_else(|| {
        anyhow!("Project name required: pass it as an argument or set `name` in kindling.yaml")
    })?;
    validate_project_name(&name)?;

    output::header("Scaffold New Project");
    output::kv("Project name", &name);
    output::kv("Template", settings.template.as_str());
    output::kv("Output", settings.output_dir.as_str());
    println!();

    let archive_path = settings.output_dir.join(format!("{}.zip", name));
    if archive_path.exists() && !args.force {
        output::info("Pass --force to overwrite the existing archive");
        return Err(ScaffoldError::output_exists(archive_path.as_str()).into());
    }

    let exclusions =
        ExclusionConfig::new(settings.exclude.clone()).context("Invalid exclusion pattern")?;
    let source =
        TemplateDirSource::new(settings.template.as_std_path()).with_exclusions(exclusions);
    let options = ScaffoldOptions::new(name.as_str())
        .with_output_dir(settings.output_dir.as_std_path())
        .with_archive_config(ArchiveConfig::new().with_compression_level(settings.compression_level))
        .with_keep_staging(args.keep_staging);

    let spinner = output::spinner("Staging template and writing archive...");
    let result = Scaffolder::new(Box::new(source), options).run();
    spinner.finish_and_clear();
    let result = result.context("Scaffold failed")?;

    output::success(&format!("Project '{}' created and packaged", name));
    output::kv("Archive", &result.archive_path.display().to_string());
    output::kv("Files", &result.file_count.to_string());
    output::kv("Size", &format!("{} bytes", result.size_bytes));
    if let Some(staging) = &result.staging_path {
        output::kv("Staging kept at", &staging.display().to_string());
    }

    Ok(())
}

/// Reject names that cannot serve as a staging prefix and archive base name.
fn validate_project_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(anyhow!("Project name must not be empty"));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(anyhow!(
            "Project name must not contain path separators: {}",
            name
        ));
    }
    Ok(())
}
