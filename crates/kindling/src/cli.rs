//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};

/// Kindling - scaffold starter projects and package them for download
#[derive(Parser, Debug)]
#[command(name = "kindling")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to kindling.yaml config file
    #[arg(short, long, global = true)]
    pub config: Option<Utf8PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scaffold a project from a template and package it as a zip
    New(NewArgs),

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Show version information
    Version(VersionArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// New command
#[derive(Args, Debug)]
pub struct NewArgs {
    /// Project name (falls back to the config file's `name`)
    pub name: Option<String>,

    /// Template source directory
    #[arg(short, long)]
    pub template: Option<Utf8PathBuf>,

    /// Directory the output archive is written to
    #[arg(short, long)]
    pub output_dir: Option<Utf8PathBuf>,

    /// Deflate compression level
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=9))]
    pub compression_level: Option<u32>,

    /// Additional exclusion glob pattern (repeatable)
    #[arg(short = 'x', long = "exclude")]
    pub exclude: Vec<String>,

    /// Overwrite an existing output archive
    #[arg(short, long)]
    pub force: bool,

    /// Retain the staging directory for inspection
    #[arg(long)]
    pub keep_staging: bool,
}

// Config commands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Write a starter kindling.yaml
    Init(ConfigInitArgs),

    /// Show the resolved configuration
    Show(ConfigShowArgs),
}

#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Project name recorded in the config
    #[arg(short, long)]
    pub name: Option<String>,

    /// Output file path
    #[arg(short, long, default_value = "kindling.yaml")]
    pub output: Utf8PathBuf,

    /// Overwrite existing file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

// Version command
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

// Completions command
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
