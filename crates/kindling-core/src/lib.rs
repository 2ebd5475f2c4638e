//! # kindling-core
//!
//! Core library for the kindling CLI providing:
//! - Configuration file loading (`kindling.yaml`)
//! - Shared error types

pub mod config;
pub mod error;

pub use config::{ConfigFile, KindlingConfig, CONFIG_FILE_NAMES, DEFAULT_TEMPLATE};
pub use error::{Error, Result};
