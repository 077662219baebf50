//! Configuration module for Icepool
//!
//! This module provides configuration types and parsing for the allocator.

mod allocator;

pub use allocator::{AllocatorConfig, Config};

use crate::error::IcePoolError;
use anyhow::{Context, Result};
use std::path::Path;

/// Load and validate configuration from a TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let content = std::fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

    let config = parse_config(&content)?;
    config
        .allocator
        .validate()
        .map_err(IcePoolError::Config)
        .with_context(|| format!("Invalid config file: {:?}", path.as_ref()))?;
    Ok(config)
}

/// Parse configuration from a TOML string
pub fn parse_config(content: &str) -> Result<Config> {
    toml::from_str(content).with_context(|| "Failed to parse configuration")
}
