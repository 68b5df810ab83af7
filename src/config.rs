// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Orientation configuration

use crate::error::Result as OrientResult;
use crate::orientation::{
    validate_angle_threshold, validate_degenerate_epsilon, validate_unit_tolerance,
    DEFAULT_ANGLE_THRESHOLD_DEGREES, DEFAULT_DEGENERATE_EPSILON, DEFAULT_UNIT_TOLERANCE,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file looked up by [`OrientConfig::load`]
pub const CONFIG_FILE: &str = "layflat.toml";

/// Tunables for clustering and alignment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrientConfig {
    /// Maximum angle between a triangle normal and a cluster seed, in degrees
    pub angle_threshold_degrees: f64,
    /// Degenerate-triangle cutoff relative to the squared bounding-box diagonal
    pub degenerate_epsilon: f64,
    /// Allowed deviation of a face normal's length from 1
    pub unit_tolerance: f64,
}

impl Default for OrientConfig {
    fn default() -> Self {
        Self {
            angle_threshold_degrees: DEFAULT_ANGLE_THRESHOLD_DEGREES,
            degenerate_epsilon: DEFAULT_DEGENERATE_EPSILON,
            unit_tolerance: DEFAULT_UNIT_TOLERANCE,
        }
    }
}

impl OrientConfig {
    /// Load configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: OrientConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides
    pub fn load() -> Result<Self> {
        let mut config = if PathBuf::from(CONFIG_FILE).exists() {
            Self::from_file(CONFIG_FILE)?
        } else {
            Self::default()
        };

        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Override fields from `LAYFLAT_*` environment variables
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(value) = env_f64("LAYFLAT_ANGLE_THRESHOLD")? {
            self.angle_threshold_degrees = value;
        }
        if let Some(value) = env_f64("LAYFLAT_DEGENERATE_EPSILON")? {
            self.degenerate_epsilon = value;
        }
        if let Some(value) = env_f64("LAYFLAT_UNIT_TOLERANCE")? {
            self.unit_tolerance = value;
        }
        Ok(())
    }

    pub fn validate(&self) -> OrientResult<()> {
        validate_angle_threshold(self.angle_threshold_degrees)?;
        validate_degenerate_epsilon(self.degenerate_epsilon)?;
        validate_unit_tolerance(self.unit_tolerance)
    }
}

fn env_f64(name: &str) -> Result<Option<f64>> {
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<f64>()
            .map(Some)
            .with_context(|| format!("Invalid value for {}: {:?}", name, raw)),
        Err(_) => Ok(None),
    }
}
