// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Error taxonomy for face detection and alignment

use thiserror::Error;

/// Result type for orientation operations
pub type Result<T> = std::result::Result<T, OrientError>;

/// Errors surfaced by the clustering and alignment entry points.
///
/// An empty mesh is not an error: clustering returns an empty list.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrientError {
    /// A configuration value is outside its accepted range.
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// The vertex/index buffers handed in do not describe whole triangles.
    #[error("invalid mesh buffer: {0}")]
    InvalidMesh(String),

    /// The face normal is not (close to) unit length and cannot be trusted.
    #[error("degenerate face: normal length {length} is not unit")]
    DegenerateFace { length: f64 },
}

impl OrientError {
    pub(crate) fn angle_threshold(value: f64) -> Self {
        Self::InvalidParameter {
            name: "angle_threshold_degrees",
            value,
            reason: "must lie strictly between 0 and 180 degrees",
        }
    }
}
