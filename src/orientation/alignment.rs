// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Rigid transform that rests a chosen face on the build plate

use super::{down, up, MajorFace};
use crate::config::OrientConfig;
use crate::error::{OrientError, Result};
use crate::geometry::RigidTransform;
use nalgebra::{Unit, UnitQuaternion, Vector3};
use std::f64::consts::PI;
use tracing::debug;

/// Allowed deviation of a face normal's length from 1 before it is rejected.
pub const DEFAULT_UNIT_TOLERANCE: f64 = 1e-3;

/// Cross-product length below which two unit vectors count as (anti-)parallel.
const PARALLEL_EPSILON: f64 = 1e-9;

/// Computes the delta transform that lays a face flat at height zero.
///
/// The returned transform is relative: compose it after the mesh's current
/// pose with [`RigidTransform::then`]. Rotation happens about the world
/// origin and the translation is purely vertical, so the part's footprint is
/// not re-centered on the plate.
///
/// The face normal's length is checked against the unit tolerance before it
/// is renormalized: a normal off by more than the tolerance (`(0, 2, 0)`
/// included) is treated as corrupt rather than rescaled.
#[derive(Debug, Clone, Copy)]
pub struct OrientationAligner {
    unit_tolerance: f64,
}

impl OrientationAligner {
    pub fn new() -> Self {
        Self {
            unit_tolerance: DEFAULT_UNIT_TOLERANCE,
        }
    }

    pub fn with_unit_tolerance(unit_tolerance: f64) -> Result<Self> {
        validate_unit_tolerance(unit_tolerance)?;
        Ok(Self { unit_tolerance })
    }

    pub fn from_config(config: &OrientConfig) -> Result<Self> {
        config.validate()?;
        Self::with_unit_tolerance(config.unit_tolerance)
    }

    pub fn align(&self, current: &RigidTransform, face: &MajorFace) -> Result<RigidTransform> {
        let normal = self.checked_normal(&face.normal)?;
        let world_normal = current.transform_vector(&normal);

        let rotation = rotation_onto(&world_normal, &down(), &fallback_axis(current));

        let world_centroid = current.transform_point(&face.centroid);
        let height = (rotation * world_centroid).coords.dot(&up());
        let translation = -height * up().into_inner();

        debug!(
            angle = rotation.angle(),
            height, "aligned face to build plate"
        );

        Ok(RigidTransform::new(rotation, translation))
    }

    /// Renormalize a normal whose length drifted slightly; reject anything else.
    fn checked_normal(&self, normal: &Vector3<f64>) -> Result<Vector3<f64>> {
        let length = normal.norm();
        if !length.is_finite() || length == 0.0 || (length - 1.0).abs() > self.unit_tolerance {
            return Err(OrientError::DegenerateFace { length });
        }
        Ok(normal / length)
    }
}

impl Default for OrientationAligner {
    fn default() -> Self {
        Self::new()
    }
}

/// Reject a unit tolerance outside the open interval (0, 1).
pub fn validate_unit_tolerance(tolerance: f64) -> Result<()> {
    if tolerance > 0.0 && tolerance < 1.0 {
        Ok(())
    } else {
        Err(OrientError::InvalidParameter {
            name: "unit_tolerance",
            value: tolerance,
            reason: "must lie strictly between 0 and 1",
        })
    }
}

/// Minimal rotation taking unit vector `from` onto unit vector `to`.
///
/// Parallel inputs give the identity. Anti-parallel inputs have no usable
/// cross product, so the half turn is taken about `fallback`, which must be
/// perpendicular to `to`.
fn rotation_onto(
    from: &Vector3<f64>,
    to: &Unit<Vector3<f64>>,
    fallback: &Unit<Vector3<f64>>,
) -> UnitQuaternion<f64> {
    let cross = from.cross(to);
    let dot = from.dot(to).clamp(-1.0, 1.0);

    if cross.norm() < PARALLEL_EPSILON {
        if dot > 0.0 {
            debug!("face already faces down, no rotation");
            return UnitQuaternion::identity();
        }
        debug!(axis = ?fallback, "face faces up, half turn about fallback axis");
        return UnitQuaternion::from_axis_angle(fallback, PI);
    }

    UnitQuaternion::from_axis_angle(&Unit::new_normalize(cross), dot.acos())
}

/// The mesh's local X axis laid horizontal, or world X when local X is vertical.
fn fallback_axis(current: &RigidTransform) -> Unit<Vector3<f64>> {
    let local_x = current.transform_vector(&Vector3::x());
    let horizontal = Vector3::new(local_x.x, 0.0, local_x.z);
    Unit::try_new(horizontal, PARALLEL_EPSILON).unwrap_or_else(Vector3::x_axis)
}
