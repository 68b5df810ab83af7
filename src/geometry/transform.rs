// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Rigid transforms (rotation followed by translation)

use nalgebra::{Isometry3, Matrix4, Point3, Translation3, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// Rotation plus translation, no scale or shear.
///
/// A point is rotated about the origin first and then translated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RigidTransform {
    pub rotation: UnitQuaternion<f64>,
    pub translation: Vector3<f64>,
}

impl RigidTransform {
    pub fn new(rotation: UnitQuaternion<f64>, translation: Vector3<f64>) -> Self {
        Self {
            rotation,
            translation,
        }
    }

    pub fn identity() -> Self {
        Self::new(UnitQuaternion::identity(), Vector3::zeros())
    }

    pub fn from_rotation(rotation: UnitQuaternion<f64>) -> Self {
        Self::new(rotation, Vector3::zeros())
    }

    pub fn transform_point(&self, point: &Point3<f64>) -> Point3<f64> {
        self.rotation * point + self.translation
    }

    /// Directions ignore the translation part.
    pub fn transform_vector(&self, vector: &Vector3<f64>) -> Vector3<f64> {
        self.rotation * vector
    }

    /// Compose: apply `self`, then `next`.
    pub fn then(&self, next: &RigidTransform) -> Self {
        Self {
            rotation: next.rotation * self.rotation,
            translation: next.rotation * self.translation + next.translation,
        }
    }

    pub fn inverse(&self) -> Self {
        let rotation = self.rotation.inverse();
        Self {
            rotation,
            translation: -(rotation * self.translation),
        }
    }

    /// Rotation angle in radians, in `[0, pi]`.
    pub fn rotation_angle(&self) -> f64 {
        self.rotation.angle()
    }

    pub fn is_identity(&self, epsilon: f64) -> bool {
        self.rotation.angle() <= epsilon && self.translation.norm() <= epsilon
    }

    pub fn to_isometry(&self) -> Isometry3<f64> {
        Isometry3::from_parts(Translation3::from(self.translation), self.rotation)
    }

    /// 4x4 homogeneous matrix, column-vector convention.
    pub fn to_matrix(&self) -> Matrix4<f64> {
        self.to_isometry().to_homogeneous()
    }
}

impl Default for RigidTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<Isometry3<f64>> for RigidTransform {
    fn from(isometry: Isometry3<f64>) -> Self {
        Self::new(isometry.rotation, isometry.translation.vector)
    }
}
