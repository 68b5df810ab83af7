// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Major-face detection and lay-flat alignment

mod alignment;
mod clustering;
mod face;

pub use alignment::{validate_unit_tolerance, OrientationAligner, DEFAULT_UNIT_TOLERANCE};
pub use clustering::{
    triangle_records, validate_angle_threshold, validate_degenerate_epsilon, ClusterStrategy,
    FaceClusterer, FirstFit, TriangleRecord, DEFAULT_ANGLE_THRESHOLD_DEGREES,
    DEFAULT_DEGENERATE_EPSILON,
};
pub use face::MajorFace;

use nalgebra::{Unit, Vector3};

/// Build-plate normal; heights are measured along this axis.
pub fn up() -> Unit<Vector3<f64>> {
    Vector3::y_axis()
}

/// Direction a face normal must point for the face to rest on the plate.
pub fn down() -> Unit<Vector3<f64>> {
    Unit::new_unchecked(Vector3::new(0.0, -1.0, 0.0))
}
