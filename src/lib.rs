// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Layflat
//!
//! Finds the large, roughly planar regions ("major faces") of a triangle
//! mesh and computes the rigid transform that rests a chosen one on the
//! build plate. Everything here is a pure function of its inputs; the host
//! application owns loading meshes and applying the returned transform.
//!
//! ```
//! use layflat::{align_to_face, detect_major_faces, Primitive, RigidTransform};
//! use nalgebra::Vector3;
//!
//! let mesh = Primitive::cube(Vector3::new(20.0, 20.0, 20.0), false).to_mesh();
//! let faces = detect_major_faces(&mesh, 30.0).unwrap();
//! assert_eq!(faces.len(), 6);
//!
//! let delta = align_to_face(&RigidTransform::identity(), &faces[0]).unwrap();
//! let pose = RigidTransform::identity().then(&delta);
//! assert!(pose.transform_point(&faces[0].centroid).y.abs() < 1e-6);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod geometry;
pub mod io;
pub mod orientation;

pub use config::OrientConfig;
pub use error::{OrientError, Result};
pub use geometry::{BoundingBox, Mesh, MeshBuffer, Primitive, RigidTransform, Triangle};
pub use orientation::{
    ClusterStrategy, FaceClusterer, FirstFit, MajorFace, OrientationAligner, TriangleRecord,
    DEFAULT_ANGLE_THRESHOLD_DEGREES,
};

/// Cluster a mesh's triangles into candidate resting faces.
///
/// `angle_threshold_degrees` must lie in (0, 180). Degenerate triangles are
/// skipped; an empty mesh yields an empty list.
pub fn detect_major_faces<'a>(
    mesh: impl Into<MeshBuffer<'a>>,
    angle_threshold_degrees: f64,
) -> Result<Vec<MajorFace>> {
    FaceClusterer::new(angle_threshold_degrees)?.detect(mesh.into())
}

/// Same as [`detect_major_faces`] with a caller-supplied grouping strategy.
pub fn detect_major_faces_with<'a, S: ClusterStrategy>(
    mesh: impl Into<MeshBuffer<'a>>,
    angle_threshold_degrees: f64,
    strategy: S,
) -> Result<Vec<MajorFace>> {
    FaceClusterer::new(angle_threshold_degrees)?
        .with_strategy(strategy)
        .detect(mesh.into())
}

/// Same as [`detect_major_faces`] with every tunable taken from a validated `config`.
pub fn detect_major_faces_with_config<'a>(
    mesh: impl Into<MeshBuffer<'a>>,
    config: &OrientConfig,
) -> Result<Vec<MajorFace>> {
    FaceClusterer::from_config(config)?.detect(mesh.into())
}

/// Transform that, applied after `current`, rests `face` on the plane y = 0.
pub fn align_to_face(current: &RigidTransform, face: &MajorFace) -> Result<RigidTransform> {
    OrientationAligner::new().align(current, face)
}

/// Same as [`align_to_face`] with the unit tolerance taken from a validated `config`.
pub fn align_to_face_with_config(
    current: &RigidTransform,
    face: &MajorFace,
    config: &OrientConfig,
) -> Result<RigidTransform> {
    OrientationAligner::from_config(config)?.align(current, face)
}
