// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Lay-flat alignment on detected faces

use anyhow::Result;
use approx::assert_relative_eq;
use layflat::{align_to_face, detect_major_faces, MajorFace, OrientError, Primitive, RigidTransform};
use nalgebra::{Point3, UnitQuaternion, Vector3};
use std::f64::consts::PI;

fn resting_cube() -> (layflat::Mesh, Vec<MajorFace>) {
    let mesh = Primitive::cube(Vector3::new(10.0, 10.0, 10.0), false).to_mesh();
    let faces = detect_major_faces(&mesh, 30.0).expect("cube clusters");
    (mesh, faces)
}

#[test]
fn test_face_already_on_plate_is_identity() -> Result<()> {
    let (_, faces) = resting_cube();
    let bottom = faces
        .iter()
        .find(|f| f.normal.y < -0.99)
        .expect("bottom face");

    let delta = align_to_face(&RigidTransform::identity(), bottom)?;
    assert!(delta.is_identity(1e-9));
    Ok(())
}

#[test]
fn test_top_face_half_turn_lands_at_zero() -> Result<()> {
    let (mesh, faces) = resting_cube();
    let top = faces.iter().find(|f| f.normal.y > 0.99).expect("top face");

    let delta = align_to_face(&RigidTransform::identity(), top)?;
    assert_relative_eq!(delta.rotation_angle(), PI, epsilon = 1e-9);
    let (axis, _) = delta.rotation.axis_angle().expect("rotation axis");
    assert!(axis.y.abs() < 1e-9);

    assert!(delta.transform_point(&top.centroid).y.abs() < 1e-6);
    let bbox = mesh.transformed(&delta).bounding_box();
    assert!(bbox.min.y.abs() < 1e-6);
    assert_relative_eq!(bbox.max.y, 10.0, epsilon = 1e-6);
    Ok(())
}

#[test]
fn test_opposite_of_target_gives_valid_half_turn() -> Result<()> {
    let face = MajorFace::from_plane(Vector3::new(0.0, 1.0, 0.0), Point3::new(2.0, 7.0, -1.0));
    let delta = align_to_face(&RigidTransform::identity(), &face)?;

    let (axis, angle) = delta.rotation.axis_angle().expect("rotation axis");
    assert!(axis.iter().all(|c| c.is_finite()));
    assert_relative_eq!(axis.norm(), 1.0, epsilon = 1e-12);
    assert_relative_eq!(angle, PI, epsilon = 1e-9);
    Ok(())
}

#[test]
fn test_straight_down_normal_is_valid() -> Result<()> {
    let face = MajorFace::from_plane(Vector3::new(0.0, -1.0, 0.0), Point3::new(2.0, 7.0, -1.0));
    let delta = align_to_face(&RigidTransform::identity(), &face)?;

    assert!(delta.rotation.coords.iter().all(|c| c.is_finite()));
    assert_relative_eq!(delta.translation, Vector3::new(0.0, -7.0, 0.0), epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_every_cube_face_can_be_laid_flat() -> Result<()> {
    let (mesh, faces) = resting_cube();
    let current = RigidTransform::new(
        UnitQuaternion::from_euler_angles(0.2, 0.9, -0.4),
        Vector3::new(50.0, 3.0, 80.0),
    );

    for face in &faces {
        let delta = align_to_face(&current, face)?;
        let pose = current.then(&delta);

        assert_relative_eq!(
            pose.transform_vector(&face.normal),
            Vector3::new(0.0, -1.0, 0.0),
            epsilon = 1e-9
        );
        let bbox = mesh.transformed(&pose).bounding_box();
        assert!(bbox.min.y.abs() < 1e-6, "face {:?} left min y {}", face.normal, bbox.min.y);
        // Translation is purely vertical
        assert_eq!(delta.translation.x, 0.0);
        assert_eq!(delta.translation.z, 0.0);
    }
    Ok(())
}

#[test]
fn test_realigning_same_face_is_a_no_op() -> Result<()> {
    let (_, faces) = resting_cube();
    let side = &faces[2];

    let first = align_to_face(&RigidTransform::identity(), side)?;
    let pose = RigidTransform::identity().then(&first);
    let second = align_to_face(&pose, side)?;

    assert!(second.rotation_angle() < 1e-6);
    assert!(second.translation.norm() < 1e-6);
    Ok(())
}

#[test]
fn test_corrupted_face_is_reported() {
    let face = MajorFace::from_plane(Vector3::new(0.0, 0.0, 0.0), Point3::origin());
    let err = align_to_face(&RigidTransform::identity(), &face).unwrap_err();
    assert!(matches!(err, OrientError::DegenerateFace { .. }));

    let face = MajorFace::from_plane(Vector3::new(0.3, 0.3, 0.3), Point3::origin());
    assert!(align_to_face(&RigidTransform::identity(), &face).is_err());
}
