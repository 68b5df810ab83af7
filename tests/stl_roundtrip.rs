// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! STL in, faces and alignment, STL out

use anyhow::Result;
use layflat::{align_to_face, detect_major_faces, io, Primitive, RigidTransform};
use nalgebra::Vector3;
use tempfile::tempdir;

#[test]
fn test_align_file_and_write_back() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("cylinder.stl");
    let output = dir.path().join("cylinder_flat.stl");

    let mesh = Primitive::cylinder(20.0, 4.0, 48).to_mesh();
    io::export_stl(&mesh, &input)?;

    let loaded = io::import_stl(&input)?;
    assert_eq!(loaded.triangle_count(), mesh.triangle_count());

    let faces = detect_major_faces(&loaded, 30.0)?;
    let top = faces
        .iter()
        .find(|f| f.normal.z > 0.99)
        .expect("top cap is a major face");
    assert_eq!(top.member_count, 48);

    let delta = align_to_face(&RigidTransform::identity(), top)?;
    io::export_stl(&loaded.transformed(&delta), &output)?;

    // Written as f32, so compare loosely
    let flat = io::import_stl(&output)?;
    let bbox = flat.bounding_box();
    assert!(bbox.min.y.abs() < 1e-4, "min y {}", bbox.min.y);
    assert!((bbox.max.y - 20.0).abs() < 1e-4, "max y {}", bbox.max.y);
    Ok(())
}

#[test]
fn test_flat_buffers_from_decoder() -> Result<()> {
    // A decoder handing over a non-indexed f32 position buffer
    let mesh = Primitive::cube(Vector3::new(2.0, 2.0, 2.0), true).to_mesh();
    let flat: Vec<f32> = mesh
        .indices
        .iter()
        .flat_map(|&i| {
            let p = mesh.vertices[i as usize];
            [p.x as f32, p.y as f32, p.z as f32]
        })
        .collect();

    let decoded = layflat::Mesh::from_flat(&flat, None)?;
    assert_eq!(detect_major_faces(&decoded, 30.0)?.len(), 6);
    Ok(())
}
