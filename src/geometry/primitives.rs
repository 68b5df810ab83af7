// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Primitive mesh generators for demos, tests and benchmarks

use super::Mesh;
use nalgebra::{Point3, Vector3};
use std::f64::consts::PI;

/// Geometric primitives
pub enum Primitive {
    /// Axis-aligned box, either centered on the origin or spanning `[0, size]`.
    Cube { size: Vector3<f64>, center: bool },
    /// Cylinder along +Z from `z = 0` to `z = h`.
    Cylinder { h: f64, r: f64, fn_: u32 },
}

impl Primitive {
    pub fn cube(size: Vector3<f64>, center: bool) -> Self {
        Self::Cube { size, center }
    }

    pub fn cylinder(h: f64, r: f64, fn_: u32) -> Self {
        let segments = if fn_ >= 3 { fn_ } else { 32 };
        Self::Cylinder {
            h,
            r,
            fn_: segments,
        }
    }

    pub fn to_mesh(&self) -> Mesh {
        match self {
            Self::Cube { size, center } => generate_cube_mesh(*size, *center),
            Self::Cylinder { h, r, fn_ } => generate_cylinder_mesh(*h, *r, *fn_),
        }
    }
}

fn generate_cube_mesh(size: Vector3<f64>, center: bool) -> Mesh {
    let mut mesh = Mesh::with_capacity(36, 12);

    let offset = if center { size / 2.0 } else { Vector3::zeros() };
    let (min_x, max_x) = (-offset.x, size.x - offset.x);
    let (min_y, max_y) = (-offset.y, size.y - offset.y);
    let (min_z, max_z) = (-offset.z, size.z - offset.z);

    // 8 corners of the cube
    let positions = [
        Point3::new(min_x, min_y, min_z),
        Point3::new(max_x, min_y, min_z),
        Point3::new(max_x, max_y, min_z),
        Point3::new(min_x, max_y, min_z),
        Point3::new(min_x, min_y, max_z),
        Point3::new(max_x, min_y, max_z),
        Point3::new(max_x, max_y, max_z),
        Point3::new(min_x, max_y, max_z),
    ];

    // Counter-clockwise seen from outside, two triangles per side
    let faces: [[usize; 3]; 12] = [
        // Front (z+)
        [4, 5, 6],
        [4, 6, 7],
        // Back (z-)
        [1, 0, 3],
        [1, 3, 2],
        // Right (x+)
        [5, 1, 2],
        [5, 2, 6],
        // Left (x-)
        [0, 4, 7],
        [0, 7, 3],
        // Top (y+)
        [7, 6, 2],
        [7, 2, 3],
        // Bottom (y-)
        [0, 1, 5],
        [0, 5, 4],
    ];

    // Each side gets its own vertices, as exporters emit them
    for indices in faces {
        let v0 = mesh.add_vertex(positions[indices[0]]);
        let v1 = mesh.add_vertex(positions[indices[1]]);
        let v2 = mesh.add_vertex(positions[indices[2]]);
        mesh.add_triangle([v0, v1, v2]);
    }

    mesh
}

fn generate_cylinder_mesh(height: f64, radius: f64, segments: u32) -> Mesh {
    let mut mesh = Mesh::with_capacity(2 + 2 * segments as usize, 4 * segments as usize);

    let bottom_center = mesh.add_vertex(Point3::new(0.0, 0.0, 0.0));
    let top_center = mesh.add_vertex(Point3::new(0.0, 0.0, height));

    let mut bottom = Vec::with_capacity(segments as usize);
    let mut top = Vec::with_capacity(segments as usize);

    for i in 0..segments {
        let angle = 2.0 * PI * i as f64 / segments as f64;
        let (sin, cos) = angle.sin_cos();
        bottom.push(mesh.add_vertex(Point3::new(radius * cos, radius * sin, 0.0)));
        top.push(mesh.add_vertex(Point3::new(radius * cos, radius * sin, height)));
    }

    let segments = segments as usize;

    // Bottom cap
    for i in 0..segments {
        let next = (i + 1) % segments;
        mesh.add_triangle([bottom_center, bottom[next], bottom[i]]);
    }

    // Top cap
    for i in 0..segments {
        let next = (i + 1) % segments;
        mesh.add_triangle([top_center, top[i], top[next]]);
    }

    // Sides share rim vertices with the caps
    for i in 0..segments {
        let next = (i + 1) % segments;
        mesh.add_triangle([bottom[i], bottom[next], top[i]]);
        mesh.add_triangle([top[i], bottom[next], top[next]]);
    }

    mesh
}
