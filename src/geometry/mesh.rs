// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Mesh representation and buffer normalization

use super::{BoundingBox, RigidTransform, Triangle};
use crate::error::{OrientError, Result};
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// Borrowed view over decoder output.
///
/// Both layouts normalize to the same per-triangle corner triples, in
/// triangle order, so downstream code never sees the difference.
#[derive(Debug, Clone, Copy)]
pub enum MeshBuffer<'a> {
    /// Shared vertex array plus three indices per triangle.
    Indexed {
        positions: &'a [Point3<f64>],
        indices: &'a [u32],
    },
    /// Three consecutive positions per triangle.
    Soup { positions: &'a [Point3<f64>] },
}

impl<'a> MeshBuffer<'a> {
    pub fn indexed(positions: &'a [Point3<f64>], indices: &'a [u32]) -> Self {
        Self::Indexed { positions, indices }
    }

    pub fn soup(positions: &'a [Point3<f64>]) -> Self {
        Self::Soup { positions }
    }

    /// Number of whole triangles described (trailing partial triangles are not counted).
    pub fn triangle_count(&self) -> usize {
        match self {
            Self::Indexed { indices, .. } => indices.len() / 3,
            Self::Soup { positions } => positions.len() / 3,
        }
    }

    /// Expand into corner triples, rejecting buffers that do not describe whole triangles.
    pub fn triangles(&self) -> Result<Vec<Triangle>> {
        match *self {
            Self::Indexed { positions, indices } => {
                if indices.len() % 3 != 0 {
                    return Err(OrientError::InvalidMesh(format!(
                        "index buffer length {} is not a multiple of 3",
                        indices.len()
                    )));
                }
                let lookup = |index: u32| {
                    positions.get(index as usize).copied().ok_or_else(|| {
                        OrientError::InvalidMesh(format!(
                            "index {} out of range for {} vertices",
                            index,
                            positions.len()
                        ))
                    })
                };
                indices
                    .chunks_exact(3)
                    .map(|tri| -> Result<Triangle> {
                        Ok(Triangle::new(lookup(tri[0])?, lookup(tri[1])?, lookup(tri[2])?))
                    })
                    .collect()
            }
            Self::Soup { positions } => {
                if positions.len() % 3 != 0 {
                    return Err(OrientError::InvalidMesh(format!(
                        "triangle soup has {} vertices, not a multiple of 3",
                        positions.len()
                    )));
                }
                Ok(positions
                    .chunks_exact(3)
                    .map(|tri| Triangle::new(tri[0], tri[1], tri[2]))
                    .collect())
            }
        }
    }

    /// Bounds of the vertices actually referenced by triangles.
    pub fn bounding_box(&self) -> BoundingBox {
        match *self {
            Self::Indexed { positions, indices } => BoundingBox::from_points(
                indices.iter().filter_map(|&i| positions.get(i as usize)),
            ),
            Self::Soup { positions } => BoundingBox::from_points(positions),
        }
    }
}

/// Owned indexed triangle mesh
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    pub vertices: Vec<Point3<f64>>,
    /// Three entries per triangle.
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            indices: Vec::with_capacity(triangle_count * 3),
        }
    }

    /// Add a vertex and return its index
    pub fn add_vertex(&mut self, position: Point3<f64>) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    pub fn add_triangle(&mut self, indices: [u32; 3]) {
        self.indices.extend_from_slice(&indices);
    }

    /// Build from flattened `[x0, y0, z0, x1, ...]` positions, as GPU buffers and
    /// most decoders hand them out. Without `indices` the positions are read as
    /// a triangle soup.
    pub fn from_flat(positions: &[f32], indices: Option<&[u32]>) -> Result<Self> {
        if positions.len() % 3 != 0 {
            return Err(OrientError::InvalidMesh(format!(
                "position buffer length {} is not a multiple of 3",
                positions.len()
            )));
        }

        let vertices: Vec<Point3<f64>> = positions
            .chunks_exact(3)
            .map(|p| Point3::new(p[0] as f64, p[1] as f64, p[2] as f64))
            .collect();

        let indices = match indices {
            Some(indices) => indices.to_vec(),
            None => (0..vertices.len() as u32).collect(),
        };

        let mesh = Self { vertices, indices };
        // Surface bad indices here rather than at clustering time
        mesh.as_buffer().triangles()?;
        Ok(mesh)
    }

    pub fn as_buffer(&self) -> MeshBuffer<'_> {
        MeshBuffer::indexed(&self.vertices, &self.indices)
    }

    pub fn triangles(&self) -> Result<Vec<Triangle>> {
        self.as_buffer().triangles()
    }

    /// Copy of this mesh with every vertex moved by `transform`.
    pub fn transformed(&self, transform: &RigidTransform) -> Self {
        Self {
            vertices: self
                .vertices
                .iter()
                .map(|p| transform.transform_point(p))
                .collect(),
            indices: self.indices.clone(),
        }
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.as_buffer().bounding_box()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

impl<'a> From<&'a Mesh> for MeshBuffer<'a> {
    fn from(mesh: &'a Mesh) -> Self {
        mesh.as_buffer()
    }
}
