// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Major face produced by clustering

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// A group of triangles sharing (approximately) one supporting plane.
///
/// `normal` is the seed triangle's normal, never re-averaged. `centroid` is
/// the unweighted mean of member triangle centroids, in mesh-local space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MajorFace {
    pub normal: Vector3<f64>,
    pub centroid: Point3<f64>,
    pub member_count: usize,
    /// Sum of member triangle areas.
    pub area: f64,
    /// Source triangle indices, in input order.
    pub members: Vec<usize>,
}

impl MajorFace {
    /// Face described only by its plane, e.g. one picked in a UI and sent back.
    pub fn from_plane(normal: Vector3<f64>, centroid: Point3<f64>) -> Self {
        Self {
            normal,
            centroid,
            member_count: 0,
            area: 0.0,
            members: Vec::new(),
        }
    }

    pub fn contains(&self, triangle_index: usize) -> bool {
        // Members are pushed in input order
        self.members.binary_search(&triangle_index).is_ok()
    }
}
