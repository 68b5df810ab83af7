// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Greedy clustering of triangles by normal direction
//!
//! Every non-degenerate triangle becomes a [`TriangleRecord`]; records are then
//! grouped by a [`ClusterStrategy`]. The default [`FirstFit`] strategy walks
//! records in input order and drops each one into the first cluster whose seed
//! normal is within the angle threshold, opening a new cluster otherwise.

use super::MajorFace;
use crate::config::OrientConfig;
use crate::error::{OrientError, Result};
use crate::geometry::{MeshBuffer, Triangle};
use nalgebra::{Point3, Vector3};
use tracing::{debug, trace};

pub const DEFAULT_ANGLE_THRESHOLD_DEGREES: f64 = 30.0;

/// Degenerate cutoff relative to the squared bounding-box diagonal.
pub const DEFAULT_DEGENERATE_EPSILON: f64 = 1e-12;

/// Per-triangle data consumed by a clustering strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleRecord {
    pub normal: Vector3<f64>,
    pub centroid: Point3<f64>,
    pub area: f64,
    /// Index of the source triangle in the normalized mesh.
    pub index: usize,
}

/// Groups triangle records into major faces.
///
/// `cos_threshold` is the cosine of the admission angle; two normals are
/// "close" when their dot product is strictly greater than it.
pub trait ClusterStrategy {
    fn name(&self) -> &'static str;

    fn cluster(&self, records: &[TriangleRecord], cos_threshold: f64) -> Vec<MajorFace>;
}

/// Single-pass, first-match agglomeration.
///
/// Clusters are tried in creation order and seed normals never move, so the
/// result depends only on triangle order and the threshold.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstFit;

#[derive(Debug)]
struct OpenCluster {
    seed: Vector3<f64>,
    centroid_sum: Vector3<f64>,
    area: f64,
    members: Vec<usize>,
}

impl OpenCluster {
    fn seeded_by(record: &TriangleRecord) -> Self {
        Self {
            seed: record.normal,
            centroid_sum: record.centroid.coords,
            area: record.area,
            members: vec![record.index],
        }
    }

    fn push(&mut self, record: &TriangleRecord) {
        self.centroid_sum += record.centroid.coords;
        self.area += record.area;
        self.members.push(record.index);
    }

    fn finish(self) -> MajorFace {
        let member_count = self.members.len();
        MajorFace {
            normal: self.seed,
            centroid: Point3::from(self.centroid_sum / member_count as f64),
            member_count,
            area: self.area,
            members: self.members,
        }
    }
}

impl ClusterStrategy for FirstFit {
    fn name(&self) -> &'static str {
        "first-fit"
    }

    fn cluster(&self, records: &[TriangleRecord], cos_threshold: f64) -> Vec<MajorFace> {
        let mut clusters: Vec<OpenCluster> = Vec::new();

        for record in records {
            let first_match = clusters
                .iter()
                .position(|cluster| cluster.seed.dot(&record.normal) > cos_threshold);

            match first_match {
                Some(i) => clusters[i].push(record),
                None => {
                    trace!(triangle = record.index, "opening cluster {}", clusters.len());
                    clusters.push(OpenCluster::seeded_by(record));
                }
            }
        }

        clusters.into_iter().map(OpenCluster::finish).collect()
    }
}

/// Reject thresholds outside the open interval (0, 180) degrees, NaN included.
pub fn validate_angle_threshold(degrees: f64) -> Result<()> {
    if degrees > 0.0 && degrees < 180.0 {
        Ok(())
    } else {
        Err(OrientError::angle_threshold(degrees))
    }
}

/// Reject a degenerate cutoff that is negative or not finite.
pub fn validate_degenerate_epsilon(epsilon: f64) -> Result<()> {
    if epsilon >= 0.0 && epsilon.is_finite() {
        Ok(())
    } else {
        Err(OrientError::InvalidParameter {
            name: "degenerate_epsilon",
            value: epsilon,
            reason: "must be finite and non-negative",
        })
    }
}

/// Compute normal, centroid and area for every usable triangle.
///
/// A triangle is skipped when it has non-finite corners or when its cross
/// product length is at most `epsilon * diagonal^2`, `diagonal` being the
/// mesh bounding-box diagonal. Returns the records and the skipped count.
pub fn triangle_records(
    triangles: &[Triangle],
    diagonal: f64,
    epsilon: f64,
) -> (Vec<TriangleRecord>, usize) {
    let min_cross = epsilon * diagonal * diagonal;
    let mut records = Vec::with_capacity(triangles.len());

    for (index, triangle) in triangles.iter().enumerate() {
        if !triangle.is_finite() {
            continue;
        }
        let cross = triangle.cross();
        let length = cross.norm();
        // Also catches an all-degenerate mesh with zero extent
        if !length.is_finite() || length <= min_cross.max(0.0) {
            continue;
        }
        records.push(TriangleRecord {
            normal: cross / length,
            centroid: triangle.centroid(),
            area: length * 0.5,
            index,
        });
    }

    let skipped = triangles.len() - records.len();
    (records, skipped)
}

/// Detects major faces of a mesh with a fixed threshold and strategy.
///
/// Holds configuration only; every call is independent.
#[derive(Debug, Clone)]
pub struct FaceClusterer<S = FirstFit> {
    angle_threshold_degrees: f64,
    degenerate_epsilon: f64,
    strategy: S,
}

impl FaceClusterer<FirstFit> {
    pub fn new(angle_threshold_degrees: f64) -> Result<Self> {
        validate_angle_threshold(angle_threshold_degrees)?;
        Ok(Self {
            angle_threshold_degrees,
            degenerate_epsilon: DEFAULT_DEGENERATE_EPSILON,
            strategy: FirstFit,
        })
    }

    pub fn from_config(config: &OrientConfig) -> Result<Self> {
        config.validate()?;
        Self::new(config.angle_threshold_degrees)?.with_degenerate_epsilon(config.degenerate_epsilon)
    }
}

impl<S: ClusterStrategy> FaceClusterer<S> {
    /// Swap the grouping strategy, keeping threshold and epsilon.
    pub fn with_strategy<T: ClusterStrategy>(self, strategy: T) -> FaceClusterer<T> {
        FaceClusterer {
            angle_threshold_degrees: self.angle_threshold_degrees,
            degenerate_epsilon: self.degenerate_epsilon,
            strategy,
        }
    }

    pub fn with_degenerate_epsilon(mut self, epsilon: f64) -> Result<Self> {
        validate_degenerate_epsilon(epsilon)?;
        self.degenerate_epsilon = epsilon;
        Ok(self)
    }

    pub fn angle_threshold_degrees(&self) -> f64 {
        self.angle_threshold_degrees
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Cluster the triangles of `mesh`. An empty mesh yields no faces.
    pub fn detect(&self, mesh: MeshBuffer<'_>) -> Result<Vec<MajorFace>> {
        let triangles = mesh.triangles()?;
        if triangles.is_empty() {
            debug!("mesh has no triangles, no candidate faces");
            return Ok(Vec::new());
        }

        let diagonal = mesh.bounding_box().diagonal();
        let (records, skipped) = triangle_records(&triangles, diagonal, self.degenerate_epsilon);
        let cos_threshold = self.angle_threshold_degrees.to_radians().cos();

        let faces = self.strategy.cluster(&records, cos_threshold);

        debug!(
            triangles = triangles.len(),
            skipped,
            clusters = faces.len(),
            strategy = self.strategy.name(),
            threshold = self.angle_threshold_degrees,
            "detected major faces"
        );

        Ok(faces)
    }
}
