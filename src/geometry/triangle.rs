// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Triangle with explicit corner positions

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Three ordered corners. Winding (a, b, c) determines the normal direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub a: Point3<f64>,
    pub b: Point3<f64>,
    pub c: Point3<f64>,
}

impl Triangle {
    pub fn new(a: Point3<f64>, b: Point3<f64>, c: Point3<f64>) -> Self {
        Self { a, b, c }
    }

    /// Unnormalized `(b - a) x (c - a)`; its length is twice the area.
    pub fn cross(&self) -> Vector3<f64> {
        (self.b - self.a).cross(&(self.c - self.a))
    }

    pub fn area(&self) -> f64 {
        self.cross().norm() * 0.5
    }

    pub fn centroid(&self) -> Point3<f64> {
        Point3::from((self.a.coords + self.b.coords + self.c.coords) / 3.0)
    }

    /// Unit normal, or `None` when the cross product length is at or below `min_cross`.
    pub fn normal(&self, min_cross: f64) -> Option<Vector3<f64>> {
        let cross = self.cross();
        let length = cross.norm();
        if !length.is_finite() || length <= min_cross {
            return None;
        }
        Some(cross / length)
    }

    pub fn is_finite(&self) -> bool {
        [self.a, self.b, self.c]
            .iter()
            .all(|p| p.coords.iter().all(|c| c.is_finite()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_normal_follows_winding() {
        let tri = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        );
        assert_relative_eq!(tri.normal(0.0).unwrap(), Vector3::z());

        let flipped = Triangle::new(tri.a, tri.c, tri.b);
        assert_relative_eq!(flipped.normal(0.0).unwrap(), -Vector3::z());
        assert_relative_eq!(tri.area(), 0.5);
    }

    #[test]
    fn test_collinear_has_no_normal() {
        let tri = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(2.0, 2.0, 2.0),
        );
        assert!(tri.normal(0.0).is_none());
        assert_eq!(tri.area(), 0.0);
    }

    #[test]
    fn test_centroid() {
        let tri = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(3.0, 0.0, 0.0),
            Point3::new(0.0, 3.0, 3.0),
        );
        assert_relative_eq!(tri.centroid(), Point3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_non_finite_detection() {
        let tri = Triangle::new(
            Point3::new(f64::NAN, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        );
        assert!(!tri.is_finite());
        assert!(tri.normal(0.0).is_none());
    }
}
