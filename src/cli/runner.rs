// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Load, analyze and align meshes for the command line

use crate::config::OrientConfig;
use crate::geometry::{Mesh, RigidTransform};
use crate::io;
use crate::orientation::{FaceClusterer, MajorFace, OrientationAligner};
use anyhow::{bail, Context, Result};
use std::path::Path;
use std::time::{Duration, Instant};

/// Mesh plus its detected faces
pub struct Analysis {
    pub mesh: Mesh,
    pub faces: Vec<MajorFace>,
    pub duration: Duration,
}

/// Runs clustering and alignment with one configuration
pub struct Runner {
    config: OrientConfig,
}

impl Runner {
    pub fn new(config: OrientConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &OrientConfig {
        &self.config
    }

    /// Detect major faces of an in-memory mesh, timing the clustering only
    pub fn analyze(&self, mesh: Mesh) -> Result<Analysis> {
        let clusterer = FaceClusterer::from_config(&self.config)?;

        let start = Instant::now();
        let faces = clusterer.detect(mesh.as_buffer())?;
        let duration = start.elapsed();

        Ok(Analysis {
            mesh,
            faces,
            duration,
        })
    }

    /// Load an STL file and detect its major faces
    pub fn analyze_file(&self, path: &Path) -> Result<Analysis> {
        let mesh = io::import_stl(path)?;
        self.analyze(mesh)
            .with_context(|| format!("Failed to analyze {:?}", path))
    }

    /// Delta transform laying face `index` of `analysis` on the plate
    pub fn align(
        &self,
        analysis: &Analysis,
        current: &RigidTransform,
        index: usize,
    ) -> Result<RigidTransform> {
        let Some(face) = analysis.faces.get(index) else {
            bail!(
                "Face {} does not exist ({} faces detected)",
                index,
                analysis.faces.len()
            );
        };

        let transform = OrientationAligner::from_config(&self.config)?.align(current, face)?;
        Ok(transform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Primitive;
    use nalgebra::Vector3;

    #[test]
    fn test_analyze_and_align() -> Result<()> {
        let runner = Runner::new(OrientConfig::default())?;
        let mesh = Primitive::cube(Vector3::new(10.0, 10.0, 10.0), false).to_mesh();

        let analysis = runner.analyze(mesh)?;
        assert_eq!(analysis.faces.len(), 6);

        let delta = runner.align(&analysis, &RigidTransform::identity(), 4)?;
        let placed = analysis.mesh.transformed(&delta);
        assert!(placed.bounding_box().min.y.abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_align_rejects_unknown_face() -> Result<()> {
        let runner = Runner::new(OrientConfig::default())?;
        let analysis = runner.analyze(Mesh::new())?;
        assert!(runner.align(&analysis, &RigidTransform::identity(), 0).is_err());
        Ok(())
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = OrientConfig {
            angle_threshold_degrees: 0.0,
            ..OrientConfig::default()
        };
        assert!(Runner::new(config).is_err());
    }
}
