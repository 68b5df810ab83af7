// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! STL reader and writer built on `stl_io`

use crate::geometry::Mesh;
use anyhow::{Context, Result};
use nalgebra::{Point3, Vector3};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Seek};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Load an ASCII or binary STL file into an indexed mesh
pub fn import_stl(path: impl AsRef<Path>) -> Result<Mesh> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("Failed to open STL file: {:?}", path))?;
    let mut reader = BufReader::new(file);

    read_stl(&mut reader).with_context(|| format!("Failed to read STL file: {:?}", path))
}

/// Decode STL data from any seekable reader
pub fn read_stl<R: Read + Seek>(reader: &mut R) -> Result<Mesh> {
    let stl = stl_io::read_stl(reader).context("Invalid STL data")?;

    debug!(
        vertices = stl.vertices.len(),
        triangles = stl.faces.len(),
        "decoded STL"
    );

    let mut mesh = Mesh::with_capacity(stl.vertices.len(), stl.faces.len());
    for v in &stl.vertices {
        mesh.add_vertex(Point3::new(v[0] as f64, v[1] as f64, v[2] as f64));
    }

    // Winding is kept as stored; the facet normals in the file are ignored
    for face in &stl.faces {
        mesh.add_triangle([
            face.vertices[0] as u32,
            face.vertices[1] as u32,
            face.vertices[2] as u32,
        ]);
    }

    Ok(mesh)
}

/// Write a binary STL with facet normals computed from geometry
pub fn export_stl(mesh: &Mesh, path: impl AsRef<Path>) -> Result<()> {
    use stl_io::{Normal, Triangle as StlTriangle, Vertex as StlVertex};

    let path = path.as_ref();
    let triangles: Vec<StlTriangle> = mesh
        .triangles()?
        .iter()
        .map(|tri| {
            let normal = tri.normal(0.0).unwrap_or_else(Vector3::zeros);
            let vertex = |p: &Point3<f64>| StlVertex::new([p.x as f32, p.y as f32, p.z as f32]);

            StlTriangle {
                normal: Normal::new([normal.x as f32, normal.y as f32, normal.z as f32]),
                vertices: [vertex(&tri.a), vertex(&tri.b), vertex(&tri.c)],
            }
        })
        .collect();

    let file = File::create(path).with_context(|| format!("Failed to create STL file: {:?}", path))?;
    let mut writer = BufWriter::new(file);
    stl_io::write_stl(&mut writer, triangles.iter()).context("Failed to write STL file")?;

    Ok(())
}

/// Every `.stl` file under `root` (or `root` itself when it is a file), sorted
pub fn collect_stl_files(root: impl AsRef<Path>) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext.eq_ignore_ascii_case("stl"))
                .unwrap_or(false)
        })
        .collect();
    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Primitive;
    use crate::orientation::FaceClusterer;
    use std::io::{Cursor, Write};
    use tempfile::{tempdir, NamedTempFile};

    const ASCII_TRIANGLE: &str = "solid t
  facet normal 0 0 1
    outer loop
      vertex 0 0 0
      vertex 1 0 0
      vertex 0 1 0
    endloop
  endfacet
endsolid t
";

    #[test]
    fn test_read_ascii_stl() -> Result<()> {
        let mut cursor = Cursor::new(ASCII_TRIANGLE.as_bytes());
        let mesh = read_stl(&mut cursor)?;

        assert_eq!(mesh.triangle_count(), 1);
        let tri = mesh.triangles()?[0];
        assert_eq!(tri.normal(0.0), Some(Vector3::z()));
        Ok(())
    }

    #[test]
    fn test_import_ascii_file() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        write!(file, "{}", ASCII_TRIANGLE)?;

        let mesh = import_stl(file.path())?;
        assert_eq!(mesh.triangle_count(), 1);
        Ok(())
    }

    #[test]
    fn test_import_missing_file() {
        assert!(import_stl("/nonexistent/part.stl").is_err());
    }

    #[test]
    fn test_export_then_import_keeps_triangles() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("cube.stl");
        let mesh = Primitive::cube(Vector3::new(4.0, 4.0, 4.0), false).to_mesh();

        export_stl(&mesh, &path)?;
        let loaded = import_stl(&path)?;

        assert_eq!(loaded.triangle_count(), 12);
        assert!(loaded.vertex_count() <= 36);

        let faces = FaceClusterer::new(30.0)?.detect(loaded.as_buffer())?;
        assert_eq!(faces.len(), 6);
        Ok(())
    }

    #[test]
    fn test_collect_stl_files() -> Result<()> {
        let dir = tempdir()?;
        std::fs::create_dir(dir.path().join("nested"))?;
        std::fs::write(dir.path().join("b.STL"), ASCII_TRIANGLE)?;
        std::fs::write(dir.path().join("nested/a.stl"), ASCII_TRIANGLE)?;
        std::fs::write(dir.path().join("notes.txt"), "not a mesh")?;

        let files = collect_stl_files(dir.path());
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("b.STL"));
        assert!(files[1].ends_with("nested/a.stl"));
        Ok(())
    }
}
