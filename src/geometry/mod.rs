// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geometry module - mesh representation, transforms and primitives

mod bbox;
mod mesh;
mod primitives;
mod transform;
mod triangle;

pub use bbox::BoundingBox;
pub use mesh::{Mesh, MeshBuffer};
pub use primitives::Primitive;
pub use transform::RigidTransform;
pub use triangle::Triangle;
