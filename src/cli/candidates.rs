// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Presentation-side filtering and ordering of detected faces

use crate::orientation::MajorFace;
use serde::Serialize;

/// A face offered to the user, keeping its index in the detection output
#[derive(Debug, Clone, Serialize)]
pub struct Candidate<'a> {
    pub index: usize,
    #[serde(flatten)]
    pub face: &'a MajorFace,
}

/// Drop faces with fewer than `min_members` triangles and order the rest by
/// descending area. Ties keep detection order.
pub fn rank_candidates(faces: &[MajorFace], min_members: usize) -> Vec<Candidate<'_>> {
    let mut candidates: Vec<Candidate<'_>> = faces
        .iter()
        .enumerate()
        .filter(|(_, face)| face.member_count >= min_members)
        .map(|(index, face)| Candidate { index, face })
        .collect();

    candidates.sort_by(|a, b| b.face.area.total_cmp(&a.face.area));
    candidates
}
