// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI subsystem for Layflat

pub mod candidates;
pub mod reporter;
pub mod runner;

pub use candidates::{rank_candidates, Candidate};
pub use reporter::Reporter;
pub use runner::{Analysis, Runner};
