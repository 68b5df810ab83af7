// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! I/O module - STL import and export for the command-line front end

mod stl;

pub use stl::{collect_stl_files, export_stl, import_stl, read_stl};
