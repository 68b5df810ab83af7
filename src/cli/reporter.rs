// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI output reporter with colored formatting

use super::Candidate;
use crate::geometry::RigidTransform;
use colored::*;
use std::time::Duration;

/// CLI reporter for formatted output
pub struct Reporter;

impl Reporter {
    /// Report the candidate faces of one mesh
    pub fn report_faces(
        file: &str,
        triangles: usize,
        detected: usize,
        candidates: &[Candidate<'_>],
        duration: Duration,
    ) {
        println!("\n{}", "━".repeat(80).bright_black());
        println!("{} {}", "File:".bold(), file.cyan());
        println!("{}", "━".repeat(80).bright_black());
        println!(
            "  {} {}   {} {}   {} {}",
            "Triangles:".bright_black(),
            triangles.to_string().cyan(),
            "Faces:".bright_black(),
            detected.to_string().cyan(),
            "Time:".bright_black(),
            Self::format_duration(duration).yellow()
        );

        if candidates.is_empty() {
            Self::report_warning("No candidate faces");
        } else {
            println!(
                "\n  {:>4}  {:>8}  {:>10}  {:<26}  {}",
                "#".bold(),
                "members".bold(),
                "area".bold(),
                "normal".bold(),
                "centroid".bold()
            );
            for candidate in candidates {
                let face = candidate.face;
                println!(
                    "  {:>4}  {:>8}  {:>10.2}  {:<26}  {}",
                    candidate.index.to_string().green(),
                    face.member_count,
                    face.area,
                    Self::format_triple(face.normal.x, face.normal.y, face.normal.z),
                    Self::format_triple(face.centroid.x, face.centroid.y, face.centroid.z)
                );
            }
        }

        println!("{}", "━".repeat(80).bright_black());
    }

    /// Report the transform computed for a face
    pub fn report_alignment(file: &str, face: usize, transform: &RigidTransform) {
        let (axis, angle) = transform
            .rotation
            .axis_angle()
            .map(|(axis, angle)| (axis.into_inner(), angle))
            .unwrap_or_else(|| (nalgebra::Vector3::y(), 0.0));

        println!("\n{}", "━".repeat(80).bright_black());
        println!(
            "{} {} {} {}",
            "Aligned:".bold(),
            file.cyan(),
            "face".bright_black(),
            face.to_string().green()
        );
        println!("{}", "━".repeat(80).bright_black());
        println!(
            "  {} {:.3}° about {}",
            "Rotation:".bright_black(),
            angle.to_degrees(),
            Self::format_triple(axis.x, axis.y, axis.z)
        );
        println!(
            "  {} {}",
            "Translation:".bright_black(),
            Self::format_triple(
                transform.translation.x,
                transform.translation.y,
                transform.translation.z
            )
        );
        println!("{}", "━".repeat(80).bright_black());
    }

    /// Report error
    pub fn report_error(message: &str) {
        eprintln!("\n{} {}", "❌ Error:".red().bold(), message);
    }

    /// Report warning
    pub fn report_warning(message: &str) {
        println!("\n{} {}", "⚠️  Warning:".yellow().bold(), message);
    }

    /// Report info
    pub fn report_info(message: &str) {
        println!("{} {}", "ℹ️".bright_blue(), message);
    }

    /// Print success message
    pub fn success(message: &str) {
        println!("{} {}", "✅".green(), message.green());
    }

    fn format_triple(x: f64, y: f64, z: f64) -> String {
        format!("({:>7.3}, {:>7.3}, {:>7.3})", x, y, z)
    }

    /// Format duration for display
    fn format_duration(duration: Duration) -> String {
        let micros = duration.as_micros();

        if micros < 1_000 {
            format!("{}µs", micros)
        } else if micros < 1_000_000 {
            format!("{:.2}ms", micros as f64 / 1_000.0)
        } else {
            format!("{:.2}s", micros as f64 / 1_000_000.0)
        }
    }
}
