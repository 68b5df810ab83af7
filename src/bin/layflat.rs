// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Layflat CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use layflat::cli::{rank_candidates, Reporter, Runner};
use layflat::{io, OrientConfig, Primitive, RigidTransform};
use nalgebra::Vector3;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "layflat")]
#[command(about = "Find the flat faces of a 3D-printable mesh and lay one on the build plate", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (defaults to ./layflat.toml when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the clustering angle threshold, in degrees
    #[arg(short, long, global = true)]
    threshold: Option<f64>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List candidate resting faces of STL files
    Faces {
        /// STL file(s) or directories to scan
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Hide faces with fewer member triangles
        #[arg(long, default_value_t = 1)]
        min_members: usize,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Compute the transform that lays a face on the plate
    Align {
        /// Input STL file
        input: PathBuf,

        /// Face index as printed by `faces`
        #[arg(short, long)]
        face: usize,

        /// Write the re-oriented mesh to this STL file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Detect and align faces of a generated box
    Demo,

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        Reporter::report_error(&format!("{:#}", err));
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "layflat=debug" } else { "layflat=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref(), cli.threshold)?;
    let runner = Runner::new(config)?;

    match cli.command {
        Commands::Faces {
            inputs,
            min_members,
            json,
        } => faces_command(&runner, &inputs, min_members, json),
        Commands::Align {
            input,
            face,
            output,
            json,
        } => align_command(&runner, &input, face, output.as_deref(), json),
        Commands::Demo => demo_command(&runner),
        Commands::Version => {
            println!("Layflat v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>, threshold: Option<f64>) -> Result<OrientConfig> {
    let mut config = match path {
        Some(path) => {
            let mut config = OrientConfig::from_file(path)?;
            config.apply_env_overrides()?;
            config
        }
        None => OrientConfig::load()?,
    };

    if let Some(threshold) = threshold {
        config.angle_threshold_degrees = threshold;
    }
    config.validate()?;
    Ok(config)
}

fn faces_command(runner: &Runner, inputs: &[PathBuf], min_members: usize, json: bool) -> Result<()> {
    let files: Vec<PathBuf> = inputs.iter().flat_map(io::collect_stl_files).collect();
    if files.is_empty() {
        anyhow::bail!("No STL files found");
    }

    let mut reports = Vec::new();
    for file in &files {
        let analysis = runner.analyze_file(file)?;
        let candidates = rank_candidates(&analysis.faces, min_members);

        if json {
            reports.push(serde_json::json!({
                "file": file.display().to_string(),
                "faces": candidates,
            }));
        } else {
            Reporter::report_faces(
                &file.display().to_string(),
                analysis.mesh.triangle_count(),
                analysis.faces.len(),
                &candidates,
                analysis.duration,
            );
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }
    Ok(())
}

fn align_command(
    runner: &Runner,
    input: &Path,
    face: usize,
    output: Option<&Path>,
    json: bool,
) -> Result<()> {
    let analysis = runner.analyze_file(input)?;
    let transform = runner.align(&analysis, &RigidTransform::identity(), face)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&transform)?);
    } else {
        Reporter::report_alignment(&input.display().to_string(), face, &transform);
    }

    if let Some(output) = output {
        io::export_stl(&analysis.mesh.transformed(&transform), output)
            .with_context(|| format!("Failed to write {:?}", output))?;
        if !json {
            Reporter::success(&format!("Wrote {}", output.display()));
        }
    }
    Ok(())
}

fn demo_command(runner: &Runner) -> Result<()> {
    let mesh = Primitive::cube(Vector3::new(20.0, 10.0, 5.0), false).to_mesh();
    Reporter::report_info("Generated a 20 x 10 x 5 box resting on its bottom face");

    let analysis = runner.analyze(mesh)?;
    let candidates = rank_candidates(&analysis.faces, 1);
    Reporter::report_faces(
        "demo box",
        analysis.mesh.triangle_count(),
        analysis.faces.len(),
        &candidates,
        analysis.duration,
    );

    let Some(largest) = candidates.first() else {
        Reporter::report_warning("Nothing to align");
        return Ok(());
    };
    let transform = runner.align(&analysis, &RigidTransform::identity(), largest.index)?;
    Reporter::report_alignment("demo box", largest.index, &transform);

    let placed = analysis.mesh.transformed(&transform).bounding_box();
    Reporter::success(&format!(
        "Lowest point after alignment: y = {:.6}",
        placed.min.y
    ));
    Ok(())
}
