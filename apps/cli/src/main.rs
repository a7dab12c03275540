use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use launch_core::{Overrides, Variant, plan_launch, resolve_settings};
use tracing::debug;

const PROGRAM: &str = "blender-launch";

#[derive(Parser)]
#[command(
    name = "blender-launch",
    version,
    about = "Open Blender with a companion automation script"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import rigged meshes via import_meshes_to_blender.py
    ImportMeshes(LaunchArgs),
    /// View a point cloud via view_ply.py
    ViewPly(LaunchArgs),
}

#[derive(Args, Debug)]
struct LaunchArgs {
    /// Blender executable to run
    #[arg(long, value_name = "PATH")]
    blender: Option<String>,
    /// Directory holding the companion scripts (defaults to this executable's directory)
    #[arg(long, value_name = "DIR")]
    scripts_dir: Option<String>,
    /// Run Blender without its UI
    #[arg(long, conflicts_with = "no_background")]
    background: bool,
    /// Open the UI even when the config file asks for background mode
    #[arg(long)]
    no_background: bool,
    /// Print the resolved launch as JSON instead of starting Blender
    #[arg(long)]
    dry_run: bool,
    /// Arguments handed to the companion script
    #[arg(last = true, value_name = "SCRIPT_ARGS")]
    script_args: Vec<String>,
}

impl LaunchArgs {
    fn overrides(&self) -> Overrides {
        Overrides {
            blender: self.blender.clone(),
            scripts_dir: self.scripts_dir.clone(),
            background: match (self.background, self.no_background) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            },
            script_args: self.script_args.clone(),
        }
    }
}

fn main() -> ExitCode {
    blender_launch::init_tracing();
    let cli = Cli::parse();

    let (variant, args) = match cli.command {
        Commands::ImportMeshes(args) => (Variant::ImportMeshes, args),
        Commands::ViewPly(args) => (Variant::ViewPly, args),
    };

    match launch(variant, &args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{PROGRAM}: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn launch(variant: Variant, args: &LaunchArgs) -> Result<ExitCode> {
    let settings = resolve_settings(args.overrides()).context("Failed to load launcher settings")?;
    debug!(?settings, %variant, "resolved settings");

    if args.dry_run {
        let plan = plan_launch(variant, &settings).context("Failed to resolve launch")?;
        let json = serde_json::to_string_pretty(&plan).context("Failed to encode launch plan")?;
        println!("{json}");
        return Ok(ExitCode::SUCCESS);
    }

    Ok(launch_core::run(PROGRAM, variant, &settings))
}
