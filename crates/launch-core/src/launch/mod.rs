use std::io::{self, Write};
use std::process::ExitCode;

use tracing::debug;

use crate::config::LaunchSettings;
use crate::errors::LaunchError;
use crate::paths;
use crate::process;
use crate::variant::Variant;

mod plan;
pub use plan::{BACKGROUND_FLAG, LaunchPlan, PYTHON_FLAG, SCRIPT_ARGS_SEPARATOR};


pub const OPENING_LINE: &str = "Opening Blender...";

/// Builds the launch for `variant`. The companion script is not checked;
/// Blender reports a missing one itself.
pub fn plan_launch(variant: Variant, settings: &LaunchSettings) -> Result<LaunchPlan, LaunchError> {
    let dir = match &settings.scripts_dir {
        Some(dir) => paths::resolve_dir(dir)?,
        None => paths::script_dir()?,
    };
    debug!(dir = %dir.display(), %variant, "resolved script directory");

    Ok(LaunchPlan {
        variant,
        program: settings.blender.clone(),
        script: paths::companion_script_path(&dir, variant),
        background: settings.background,
        script_args: settings.script_args.clone(),
    })
}

pub fn status_lines(plan: &LaunchPlan) -> [String; 2] {
    [
        OPENING_LINE.to_string(),
        format!("Running script: {}", plan.script.display()),
    ]
}

pub fn write_status<W: Write>(out: &mut W, plan: &LaunchPlan) -> io::Result<()> {
    for line in status_lines(plan) {
        writeln!(out, "{line}")?;
    }
    out.flush()
}

/// Prints the status lines to `out`, then runs Blender and waits for it.
pub fn execute<W: Write>(plan: &LaunchPlan, out: &mut W) -> Result<u8, LaunchError> {
    write_status(out, plan)?;
    let status = process::spawn_and_wait(plan)?;
    Ok(process::exit_code_of(status))
}

/// Runs one launch end to end and converts the outcome into the launcher's
/// exit code. Failures are reported on stderr prefixed with `program`.
pub fn run(program: &str, variant: Variant, settings: &LaunchSettings) -> ExitCode {
    let result = plan_launch(variant, settings).and_then(|plan| {
        let mut stdout = io::stdout();
        execute(&plan, &mut stdout)
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("{program}: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
