use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;

use serde::Serialize;

use crate::variant::Variant;

pub const PYTHON_FLAG: &str = "--python";
pub const BACKGROUND_FLAG: &str = "--background";
/// Blender hands everything after this token to the script's `sys.argv`.
pub const SCRIPT_ARGS_SEPARATOR: &str = "--";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchPlan {
    pub variant: Variant,
    pub program: PathBuf,
    pub script: PathBuf,
    pub background: bool,
    pub script_args: Vec<String>,
}

impl LaunchPlan {
    /// Arguments passed to Blender, in order.
    pub fn args(&self) -> Vec<OsString> {
        let mut args = Vec::with_capacity(4 + self.script_args.len());
        if self.background {
            args.push(OsString::from(BACKGROUND_FLAG));
        }
        args.push(OsString::from(PYTHON_FLAG));
        args.push(self.script.clone().into_os_string());
        if !self.script_args.is_empty() {
            args.push(OsString::from(SCRIPT_ARGS_SEPARATOR));
            args.extend(self.script_args.iter().map(OsString::from));
        }
        args
    }

    /// Full argv including the program, lossily converted for display.
    pub fn argv(&self) -> Vec<String> {
        std::iter::once(self.program.clone().into_os_string())
            .chain(self.args())
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect()
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(self.args());
        cmd
    }
}
