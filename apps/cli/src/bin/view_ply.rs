use std::process::ExitCode;

use launch_core::Variant;

fn main() -> ExitCode {
    blender_launch::init_tracing();
    blender_launch::run_fixed(Variant::ViewPly)
}
