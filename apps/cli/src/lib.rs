use std::process::ExitCode;

use launch_core::{Overrides, Variant, resolve_settings};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Logs go to stderr so stdout carries only the status lines and Blender's
/// own output.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Entry point shared by the zero-argument launchers. They always open the
/// full UI, whatever `background` says in the config file.
pub fn run_fixed(variant: Variant) -> ExitCode {
    let overrides = Overrides {
        background: Some(false),
        ..Overrides::default()
    };
    match resolve_settings(overrides) {
        Ok(settings) => launch_core::run(variant.name(), variant, &settings),
        Err(err) => {
            eprintln!("{variant}: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
