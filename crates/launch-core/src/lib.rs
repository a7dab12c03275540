pub mod config;
pub mod errors;
pub mod launch;
pub mod paths;
pub mod process;
pub mod variant;

pub use config::{LaunchSettings, Overrides, resolve_settings};
pub use errors::LaunchError;
pub use launch::{LaunchPlan, plan_launch, run};
pub use variant::Variant;
