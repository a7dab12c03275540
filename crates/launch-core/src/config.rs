use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::errors::LaunchError;

#[cfg(target_os = "macos")]
pub const DEFAULT_BLENDER_BIN: &str = "/Applications/Blender.app/Contents/MacOS/Blender";
#[cfg(windows)]
pub const DEFAULT_BLENDER_BIN: &str = r"C:\Program Files\Blender Foundation\Blender\blender.exe";
#[cfg(not(any(target_os = "macos", windows)))]
pub const DEFAULT_BLENDER_BIN: &str = "/usr/bin/blender";

pub const BINARY_ENV: &str = "BLENDER_LAUNCH_BINARY";
pub const SCRIPTS_DIR_ENV: &str = "BLENDER_LAUNCH_SCRIPTS";

const APP_DIR: &str = "blender-launch";
const CONFIG_FILE: &str = "config.toml";

/// Contents of the optional `config.toml`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub blender: Option<String>,
    pub scripts_dir: Option<String>,
    pub background: Option<bool>,
}

/// Values taken from the process environment.
#[derive(Debug, Default, Clone)]
pub struct EnvSettings {
    pub blender: Option<String>,
    pub scripts_dir: Option<String>,
}

impl EnvSettings {
    pub fn from_env() -> Self {
        Self {
            blender: std::env::var(BINARY_ENV).ok(),
            scripts_dir: std::env::var(SCRIPTS_DIR_ENV).ok(),
        }
    }
}

/// Values given on the command line. All empty for the fixed launchers.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub blender: Option<String>,
    pub scripts_dir: Option<String>,
    /// `None` defers to the config file.
    pub background: Option<bool>,
    pub script_args: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSettings {
    pub blender: PathBuf,
    /// `None` means the directory holding the launcher.
    pub scripts_dir: Option<PathBuf>,
    pub background: bool,
    pub script_args: Vec<String>,
}

impl Default for LaunchSettings {
    fn default() -> Self {
        Self {
            blender: PathBuf::from(DEFAULT_BLENDER_BIN),
            scripts_dir: None,
            background: false,
            script_args: Vec::new(),
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(APP_DIR).join(CONFIG_FILE))
}

/// Reads a config file. A missing file yields the empty config.
pub fn load_config_file(path: &Path) -> Result<ConfigFile, LaunchError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(ConfigFile::default()),
        Err(source) => {
            return Err(LaunchError::ConfigRead {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    toml::from_str(&text).map_err(|source| LaunchError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolves settings from the command line, the environment, and the user's
/// config file, in that order of precedence.
pub fn resolve_settings(overrides: Overrides) -> Result<LaunchSettings, LaunchError> {
    let file = match default_config_path() {
        Some(path) => {
            debug!(path = %path.display(), "loading launcher config");
            load_config_file(&path)?
        }
        None => ConfigFile::default(),
    };
    Ok(merge_settings(overrides, EnvSettings::from_env(), file))
}

pub fn merge_settings(overrides: Overrides, env: EnvSettings, file: ConfigFile) -> LaunchSettings {
    let blender = normalize_optional(overrides.blender)
        .or_else(|| normalize_optional(env.blender))
        .or_else(|| normalize_optional(file.blender))
        .unwrap_or_else(|| DEFAULT_BLENDER_BIN.to_string());

    let scripts_dir = normalize_optional(overrides.scripts_dir)
        .or_else(|| normalize_optional(env.scripts_dir))
        .or_else(|| normalize_optional(file.scripts_dir));

    LaunchSettings {
        blender: PathBuf::from(blender),
        scripts_dir: scripts_dir.map(PathBuf::from),
        background: overrides.background.or(file.background).unwrap_or(false),
        script_args: overrides.script_args,
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value.and_then(|val| {
        let trimmed = val.trim().to_string();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_launchers() {
        let settings = merge_settings(
            Overrides::default(),
            EnvSettings::default(),
            ConfigFile::default(),
        );
        assert_eq!(settings, LaunchSettings::default());
        assert_eq!(settings.blender, PathBuf::from(DEFAULT_BLENDER_BIN));
        assert!(settings.scripts_dir.is_none());
    }

    #[test]
    fn cli_beats_env_beats_file() {
        let file = ConfigFile {
            blender: Some("/file/blender".into()),
            scripts_dir: Some("/file/scripts".into()),
            background: None,
        };
        let env = EnvSettings {
            blender: Some("/env/blender".into()),
            scripts_dir: None,
        };
        let overrides = Overrides {
            blender: Some("/cli/blender".into()),
            ..Overrides::default()
        };

        let settings = merge_settings(overrides, env.clone(), file.clone());
        assert_eq!(settings.blender, PathBuf::from("/cli/blender"));
        assert_eq!(settings.scripts_dir, Some(PathBuf::from("/file/scripts")));

        let settings = merge_settings(Overrides::default(), env, file);
        assert_eq!(settings.blender, PathBuf::from("/env/blender"));
    }

    #[test]
    fn blank_values_fall_through() {
        let env = EnvSettings {
            blender: Some("   ".into()),
            scripts_dir: Some(String::new()),
        };
        let file = ConfigFile {
            blender: Some(" /file/blender ".into()),
            ..ConfigFile::default()
        };
        let settings = merge_settings(Overrides::default(), env, file);
        assert_eq!(settings.blender, PathBuf::from("/file/blender"));
        assert!(settings.scripts_dir.is_none());
    }

    #[test]
    fn background_from_file_or_flag() {
        let file = ConfigFile {
            background: Some(true),
            ..ConfigFile::default()
        };
        assert!(merge_settings(Overrides::default(), EnvSettings::default(), file).background);

        let overrides = Overrides {
            background: Some(true),
            ..Overrides::default()
        };
        assert!(merge_settings(overrides, EnvSettings::default(), ConfigFile::default()).background);
    }

    #[test]
    fn cli_can_turn_off_background_from_file() {
        let file = ConfigFile {
            background: Some(true),
            ..ConfigFile::default()
        };
        let overrides = Overrides {
            background: Some(false),
            ..Overrides::default()
        };
        assert!(!merge_settings(overrides, EnvSettings::default(), file).background);
    }

    #[test]
    fn missing_config_file_is_empty() {
        let temp = tempfile::tempdir().unwrap();
        let config = load_config_file(&temp.path().join("config.toml")).unwrap();
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn parses_config_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "blender = \"/opt/blender/blender\"\nscripts_dir = \"/srv/scripts\"\nbackground = true\n",
        )
        .unwrap();

        let config = load_config_file(&path).unwrap();
        assert_eq!(config.blender.as_deref(), Some("/opt/blender/blender"));
        assert_eq!(config.scripts_dir.as_deref(), Some("/srv/scripts"));
        assert_eq!(config.background, Some(true));
    }

    #[test]
    fn rejects_unknown_and_malformed_keys() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");

        fs::write(&path, "blendr = \"/typo\"\n").unwrap();
        assert!(matches!(
            load_config_file(&path),
            Err(LaunchError::ConfigParse { .. })
        ));

        fs::write(&path, "background = \"yes\"\n").unwrap();
        assert!(matches!(
            load_config_file(&path),
            Err(LaunchError::ConfigParse { .. })
        ));
    }
}
