//! Settings parser for .coverplan/config.toml

use super::types::Settings;
use coverplan_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const COVERPLAN_DIR: &str = ".coverplan";

/// Default config location under `project_path`
pub fn config_path(project_path: &Path) -> PathBuf {
    project_path.join(COVERPLAN_DIR).join(CONFIG_FILENAME)
}

/// Load settings from `.coverplan/config.toml` under `project_path`
pub fn load_settings(project_path: &Path) -> Settings {
    load_settings_file(&config_path(project_path))
}

/// Load settings from an explicit file.
///
/// A missing, unreadable or unparsable file yields the defaults.
pub fn load_settings_file(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                info!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create a commented default config in `.coverplan/`.
///
/// Returns the config path. An existing file is left untouched.
pub fn init_config_dir(project_path: &Path) -> Result<PathBuf> {
    let coverplan_dir = project_path.join(COVERPLAN_DIR);

    if !coverplan_dir.exists() {
        std::fs::create_dir_all(&coverplan_dir)
            .map_err(|e| Error::config(format!("Failed to create .coverplan dir: {}", e)))?;
    }

    let path = coverplan_dir.join(CONFIG_FILENAME);
    if !path.exists() {
        std::fs::write(&path, DEFAULT_CONFIG)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created default config at {:?}", path);
    }

    Ok(path)
}

const DEFAULT_CONFIG: &str = r#"# coverplan configuration

[calculator]
initial_monthly_amount = 5000   # RM 0 - 100,000, snapped to RM 500 steps
initial_years = 5               # 1 - 20

[sink]
kind = "simulated"              # "simulated" or "webhook"
simulated_delay_ms = 1500
webhook_url = ""                # required when kind = "webhook"
timeout_ms = 10000

[ui]
show_rule_of_thumb = true
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SinkKind;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        assert_eq!(load_settings(dir.path()), Settings::default());
    }

    #[test]
    fn test_load_settings_from_project_dir() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join(".coverplan")).unwrap();
        std::fs::write(
            config_path(dir.path()),
            "[calculator]\ninitial_monthly_amount = 12000\ninitial_years = 8\n",
        )
        .unwrap();

        let settings = load_settings(dir.path());
        assert_eq!(settings.calculator.initial_monthly_amount, 12_000);
        assert_eq!(settings.calculator.initial_years, 8);
        assert_eq!(settings.sink.kind, SinkKind::Simulated);
    }

    #[test]
    fn test_invalid_toml_gives_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[calculator\ninitial_years = ").unwrap();

        assert_eq!(load_settings_file(&path), Settings::default());
    }

    #[test]
    fn test_wrong_type_gives_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("typed.toml");
        std::fs::write(&path, "[sink]\nkind = \"carrier-pigeon\"\n").unwrap();

        assert_eq!(load_settings_file(&path), Settings::default());
    }

    #[test]
    fn test_init_config_dir_writes_parseable_defaults() {
        let dir = tempdir().unwrap();
        let path = init_config_dir(dir.path()).unwrap();

        assert!(path.exists());
        let settings = load_settings(dir.path());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_init_config_dir_keeps_existing_file() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join(".coverplan")).unwrap();
        std::fs::write(config_path(dir.path()), "[ui]\nshow_rule_of_thumb = false\n").unwrap();

        init_config_dir(dir.path()).unwrap();

        assert!(!load_settings(dir.path()).ui.show_rule_of_thumb);
    }
}
