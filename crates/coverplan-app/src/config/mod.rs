//! Configuration file parsing for coverplan
//!
//! Supports:
//! - `.coverplan/config.toml` - Global settings (or an explicit `--config` path)

pub mod settings;
pub mod types;

pub use settings::{config_path, init_config_dir, load_settings, load_settings_file};
pub use types::*;
