//! Render settings for the plots.

use std::path::{Path, PathBuf};

use miette::{Context, IntoDiagnostic, Result};
use serde::Deserialize;

/// Settings shared by every chart the tool renders.
///
/// Loaded from an optional TOML file; missing keys fall back to the defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Output image width in pixels.
    pub width: u32,
    /// Output image height in pixels.
    pub height: u32,
    /// Directory default output files are placed in.
    pub output_dir: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1600,
            height: 900,
            output_dir: PathBuf::from("images"),
        }
    }
}

/// Load the render config from `path`, or fall back to the defaults if no
/// file was given.
pub fn load_config(path: Option<&Path>) -> Result<RenderConfig> {
    let Some(path) = path else {
        return Ok(RenderConfig::default());
    };

    let contents = std::fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("could not read config at {}", path.display()))?;

    toml::from_str(&contents)
        .into_diagnostic()
        .wrap_err_with(|| format!("invalid config at {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::{RenderConfig, load_config};

    #[test]
    fn no_path_falls_back_to_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config.width, 1600);
        assert_eq!(config.height, 900);
    }

    #[test]
    fn partial_config_keeps_defaults_for_the_rest() {
        let config: RenderConfig = toml::from_str("width = 800").unwrap();
        assert_eq!(config.width, 800);
        assert_eq!(config.height, 900);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<RenderConfig>("wdith = 800").is_err());
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        assert!(load_config(Some("does-not-exist.toml".as_ref())).is_err());
    }
}
