//! Runtime settings.
//!
//! Settings come from an optional file named on the command line, with CLI
//! overrides layered on top. Every field has a default, so running with no
//! file at all is the normal case.
//!
//! ```toml
//! refresh_interval = "2h"
//! theme = "auto"        # auto | dark | light
//! label_width = 25
//! value_width = 10
//! ```

use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use config::{Config, File};
use serde::Deserialize;

use crate::data::duration::parse_duration;

/// Theme selection for the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    /// Pick light or dark from the terminal background.
    #[default]
    Auto,
    Dark,
    Light,
}

/// Settings shared by the text reports and the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Interval between scheduled dashboard refreshes (e.g. "2h", "30m").
    pub refresh_interval: String,
    pub theme: ThemeChoice,
    /// Column width for labels in the colorized summary.
    pub label_width: usize,
    /// Column width for values in the colorized summary.
    pub value_width: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            refresh_interval: "2h".to_string(),
            theme: ThemeChoice::Auto,
            label_width: 25,
            value_width: 10,
        }
    }
}

/// Values supplied on the command line, applied over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub refresh_interval: Option<String>,
}

impl Settings {
    /// Load settings from `path` (if any) and apply `overrides`.
    pub fn load(path: Option<&Path>, overrides: &Overrides) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }
        builder =
            builder.set_override_option("refresh_interval", overrides.refresh_interval.clone())?;

        let settings: Settings = builder
            .build()
            .and_then(|c| c.try_deserialize())
            .with_context(|| match path {
                Some(p) => format!("Failed to load settings from {}", p.display()),
                None => "Failed to load settings".to_string(),
            })?;

        settings.refresh()?;
        Ok(settings)
    }

    /// The parsed refresh interval.
    pub fn refresh(&self) -> Result<Duration> {
        let interval = parse_duration(&self.refresh_interval)
            .with_context(|| format!("Invalid refresh_interval '{}'", self.refresh_interval))?;
        if interval.is_zero() {
            bail!("refresh_interval must be greater than zero");
        }
        Ok(interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn write_toml(contents: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
        write!(file, "{}", contents).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_defaults_without_file() {
        let settings = Settings::load(None, &Overrides::default()).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.refresh().unwrap(), Duration::from_secs(7_200));
    }

    #[test]
    fn test_load_from_file() {
        let file = write_toml(
            r#"
            refresh_interval = "30m"
            theme = "light"
            label_width = 30
            "#,
        );

        let settings = Settings::load(Some(file.path()), &Overrides::default()).unwrap();
        assert_eq!(settings.refresh().unwrap(), Duration::from_secs(1_800));
        assert_eq!(settings.theme, ThemeChoice::Light);
        assert_eq!(settings.label_width, 30);
        assert_eq!(settings.value_width, 10);
    }

    #[test]
    fn test_cli_override_wins() {
        let file = write_toml(r#"refresh_interval = "30m""#);
        let overrides = Overrides {
            refresh_interval: Some("5m".to_string()),
        };

        let settings = Settings::load(Some(file.path()), &overrides).unwrap();
        assert_eq!(settings.refresh().unwrap(), Duration::from_secs(300));
    }

    #[test]
    fn test_invalid_interval_rejected() {
        let overrides = Overrides {
            refresh_interval: Some("whenever".to_string()),
        };
        assert!(Settings::load(None, &overrides).is_err());

        let overrides = Overrides {
            refresh_interval: Some("0s".to_string()),
        };
        assert!(Settings::load(None, &overrides).is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = Settings::load(
            Some(Path::new("/nonexistent/swx.toml")),
            &Overrides::default(),
        );
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Failed to load settings"));
    }
}
