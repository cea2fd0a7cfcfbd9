//! Calculator configuration, read from TOML.
//!
//! Every field has a default, so an empty file (or no file at all) gives the
//! standard keypad.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A keypad key and the operators it selects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeyBinding {
    /// Key name, as carried by [`InputEvent::Operator`](crate::input::InputEvent::Operator).
    pub key: String,
    /// Operator selected normally.
    pub primary: String,
    /// Operator selected while second-function mode is on.
    #[serde(default)]
    pub second: Option<String>,
}

impl KeyBinding {
    pub fn new(key: &str, primary: &str, second: Option<&str>) -> Self {
        Self {
            key: key.to_string(),
            primary: primary.to_string(),
            second: second.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalculatorConfig {
    /// How long memory recall and constants stay on the display.
    #[serde(default = "default_transient_display_ms")]
    pub transient_display_ms: u64,
    /// Keys with a second function. Keys not listed select the operator of
    /// the same name.
    #[serde(default = "default_bindings")]
    pub bindings: Vec<KeyBinding>,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            transient_display_ms: default_transient_display_ms(),
            bindings: default_bindings(),
        }
    }
}

impl CalculatorConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Read the configuration at `path`.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// `$XDG_CONFIG_HOME/zcalc/config.toml` or the platform equivalent.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("zcalc").join("config.toml"))
    }

    /// Read the configuration from [`default_path`](Self::default_path),
    /// falling back to defaults when there is no file.
    pub fn load_default() -> anyhow::Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            path => {
                debug!(?path, "no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn transient_delay(&self) -> Duration {
        Duration::from_millis(self.transient_display_ms)
    }
}

fn default_transient_display_ms() -> u64 {
    500
}

fn default_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("add", "add", Some("modulus")),
        KeyBinding::new("subtract", "subtract", Some("logb")),
        KeyBinding::new("multiply", "multiply", Some("power")),
        KeyBinding::new("divide", "divide", Some("nth-root")),
        KeyBinding::new("square", "square", Some("square-root")),
        KeyBinding::new("log10", "log10", Some("ln")),
        KeyBinding::new("sine", "sine", Some("hyperbolic-sine")),
        KeyBinding::new("cosine", "cosine", Some("hyperbolic-cosine")),
        KeyBinding::new("tangent", "tangent", Some("hyperbolic-tangent")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = CalculatorConfig::from_toml_str("").unwrap();
        assert_eq!(config.transient_display_ms, 500);
        assert_eq!(config.transient_delay(), Duration::from_millis(500));
        assert_eq!(config.bindings, default_bindings());
    }

    #[test]
    fn test_parse_bindings() {
        let config = CalculatorConfig::from_toml_str(
            r#"
            transient_display_ms = 250

            [[bindings]]
            key = "multiply"
            primary = "multiply"
            second = "power"

            [[bindings]]
            key = "root"
            primary = "square-root"
            "#,
        )
        .unwrap();

        assert_eq!(config.transient_display_ms, 250);
        assert_eq!(
            config.bindings,
            vec![
                KeyBinding::new("multiply", "multiply", Some("power")),
                KeyBinding::new("root", "square-root", None),
            ]
        );
    }

    #[test]
    fn test_unknown_fields_rejected() {
        assert!(CalculatorConfig::from_toml_str("precision = 4").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("zcalc-config-{}.toml", std::process::id()));
        std::fs::write(&path, "transient_display_ms = 20\n").unwrap();

        let config = CalculatorConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.transient_display_ms, 20);

        let missing = CalculatorConfig::load(&path).unwrap_err();
        assert!(missing.to_string().starts_with("Failed to read config file"));
    }
}
