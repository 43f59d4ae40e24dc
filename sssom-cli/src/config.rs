use crate::error::{CliError, CliResult};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "sssom.toml";

/// Root of `sssom.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub matcher: MatcherConfig,
}

/// `[matcher]` section: how to launch the external ontology matcher.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Java binary used to launch the matcher.
    pub java: String,
    /// Path to the matcher jar.
    pub jar: Option<PathBuf>,
    /// JVM arguments placed before `-jar`.
    pub jvm_args: Vec<String>,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            java: "java".to_string(),
            jar: None,
            jvm_args: Vec::new(),
        }
    }
}

/// Load configuration.
///
/// An explicit `--config` path must exist; the implicit `./sssom.toml` is
/// optional and its absence yields the defaults.
pub fn load(explicit: Option<&Path>) -> CliResult<Config> {
    let path = match explicit {
        Some(p) => {
            if !p.is_file() {
                return Err(CliError::Config(format!(
                    "config file does not exist: {}",
                    p.display()
                )));
            }
            p.to_path_buf()
        }
        None => {
            let default = Path::new(CONFIG_FILE);
            if !default.is_file() {
                return Ok(Config::default());
            }
            default.to_path_buf()
        }
    };

    let text = fs::read_to_string(&path)
        .map_err(|e| CliError::Config(format!("failed to read {}: {e}", path.display())))?;
    toml::from_str(&text)
        .map_err(|e| CliError::Config(format!("invalid config {}: {e}", path.display())))
}
