use config::{Config as ConfigLoader, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

use qp_core::{DetachedCycle, Potential};

use super::error::Error;

/// One `coefficient·cycle` term, the cycle given by its vertex sequence.
#[derive(Debug, Deserialize, Clone)]
pub struct TermConfig {
    pub cycle: Vec<u32>,
    pub coefficient: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PotentialConfig {
    pub name: String,
    #[serde(default)]
    pub terms: Vec<TermConfig>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ReportConfig {
    #[serde(default)]
    pub show_cycle_classes: bool,
    #[serde(default)]
    pub show_derivatives: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub potential: PotentialConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

impl PotentialConfig {
    /// Builds the potential, summing terms whose cycles are rotations of each other.
    ///
    /// A zero coefficient is rejected rather than silently dropped.
    pub fn to_potential(&self) -> Result<Potential<u32>, Error> {
        let mut potential = Potential::new();
        for (position, term) in self.terms.iter().enumerate() {
            if term.coefficient == 0 {
                return Err(Error::InvalidConfig(format!(
                    "term {} of potential '{}' has coefficient 0",
                    position, self.name
                )));
            }
            let cycle = DetachedCycle::from_vertices(&term.cycle)?;
            potential = potential.add_cycle(term.coefficient, cycle);
        }
        Ok(potential)
    }
}

/// Loads `crates/runner/Config.toml` relative to the current directory.
pub fn load_config() -> Result<Config, Error> {
    let base_path = env::current_dir().map_err(|e| {
        Error::ConfigLoadError(format!("Failed to determine current directory: {}", e))
    })?;

    let config_file_path: PathBuf = base_path
        .join("crates")
        .join("runner")
        .join("Config.toml");

    load_config_from(&config_file_path)
}

/// Loads configuration from `path`, overridden by `RUNNER_`-prefixed environment variables.
///
/// Nested keys are separated by a double underscore, e.g.
/// `RUNNER_REPORT__SHOW_DERIVATIVES=true`.
pub fn load_config_from(path: &Path) -> Result<Config, Error> {
    if !path.exists() {
        return Err(Error::ConfigLoadError(format!(
            "Configuration file not found at calculated path: {}",
            path.display()
        )));
    }

    let s = ConfigLoader::builder()
        .add_source(File::from(path).required(true))
        .add_source(
            Environment::with_prefix("RUNNER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .map_err(|e| Error::ConfigLoadError(e.to_string()))?;

    let app_config: Config = s
        .try_deserialize()
        .map_err(|e| Error::ConfigLoadError(format!("Failed to deserialize config: {}", e)))?;

    Ok(app_config)
}
