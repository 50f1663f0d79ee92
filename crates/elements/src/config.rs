//! Runner configuration with layered loading
//!
//! Configuration is loaded from multiple sources (lowest to highest priority):
//! 1. Compiled defaults
//! 2. `elements.ron` file (if exists), or an explicit file passed in
//! 3. Environment variables prefixed with `ELEMENTS_`
//!
//! Example environment variable: `ELEMENTS_GRID__WIDTH=320`

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Main runner configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ElementsConfig {
    #[serde(default)]
    pub grid: GridConfig,

    #[serde(default)]
    pub simulation: SimulationConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Grid dimensions, one cell per output pixel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 256,
            height: 240,
        }
    }
}

/// Run length and randomness
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of steps to run
    pub frames: u64,
    /// Fixed seed for reproducible runs; drawn from the OS when unset
    #[serde(default)]
    pub seed: Option<u64>,
    /// Log grid counts every this many frames
    pub log_interval: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            frames: 600,
            seed: None,
            log_interval: 60,
        }
    }
}

/// Where the final frame goes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// PNG path for the last frame; no image is written when unset
    #[serde(default)]
    pub image_path: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            image_path: Some(PathBuf::from("elements.png")),
        }
    }
}

impl ElementsConfig {
    /// Load configuration with layered priority:
    /// 1. Compiled defaults (lowest priority)
    /// 2. `path` if given (must exist), otherwise `elements.ron` (if exists)
    /// 3. Environment variables prefixed with `ELEMENTS_` (highest priority)
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => File::from(path).format(FileFormat::Ron).required(true),
            None => File::with_name("elements")
                .format(FileFormat::Ron)
                .required(false),
        };

        let builder = Config::builder()
            // Layer 1: Compiled defaults
            .set_default("grid.width", 256_i64)?
            .set_default("grid.height", 240_i64)?
            .set_default("simulation.frames", 600_i64)?
            .set_default("simulation.log_interval", 60_i64)?
            .set_default("output.image_path", "elements.png")?
            // Layer 2: Config file
            .add_source(file)
            // Layer 3: Environment variables (ELEMENTS_GRID__WIDTH, etc.)
            .add_source(
                Environment::with_prefix("ELEMENTS")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build().context("Failed to build configuration")?;

        let config: Self = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.grid.width == 0 || self.grid.height == 0 {
            bail!(
                "grid dimensions must be positive, got {}x{}",
                self.grid.width,
                self.grid.height
            );
        }
        if self.simulation.frames == 0 {
            bail!("simulation.frames must be at least 1");
        }
        if self.simulation.log_interval == 0 {
            bail!("simulation.log_interval must be at least 1");
        }
        Ok(())
    }
}
