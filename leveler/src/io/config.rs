//! Leveler configuration stored in `leveler.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::limits::Limits;

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "leveler.toml";

/// Leveler configuration (TOML).
///
/// Missing fields default to the reference machine.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LevelerConfig {
    pub limits: Limits,
    pub simulation: SimulationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Stop a simulation after this many applied actions.
    pub max_steps: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self { max_steps: 500 }
    }
}

impl LevelerConfig {
    pub fn validate(&self) -> Result<()> {
        self.limits.validate().context("invalid [limits]")?;
        if self.simulation.max_steps == 0 {
            return Err(anyhow!("simulation.max_steps must be > 0"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `LevelerConfig::default()`.
pub fn load_config(path: &Path) -> Result<LevelerConfig> {
    if !path.exists() {
        let cfg = LevelerConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: LevelerConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &LevelerConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
