use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::maze::{GeneratorConfig, Offset};

const FILENAME: &str = "config.yaml";
const APP_DIR: &str = "gridmaze";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generator: Option<GeneratorDefaults>,
}

/// Persisted generator defaults. Unset fields fall back to built-in values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratorDefaults {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_size: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edge_probability: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_edges: Option<usize>,

    /// `0` disables the cap.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_attempts: Option<u32>,

    /// Neighbor offsets as `[dx, dy]` pairs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offsets: Option<Vec<[i32; 2]>>,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join(FILENAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::anyhow!("No config found. Run `gridmaze config show` to see defaults.")
            } else {
                anyhow::anyhow!("Failed to read config: {e}")
            }
        })?;
        let config: Config = serde_yaml::from_str(&contents)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {e}", path.display()))?;
        Ok(config)
    }

    /// Like [`Config::load_from`], but a missing file yields the default config.
    /// A file that exists and fails to parse is still an error.
    pub fn load_from_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load_or_default() -> Self {
        let Ok(path) = Self::path() else {
            return Self::default();
        };
        Self::load_from_or_default(&path).unwrap_or_else(|e| {
            log::warn!("ignoring {}: {e:#}", path.display());
            Self::default()
        })
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let contents = format!("# gridmaze configuration\n{yaml}");
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let generator = self
            .generator
            .get_or_insert_with(GeneratorDefaults::default);
        match key {
            "generator.grid_size" => {
                let size: u32 = value
                    .parse()
                    .map_err(|_| anyhow::anyhow!("Invalid grid_size: {value}. Must be a positive integer."))?;
                if size == 0 {
                    anyhow::bail!("Invalid grid_size: {value}. Must be a positive integer.");
                }
                generator.grid_size = Some(size);
            }
            "generator.edge_probability" => {
                let p: f64 = value.parse().map_err(|_| {
                    anyhow::anyhow!("Invalid edge_probability: {value}. Must be a number in (0, 1].")
                })?;
                if !(p > 0.0 && p <= 1.0) {
                    anyhow::bail!("Invalid edge_probability: {value}. Must be a number in (0, 1].");
                }
                generator.edge_probability = Some(p);
            }
            "generator.min_edges" => {
                let n: usize = value
                    .parse()
                    .map_err(|_| anyhow::anyhow!("Invalid min_edges: {value}. Must be at least 1."))?;
                if n == 0 {
                    anyhow::bail!("Invalid min_edges: {value}. Must be at least 1.");
                }
                generator.min_edges = Some(n);
            }
            "generator.max_attempts" => {
                let n: u32 = if value == "unbounded" {
                    0
                } else {
                    value.parse().map_err(|_| {
                        anyhow::anyhow!(
                            "Invalid max_attempts: {value}. Must be a number, or 0/'unbounded' for no cap."
                        )
                    })?
                };
                generator.max_attempts = Some(n);
            }
            "generator.offsets" => {
                generator.offsets = if value == "default" {
                    None
                } else {
                    Some(parse_offsets(value)?)
                };
            }
            _ => anyhow::bail!(
                "Unknown config key: {key}. Valid keys: generator.grid_size, generator.edge_probability, generator.min_edges, generator.max_attempts, generator.offsets"
            ),
        }
        Ok(())
    }

    /// Generator configuration with file values applied over the built-in defaults.
    pub fn generator_config(&self) -> GeneratorConfig {
        let mut config = GeneratorConfig::default();
        let Some(defaults) = &self.generator else {
            return config;
        };
        if let Some(size) = defaults.grid_size {
            config.grid_size = size;
        }
        if let Some(p) = defaults.edge_probability {
            config.edge_probability = p;
        }
        if let Some(n) = defaults.min_edges {
            config.min_edges = n;
        }
        if let Some(n) = defaults.max_attempts {
            config.max_attempts = (n > 0).then_some(n);
        }
        if let Some(offsets) = &defaults.offsets {
            config.offsets = offsets.iter().map(|&[dx, dy]| Offset::new(dx, dy)).collect();
        }
        config
    }
}

/// Parse `"dx,dy dx,dy ..."` (pairs separated by spaces or `;`).
fn parse_offsets(value: &str) -> Result<Vec<[i32; 2]>> {
    let invalid = || {
        anyhow::anyhow!(
            "Invalid offsets: {value}. Expected pairs like \"1,0 0,1 1,1\" with at least one non-zero pair, or 'default'."
        )
    };
    let offsets = value
        .split(|c: char| c == ';' || c.is_whitespace())
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (dx, dy) = pair.split_once(',').ok_or_else(invalid)?;
            let dx = dx.trim().parse().map_err(|_| invalid())?;
            let dy = dy.trim().parse().map_err(|_| invalid())?;
            Ok([dx, dy])
        })
        .collect::<Result<Vec<_>>>()?;
    if offsets.iter().all(|&o| o == [0, 0]) {
        return Err(invalid());
    }
    Ok(offsets)
}
