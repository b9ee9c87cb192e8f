//! Run configuration: defaults, `SSSP_RELAX_*` environment knobs, JSON files.
//!
//! Environment variables:
//!    SSSP_RELAX_MODE           shortest | widest_product (default shortest)
//!    SSSP_RELAX_SOURCE         1-based source vertex (default 1)
//!    SSSP_RELAX_OUTPUT         path for the per-vertex cost file
//!    SSSP_RELAX_REPORT         path for the JSON run report
//!    SSSP_RELAX_WARN_NEGATIVE  1/true/0/false (default true)

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::engine::PathMode;
use crate::error::{Result, SsspError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub mode: PathMode,
    pub source: u32,
    pub output: Option<PathBuf>,
    pub report: Option<PathBuf>,
    pub warn_negative_weights: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self { mode: PathMode::Shortest, source: 1, output: None, report: None, warn_negative_weights: true }
    }
}

fn parse_flag(key: &str, v: &str) -> Result<bool> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(SsspError::Config(format!("{}: expected a boolean, got '{}'", key, v))),
    }
}

impl RunConfig {
    /// Defaults overridden by any `SSSP_RELAX_*` variables present.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    /// Same as `from_env` with an arbitrary key lookup.
    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Result<Self> {
        let mut cfg = Self::default();
        if let Some(v) = lookup("SSSP_RELAX_MODE") {
            cfg.mode = v.parse()?;
        }
        if let Some(v) = lookup("SSSP_RELAX_SOURCE") {
            cfg.source = v.trim().parse().map_err(|_| {
                SsspError::Config(format!("SSSP_RELAX_SOURCE: invalid vertex id '{}'", v))
            })?;
        }
        if let Some(v) = lookup("SSSP_RELAX_OUTPUT") {
            cfg.output = Some(PathBuf::from(v));
        }
        if let Some(v) = lookup("SSSP_RELAX_REPORT") {
            cfg.report = Some(PathBuf::from(v));
        }
        if let Some(v) = lookup("SSSP_RELAX_WARN_NEGATIVE") {
            cfg.warn_negative_weights = parse_flag("SSSP_RELAX_WARN_NEGATIVE", &v)?;
        }
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.source == 0 {
            return Err(SsspError::Config("source vertex ids are 1-based".into()));
        }
        Ok(())
    }
}
