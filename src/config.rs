//! # Config — TOML Run Configuration
//!
//! Optional file read by the CLI (`--config`). Every section has defaults, so
//! an empty file is valid; command-line flags override whatever the file
//! sets.
//!
//! ```toml
//! data_dir = "data"
//!
//! [statistics]
//! min_size = 1000
//! max_size = 10000000
//! trials = 10
//!
//! [patterns]
//! bound = 1000
//! limit = 10
//!
//! [display]
//! row_width = 10
//! ```

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::stats::{size_schedule, StatsPlan};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LadderConfig {
    pub data_dir: PathBuf,
    pub statistics: StatisticsConfig,
    pub patterns: PatternConfig,
    pub display: DisplayConfig,
}

/// The `[statistics]` section: size schedule and trials per size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatisticsConfig {
    pub min_size: usize,
    pub max_size: usize,
    pub trials: usize,
}

/// The `[patterns]` section: defaults for `gaps` and `offsets`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    pub bound: usize,
    pub limit: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub row_width: usize,
}

impl Default for LadderConfig {
    fn default() -> Self {
        LadderConfig {
            data_dir: PathBuf::from("data"),
            statistics: StatisticsConfig::default(),
            patterns: PatternConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl Default for StatisticsConfig {
    fn default() -> Self {
        StatisticsConfig {
            min_size: 1_000,
            max_size: 10_000_000,
            trials: 10,
        }
    }
}

impl Default for PatternConfig {
    fn default() -> Self {
        PatternConfig {
            bound: 1_000,
            limit: 10,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig { row_width: 10 }
    }
}

impl LadderConfig {
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: LadderConfig = toml::from_str(text).context("parsing config TOML")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("in config {}", path.display()))
    }

    /// `path` if given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let s = &self.statistics;
        if s.trials == 0 {
            bail!("statistics.trials must be at least 1");
        }
        if s.min_size < 2 {
            bail!("statistics.min_size must be at least 2, got {}", s.min_size);
        }
        if s.max_size < s.min_size {
            bail!(
                "statistics.max_size ({}) must not be below min_size ({})",
                s.max_size,
                s.min_size
            );
        }
        if size_schedule(s.min_size, s.max_size).is_empty() {
            bail!(
                "statistics.max_size ({}) rounds down below min_size ({}); no sizes to sample",
                s.max_size,
                s.min_size
            );
        }
        if self.patterns.bound < 2 {
            bail!("patterns.bound must be at least 2, got {}", self.patterns.bound);
        }
        if self.display.row_width == 0 {
            bail!("display.row_width must be at least 1");
        }
        Ok(())
    }

    pub fn stats_plan(&self) -> StatsPlan {
        StatsPlan {
            min_size: self.statistics.min_size,
            max_size: self.statistics.max_size,
            trials: self.statistics.trials,
        }
    }
}
