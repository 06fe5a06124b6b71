use serde::{Deserialize, Serialize};
use std::path::Path;
use vecrank_core::{Error, MetricKind, RankOptions, Result, DEFAULT_PARALLEL_THRESHOLD};

/// Defaults applied to requests that leave a field out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RankerConfig {
    pub default_metric: MetricKind,
    pub default_top_k: usize,
    pub parallel_threshold: usize,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            default_metric: MetricKind::Cosine,
            default_top_k: 5,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl RankerConfig {
    /// Load a JSON config file. Missing fields keep their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config: RankerConfig = serde_json::from_str(&raw).map_err(|e| {
            Error::InvalidConfig(format!("{}: {}", path.as_ref().display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.parallel_threshold == 0 {
            return Err(Error::InvalidConfig(
                "parallel_threshold must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn rank_options(&self) -> RankOptions {
        RankOptions {
            parallel_threshold: self.parallel_threshold,
        }
    }
}
