//! Analysis configuration
//!
//! Every field has a default, so an empty YAML document is a valid configuration.
//!
//! ```yaml
//! backing: adjacency_matrix
//! page_rank:
//!   damping_factor: 0.85
//!   iterations: 100
//! label_propagation:
//!   max_rounds: 20
//!   seed: 42
//! top_k: 5
//! parallel: true
//! ```

use crate::graph::Backing;
use collabgraph_algorithms::{LabelPropagationConfig, PageRankConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while loading a configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Settings shared by every analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Backing used when ingestion builds a graph
    pub backing: Backing,
    pub page_rank: PageRankConfig,
    pub label_propagation: LabelPropagationConfig,
    /// Length of every ranked list in a report
    pub top_k: usize,
    /// Fan closeness and betweenness out over sources with rayon
    pub parallel: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            backing: Backing::default(),
            page_rank: PageRankConfig::default(),
            label_propagation: LabelPropagationConfig::default(),
            top_k: 5,
            parallel: false,
        }
    }
}

impl AnalysisConfig {
    pub fn from_yaml_str(source: &str) -> ConfigResult<Self> {
        let config: AnalysisConfig = if source.trim().is_empty() {
            AnalysisConfig::default()
        } else {
            serde_yaml::from_str(source)?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        debug!("Loading analysis configuration from {:?}", path);
        let source = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&source)
    }

    /// Same configuration with a fixed label propagation seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.label_propagation.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> ConfigResult<()> {
        let d = self.page_rank.damping_factor;
        if !(0.0..=1.0).contains(&d) {
            return Err(ConfigError::Invalid(format!(
                "damping_factor must lie in [0, 1], got {}",
                d
            )));
        }
        Ok(())
    }
}
