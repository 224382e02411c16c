use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// Seuils de la classification chaud/froid, relatifs à la fréquence moyenne de la fenêtre.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub hot_ratio: f64,
    pub cold_ratio: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            hot_ratio: 1.2,
            cold_ratio: 0.8,
        }
    }
}

impl AnalysisConfig {
    pub fn validate(&self) -> Result<(), AnalysisError> {
        for (name, ratio) in [("hot_ratio", self.hot_ratio), ("cold_ratio", self.cold_ratio)] {
            if !ratio.is_finite() || ratio <= 0.0 {
                return Err(AnalysisError::InvalidConfig(format!(
                    "{name} doit être un réel strictement positif (reçu {ratio})"
                )));
            }
        }
        if self.cold_ratio > self.hot_ratio {
            return Err(AnalysisError::InvalidConfig(format!(
                "cold_ratio ({}) dépasse hot_ratio ({})",
                self.cold_ratio, self.hot_ratio
            )));
        }
        Ok(())
    }
}

pub fn load_config(path: &Path) -> Result<AnalysisConfig> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {:?}", path))?;
    let config: AnalysisConfig = serde_json::from_str(&json)
        .with_context(|| format!("JSON invalide dans {:?}", path))?;
    config.validate()?;
    Ok(config)
}
