pub mod consecutive;
pub mod distribution;
pub mod frequency;
pub mod hot_cold;
pub mod sums;

use tracing::info;

use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::models::{AnalysisResult, Draw};

use self::consecutive::compute_consecutive;
use self::distribution::{compute_even_odd, compute_low_high, compute_parity_patterns};
use self::frequency::compute_frequency;
use self::hot_cold::compute_hot_cold;
use self::sums::compute_sum_histogram;

/// Analyse complète avec les seuils par défaut.
pub fn analyze(draws: &[Draw]) -> Result<AnalysisResult, AnalysisError> {
    analyze_with(draws, &AnalysisConfig::default())
}

/// Exécute toutes les statistiques sur l'historique (`draws[0]` = le plus ancien).
/// Un historique vide donne `AnalysisError::NoData`.
pub fn analyze_with(draws: &[Draw], config: &AnalysisConfig) -> Result<AnalysisResult, AnalysisError> {
    config.validate()?;

    if draws.is_empty() {
        return Err(AnalysisError::NoData);
    }

    let result = AnalysisResult {
        frequency: compute_frequency(draws),
        even_odd: compute_even_odd(draws),
        parity_patterns: compute_parity_patterns(draws),
        low_high: compute_low_high(draws),
        sum_histogram: compute_sum_histogram(draws),
        consecutive: compute_consecutive(draws),
        hot_cold: compute_hot_cold(draws, config),
        total_draws: draws.len(),
    };

    info!(
        total_draws = result.total_draws,
        distinct_sums = result.sum_histogram.len(),
        "analyse terminée"
    );

    Ok(result)
}
