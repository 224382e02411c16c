use crate::config::AnalysisConfig;
use crate::models::{
    Classification, Draw, HOT_COLD_WINDOWS, HotColdEntry, HotColdWindows, POOL_SIZE,
};

use super::frequency::compute_frequency;

/// Les `window` derniers tirages (tous s'il y en a moins). `draws` est en ordre chronologique.
pub fn last_draws(draws: &[Draw], window: usize) -> &[Draw] {
    &draws[draws.len().saturating_sub(window)..]
}

/// Classe les 44 numéros sur une fenêtre par rapport à la fréquence moyenne de celle-ci.
/// L'ordre suit la table de fréquences de la fenêtre.
pub fn classify_window(window: &[Draw], config: &AnalysisConfig) -> Vec<HotColdEntry> {
    let frequency = compute_frequency(window);
    let mean = frequency.iter().map(|e| e.count as f64).sum::<f64>() / POOL_SIZE as f64;

    frequency
        .into_iter()
        .map(|e| {
            let count = e.count as f64;
            let classification = if count > mean * config.hot_ratio {
                Classification::Hot
            } else if count < mean * config.cold_ratio {
                Classification::Cold
            } else {
                Classification::Neutral
            };
            HotColdEntry {
                number: e.number,
                frequency: e.count,
                classification,
            }
        })
        .collect()
}

pub fn compute_hot_cold(draws: &[Draw], config: &AnalysisConfig) -> HotColdWindows {
    let [w20, w50, w100] = HOT_COLD_WINDOWS;
    HotColdWindows {
        last20: classify_window(last_draws(draws, w20), config),
        last50: classify_window(last_draws(draws, w50), config),
        last100: classify_window(last_draws(draws, w100), config),
    }
}
