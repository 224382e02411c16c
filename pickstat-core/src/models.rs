use serde::{Deserialize, Serialize};

/// Plus grand numéro tirable (The Pick, 6/44).
pub const POOL_SIZE: u8 = 44;
/// Nombre de numéros par tirage.
pub const PICK_COUNT: usize = 6;
/// Dernier numéro de la moitié basse (1-22), le reste est haut (23-44).
pub const LOW_HIGH_SPLIT: u8 = 22;
/// Fenêtres glissantes (derniers N tirages) de l'analyse chaud/froid.
pub const HOT_COLD_WINDOWS: [usize; 3] = [20, 50, 100];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draw {
    pub date: String,
    pub numbers: [u8; PICK_COUNT],
}

impl Draw {
    pub fn new(date: impl Into<String>, numbers: [u8; PICK_COUNT]) -> Self {
        Self {
            date: date.into(),
            numbers,
        }
    }

    pub fn sum(&self) -> u32 {
        self.numbers.iter().map(|&n| n as u32).sum()
    }

    pub fn even_count(&self) -> usize {
        self.numbers.iter().filter(|&&n| is_even(n)).count()
    }

    pub fn sorted_numbers(&self) -> [u8; PICK_COUNT] {
        let mut sorted = self.numbers;
        sorted.sort_unstable();
        sorted
    }
}

pub fn is_even(n: u8) -> bool {
    n % 2 == 0
}

pub fn is_low(n: u8) -> bool {
    n <= LOW_HIGH_SPLIT
}

pub fn in_pool(n: u8) -> bool {
    (1..=POOL_SIZE).contains(&n)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    pub number: u8,
    pub count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EvenOdd {
    pub even: u32,
    pub odd: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LowHigh {
    pub low: u32,
    pub high: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParityPatternEntry {
    /// Libellé `"<pairs>E-<impairs>O"`, par ex. `"3E-3O"`.
    pub pattern: String,
    pub even_count: u8,
    pub odd_count: u8,
    pub draw_count: u32,
    /// Part des tirages en pourcentage, 0.0 quand il n'y a aucun tirage.
    pub percentage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SumBucket {
    pub sum: u32,
    pub count: u32,
}

/// Nombre de tirages par plus longue suite de numéros consécutifs.
/// Un tirage compte dans une seule case, ou aucune s'il n'a pas de suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsecutiveCounts {
    pub two_run: u32,
    pub three_run: u32,
    pub four_plus_run: u32,
}

impl ConsecutiveCounts {
    pub fn total(&self) -> u32 {
        self.two_run + self.three_run + self.four_plus_run
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Hot,
    Cold,
    Neutral,
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Classification::Hot => write!(f, "HOT"),
            Classification::Cold => write!(f, "COLD"),
            Classification::Neutral => write!(f, "-"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotColdEntry {
    pub number: u8,
    pub frequency: u32,
    pub classification: Classification,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotColdWindows {
    pub last20: Vec<HotColdEntry>,
    pub last50: Vec<HotColdEntry>,
    pub last100: Vec<HotColdEntry>,
}

impl HotColdWindows {
    /// Paires (taille de fenêtre, table), dans l'ordre de `HOT_COLD_WINDOWS`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[HotColdEntry])> {
        HOT_COLD_WINDOWS.into_iter().zip([
            self.last20.as_slice(),
            self.last50.as_slice(),
            self.last100.as_slice(),
        ])
    }
}

/// Résultat complet d'une analyse. Construit en une fois, jamais modifié ensuite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub frequency: Vec<FrequencyEntry>,
    pub even_odd: EvenOdd,
    pub parity_patterns: Vec<ParityPatternEntry>,
    pub low_high: LowHigh,
    pub sum_histogram: Vec<SumBucket>,
    pub consecutive: ConsecutiveCounts,
    pub hot_cold: HotColdWindows,
    pub total_draws: usize,
}

impl AnalysisResult {
    pub fn most_common(&self) -> Option<&FrequencyEntry> {
        self.frequency.first()
    }

    pub fn even_share(&self) -> f64 {
        percentage(self.even_odd.even, self.even_odd.even + self.even_odd.odd)
    }

    pub fn low_share(&self) -> f64 {
        percentage(self.low_high.low, self.low_high.low + self.low_high.high)
    }
}

/// `part / total * 100`, ou 0.0 si `total` est nul.
pub fn percentage(part: u32, total: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

/// Tirages synthétiques, du plus ancien au plus récent, tous dans 1-44.
pub fn make_test_draws(n: usize) -> Vec<Draw> {
    (0..n)
        .map(|i| {
            let base = (i % 7) as u8 * 6;
            Draw::new(
                format!("2024-01-{:02}", (i % 28) + 1),
                [
                    base + 1,
                    base + 3,
                    base + 4,
                    (base + 8).min(POOL_SIZE),
                    (base + 2).min(POOL_SIZE),
                    (base + 6).min(POOL_SIZE),
                ],
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_sum_and_even_count() {
        let draw = Draw::new("2024-01-01", [2, 4, 6, 8, 10, 12]);
        assert_eq!(draw.sum(), 42);
        assert_eq!(draw.even_count(), 6);
    }

    #[test]
    fn test_sorted_numbers() {
        let draw = Draw::new("x", [44, 1, 30, 2, 17, 9]);
        assert_eq!(draw.sorted_numbers(), [1, 2, 9, 17, 30, 44]);
        assert_eq!(draw.numbers, [44, 1, 30, 2, 17, 9]);
    }

    #[test]
    fn test_low_high_boundary() {
        assert!(is_low(1));
        assert!(is_low(22));
        assert!(!is_low(23));
        assert!(!is_low(44));
    }

    #[test]
    fn test_in_pool() {
        assert!(!in_pool(0));
        assert!(in_pool(1));
        assert!(in_pool(44));
        assert!(!in_pool(45));
    }

    #[test]
    fn test_percentage_zero_total() {
        assert_eq!(percentage(0, 0), 0.0);
        assert!((percentage(1, 4) - 25.0).abs() < 1e-10);
    }

    #[test]
    fn test_classification_serializes_lowercase() {
        let json = serde_json::to_string(&Classification::Hot).unwrap();
        assert_eq!(json, "\"hot\"");
        assert_eq!(Classification::Neutral.to_string(), "-");
    }

    #[test]
    fn test_make_test_draws_in_pool() {
        let draws = make_test_draws(30);
        assert_eq!(draws.len(), 30);
        for draw in &draws {
            assert!(draw.numbers.iter().all(|&n| in_pool(n)), "{:?}", draw);
        }
    }
}
