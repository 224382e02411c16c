use crate::models::{ConsecutiveCounts, Draw};

/// Longueur de la plus longue suite de numéros consécutifs du tirage (au moins 1).
pub fn longest_run(draw: &Draw) -> usize {
    let sorted = draw.sorted_numbers();
    let mut current = 1;
    let mut longest = 1;

    for pair in sorted.windows(2) {
        if pair[1] as u16 == pair[0] as u16 + 1 {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 1;
        }
    }

    longest
}

/// Classe chaque tirage selon sa plus longue suite : 2, 3, ou 4 et plus.
/// Les tirages sans aucune paire consécutive ne comptent nulle part.
pub fn compute_consecutive(draws: &[Draw]) -> ConsecutiveCounts {
    let mut counts = ConsecutiveCounts::default();

    for draw in draws {
        match longest_run(draw) {
            ..=1 => {}
            2 => counts.two_run += 1,
            3 => counts.three_run += 1,
            _ => counts.four_plus_run += 1,
        }
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::make_test_draws;

    #[test]
    fn test_longest_run() {
        assert_eq!(longest_run(&Draw::new("a", [1, 3, 5, 7, 9, 11])), 1);
        assert_eq!(longest_run(&Draw::new("a", [1, 2, 10, 11, 20, 30])), 2);
        assert_eq!(longest_run(&Draw::new("a", [9, 1, 8, 3, 7, 2])), 3);
        assert_eq!(longest_run(&Draw::new("a", [1, 2, 3, 4, 5, 6])), 6);
    }

    #[test]
    fn test_duplicates_break_run() {
        // 5,5 n'est pas une suite : l'écart doit être exactement 1.
        assert_eq!(longest_run(&Draw::new("a", [5, 5, 6, 7, 20, 30])), 2);
    }

    #[test]
    fn test_consecutive_example() {
        let draws = vec![
            Draw::new("a", [1, 2, 3, 7, 8, 9]),
            Draw::new("b", [10, 20, 30, 40, 41, 44]),
        ];
        assert_eq!(
            compute_consecutive(&draws),
            ConsecutiveCounts {
                two_run: 1,
                three_run: 1,
                four_plus_run: 0,
            }
        );
    }

    #[test]
    fn test_two_separate_pairs_count_once() {
        let draws = vec![Draw::new("a", [1, 2, 10, 11, 20, 30])];
        let counts = compute_consecutive(&draws);
        assert_eq!(counts.two_run, 1);
        assert_eq!(counts.total(), 1);
    }

    #[test]
    fn test_four_plus_bucket() {
        let draws = vec![
            Draw::new("a", [40, 41, 42, 43, 1, 10]),
            Draw::new("b", [39, 40, 41, 42, 43, 44]),
            Draw::new("c", [2, 4, 6, 8, 10, 12]),
        ];
        let counts = compute_consecutive(&draws);
        assert_eq!(counts.four_plus_run, 2);
        assert_eq!(counts.total(), 2);
    }

    #[test]
    fn test_mutual_exclusivity() {
        let draws = make_test_draws(50);
        let counts = compute_consecutive(&draws);
        assert!(counts.total() as usize <= draws.len());
    }
}
