use crate::models::{
    Draw, EvenOdd, LowHigh, PICK_COUNT, ParityPatternEntry, is_even, is_low, percentage,
};

pub fn compute_even_odd(draws: &[Draw]) -> EvenOdd {
    let mut dist = EvenOdd::default();
    for &n in draws.iter().flat_map(|d| d.numbers.iter()) {
        if is_even(n) {
            dist.even += 1;
        } else {
            dist.odd += 1;
        }
    }
    dist
}

pub fn compute_low_high(draws: &[Draw]) -> LowHigh {
    let mut dist = LowHigh::default();
    for &n in draws.iter().flat_map(|d| d.numbers.iter()) {
        if is_low(n) {
            dist.low += 1;
        } else {
            dist.high += 1;
        }
    }
    dist
}

/// Une entrée par nombre de pairs possible dans un tirage (0 à 6), même à zéro tirage.
pub fn compute_parity_patterns(draws: &[Draw]) -> Vec<ParityPatternEntry> {
    let mut counts = [0u32; PICK_COUNT + 1];
    for draw in draws {
        counts[draw.even_count()] += 1;
    }

    let total = draws.len() as u32;

    counts
        .iter()
        .enumerate()
        .map(|(even, &draw_count)| {
            let even_count = even as u8;
            let odd_count = PICK_COUNT as u8 - even_count;
            ParityPatternEntry {
                pattern: format!("{even_count}E-{odd_count}O"),
                even_count,
                odd_count,
                draw_count,
                percentage: percentage(draw_count, total),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::make_test_draws;

    #[test]
    fn test_even_odd_counts() {
        let draws = vec![
            Draw::new("a", [2, 4, 6, 8, 10, 12]),
            Draw::new("b", [1, 2, 3, 4, 5, 6]),
        ];
        assert_eq!(compute_even_odd(&draws), EvenOdd { even: 9, odd: 3 });
    }

    #[test]
    fn test_low_high_threshold() {
        let draws = vec![Draw::new("a", [1, 22, 23, 30, 44, 10])];
        assert_eq!(compute_low_high(&draws), LowHigh { low: 3, high: 3 });
    }

    #[test]
    fn test_conservation() {
        let draws = make_test_draws(40);
        let eo = compute_even_odd(&draws);
        let lh = compute_low_high(&draws);
        assert_eq!(eo.even + eo.odd, 6 * 40);
        assert_eq!(lh.low + lh.high, 6 * 40);
    }

    #[test]
    fn test_parity_patterns_complete() {
        let draws = make_test_draws(33);
        let patterns = compute_parity_patterns(&draws);
        assert_eq!(patterns.len(), 7);
        for (i, p) in patterns.iter().enumerate() {
            assert_eq!(p.even_count as usize, i);
            assert_eq!(p.even_count + p.odd_count, 6);
        }
        let total: u32 = patterns.iter().map(|p| p.draw_count).sum();
        assert_eq!(total, 33);
        let pct: f64 = patterns.iter().map(|p| p.percentage).sum();
        assert!((pct - 100.0).abs() < 1e-9, "Sum = {}", pct);
    }

    #[test]
    fn test_parity_all_even_draw() {
        let draws = vec![
            Draw::new("a", [2, 4, 6, 8, 10, 12]),
            Draw::new("b", [1, 3, 5, 7, 9, 2]),
        ];
        let patterns = compute_parity_patterns(&draws);
        assert_eq!(patterns[6].draw_count, 1);
        assert_eq!(patterns[6].pattern, "6E-0O");
        assert!((patterns[6].percentage - 50.0).abs() < 1e-10);
        assert_eq!(patterns[1].draw_count, 1);
        assert_eq!(patterns[1].pattern, "1E-5O");
        assert_eq!(patterns[3].draw_count, 0);
        assert_eq!(patterns[3].percentage, 0.0);
    }

    #[test]
    fn test_parity_no_draws_uses_zero_percentage() {
        let patterns = compute_parity_patterns(&[]);
        assert_eq!(patterns.len(), 7);
        assert!(patterns.iter().all(|p| p.draw_count == 0 && p.percentage == 0.0));
    }
}
