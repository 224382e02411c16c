use crate::models::{Draw, FrequencyEntry, POOL_SIZE};

/// Compte les apparitions de chaque numéro 1-44, y compris ceux jamais sortis.
/// Trié par compte décroissant, puis par numéro croissant à égalité.
pub fn compute_frequency(draws: &[Draw]) -> Vec<FrequencyEntry> {
    let mut counts = [0u32; POOL_SIZE as usize];

    for draw in draws {
        for &n in &draw.numbers {
            if let Some(count) = (n as usize).checked_sub(1).and_then(|idx| counts.get_mut(idx)) {
                *count += 1;
            }
        }
    }

    let mut table: Vec<FrequencyEntry> = (1..=POOL_SIZE)
        .map(|number| FrequencyEntry {
            number,
            count: counts[(number - 1) as usize],
        })
        .collect();

    table.sort_by(|a, b| b.count.cmp(&a.count).then(a.number.cmp(&b.number)));
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::make_test_draws;

    #[test]
    fn test_frequency_complete_table() {
        let draws = make_test_draws(25);
        let table = compute_frequency(&draws);
        assert_eq!(table.len(), 44);
        let total: u32 = table.iter().map(|e| e.count).sum();
        assert_eq!(total, 6 * 25);

        let mut numbers: Vec<u8> = table.iter().map(|e| e.number).collect();
        numbers.sort();
        assert_eq!(numbers, (1..=44).collect::<Vec<u8>>());
    }

    #[test]
    fn test_frequency_sorted_desc_with_number_tiebreak() {
        let draws = vec![
            Draw::new("a", [5, 6, 7, 8, 9, 10]),
            Draw::new("b", [5, 6, 30, 31, 32, 33]),
            Draw::new("c", [6, 40, 41, 42, 43, 44]),
        ];
        let table = compute_frequency(&draws);
        assert_eq!(table[0], FrequencyEntry { number: 6, count: 3 });
        assert_eq!(table[1], FrequencyEntry { number: 5, count: 2 });
        assert_eq!(table[2], FrequencyEntry { number: 7, count: 1 });
        assert_eq!(table[3].number, 8);

        for pair in table.windows(2) {
            assert!(
                pair[0].count > pair[1].count
                    || (pair[0].count == pair[1].count && pair[0].number < pair[1].number)
            );
        }
        // Les numéros jamais tirés ferment la marche, en ordre croissant.
        assert_eq!(table.last().unwrap(), &FrequencyEntry { number: 39, count: 0 });
    }

    #[test]
    fn test_frequency_empty_draws() {
        let table = compute_frequency(&[]);
        assert_eq!(table.len(), 44);
        assert!(table.iter().all(|e| e.count == 0));
        assert_eq!(table[0].number, 1);
    }

    #[test]
    fn test_frequency_counts_duplicates() {
        let draws = vec![Draw::new("a", [3, 3, 3, 4, 4, 5])];
        let table = compute_frequency(&draws);
        assert_eq!(table[0], FrequencyEntry { number: 3, count: 3 });
        assert_eq!(table[1], FrequencyEntry { number: 4, count: 2 });
    }
}
