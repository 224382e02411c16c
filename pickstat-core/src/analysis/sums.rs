use std::collections::BTreeMap;

use crate::models::{Draw, SumBucket};

/// Histogramme creux des sommes de tirage, trié par somme croissante.
pub fn compute_sum_histogram(draws: &[Draw]) -> Vec<SumBucket> {
    let mut buckets: BTreeMap<u32, u32> = BTreeMap::new();
    for draw in draws {
        *buckets.entry(draw.sum()).or_insert(0) += 1;
    }

    buckets
        .into_iter()
        .map(|(sum, count)| SumBucket { sum, count })
        .collect()
}
