use textplots::{Chart, Plot, Shape};

use pickstat_core::models::{FrequencyEntry, ParityPatternEntry, SumBucket};

const CHART_WIDTH: u32 = 120;
const CHART_HEIGHT: u32 = 40;

/// Fréquences par numéro croissant, en points (x = numéro, y = sorties).
pub fn frequency_points(frequency: &[FrequencyEntry]) -> Vec<(f32, f32)> {
    let mut points: Vec<(f32, f32)> = frequency
        .iter()
        .map(|e| (e.number as f32, e.count as f32))
        .collect();
    points.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
    points
}

/// Bornes de l'axe x, élargies d'une unité quand tous les points sont confondus.
pub fn x_range(points: &[(f32, f32)]) -> Option<(f32, f32)> {
    let min = points.iter().map(|p| p.0).reduce(f32::min)?;
    let max = points.iter().map(|p| p.0).reduce(f32::max)?;
    if max - min < f32::EPSILON {
        Some((min - 1.0, max + 1.0))
    } else {
        Some((min, max))
    }
}

fn plot(points: &[(f32, f32)], bars: bool) {
    let Some((x_min, x_max)) = x_range(points) else {
        println!("  (Pas de données à afficher)");
        return;
    };
    let y_max = points.iter().map(|p| p.1).fold(0.0f32, f32::max).max(1.0);

    let shape = if bars {
        Shape::Bars(points)
    } else {
        Shape::Lines(points)
    };
    let mut chart = Chart::new_with_y_range(CHART_WIDTH, CHART_HEIGHT, x_min, x_max, 0.0, y_max);
    println!("{}", chart.lineplot(&shape));
}

pub fn display_frequency_chart(frequency: &[FrequencyEntry]) {
    println!("\n== Fréquence des numéros (1-44) ==\n");
    plot(&frequency_points(frequency), true);
}

pub fn display_parity_chart(patterns: &[ParityPatternEntry]) {
    println!("\n== Répartition pairs/impairs par tirage ==\n");
    let points: Vec<(f32, f32)> = patterns
        .iter()
        .map(|p| (p.even_count as f32, p.draw_count as f32))
        .collect();
    plot(&points, true);

    for p in patterns {
        println!("  {:>6} : {:>5} tirages ({:.1}%)", p.pattern, p.draw_count, p.percentage);
    }
}

pub fn display_sum_chart(histogram: &[SumBucket]) {
    println!("\n== Distribution des sommes ==\n");
    let points: Vec<(f32, f32)> = histogram
        .iter()
        .map(|b| (b.sum as f32, b.count as f32))
        .collect();
    plot(&points, false);
}
