use std::io::{self, Write};

use comfy_table::{Cell, Color, ContentArrangement, Table, presets::UTF8_FULL};

use pickstat_core::import::ParseReport;
use pickstat_core::models::{
    AnalysisResult, Classification, ConsecutiveCounts, Draw, HotColdEntry, HotColdWindows,
    percentage,
};

/// Largeur maximale des barres de répartition.
const BAR_WIDTH: f64 = 30.0;
/// Numéros par ligne dans la grille chaud/froid (44 = 4 × 11).
const GRID_COLUMNS: usize = 11;

pub fn display_draws(draws: &[Draw]) {
    if draws.is_empty() {
        println!("Aucun tirage à afficher.");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Date", "Numéros", "Somme", "Pairs"]);

    for draw in draws {
        let numbers_str = draw
            .sorted_numbers()
            .iter()
            .map(|n| format!("{:2}", n))
            .collect::<Vec<_>>()
            .join(" - ");

        table.add_row(vec![
            &draw.date,
            &numbers_str,
            &draw.sum().to_string(),
            &draw.even_count().to_string(),
        ]);
    }

    println!("{table}");
}

/// Résumé de lecture, écrit sur `out` (stderr quand stdout porte un export).
pub fn display_parse_summary(report: &ParseReport, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Lecture terminée :")?;
    writeln!(out, "  Lignes lues       : {}", report.total_rows)?;
    writeln!(out, "  Tirages retenus   : {}", report.draws.len())?;
    if report.dropped_rows > 0 {
        writeln!(out, "  Lignes ignorées   : {}", report.dropped_rows)?;
    }
    Ok(())
}

pub fn display_overview(result: &AnalysisResult) {
    println!("\n📊 Vue d'ensemble\n");

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Indicateur", "Valeur", "Détail"]);

    table.add_row(vec![
        "Tirages".to_string(),
        result.total_draws.to_string(),
        "Historique analysé".to_string(),
    ]);
    table.add_row(vec![
        "Numéros pairs".to_string(),
        format!("{:.1}%", result.even_share()),
        format!("{} occurrences", result.even_odd.even),
    ]);
    table.add_row(vec![
        "Numéros bas".to_string(),
        format!("{:.1}%", result.low_share()),
        "Numéros 1-22".to_string(),
    ]);
    if let Some(top) = result.most_common() {
        table.add_row(vec![
            "Plus fréquent".to_string(),
            top.number.to_string(),
            format!("Sorti {} fois", top.count),
        ]);
    }

    println!("{table}");
}

/// Barre proportionnelle à `part / total`, vide si `total` est nul.
pub fn share_bar(part: u32, total: u32) -> String {
    let width = (percentage(part, total) / 100.0 * BAR_WIDTH).round() as usize;
    "█".repeat(width)
}

pub fn display_distribution(title: &str, slices: &[(&str, u32)]) {
    println!("\n── {} ──", title);

    let total: u32 = slices.iter().map(|(_, v)| v).sum();

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Catégorie", "Total", "Part", ""]);

    for (name, value) in slices {
        table.add_row(vec![
            name.to_string(),
            value.to_string(),
            format!("{:.1}%", percentage(*value, total)),
            share_bar(*value, total),
        ]);
    }
    println!("{table}");
}

pub fn display_consecutive(counts: &ConsecutiveCounts, total_draws: usize) {
    println!("\n── Numéros consécutifs ──");

    let total = total_draws as u32;
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Plus longue suite", "Tirages", "Part", ""]);

    for (label, value) in [
        ("2 consécutifs", counts.two_run),
        ("3 consécutifs", counts.three_run),
        ("4 et plus", counts.four_plus_run),
    ] {
        table.add_row(vec![
            label.to_string(),
            value.to_string(),
            format!("{:.1}%", percentage(value, total)),
            share_bar(value, total),
        ]);
    }
    println!("{table}");
}

/// Entrées triées par numéro croissant, pour la grille.
pub fn sorted_by_number(entries: &[HotColdEntry]) -> Vec<HotColdEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by_key(|e| e.number);
    sorted
}

fn hot_cold_cell(entry: &HotColdEntry) -> Cell {
    let cell = Cell::new(format!("{:2} ({})", entry.number, entry.frequency));
    match entry.classification {
        Classification::Hot => cell.fg(Color::Red),
        Classification::Cold => cell.fg(Color::Blue),
        Classification::Neutral => cell,
    }
}

pub fn display_hot_cold(windows: &HotColdWindows) {
    for (window, entries) in windows.iter() {
        println!("\n🔥 Chauds / froids sur les {} derniers tirages\n", window);

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        for row in sorted_by_number(entries).chunks(GRID_COLUMNS) {
            table.add_row(row.iter().map(hot_cold_cell).collect::<Vec<_>>());
        }
        println!("{table}");

        let count = |c: Classification| entries.iter().filter(|e| e.classification == c).count();
        println!(
            "  {} chauds (au-dessus de la moyenne), {} froids (en dessous), {} neutres",
            count(Classification::Hot),
            count(Classification::Cold),
            count(Classification::Neutral)
        );
    }
}
