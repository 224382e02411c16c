use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::models::{Draw, PICK_COUNT, in_pool};

/// Nombre minimal de champs bruts : un libellé de date puis six numéros.
const MIN_FIELDS: usize = PICK_COUNT + 1;

#[derive(Debug, Clone, Default)]
pub struct ParseReport {
    pub draws: Vec<Draw>,
    pub total_rows: u32,
    pub dropped_rows: u32,
}

/// Lit un fichier CSV de tirages. Seule une erreur d'E/S est remontée :
/// les lignes mal formées sont simplement écartées.
pub fn read_draws(path: &Path) -> Result<ParseReport> {
    let content = std::fs::read(path).with_context(|| format!("Impossible d'ouvrir {:?}", path))?;
    Ok(parse_draws(&content))
}

/// Transforme un contenu CSV (ligne d'en-tête ignorée) en tirages, dans l'ordre d'entrée.
/// Chaque ligne est découpée sur les virgules : un guillemet est un caractère ordinaire.
pub fn parse_draws(content: &[u8]) -> ParseReport {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(content);

    let mut report = ParseReport::default();

    for record_result in reader.byte_records() {
        report.total_rows += 1;
        match record_result {
            Ok(record) => match parse_record(&record) {
                Some(draw) => report.draws.push(draw),
                None => {
                    let line = record.position().map(|p| p.line()).unwrap_or_default();
                    debug!(line, "ligne ignorée : tirage invalide");
                    report.dropped_rows += 1;
                }
            },
            Err(e) => {
                debug!(error = %e, "ligne illisible ignorée");
                report.dropped_rows += 1;
            }
        }
    }

    report
}

fn parse_record(record: &csv::ByteRecord) -> Option<Draw> {
    if record.len() < MIN_FIELDS {
        return None;
    }

    let date = std::str::from_utf8(record.get(0)?).ok()?.trim().to_string();

    let numbers: Vec<u8> = record
        .iter()
        .skip(1)
        .take(PICK_COUNT)
        .filter_map(parse_number)
        .collect();

    let numbers: [u8; PICK_COUNT] = numbers.try_into().ok()?;
    Some(Draw { date, numbers })
}

fn parse_number(field: &[u8]) -> Option<u8> {
    let n = std::str::from_utf8(field).ok()?.trim().parse::<u8>().ok()?;
    in_pool(n).then_some(n)
}
