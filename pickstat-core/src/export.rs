use anyhow::Result;

use crate::models::AnalysisResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn default_file_name(&self) -> String {
        format!("lottery-analysis.{}", self.extension())
    }

    pub fn render(&self, results: &AnalysisResult) -> Result<String> {
        match self {
            ExportFormat::Csv => Ok(to_csv_report(results)),
            ExportFormat::Json => to_json(results),
        }
    }
}

/// Rapport texte : fréquences, pair/impair et bas/haut, sections séparées par une ligne vide.
pub fn to_csv_report(results: &AnalysisResult) -> String {
    let mut out = String::from("Arizona Pick (6/44) Analysis Results\n\n");

    out.push_str("Frequency Analysis\n");
    out.push_str("Number,Count\n");
    for entry in &results.frequency {
        out.push_str(&format!("{},{}\n", entry.number, entry.count));
    }

    out.push_str("\nEven/Odd Distribution\n");
    out.push_str(&format!("Even,{}\n", results.even_odd.even));
    out.push_str(&format!("Odd,{}\n", results.even_odd.odd));

    out.push_str("\nLow/High Distribution\n");
    out.push_str(&format!("Low (1-22),{}\n", results.low_high.low));
    out.push_str(&format!("High (23-44),{}\n", results.low_high.high));

    out
}

pub fn to_json(results: &AnalysisResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(results)?)
}
