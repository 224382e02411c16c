mod charts;
mod display;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, level_filters::LevelFilter};

use pickstat_core::analysis::analyze_with;
use pickstat_core::config::{AnalysisConfig, load_config};
use pickstat_core::error::AnalysisError;
use pickstat_core::export::ExportFormat;
use pickstat_core::import::read_draws;
use pickstat_core::models::AnalysisResult;

use crate::charts::{display_frequency_chart, display_parity_chart, display_sum_chart};
use crate::display::{
    display_consecutive, display_distribution, display_draws, display_hot_cold,
    display_overview, display_parse_summary,
};

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum Format {
    #[default]
    Csv,
    Json,
}

impl From<Format> for ExportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Csv => ExportFormat::Csv,
            Format::Json => ExportFormat::Json,
        }
    }
}

#[derive(Parser)]
#[command(name = "pickstat", about = "Statistiques historiques The Pick (6/44)")]
struct Cli {
    /// Afficher les messages de diagnostic (lignes ignorées, etc.)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyser un historique de tirages et afficher les graphiques
    Analyze {
        /// Fichier CSV des tirages (en-tête, puis date + 6 numéros par ligne)
        #[arg(short, long)]
        file: PathBuf,

        /// Fichier JSON des seuils chaud/froid
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Exporter les résultats de l'analyse
    Export {
        /// Fichier CSV des tirages
        #[arg(short, long)]
        file: PathBuf,

        /// Format de sortie
        #[arg(long, default_value = "csv")]
        format: Format,

        /// Fichier de sortie ("-" pour la sortie standard, défaut : lottery-analysis.<ext>)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Fichier JSON des seuils chaud/froid
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Lister les derniers tirages du fichier
    List {
        /// Fichier CSV des tirages
        #[arg(short, long)]
        file: PathBuf,

        /// Nombre de tirages à afficher
        #[arg(short, long, default_value = "10")]
        last: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Command::Analyze { file, config } => cmd_analyze(&file, config.as_deref()),
        Command::Export {
            file,
            format,
            output,
            config,
        } => cmd_export(&file, format.into(), output.as_deref(), config.as_deref()),
        Command::List { file, last } => cmd_list(&file, last),
    }
}

fn resolve_config(path: Option<&Path>) -> Result<AnalysisConfig> {
    match path {
        Some(path) => load_config(path),
        None => Ok(AnalysisConfig::default()),
    }
}

/// Lit et analyse le fichier. `None` si aucun tirage valide n'a été trouvé.
/// Le résumé de lecture et les messages vont sur `status`.
fn load_analysis(
    file: &Path,
    config: &AnalysisConfig,
    status: &mut impl Write,
) -> Result<Option<AnalysisResult>> {
    let report = read_draws(file)?;
    display_parse_summary(&report, status)?;

    match analyze_with(&report.draws, config) {
        Ok(result) => Ok(Some(result)),
        Err(AnalysisError::NoData) => {
            writeln!(status, "Aucun tirage valide trouvé dans {:?}.", file)?;
            Ok(None)
        }
        Err(e) => Err(anyhow::Error::new(e).context("Analyse impossible")),
    }
}

fn cmd_analyze(file: &Path, config: Option<&Path>) -> Result<()> {
    let config = resolve_config(config)?;
    let Some(result) = load_analysis(file, &config, &mut io::stdout().lock())? else {
        return Ok(());
    };

    display_overview(&result);
    display_frequency_chart(&result.frequency);
    display_distribution(
        "Pair / Impair",
        &[("Pair", result.even_odd.even), ("Impair", result.even_odd.odd)],
    );
    display_distribution(
        "Bas / Haut",
        &[
            ("Low (1-22)", result.low_high.low),
            ("High (23-44)", result.low_high.high),
        ],
    );
    display_parity_chart(&result.parity_patterns);
    display_sum_chart(&result.sum_histogram);
    display_consecutive(&result.consecutive, result.total_draws);
    display_hot_cold(&result.hot_cold);
    Ok(())
}

fn cmd_export(
    file: &Path,
    format: ExportFormat,
    output: Option<&Path>,
    config: Option<&Path>,
) -> Result<()> {
    run_export(
        file,
        format,
        output,
        config,
        &mut io::stdout().lock(),
        &mut io::stderr(),
    )
}

/// L'export ne passe sur `out` que pour la cible "-" ; tout le reste va sur `status`.
fn run_export(
    file: &Path,
    format: ExportFormat,
    output: Option<&Path>,
    config: Option<&Path>,
    out: &mut impl Write,
    status: &mut impl Write,
) -> Result<()> {
    let config = resolve_config(config)?;
    let Some(result) = load_analysis(file, &config, status)? else {
        return Ok(());
    };

    let content = format.render(&result)?;
    let target = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(format.default_file_name()));

    if target == Path::new("-") {
        out.write_all(content.as_bytes())
            .and_then(|()| out.flush())
            .context("Écriture sur la sortie standard impossible")?;
    } else {
        write_export(&target, &content)?;
        info!(path = %target.display(), "export {} écrit", format.extension());
        writeln!(status, "Résultats exportés dans {}", target.display())?;
    }
    Ok(())
}

fn write_export(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Impossible de créer le répertoire {:?}", parent))?;
    }
    std::fs::write(path, content).with_context(|| format!("Impossible d'écrire {:?}", path))
}

fn cmd_list(file: &Path, last: usize) -> Result<()> {
    let report = read_draws(file)?;
    if report.draws.is_empty() {
        println!("Aucun tirage valide trouvé dans {:?}.", file);
        return Ok(());
    }
    let recent: Vec<_> = report.draws.iter().rev().take(last).cloned().collect();
    display_draws(&recent);
    Ok(())
}
