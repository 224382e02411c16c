use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum AnalysisError {
    #[error("aucun tirage valide à analyser")]
    NoData,

    #[error("configuration invalide : {0}")]
    InvalidConfig(String),
}
