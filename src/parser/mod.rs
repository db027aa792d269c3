//! Parser module — Doxygen XML class records into [`ClassModel`]s.

pub mod doxygen;

use crate::config::GeneratorConfig;
use crate::model::ClassModel;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Structural problems that make a record unusable.
///
/// Authoring anomalies (missing brief, special members without `@private`)
/// are not errors; they end up in [`ClassModel::warnings`].
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("failed to read record: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed XML: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("missing <{element}> in {context}")]
    MissingElement {
        element: &'static str,
        context: String,
    },
}

/// Read and extract one record. `Ok(None)` when it does not describe a class.
pub fn parse_file(path: &Path, config: &GeneratorConfig) -> Result<Option<ClassModel>, ExtractError> {
    let content = fs::read_to_string(path)?;
    doxygen::parse(&content, config)
}
