use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use thiserror::Error;
use tracing::info;

use crate::domain::Amount;
use crate::pipeline::{ConfigurationError, EscalationPipeline, Handler};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Path to band table is invalid: {0}")]
    PathDoesNotExist(String),

    #[error("Failed to read band table: {0}")]
    Read(String),

    #[error(transparent)]
    Pipeline(#[from] ConfigurationError),
}

/// One row of a band table: `name,lower,upper`, empty `upper` for no ceiling.
#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
struct BandRecord {
    name: String,
    lower: Amount,
    upper: Option<Amount>,
}

/// The four approval tiers used when no band table is supplied.
pub fn reference_bands() -> Vec<Handler> {
    vec![
        Handler::new("Auto-Approval", 0.0, 1000.0),
        Handler::new("Supervisor", 1000.0, 10000.0),
        Handler::new("Manager", 10000.0, 50000.0),
        Handler::unbounded("Director", 50000.0),
    ]
}

/// Loads a band table in file order. Chain shape is checked by `PipelineConfig`.
pub fn load_bands(path: impl AsRef<Path>) -> Result<Vec<Handler>, ConfigError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ConfigError::PathDoesNotExist(path.display().to_string()));
    }

    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_path(path)
        .map_err(|err| ConfigError::Read(err.to_string()))?;

    let mut handlers = Vec::new();
    for result in reader.deserialize::<BandRecord>() {
        let record = result.map_err(|err| ConfigError::Read(err.to_string()))?;
        handlers.push(Handler::with_bounds(record.name, record.lower, record.upper));
    }

    Ok(handlers)
}

/// `strict` rejects band tables with gaps or overlaps at build time; otherwise
/// amounts in a gap evaluate to `Unhandled`.
#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    pub bands_path: Option<PathBuf>,
    pub strict: bool,
}

impl PipelineConfig {
    pub fn build_pipeline(&self) -> Result<EscalationPipeline, ConfigError> {
        let handlers = match &self.bands_path {
            Some(path) => {
                info!(path = %path.display(), "Loading approval bands from file");
                load_bands(path)?
            }
            None => reference_bands(),
        };

        let pipeline = if self.strict {
            EscalationPipeline::build_strict(handlers)?
        } else {
            EscalationPipeline::build(handlers)?
        };
        Ok(pipeline)
    }
}
