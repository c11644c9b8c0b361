use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Output unavailable: cannot {stage} {}: {source}", path.display())]
    OutputUnavailable {
        path: PathBuf,
        stage: OutputStage,
        #[source]
        source: std::io::Error,
    },

    #[error("Input error: {0}")]
    InputError(String),
}

/// Where an output failure happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStage {
    Create,
    Write,
}

impl fmt::Display for OutputStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputStage::Create => write!(f, "create"),
            OutputStage::Write => write!(f, "write"),
        }
    }
}

impl SimulationError {
    pub fn create_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SimulationError::OutputUnavailable {
            path: path.into(),
            stage: OutputStage::Create,
            source,
        }
    }

    pub fn write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SimulationError::OutputUnavailable {
            path: path.into(),
            stage: OutputStage::Write,
            source,
        }
    }

    /// True when the output file could not be opened at all.
    pub fn is_create_failure(&self) -> bool {
        matches!(
            self,
            SimulationError::OutputUnavailable {
                stage: OutputStage::Create,
                ..
            }
        )
    }
}
