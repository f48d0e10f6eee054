//! Error types for artifact loading, input collection and prediction.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::data::pollutant::Pollutant;

/// Which of the three model artifacts an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Estimator,
    InputScaler,
    OutputScaler,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArtifactKind::Estimator => "estimator",
            ArtifactKind::InputScaler => "input scaler",
            ArtifactKind::OutputScaler => "output scaler",
        };
        f.write_str(name)
    }
}

/// Startup failures of the model store. None of these are recoverable: the
/// process must not serve predictions after one of them.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to read {kind} artifact at {}: {source}", .path.display())]
    Read {
        kind: ArtifactKind,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to decode {kind} artifact at {}: {source}", .path.display())]
    Decode {
        kind: ArtifactKind,
        path: PathBuf,
        #[source]
        source: bincode::Error,
    },

    #[error("failed to encode {kind} artifact: {source}")]
    Encode {
        kind: ArtifactKind,
        #[source]
        source: bincode::Error,
    },

    #[error("failed to write {kind} artifact at {}: {source}", .path.display())]
    Write {
        kind: ArtifactKind,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("inconsistent {kind} artifact: {reason}")]
    Inconsistent { kind: ArtifactKind, reason: String },
}

impl ArtifactError {
    pub(crate) fn inconsistent(kind: ArtifactKind, reason: impl Into<String>) -> Self {
        ArtifactError::Inconsistent {
            kind,
            reason: reason.into(),
        }
    }
}

/// A single reading (or the whole vector) the input collector refused.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{pollutant}: '{raw}' is not a number")]
    NotANumber { pollutant: Pollutant, raw: String },

    #[error("{pollutant}: concentration must be a finite number")]
    NotFinite { pollutant: Pollutant },

    #[error("{pollutant}: concentration must not be negative (got {value})")]
    Negative { pollutant: Pollutant, value: f64 },

    #[error("expected {expected} readings, found {found}")]
    Length { expected: usize, found: usize },
}

/// Per-prediction failures. These are surfaced to the caller as a
/// "prediction unavailable" state and never abort the session.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictError {
    #[error("dimension mismatch: expected {expected} features, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error(transparent)]
    InvalidReading(#[from] InputError),

    #[error("prediction unavailable: the model produced a non-finite AQI ({0})")]
    NonFinite(f64),
}
