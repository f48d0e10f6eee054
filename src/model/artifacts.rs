//! The model store: estimator, input scaler and output scaler, loaded once
//! at startup and shared read-only afterwards.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::data::pollutant::POLLUTANT_COUNT;
use crate::data::preprocessing::Scaler;
use crate::error::{ArtifactError, ArtifactKind};
use crate::model::estimator::Estimator;
use crate::utils::io::{load_artifact, save_artifact};

pub const ESTIMATOR_FILE: &str = "air_quality_index.bin";
pub const INPUT_SCALER_FILE: &str = "x_scaler.bin";
pub const OUTPUT_SCALER_FILE: &str = "y_scaler.bin";

/// Locations of the three artifact files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub estimator: PathBuf,
    pub input_scaler: PathBuf,
    pub output_scaler: PathBuf,
}

impl ArtifactPaths {
    /// The fixed file names inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        ArtifactPaths {
            estimator: dir.join(ESTIMATOR_FILE),
            input_scaler: dir.join(INPUT_SCALER_FILE),
            output_scaler: dir.join(OUTPUT_SCALER_FILE),
        }
    }
}

/// The validated (estimator, input scaler, output scaler) triple.
///
/// Fields are private so a value of this type always satisfies the shape
/// checks in [`ModelArtifacts::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct ModelArtifacts {
    estimator: Estimator,
    input_scaler: Scaler,
    output_scaler: Scaler,
}

impl ModelArtifacts {
    pub fn new(
        estimator: Estimator,
        input_scaler: Scaler,
        output_scaler: Scaler,
    ) -> Result<Self, ArtifactError> {
        input_scaler
            .check_shape()
            .map_err(|reason| ArtifactError::inconsistent(ArtifactKind::InputScaler, reason))?;
        output_scaler
            .check_shape()
            .map_err(|reason| ArtifactError::inconsistent(ArtifactKind::OutputScaler, reason))?;
        estimator
            .check_shape()
            .map_err(|reason| ArtifactError::inconsistent(ArtifactKind::Estimator, reason))?;

        if input_scaler.n_features() != POLLUTANT_COUNT {
            return Err(ArtifactError::inconsistent(
                ArtifactKind::InputScaler,
                format!(
                    "fitted on {} features, expected {POLLUTANT_COUNT}",
                    input_scaler.n_features()
                ),
            ));
        }
        if estimator.n_features() != input_scaler.n_features() {
            return Err(ArtifactError::inconsistent(
                ArtifactKind::Estimator,
                format!(
                    "expects {} features but the input scaler produces {}",
                    estimator.n_features(),
                    input_scaler.n_features()
                ),
            ));
        }
        if estimator.n_outputs() != 1 {
            return Err(ArtifactError::inconsistent(
                ArtifactKind::Estimator,
                format!("produces {} outputs, expected 1", estimator.n_outputs()),
            ));
        }
        if output_scaler.n_features() != 1 {
            return Err(ArtifactError::inconsistent(
                ArtifactKind::OutputScaler,
                format!(
                    "fitted on {} targets, expected 1",
                    output_scaler.n_features()
                ),
            ));
        }

        Ok(ModelArtifacts {
            estimator,
            input_scaler,
            output_scaler,
        })
    }

    pub fn load(paths: &ArtifactPaths) -> Result<Self, ArtifactError> {
        let estimator: Estimator = load_artifact(&paths.estimator, ArtifactKind::Estimator)?;
        let input_scaler: Scaler = load_artifact(&paths.input_scaler, ArtifactKind::InputScaler)?;
        let output_scaler: Scaler =
            load_artifact(&paths.output_scaler, ArtifactKind::OutputScaler)?;

        let artifacts = ModelArtifacts::new(estimator, input_scaler, output_scaler)?;
        info!(
            estimator = artifacts.estimator.kind(),
            features = artifacts.n_features(),
            path = %paths.estimator.display(),
            "loaded model artifacts"
        );
        Ok(artifacts)
    }

    pub fn save(&self, paths: &ArtifactPaths) -> Result<(), ArtifactError> {
        save_artifact(&paths.estimator, ArtifactKind::Estimator, &self.estimator)?;
        save_artifact(&paths.input_scaler, ArtifactKind::InputScaler, &self.input_scaler)?;
        save_artifact(&paths.output_scaler, ArtifactKind::OutputScaler, &self.output_scaler)?;
        Ok(())
    }

    pub fn estimator(&self) -> &Estimator {
        &self.estimator
    }

    pub fn input_scaler(&self) -> &Scaler {
        &self.input_scaler
    }

    pub fn output_scaler(&self) -> &Scaler {
        &self.output_scaler
    }

    /// Feature count the engine expects.
    pub fn n_features(&self) -> usize {
        self.input_scaler.n_features()
    }
}
