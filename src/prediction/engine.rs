use std::fmt;

use ndarray::{Axis, aview1};
use tracing::debug;

use crate::data::input::InputVector;
use crate::error::{InputError, PredictError};
use crate::model::artifacts::ModelArtifacts;
use crate::prediction::severity::{SeverityBand, classify};

/// A predicted AQI. Always finite.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct AqiValue(f64);

impl AqiValue {
    pub fn new(value: f64) -> Option<Self> {
        value.is_finite().then_some(AqiValue(value))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl fmt::Display for AqiValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Scales `features`, runs the estimator and maps the result back to AQI
/// units. `features` must be in pollutant order and hold the same finite,
/// non-negative readings an [`InputVector`] accepts.
pub fn predict(features: &[f64], artifacts: &ModelArtifacts) -> Result<AqiValue, PredictError> {
    let expected = artifacts.n_features();
    if features.len() != expected {
        return Err(PredictError::DimensionMismatch {
            expected,
            found: features.len(),
        });
    }
    let readings = InputVector::try_from(features).map_err(|e| match e {
        InputError::Length { expected, found } => {
            PredictError::DimensionMismatch { expected, found }
        }
        other => PredictError::InvalidReading(other),
    })?;

    let input = aview1(readings.as_slice()).insert_axis(Axis(0)).to_owned();
    debug!(?features, "raw input");

    let scaled = artifacts.input_scaler().transform(&input)?;
    debug!(scaled = ?scaled.row(0).to_vec(), "scaled input");

    let prediction = artifacts.estimator().predict(&scaled)?;
    let aqi = artifacts
        .output_scaler()
        .inverse_transform(&prediction.insert_axis(Axis(1)))?[[0, 0]];
    debug!(aqi, "descaled prediction");

    AqiValue::new(aqi).ok_or(PredictError::NonFinite(aqi))
}

/// A classified prediction for one set of readings.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub input: InputVector,
    pub aqi: AqiValue,
    pub band: &'static SeverityBand,
}

pub fn assess(input: &InputVector, artifacts: &ModelArtifacts) -> Result<Assessment, PredictError> {
    let aqi = predict(input.as_slice(), artifacts)?;
    Ok(Assessment {
        input: *input,
        aqi,
        band: classify(aqi),
    })
}

impl fmt::Display for Assessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} Predicted AQI: {}", self.band.icon, self.aqi)?;
        write!(f, "{}", self.band.status)
    }
}
