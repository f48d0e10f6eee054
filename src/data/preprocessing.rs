use ndarray::{Array1, Array2, Axis};
use serde::{Deserialize, Serialize};

use crate::error::PredictError;

/// Standardization: `(x - mean) / scale`, per column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Array1<f64>,
    pub scale: Array1<f64>,
}

impl StandardScaler {
    pub fn new(mean: Array1<f64>, scale: Array1<f64>) -> Self {
        StandardScaler { mean, scale }
    }

    /// Computes the per-column mean and population standard deviation.
    /// Returns `None` for an empty matrix.
    pub fn fit(x: &Array2<f64>) -> Option<Self> {
        let mean = x.mean_axis(Axis(0))?;
        let scale = x.std_axis(Axis(0), 0.0);
        Some(StandardScaler { mean, scale })
    }

    // Zero variance columns are left unscaled.
    fn effective_scale(&self) -> Array1<f64> {
        self.scale.mapv(|s| if s == 0.0 { 1.0 } else { s })
    }

    fn transform(&self, x: &Array2<f64>) -> Array2<f64> {
        let mean = self.mean.view().insert_axis(Axis(0));
        let scale = self.effective_scale().insert_axis(Axis(0));
        (x - &mean) / &scale
    }

    fn inverse_transform(&self, x: &Array2<f64>) -> Array2<f64> {
        let mean = self.mean.view().insert_axis(Axis(0));
        let scale = self.effective_scale().insert_axis(Axis(0));
        x * &scale + &mean
    }
}

/// Min-max normalization of `[data_min, data_max]` onto
/// `[feature_min, feature_max]`, per column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinMaxScaler {
    pub data_min: Array1<f64>,
    pub data_max: Array1<f64>,
    pub feature_min: f64,
    pub feature_max: f64,
}

impl MinMaxScaler {
    pub fn new(data_min: Array1<f64>, data_max: Array1<f64>) -> Self {
        MinMaxScaler {
            data_min,
            data_max,
            feature_min: 0.0,
            feature_max: 1.0,
        }
    }

    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.feature_min = min;
        self.feature_max = max;
        self
    }

    /// Records the per-column extremes. Returns `None` for an empty matrix.
    pub fn fit(x: &Array2<f64>) -> Option<Self> {
        if x.nrows() == 0 {
            return None;
        }
        let data_min = x.fold_axis(Axis(0), f64::INFINITY, |&a, &b| a.min(b));
        let data_max = x.fold_axis(Axis(0), f64::NEG_INFINITY, |&a, &b| a.max(b));
        Some(MinMaxScaler::new(data_min, data_max))
    }

    fn feature_range(&self) -> f64 {
        self.feature_max - self.feature_min
    }

    fn transform(&self, x: &Array2<f64>) -> Array2<f64> {
        let mut out = x.clone();
        for mut row in out.rows_mut() {
            for (j, value) in row.iter_mut().enumerate() {
                let data_range = self.data_max[j] - self.data_min[j];
                *value = if data_range.abs() > 1e-10 {
                    (*value - self.data_min[j]) / data_range * self.feature_range()
                        + self.feature_min
                } else {
                    self.feature_min
                };
            }
        }
        out
    }

    fn inverse_transform(&self, x: &Array2<f64>) -> Array2<f64> {
        let mut out = x.clone();
        for mut row in out.rows_mut() {
            for (j, value) in row.iter_mut().enumerate() {
                let data_range = self.data_max[j] - self.data_min[j];
                *value = if data_range.abs() > 1e-10 {
                    (*value - self.feature_min) / self.feature_range() * data_range
                        + self.data_min[j]
                } else {
                    self.data_min[j]
                };
            }
        }
        out
    }
}

/// A fitted, reversible feature transform. Used both for the model inputs
/// and, inverted, for its output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Scaler {
    Standard(StandardScaler),
    MinMax(MinMaxScaler),
}

impl Scaler {
    pub fn n_features(&self) -> usize {
        match self {
            Scaler::Standard(s) => s.mean.len(),
            Scaler::MinMax(s) => s.data_min.len(),
        }
    }

    /// Length of every parameter vector must agree; returns the mismatch
    /// otherwise.
    pub(crate) fn check_shape(&self) -> Result<(), String> {
        let (a, b) = match self {
            Scaler::Standard(s) => (s.mean.len(), s.scale.len()),
            Scaler::MinMax(s) => (s.data_min.len(), s.data_max.len()),
        };
        if a != b {
            return Err(format!("parameter vectors have lengths {a} and {b}"));
        }
        if let Scaler::MinMax(s) = self {
            if s.feature_range() == 0.0 {
                return Err("feature range is empty".to_string());
            }
        }
        Ok(())
    }

    fn check_width(&self, x: &Array2<f64>) -> Result<(), PredictError> {
        if x.ncols() != self.n_features() {
            return Err(PredictError::DimensionMismatch {
                expected: self.n_features(),
                found: x.ncols(),
            });
        }
        Ok(())
    }

    pub fn transform(&self, x: &Array2<f64>) -> Result<Array2<f64>, PredictError> {
        self.check_width(x)?;
        Ok(match self {
            Scaler::Standard(s) => s.transform(x),
            Scaler::MinMax(s) => s.transform(x),
        })
    }

    pub fn inverse_transform(&self, x: &Array2<f64>) -> Result<Array2<f64>, PredictError> {
        self.check_width(x)?;
        Ok(match self {
            Scaler::Standard(s) => s.inverse_transform(x),
            Scaler::MinMax(s) => s.inverse_transform(x),
        })
    }
}

impl From<StandardScaler> for Scaler {
    fn from(scaler: StandardScaler) -> Self {
        Scaler::Standard(scaler)
    }
}

impl From<MinMaxScaler> for Scaler {
    fn from(scaler: MinMaxScaler) -> Self {
        Scaler::MinMax(scaler)
    }
}
