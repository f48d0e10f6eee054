use ndarray::{Array1, Array2, Axis};
use serde::{Deserialize, Serialize};

use crate::error::PredictError;
use crate::model::linear::LinearRegressor;
use crate::model::network::NeuralNetwork;

/// The trained regression function, mapping scaled features to a scaled
/// AQI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Estimator {
    Linear(LinearRegressor),
    Mlp(NeuralNetwork),
}

impl Estimator {
    pub fn kind(&self) -> &'static str {
        match self {
            Estimator::Linear(_) => "linear",
            Estimator::Mlp(_) => "mlp",
        }
    }

    pub fn n_features(&self) -> usize {
        match self {
            Estimator::Linear(m) => m.n_features(),
            Estimator::Mlp(m) => m.n_features(),
        }
    }

    pub fn n_outputs(&self) -> usize {
        match self {
            Estimator::Linear(_) => 1,
            Estimator::Mlp(m) => m.n_outputs(),
        }
    }

    pub(crate) fn check_shape(&self) -> Result<(), String> {
        match self {
            Estimator::Linear(_) => Ok(()),
            Estimator::Mlp(m) => m.check_shape(),
        }
    }

    /// One prediction per row of `x`.
    pub fn predict(&self, x: &Array2<f64>) -> Result<Array1<f64>, PredictError> {
        if x.ncols() != self.n_features() {
            return Err(PredictError::DimensionMismatch {
                expected: self.n_features(),
                found: x.ncols(),
            });
        }
        Ok(match self {
            Estimator::Linear(m) => m.predict(x),
            Estimator::Mlp(m) => {
                let output = m.forward(x);
                if output.ncols() == 0 {
                    return Err(PredictError::DimensionMismatch {
                        expected: 1,
                        found: 0,
                    });
                }
                output.index_axis_move(Axis(1), 0)
            }
        })
    }
}

impl From<LinearRegressor> for Estimator {
    fn from(model: LinearRegressor) -> Self {
        Estimator::Linear(model)
    }
}

impl From<NeuralNetwork> for Estimator {
    fn from(model: NeuralNetwork) -> Self {
        Estimator::Mlp(model)
    }
}
