use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

/// Ordinary linear regression: `y = x · coefficients + intercept`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearRegressor {
    pub coefficients: Array1<f64>,
    pub intercept: f64,
}

impl LinearRegressor {
    pub fn new(coefficients: Array1<f64>, intercept: f64) -> Self {
        LinearRegressor {
            coefficients,
            intercept,
        }
    }

    pub fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    pub fn predict(&self, x: &Array2<f64>) -> Array1<f64> {
        x.dot(&self.coefficients) + self.intercept
    }
}
