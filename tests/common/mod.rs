//! Pinned fixture model shared by the integration tests.
//!
//! Input scaler: standardization with the means below and a scale of 10.
//! Estimator: linear. Output scaler: standardization with mean 100 and
//! scale 40. For `SCENARIO` this gives
//! scaled = [1, 1, -0.5, -0.5, -0.5, 0, -0.5, 0, 0, 0, 0.1, -0.1],
//! y_scaled = 0.65 + 0.1 = 0.75 and AQI = 0.75 * 40 + 100 = 130.
#![allow(dead_code)]

use aqi_predictor::{LinearRegressor, ModelArtifacts, POLLUTANT_COUNT, StandardScaler};
use ndarray::{Array1, array};

pub const SCENARIO: [f64; POLLUTANT_COUNT] =
    [60.0, 100.0, 5.0, 20.0, 15.0, 10.0, 5.0, 1.0, 30.0, 2.0, 3.0, 1.0];

pub const SCENARIO_AQI: f64 = 130.0;

pub const SCENARIO_FORM: &str = "pm2_5=60&pm10=100&no=5&no2=20&nox=15&so2=10\
&nh3=5&co=1&o3=30&benzene=2&toluene=3&xylene=1";

pub fn fixture_artifacts() -> ModelArtifacts {
    let input_scaler = StandardScaler::new(
        array![50.0, 90.0, 10.0, 25.0, 20.0, 10.0, 10.0, 1.0, 30.0, 2.0, 2.0, 2.0],
        Array1::from_elem(POLLUTANT_COUNT, 10.0),
    );
    let estimator = LinearRegressor::new(
        array![0.5, 0.3, 0.1, 0.1, 0.1, 0.1, 0.0, 0.05, 0.1, 0.0, 0.0, 0.0],
        0.1,
    );
    let output_scaler = StandardScaler::new(array![100.0], array![40.0]);

    ModelArtifacts::new(estimator.into(), input_scaler.into(), output_scaler.into())
        .expect("fixture artifacts are consistent")
}

/// Identity scalers around a linear model with `f64::MAX` weights, so any
/// two non-zero readings push the prediction to infinity.
pub fn overflowing_artifacts() -> ModelArtifacts {
    let input_scaler = StandardScaler::new(
        Array1::zeros(POLLUTANT_COUNT),
        Array1::ones(POLLUTANT_COUNT),
    );
    let estimator = LinearRegressor::new(Array1::from_elem(POLLUTANT_COUNT, f64::MAX), 0.0);
    let output_scaler = StandardScaler::new(array![0.0], array![1.0]);

    ModelArtifacts::new(estimator.into(), input_scaler.into(), output_scaler.into())
        .expect("overflowing artifacts are consistent")
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
