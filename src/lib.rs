//! Air Quality Index prediction from twelve pollutant concentrations.
//!
//! ```text
//! readings -> input scaler -> estimator -> output scaler (inverse) -> AQI -> severity band
//! ```
//!
//! The three fitted artifacts are loaded once into a [`ModelArtifacts`]
//! and passed by reference to [`predict`] / [`assess`]. A failed load is
//! fatal; a failed prediction is reported as a [`PredictError`] and never
//! classified.

pub mod data;
pub mod error;
pub mod model;
pub mod prediction;
pub mod utils;
pub mod web;

pub use data::input::InputVector;
pub use data::pollutant::{POLLUTANT_COUNT, Pollutant};
pub use data::preprocessing::{MinMaxScaler, Scaler, StandardScaler};
pub use error::{ArtifactError, ArtifactKind, InputError, PredictError};
pub use model::artifacts::{ArtifactPaths, ModelArtifacts};
pub use model::estimator::Estimator;
pub use model::linear::LinearRegressor;
pub use model::network::{DenseLayer, NeuralNetwork};
pub use prediction::engine::{AqiValue, Assessment, assess, predict};
pub use prediction::severity::{AqiCategory, SEVERITY_BANDS, SeverityBand, classify, classify_value};
