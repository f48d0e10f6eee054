use std::collections::HashMap;

use crate::data::pollutant::{POLLUTANT_COUNT, Pollutant};
use crate::error::InputError;

/// Lowest value a field accepts.
pub const MIN_READING: f64 = 0.0;
/// Increment used by the number widgets.
pub const READING_STEP: f64 = 0.1;
/// Decimal places a reading is displayed with.
pub const READING_PRECISION: usize = 2;

/// Parses one field as typed by the user. A blank field means the default
/// of zero.
pub fn parse_reading(pollutant: Pollutant, raw: &str) -> Result<f64, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(MIN_READING);
    }

    let value: f64 = trimmed.parse().map_err(|_| InputError::NotANumber {
        pollutant,
        raw: trimmed.to_string(),
    })?;
    check_reading(pollutant, value)
}

fn check_reading(pollutant: Pollutant, value: f64) -> Result<f64, InputError> {
    if !value.is_finite() {
        return Err(InputError::NotFinite { pollutant });
    }
    if value < MIN_READING {
        return Err(InputError::Negative { pollutant, value });
    }
    Ok(value)
}

/// The twelve readings in model column order. Every value is finite and
/// non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputVector([f64; POLLUTANT_COUNT]);

impl Default for InputVector {
    fn default() -> Self {
        InputVector::zeros()
    }
}

impl InputVector {
    pub fn zeros() -> Self {
        InputVector([MIN_READING; POLLUTANT_COUNT])
    }

    pub fn new(values: [f64; POLLUTANT_COUNT]) -> Result<Self, InputError> {
        for (pollutant, &value) in Pollutant::ALL.iter().zip(values.iter()) {
            check_reading(*pollutant, value)?;
        }
        Ok(InputVector(values))
    }

    /// Collects the readings from form fields keyed by
    /// [`Pollutant::field_name`]. Missing fields default to zero; unknown
    /// keys are ignored.
    pub fn from_fields(fields: &HashMap<String, String>) -> Result<Self, InputError> {
        let mut input = InputVector::zeros();
        for pollutant in Pollutant::ALL {
            if let Some(raw) = fields.get(pollutant.field_name()) {
                input.0[pollutant.index()] = parse_reading(pollutant, raw)?;
            }
        }
        Ok(input)
    }

    pub fn get(&self, pollutant: Pollutant) -> f64 {
        self.0[pollutant.index()]
    }

    pub fn set(&mut self, pollutant: Pollutant, value: f64) -> Result<(), InputError> {
        self.0[pollutant.index()] = check_reading(pollutant, value)?;
        Ok(())
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = (Pollutant, f64)> + '_ {
        Pollutant::ALL.iter().copied().zip(self.0.iter().copied())
    }
}

impl TryFrom<&[f64]> for InputVector {
    type Error = InputError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        let values: [f64; POLLUTANT_COUNT] =
            values.try_into().map_err(|_| InputError::Length {
                expected: POLLUTANT_COUNT,
                found: values.len(),
            })?;
        InputVector::new(values)
    }
}
