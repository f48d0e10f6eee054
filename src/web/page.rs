//! Rendering of the single form page.
//!
//! The page is a pure function of the field values and the outcome of the
//! last predict action; it holds no state of its own.

use std::collections::HashMap;

use askama::Template;

use crate::data::input::{InputVector, MIN_READING, READING_PRECISION, READING_STEP};
use crate::data::pollutant::Pollutant;
use crate::prediction::engine::Assessment;

/// One number input as it should appear on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldView {
    pub name: &'static str,
    pub label: String,
    pub value: String,
}

/// What the result region shows.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// No predict action yet.
    Pending,
    Assessed(Assessment),
    Unavailable(String),
}

#[derive(Debug)]
struct ResultView {
    aqi: String,
    status: &'static str,
    color: &'static str,
    icon: &'static str,
}

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    left: Vec<FieldView>,
    right: Vec<FieldView>,
    min: f64,
    step: f64,
    result: Option<ResultView>,
    failure: Option<String>,
}

/// Fields showing the values of `input` at display precision.
pub fn fields_from_input(input: &InputVector) -> Vec<FieldView> {
    input
        .iter()
        .map(|(pollutant, value)| FieldView {
            name: pollutant.field_name(),
            label: pollutant.label(),
            value: format!("{:.*}", READING_PRECISION, value),
        })
        .collect()
}

/// Fields echoing a submission verbatim, so a rejected form keeps what the
/// user typed.
pub fn fields_from_form(form: &HashMap<String, String>) -> Vec<FieldView> {
    Pollutant::ALL
        .iter()
        .map(|pollutant| FieldView {
            name: pollutant.field_name(),
            label: pollutant.label(),
            value: form
                .get(pollutant.field_name())
                .map(|raw| raw.trim().to_string())
                .unwrap_or_default(),
        })
        .collect()
}

pub fn render(fields: Vec<FieldView>, outcome: &Outcome) -> Result<String, askama::Error> {
    // Even positions go in the left column, odd in the right.
    let (left, right): (Vec<_>, Vec<_>) = fields
        .into_iter()
        .enumerate()
        .partition(|(i, _)| i % 2 == 0);

    let (result, failure) = match outcome {
        Outcome::Pending => (None, None),
        Outcome::Assessed(assessment) => (
            Some(ResultView {
                aqi: assessment.aqi.to_string(),
                status: assessment.band.status,
                color: assessment.band.color,
                icon: assessment.band.icon,
            }),
            None,
        ),
        Outcome::Unavailable(reason) => (None, Some(reason.clone())),
    };

    IndexTemplate {
        left: left.into_iter().map(|(_, f)| f).collect(),
        right: right.into_iter().map(|(_, f)| f).collect(),
        min: MIN_READING,
        step: READING_STEP,
        result,
        failure,
    }
    .render()
}
