use serde::{Deserialize, Serialize};

use crate::prediction::engine::AqiValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AqiCategory {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

/// One row of the severity table. A value belongs to the first row whose
/// `upper_bound` it does not exceed.
#[derive(Debug, Clone, PartialEq)]
pub struct SeverityBand {
    pub category: AqiCategory,
    pub upper_bound: f64,
    pub label: &'static str,
    pub status: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
}

/// Ordered by `upper_bound`; the last row is unbounded so the table covers
/// every value.
pub static SEVERITY_BANDS: [SeverityBand; 6] = [
    SeverityBand {
        category: AqiCategory::Good,
        upper_bound: 50.0,
        label: "Good",
        status: "✅ Good Air Quality (Minimal impact)",
        color: "#00C853",
        icon: "🌿",
    },
    SeverityBand {
        category: AqiCategory::Moderate,
        upper_bound: 100.0,
        label: "Moderate",
        status: "🟡 Moderate Air Quality (Sensitive groups at risk)",
        color: "#FFD600",
        icon: "🌤️",
    },
    SeverityBand {
        category: AqiCategory::UnhealthyForSensitiveGroups,
        upper_bound: 150.0,
        label: "Unhealthy for Sensitive Groups",
        status: "🟠 Unhealthy for Sensitive Groups",
        color: "#FFAB00",
        icon: "😷",
    },
    SeverityBand {
        category: AqiCategory::Unhealthy,
        upper_bound: 200.0,
        label: "Unhealthy",
        status: "🔴 Unhealthy (Reduce outdoor activity)",
        color: "#D50000",
        icon: "🚨",
    },
    SeverityBand {
        category: AqiCategory::VeryUnhealthy,
        upper_bound: 300.0,
        label: "Very Unhealthy",
        status: "🟣 Very Unhealthy (Health alert)",
        color: "#6A1B9A",
        icon: "☠️",
    },
    SeverityBand {
        category: AqiCategory::Hazardous,
        upper_bound: f64::INFINITY,
        label: "Hazardous",
        status: "⚫ Hazardous (Stay indoors, emergency!)",
        color: "#263238",
        icon: "🏴",
    },
];

pub fn classify(aqi: AqiValue) -> &'static SeverityBand {
    let value = aqi.get();
    let last = &SEVERITY_BANDS[SEVERITY_BANDS.len() - 1];
    SEVERITY_BANDS
        .iter()
        .find(|band| value <= band.upper_bound)
        .unwrap_or(last)
}

/// Like [`classify`], but for a raw value. `None` for NaN and infinities.
pub fn classify_value(value: f64) -> Option<&'static SeverityBand> {
    AqiValue::new(value).map(classify)
}
