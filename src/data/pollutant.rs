use std::fmt;

/// Number of pollutant readings the model consumes.
pub const POLLUTANT_COUNT: usize = 12;

/// Concentration unit shown next to every field.
pub const UNIT: &str = "µg/m³";

/// The twelve pollutants, in the column order the model and scalers were
/// fit against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pollutant {
    Pm25,
    Pm10,
    No,
    No2,
    Nox,
    So2,
    Nh3,
    Co,
    O3,
    Benzene,
    Toluene,
    Xylene,
}

impl Pollutant {
    pub const ALL: [Pollutant; POLLUTANT_COUNT] = [
        Pollutant::Pm25,
        Pollutant::Pm10,
        Pollutant::No,
        Pollutant::No2,
        Pollutant::Nox,
        Pollutant::So2,
        Pollutant::Nh3,
        Pollutant::Co,
        Pollutant::O3,
        Pollutant::Benzene,
        Pollutant::Toluene,
        Pollutant::Xylene,
    ];

    /// Column position in the input vector.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Pollutant::Pm25 => "PM2.5",
            Pollutant::Pm10 => "PM10",
            Pollutant::No => "NO",
            Pollutant::No2 => "NO2",
            Pollutant::Nox => "NOx",
            Pollutant::So2 => "SO2",
            Pollutant::Nh3 => "NH3",
            Pollutant::Co => "CO",
            Pollutant::O3 => "O3",
            Pollutant::Benzene => "Benzene",
            Pollutant::Toluene => "Toluene",
            Pollutant::Xylene => "Xylene",
        }
    }

    /// Form key used by the web surface.
    pub fn field_name(self) -> &'static str {
        match self {
            Pollutant::Pm25 => "pm2_5",
            Pollutant::Pm10 => "pm10",
            Pollutant::No => "no",
            Pollutant::No2 => "no2",
            Pollutant::Nox => "nox",
            Pollutant::So2 => "so2",
            Pollutant::Nh3 => "nh3",
            Pollutant::Co => "co",
            Pollutant::O3 => "o3",
            Pollutant::Benzene => "benzene",
            Pollutant::Toluene => "toluene",
            Pollutant::Xylene => "xylene",
        }
    }

    /// Field label, e.g. `PM2.5 (µg/m³)`.
    pub fn label(self) -> String {
        format!("{} ({UNIT})", self.name())
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
