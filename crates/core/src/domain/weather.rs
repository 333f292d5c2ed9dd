use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Precipitation {
    #[default]
    None,
    Light,
    Moderate,
    Heavy,
}

impl std::fmt::Display for Precipitation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::None => "none",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Heavy => "heavy",
        };
        f.write_str(label)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Fall => "fall",
            Self::Winter => "winter",
        };
        f.write_str(label)
    }
}

/// Normalized conditions for one recommendation call.
///
/// Callers own the conversion from raw provider payloads (see the
/// `normalize` module); temperatures arrive here already in Fahrenheit and
/// `temperature` is the day's characteristic maximum.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeatherConditions {
    pub temperature: f64,
    pub feels_like: f64,
    pub is_raining: bool,
    pub is_snowing: bool,
    #[serde(default)]
    pub precipitation: Precipitation,
    /// Wind speed in m/s.
    pub wind_speed: f64,
    /// Relative humidity, 0-100.
    pub humidity: u8,
    pub uv_index: f64,
    pub time_of_day: TimeOfDay,
    pub season: Season,
}

impl WeatherConditions {
    pub fn has_precipitation(&self) -> bool {
        self.is_raining || self.precipitation != Precipitation::None
    }
}
