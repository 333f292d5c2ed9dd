//! Conversions the weather-fetching collaborator applies before building
//! `WeatherConditions`. The engine itself never calls these; they pin down
//! the unit and detection rules so every caller normalizes the same way.
//!
//! Detection rules (one rule each, chosen once): rain means precipitation
//! probability above 0.3 or a condition string containing "rain"; snow
//! means a condition string containing "snow". Probability tiers are
//! >0.7 heavy, >0.4 moderate, >0.1 light.

use chrono::{Datelike, NaiveDate};

use crate::domain::{Precipitation, Season};

/// Probability of precipitation above which a day counts as raining.
pub const RAIN_PROBABILITY_THRESHOLD: f64 = 0.3;

pub fn kelvin_to_fahrenheit(kelvin: f64) -> f64 {
    (kelvin - 273.15) * 9.0 / 5.0 + 32.0
}

pub fn is_raining_from_probability(probability: f64) -> bool {
    probability > RAIN_PROBABILITY_THRESHOLD
}

pub fn is_raining_from_condition(condition: &str) -> bool {
    condition.to_ascii_lowercase().contains("rain")
}

pub fn is_snowing_from_condition(condition: &str) -> bool {
    condition.to_ascii_lowercase().contains("snow")
}

pub fn precipitation_from_probability(probability: f64) -> Precipitation {
    if probability > 0.7 {
        Precipitation::Heavy
    } else if probability > 0.4 {
        Precipitation::Moderate
    } else if probability > 0.1 {
        Precipitation::Light
    } else {
        Precipitation::None
    }
}

/// Season from a 0-indexed calendar month (January = 0).
pub fn season_for_month0(month0: u32) -> Season {
    match month0 {
        2..=4 => Season::Spring,
        5..=7 => Season::Summer,
        8..=10 => Season::Fall,
        _ => Season::Winter,
    }
}

pub fn season_for_date(date: NaiveDate) -> Season {
    season_for_month0(date.month0())
}
