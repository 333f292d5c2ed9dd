use serde::{Deserialize, Serialize};

use super::clothing::Gender;
use crate::errors::DomainError;

/// Degrees Fahrenheit each sensitivity point away from neutral shifts the
/// perceived temperature.
pub const SENSITIVITY_DEGREES_PER_POINT: f64 = 0.2;

const NEUTRAL_SENSITIVITY: f64 = 50.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayeringPreference {
    Minimal,
    #[default]
    Moderate,
    Maximum,
}

impl LayeringPreference {
    /// Layer count the wearer is aiming for across base+mid+outer.
    pub fn desired_layers(self) -> usize {
        match self {
            Self::Minimal => 1,
            Self::Moderate => 2,
            Self::Maximum => 3,
        }
    }
}

/// Style preferences supplied by the caller for one recommendation.
///
/// `validate` is called by the engine before any filtering; callers that
/// construct preferences from untrusted input should invoke it themselves
/// to reject bad values early.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StylePreferences {
    /// Which gendered catalog subset is visible; unisex items always are.
    pub gender: Gender,
    /// 1 = very casual, 5 = formal.
    pub formality_preference: u8,
    /// 0-100, 50 neutral; above 50 runs cold, below runs warm.
    pub temperature_sensitivity: u8,
    pub prioritize_rain_protection: bool,
    pub prioritize_wind_protection: bool,
    #[serde(default)]
    pub preferred_styles: Vec<String>,
    /// Advisory only, never scored.
    #[serde(default)]
    pub favorite_colors: Vec<String>,
    #[serde(default)]
    pub avoided_materials: Vec<String>,
    pub occasion_type: String,
    pub comfort_priority: u8,
    #[serde(default)]
    pub sustainability_preference: bool,
    #[serde(default)]
    pub layering_preference: LayeringPreference,
}

impl StylePreferences {
    /// Strict range/enum validation per the error-handling contract. The
    /// engine never defaults a malformed field.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.gender == Gender::Unisex {
            return Err(DomainError::UnsupportedPreference {
                field: "gender",
                value: "unisex".to_owned(),
            });
        }
        if !(1..=5).contains(&self.formality_preference) {
            return Err(DomainError::PreferenceOutOfRange {
                field: "formality_preference",
                value: self.formality_preference.to_string(),
                expected: "1..=5",
            });
        }
        if self.temperature_sensitivity > 100 {
            return Err(DomainError::PreferenceOutOfRange {
                field: "temperature_sensitivity",
                value: self.temperature_sensitivity.to_string(),
                expected: "0..=100",
            });
        }
        if !(1..=5).contains(&self.comfort_priority) {
            return Err(DomainError::PreferenceOutOfRange {
                field: "comfort_priority",
                value: self.comfort_priority.to_string(),
                expected: "1..=5",
            });
        }
        if self.occasion_type.trim().is_empty() {
            return Err(DomainError::UnsupportedPreference {
                field: "occasion_type",
                value: self.occasion_type.clone(),
            });
        }
        Ok(())
    }

    /// Perceived temperature after the sensitivity offset: each point above
    /// neutral makes the wearer feel colder, shifting the effective
    /// temperature down so warmer items get selected.
    pub fn adjusted_temperature(&self, temperature: f64) -> f64 {
        temperature
            - (f64::from(self.temperature_sensitivity) - NEUTRAL_SENSITIVITY)
                * SENSITIVITY_DEGREES_PER_POINT
    }
}

impl Default for StylePreferences {
    fn default() -> Self {
        Self {
            gender: Gender::Male,
            formality_preference: 3,
            temperature_sensitivity: 50,
            prioritize_rain_protection: true,
            prioritize_wind_protection: true,
            preferred_styles: vec!["classic".to_owned(), "modern".to_owned()],
            favorite_colors: vec!["black".to_owned(), "navy".to_owned(), "gray".to_owned()],
            avoided_materials: Vec::new(),
            occasion_type: "casual".to_owned(),
            comfort_priority: 3,
            sustainability_preference: false,
            layering_preference: LayeringPreference::Moderate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_preferences_validate() {
        assert_eq!(StylePreferences::default().validate(), Ok(()));
    }

    #[test]
    fn unisex_gender_is_rejected() {
        let prefs = StylePreferences { gender: Gender::Unisex, ..Default::default() };
        assert!(matches!(
            prefs.validate(),
            Err(DomainError::UnsupportedPreference { field: "gender", .. })
        ));
    }

    #[test]
    fn formality_and_comfort_ranges_are_enforced() {
        let prefs = StylePreferences { formality_preference: 0, ..Default::default() };
        assert!(prefs.validate().is_err());

        let prefs = StylePreferences { formality_preference: 6, ..Default::default() };
        assert!(prefs.validate().is_err());

        let prefs = StylePreferences { comfort_priority: 0, ..Default::default() };
        assert!(prefs.validate().is_err());

        let prefs = StylePreferences { temperature_sensitivity: 101, ..Default::default() };
        assert!(matches!(
            prefs.validate(),
            Err(DomainError::PreferenceOutOfRange { field: "temperature_sensitivity", .. })
        ));
    }

    #[test]
    fn blank_occasion_is_rejected() {
        let prefs = StylePreferences { occasion_type: "  ".to_owned(), ..Default::default() };
        assert!(prefs.validate().is_err());
    }

    #[test]
    fn neutral_sensitivity_leaves_temperature_unchanged() {
        let prefs = StylePreferences { temperature_sensitivity: 50, ..Default::default() };
        assert_eq!(prefs.adjusted_temperature(72.0), 72.0);
    }

    #[test]
    fn runs_cold_shifts_effective_temperature_down() {
        let prefs = StylePreferences { temperature_sensitivity: 80, ..Default::default() };
        // 30 points above neutral at 0.2 degrees per point.
        assert_eq!(prefs.adjusted_temperature(70.0), 64.0);

        let prefs = StylePreferences { temperature_sensitivity: 20, ..Default::default() };
        assert_eq!(prefs.adjusted_temperature(70.0), 76.0);
    }

    #[test]
    fn desired_layer_counts() {
        assert_eq!(LayeringPreference::Minimal.desired_layers(), 1);
        assert_eq!(LayeringPreference::Moderate.desired_layers(), 2);
        assert_eq!(LayeringPreference::Maximum.desired_layers(), 3);
    }
}
