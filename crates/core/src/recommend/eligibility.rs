//! Eligibility predicates: whether a single catalog item is wearable under
//! the given weather and acceptable under the given style preferences.

use crate::domain::{ClothingItem, Gender, StylePreferences, WeatherConditions};

use super::WINDY_WIND_SPEED;

/// How occasion/style acceptance is decided.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OccasionRule {
    /// The requested occasion must appear in the item's occasion tags.
    #[default]
    ByOccasion,
    /// Permissive style-tag matching with the casual fallback.
    ByStyleTag,
}

/// Strategy value selecting which optional filter checks are enforced.
///
/// The rule set replaces the source history's parallel filter variants:
/// `full` is the richest behavior, `relaxed` the simplest, and both run
/// through the same code path. Accessories pass the full style check
/// uniformly with every other item type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuleSet {
    /// Require the forecast season to appear in the item's season set.
    pub enforce_season: bool,
    /// Require eco-friendly items when the wearer asks for sustainability.
    pub enforce_sustainability: bool,
    pub occasion_rule: OccasionRule,
}

impl RuleSet {
    pub const fn full() -> Self {
        Self {
            enforce_season: true,
            enforce_sustainability: true,
            occasion_rule: OccasionRule::ByOccasion,
        }
    }

    pub const fn relaxed() -> Self {
        Self {
            enforce_season: false,
            enforce_sustainability: false,
            occasion_rule: OccasionRule::ByStyleTag,
        }
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::full()
    }
}

pub fn is_eligible(
    item: &ClothingItem,
    weather: &WeatherConditions,
    preferences: &StylePreferences,
    rules: RuleSet,
) -> bool {
    weather_appropriate(item, weather, preferences, rules)
        && style_appropriate(item, preferences, rules)
}

pub fn weather_appropriate(
    item: &ClothingItem,
    weather: &WeatherConditions,
    preferences: &StylePreferences,
    rules: RuleSet,
) -> bool {
    let adjusted = preferences.adjusted_temperature(weather.temperature);
    if !item.covers_temperature(adjusted) {
        return false;
    }
    if weather.is_raining && preferences.prioritize_rain_protection && !item.rain_suitable {
        return false;
    }
    if weather.wind_speed > WINDY_WIND_SPEED
        && preferences.prioritize_wind_protection
        && !item.wind_suitable
    {
        return false;
    }
    // Snow unsuitability always disqualifies; there is no preference gate.
    if weather.is_snowing && !item.snow_suitable {
        return false;
    }
    if rules.enforce_season
        && !item.seasons.is_empty()
        && !item.seasons.contains(&weather.season)
    {
        return false;
    }
    true
}

pub fn style_appropriate(
    item: &ClothingItem,
    preferences: &StylePreferences,
    rules: RuleSet,
) -> bool {
    if item.gender != Gender::Unisex && item.gender != preferences.gender {
        return false;
    }
    if formality_deviation(item, preferences) > 1 {
        return false;
    }
    if preferences.avoided_materials.iter().any(|material| material == &item.material) {
        return false;
    }
    if rules.enforce_sustainability
        && preferences.sustainability_preference
        && !item.is_eco_friendly()
    {
        return false;
    }
    match rules.occasion_rule {
        OccasionRule::ByOccasion => {
            item.occasions.iter().any(|occasion| occasion == &preferences.occasion_type)
        }
        OccasionRule::ByStyleTag => style_tag_match(item, preferences),
    }
}

pub(crate) fn formality_deviation(item: &ClothingItem, preferences: &StylePreferences) -> u8 {
    i16::from(item.formality_level)
        .abs_diff(i16::from(preferences.formality_preference)) as u8
}

fn style_tag_match(item: &ClothingItem, preferences: &StylePreferences) -> bool {
    if preferences.preferred_styles.is_empty() {
        return item.styles.iter().any(|tag| tag == "casual");
    }
    preferences
        .preferred_styles
        .iter()
        .any(|preferred| item.styles.iter().any(|tag| tag_accepted(preferred, tag)))
}

// `formal` is the one request that does not fall back to accepting casual.
fn tag_accepted(preferred: &str, tag: &str) -> bool {
    match preferred {
        "formal" => tag == "formal" || tag == "business",
        "business" => tag == "business" || tag == "formal" || tag == "casual",
        other => tag == other || tag == "casual",
    }
}
