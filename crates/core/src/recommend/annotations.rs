//! Advisory text derived from the assembled outfit and conditions. Nothing
//! here feeds back into filtering or scoring.

use std::collections::HashSet;

use crate::domain::{
    LayeringPreference, Precipitation, Season, StylePreferences, WeatherConditions,
};

use super::types::OutfitRecommendation;
use super::HIGH_UV_INDEX;

/// Wind speed (m/s) above which loose items get a warning.
const GUSTY_WIND_SPEED: f64 = 15.0;

/// Adjusted temperature above which a single light layer suffices (F).
const MINIMAL_LAYERING_TEMP: f64 = 75.0;
/// Adjusted temperature above which two layers suffice (F).
const MODERATE_LAYERING_TEMP: f64 = 55.0;

/// A named formality band used to phrase occasion advice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StyleProfile {
    pub name: &'static str,
    pub description: &'static str,
    /// Inclusive formality band; bands overlap and lookup takes the first hit.
    pub formality_range: (u8, u8),
    pub occasions: &'static [&'static str],
    pub characteristics: &'static [&'static str],
}

pub const STYLE_PROFILES: &[StyleProfile] = &[
    StyleProfile {
        name: "Casual",
        description: "Relaxed, everyday wear perfect for casual outings and errands",
        formality_range: (1, 2),
        occasions: &["weekend", "outdoor", "casual", "shopping"],
        characteristics: &["comfortable", "practical", "low-maintenance"],
    },
    StyleProfile {
        name: "Smart Casual",
        description: "Polished yet relaxed look suitable for most occasions",
        formality_range: (2, 3),
        occasions: &["dinner", "date", "casual office", "social gathering"],
        characteristics: &["neat", "presentable", "versatile"],
    },
    StyleProfile {
        name: "Business Casual",
        description: "Professional but not overly formal, perfect for modern offices",
        formality_range: (3, 4),
        occasions: &["office", "meeting", "presentation", "business lunch"],
        characteristics: &["professional", "polished", "appropriate"],
    },
    StyleProfile {
        name: "Business Professional",
        description: "Formal business attire suitable for traditional offices",
        formality_range: (4, 5),
        occasions: &["formal meeting", "interview", "conference", "business event"],
        characteristics: &["formal", "refined", "structured"],
    },
    StyleProfile {
        name: "Formal",
        description: "Elegant attire for special occasions and formal events",
        formality_range: (5, 5),
        occasions: &["wedding", "gala", "formal dinner", "ceremony"],
        characteristics: &["elegant", "sophisticated", "luxurious"],
    },
];

/// First profile whose band contains the requested formality.
pub fn profile_for_formality(formality: u8) -> Option<&'static StyleProfile> {
    STYLE_PROFILES
        .iter()
        .find(|profile| profile.formality_range.0 <= formality && formality <= profile.formality_range.1)
}

/// Layering classification for the tips, from the adjusted temperature.
pub(super) fn layering_need(adjusted_temp: f64) -> LayeringPreference {
    if adjusted_temp > MINIMAL_LAYERING_TEMP {
        LayeringPreference::Minimal
    } else if adjusted_temp > MODERATE_LAYERING_TEMP {
        LayeringPreference::Moderate
    } else {
        LayeringPreference::Maximum
    }
}

pub(super) fn style_notes(
    weather: &WeatherConditions,
    preferences: &StylePreferences,
) -> Vec<String> {
    let mut notes = Vec::new();
    if weather.is_raining {
        notes.push("Consider water-resistant fabrics".to_owned());
    }
    if weather.uv_index > HIGH_UV_INDEX {
        notes.push("Don't forget UV protection".to_owned());
    }
    if let Some(profile) = profile_for_formality(preferences.formality_preference) {
        notes.push(format!("Style suitable for {} occasions", profile.name));
    }
    notes
}

pub(super) fn weather_notes(weather: &WeatherConditions) -> Vec<String> {
    let mut notes = Vec::new();
    if weather.uv_index > HIGH_UV_INDEX {
        notes.push("High UV index - sun protection recommended".to_owned());
    }
    if weather.wind_speed > GUSTY_WIND_SPEED {
        notes.push("Strong winds expected - secure loose items".to_owned());
    }
    if weather.precipitation != Precipitation::None {
        notes.push(format!("{} precipitation expected", weather.precipitation));
    }
    notes
}

pub(super) fn layering_tips(need: LayeringPreference) -> Vec<String> {
    let tip = match need {
        LayeringPreference::Minimal => "Light, breathable layers recommended",
        LayeringPreference::Moderate => {
            "Consider adding a light outer layer for variable conditions"
        }
        LayeringPreference::Maximum => "Multiple warm layers recommended for cold conditions",
    };
    vec![tip.to_owned()]
}

/// Deduplicated care instructions in first-seen catalog order.
pub(super) fn care_instructions(outfit: &OutfitRecommendation) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut instructions = Vec::new();
    for item in outfit.all_items() {
        if item.care_instructions.is_empty() {
            continue;
        }
        if seen.insert(item.care_instructions.as_str()) {
            instructions.push(item.care_instructions.clone());
        }
    }
    instructions
}

pub(super) fn color_palette(season: Season) -> Vec<String> {
    let colors: &[&str] = match season {
        Season::Spring => &["pastel", "light", "bright"],
        Season::Summer => &["bright", "light", "vibrant"],
        Season::Fall => &["warm", "earth", "rich"],
        Season::Winter => &["dark", "deep", "cool"],
    };
    colors.iter().map(|c| (*c).to_owned()).collect()
}
