//! Outfit recommendation engine.
//!
//! A pure, deterministic mapping from (weather, preferences) over an
//! injected catalog to a scored `OutfitSuggestion`. The engine holds no
//! mutable state; concurrent calls against the same catalog are safe.

mod annotations;
mod assembler;
mod eligibility;
mod scoring;
mod types;

pub use annotations::{profile_for_formality, StyleProfile, STYLE_PROFILES};
pub use eligibility::{is_eligible, style_appropriate, weather_appropriate};
pub use eligibility::{OccasionRule, RuleSet};
pub use scoring::{comfort_rating, weather_suitability};
pub use types::{OutfitRecommendation, OutfitSuggestion};

use crate::catalog::Catalog;
use crate::domain::{StylePreferences, WeatherConditions};
use crate::errors::DomainError;

/// Wind speed (m/s) above which wind protection matters.
pub const WINDY_WIND_SPEED: f64 = 10.0;
/// Wind speed (m/s) demanding a second wind-suitable outer layer.
pub const STRONG_WIND_SPEED: f64 = 20.0;
/// UV index above which sun protection is flagged and scored.
pub const HIGH_UV_INDEX: f64 = 7.0;

#[derive(Clone, Debug)]
pub struct RecommendationEngine {
    catalog: Catalog,
    rules: RuleSet,
}

impl RecommendationEngine {
    /// Engine over the given catalog with the full rule set.
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog, rules: RuleSet::default() }
    }

    pub fn with_rules(catalog: Catalog, rules: RuleSet) -> Self {
        Self { catalog, rules }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn rules(&self) -> RuleSet {
        self.rules
    }

    /// Produce a recommendation for one set of conditions.
    ///
    /// Preferences are validated strictly first; outside that, the call is
    /// total: extreme conditions yield empty buckets, never an error.
    pub fn recommend(
        &self,
        weather: &WeatherConditions,
        preferences: &StylePreferences,
    ) -> Result<OutfitSuggestion, DomainError> {
        preferences.validate()?;

        let outfit = assembler::assemble(&self.catalog, weather, preferences, self.rules);
        let alternatives = assembler::alternatives(&outfit);
        let adjusted = preferences.adjusted_temperature(weather.temperature);

        Ok(OutfitSuggestion {
            weather_suitability: scoring::weather_suitability(weather, &outfit),
            comfort_rating: scoring::comfort_rating(weather, preferences, &outfit),
            style_notes: annotations::style_notes(weather, preferences),
            weather_notes: annotations::weather_notes(weather),
            layering_tips: annotations::layering_tips(annotations::layering_need(adjusted)),
            care_instructions: annotations::care_instructions(&outfit),
            color_palette: annotations::color_palette(weather.season),
            occasion: preferences.occasion_type.clone(),
            formality: preferences.formality_preference,
            outfit,
            alternatives,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Gender, Precipitation, Season, TimeOfDay};

    fn weather(temperature: f64, season: Season) -> WeatherConditions {
        WeatherConditions {
            temperature,
            feels_like: temperature,
            is_raining: false,
            is_snowing: false,
            precipitation: Precipitation::None,
            wind_speed: 4.0,
            humidity: 40,
            uv_index: 4.0,
            time_of_day: TimeOfDay::Afternoon,
            season,
        }
    }

    fn engine() -> RecommendationEngine {
        RecommendationEngine::new(Catalog::builtin())
    }

    #[test]
    fn engine_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RecommendationEngine>();
    }

    #[test]
    fn recommend_is_deterministic() {
        let engine = engine();
        let weather = weather(55.0, Season::Fall);
        let preferences = StylePreferences::default();

        let first = engine.recommend(&weather, &preferences).unwrap();
        let second = engine.recommend(&weather, &preferences).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn every_bucketed_item_passes_both_predicates() {
        let engine = engine();
        let scenarios = [
            (weather(20.0, Season::Winter), StylePreferences::default()),
            (weather(72.0, Season::Summer), StylePreferences::default()),
            (
                weather(45.0, Season::Fall),
                StylePreferences {
                    gender: Gender::Female,
                    formality_preference: 4,
                    occasion_type: "work".to_owned(),
                    ..Default::default()
                },
            ),
        ];

        for (weather, preferences) in scenarios {
            let suggestion = engine.recommend(&weather, &preferences).unwrap();
            for item in suggestion.outfit.all_items() {
                assert!(
                    weather_appropriate(item, &weather, &preferences, engine.rules()),
                    "{} fails the weather predicate",
                    item.id
                );
                assert!(
                    style_appropriate(item, &preferences, engine.rules()),
                    "{} fails the style predicate",
                    item.id
                );
            }
        }
    }

    #[test]
    fn scores_are_bounded_across_conditions() {
        let engine = engine();
        for temperature in [-40.0, 0.0, 32.0, 68.0, 95.0, 120.0] {
            for season in [Season::Spring, Season::Summer, Season::Fall, Season::Winter] {
                let suggestion = engine
                    .recommend(&weather(temperature, season), &StylePreferences::default())
                    .unwrap();
                assert!(suggestion.weather_suitability <= 100);
                assert!(suggestion.comfort_rating <= 100);
            }
        }
    }

    #[test]
    fn reducing_wind_never_lowers_weather_suitability() {
        let engine = engine();
        let preferences = StylePreferences::default();

        let mut gusty = weather(50.0, Season::Fall);
        gusty.wind_speed = 25.0;
        let mut calm = gusty.clone();
        calm.wind_speed = 5.0;

        let gusty_score = engine.recommend(&gusty, &preferences).unwrap().weather_suitability;
        let calm_score = engine.recommend(&calm, &preferences).unwrap().weather_suitability;
        assert!(calm_score >= gusty_score);
    }

    // Snowy 20F day for a casual male wearer: every outer layer offered must
    // be snow-suitable and cover the raw temperature.
    #[test]
    fn snowy_day_outer_layers_are_snow_suitable_and_in_range() {
        let engine = engine();
        let mut conditions = weather(20.0, Season::Winter);
        conditions.is_snowing = true;
        conditions.wind_speed = 5.0;
        let preferences = StylePreferences {
            gender: Gender::Male,
            formality_preference: 1,
            occasion_type: "casual".to_owned(),
            ..Default::default()
        };

        let suggestion = engine.recommend(&conditions, &preferences).unwrap();
        assert!(!suggestion.outfit.outer_layers.is_empty());
        for item in &suggestion.outfit.outer_layers {
            assert!(item.snow_suitable);
            assert!(item.covers_temperature(20.0));
        }
    }

    // Hot formal evening for a female wearer: nothing below formality 4 may
    // reach the footwear bucket.
    #[test]
    fn formal_request_keeps_casual_footwear_out() {
        let engine = engine();
        let mut conditions = weather(90.0, Season::Summer);
        conditions.wind_speed = 2.0;
        let preferences = StylePreferences {
            gender: Gender::Female,
            formality_preference: 5,
            occasion_type: "formal".to_owned(),
            ..Default::default()
        };

        let suggestion = engine.recommend(&conditions, &preferences).unwrap();
        assert!(!suggestion.outfit.footwear.is_empty());
        for item in &suggestion.outfit.footwear {
            assert!(item.formality_level >= 4);
        }
    }

    #[test]
    fn neutral_sensitivity_matches_raw_temperature_filtering() {
        let engine = engine();
        let preferences =
            StylePreferences { temperature_sensitivity: 50, ..Default::default() };
        assert_eq!(preferences.adjusted_temperature(72.0), 72.0);

        // With neutral sensitivity the eligibility boundary sits exactly on
        // the item range: the tech tee starts at 60F.
        let suggestion = engine
            .recommend(&weather(60.0, Season::Summer), &preferences)
            .unwrap();
        assert!(suggestion
            .outfit
            .base_layers
            .iter()
            .any(|item| item.id.0 == "m-base-tech-tee"));
    }

    #[test]
    fn extreme_cold_yields_empty_buckets_not_errors() {
        let engine = engine();
        let suggestion = engine
            .recommend(&weather(-80.0, Season::Winter), &StylePreferences::default())
            .unwrap();
        assert!(suggestion.outfit.is_empty());
        assert!(suggestion.care_instructions.is_empty());
    }

    #[test]
    fn invalid_preferences_are_rejected_before_filtering() {
        let engine = engine();
        let preferences =
            StylePreferences { formality_preference: 9, ..Default::default() };
        let result = engine.recommend(&weather(70.0, Season::Summer), &preferences);
        assert!(matches!(
            result,
            Err(DomainError::PreferenceOutOfRange { field: "formality_preference", .. })
        ));
    }

    #[test]
    fn suggestion_echoes_occasion_and_formality() {
        let engine = engine();
        let preferences = StylePreferences {
            occasion_type: "work".to_owned(),
            formality_preference: 4,
            gender: Gender::Female,
            ..Default::default()
        };
        let suggestion = engine.recommend(&weather(50.0, Season::Fall), &preferences).unwrap();
        assert_eq!(suggestion.occasion, "work");
        assert_eq!(suggestion.formality, 4);
        assert_eq!(suggestion.color_palette, vec!["warm", "earth", "rich"]);
    }

    #[test]
    fn relaxed_rules_widen_the_selection() {
        let catalog = Catalog::builtin();
        let full = RecommendationEngine::new(catalog.clone());
        let relaxed = RecommendationEngine::with_rules(catalog, RuleSet::relaxed());

        // Out-of-season request: the full rule set filters on season
        // membership, the relaxed one does not.
        let conditions = weather(50.0, Season::Summer);
        let preferences = StylePreferences {
            preferred_styles: vec!["classic".to_owned()],
            ..Default::default()
        };

        let strict_count =
            full.recommend(&conditions, &preferences).unwrap().outfit.item_count();
        let relaxed_count =
            relaxed.recommend(&conditions, &preferences).unwrap().outfit.item_count();
        assert!(relaxed_count >= strict_count);
    }

    #[test]
    fn suggestion_serializes_to_json() {
        let engine = engine();
        let suggestion = engine
            .recommend(&weather(55.0, Season::Fall), &StylePreferences::default())
            .unwrap();

        let json = serde_json::to_value(&suggestion).unwrap();
        assert!(json["outfit"]["base_layers"].is_array());
        let back: OutfitSuggestion = serde_json::from_value(json).unwrap();
        assert_eq!(back, suggestion);
    }
}
