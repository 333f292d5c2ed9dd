//! Weather-suitability and comfort scoring.
//!
//! Both scores start at 100 and are multiplied down by each applicable
//! component expressed as a fraction of its weight. Components whose
//! trigger condition is absent (no rain, calm wind, low UV) are skipped
//! entirely and cost nothing.

use crate::domain::{ClothingItem, Precipitation, StylePreferences, WeatherConditions};

use super::eligibility::formality_deviation;
use super::types::OutfitRecommendation;
use super::{HIGH_UV_INDEX, STRONG_WIND_SPEED, WINDY_WIND_SPEED};

const TEMPERATURE_WEIGHT: f64 = 40.0;
const RAIN_WEIGHT: f64 = 20.0;
const WIND_WEIGHT: f64 = 20.0;
const SNOW_WEIGHT: f64 = 10.0;
const UV_WEIGHT: f64 = 10.0;

const COMFORT_TEMPERATURE_WEIGHT: f64 = 35.0;
const MATERIAL_WEIGHT: f64 = 25.0;
const STYLE_WEIGHT: f64 = 20.0;
const ACTIVITY_WEIGHT: f64 = 20.0;

/// Temperature above which low breathability is penalized (F).
const HOT_TEMP: f64 = 75.0;
/// Temperature below which low warmth ratings are penalized (F).
const COLD_TEMP: f64 = 45.0;

/// How well the assembled outfit matches the weather, 0-100.
pub fn weather_suitability(
    weather: &WeatherConditions,
    outfit: &OutfitRecommendation,
) -> u8 {
    let mut score = 100.0;

    // Temperature: 5 points per selected item whose range misses the raw
    // day temperature. The eligibility filter works on the adjusted
    // temperature, so sensitivity offsets can legitimately land items here.
    let mut temperature = TEMPERATURE_WEIGHT;
    for item in outfit.all_items() {
        if !item.covers_temperature(weather.temperature) {
            temperature -= 5.0;
        }
    }
    score *= temperature.max(0.0) / TEMPERATURE_WEIGHT;

    if weather.has_precipitation() {
        let mut rain = RAIN_WEIGHT;
        let needed = if weather.precipitation == Precipitation::Heavy { 2 } else { 1 };
        let covered = outfit
            .outer_layers
            .iter()
            .chain(&outfit.accessories)
            .filter(|item| item.rain_suitable)
            .count();
        if covered < needed {
            rain -= 10.0 * (needed - covered) as f64;
        }
        if !outfit.footwear.iter().any(|item| item.rain_suitable) {
            rain -= 5.0;
        }
        score *= rain.max(0.0) / RAIN_WEIGHT;
    }

    if weather.wind_speed > WINDY_WIND_SPEED {
        let mut wind = WIND_WEIGHT;
        let needed = if weather.wind_speed > STRONG_WIND_SPEED { 2 } else { 1 };
        let covered = outfit.outer_layers.iter().filter(|item| item.wind_suitable).count();
        if covered < needed {
            wind -= 10.0 * (needed - covered) as f64;
        }
        score *= wind.max(0.0) / WIND_WEIGHT;
    }

    if weather.is_snowing {
        let mut snow = SNOW_WEIGHT;
        if !outfit.outer_layers.iter().any(|item| item.snow_suitable) {
            snow -= 5.0;
        }
        if !outfit.footwear.iter().any(|item| item.snow_suitable) {
            snow -= 5.0;
        }
        score *= snow.max(0.0) / SNOW_WEIGHT;
    }

    if weather.uv_index > HIGH_UV_INDEX {
        let mut uv = UV_WEIGHT;
        if !outfit.outer_layers.iter().any(|item| item.uv_protection) {
            uv -= 5.0;
        }
        if !outfit.accessories.iter().any(|item| item.uv_protection) {
            uv -= 5.0;
        }
        score *= uv.max(0.0) / UV_WEIGHT;
    }

    clamp_score(score)
}

/// How well the outfit matches the wearer's comfort preferences, 0-100.
pub fn comfort_rating(
    weather: &WeatherConditions,
    preferences: &StylePreferences,
    outfit: &OutfitRecommendation,
) -> u8 {
    let mut score = 100.0;
    let adjusted = preferences.adjusted_temperature(weather.feels_like);

    // Temperature/layering fit.
    let mut temperature = COMFORT_TEMPERATURE_WEIGHT;
    let desired = preferences.layering_preference.desired_layers();
    let deviation = outfit.layer_count().abs_diff(desired);
    temperature -= 5.0 * deviation as f64;
    for item in outfit.all_items() {
        if item_off_center(item, adjusted) {
            temperature -= 5.0;
        }
    }
    score *= temperature.max(0.0) / COMFORT_TEMPERATURE_WEIGHT;

    // Material fit.
    let mut material = MATERIAL_WEIGHT;
    for item in outfit.all_items() {
        // Avoided materials are filtered out upstream, but the scorer stays
        // honest about any that slip through caller-assembled outfits.
        if preferences.avoided_materials.contains(&item.material) {
            material -= 5.0;
        }
        if weather.temperature > HOT_TEMP && item.breathability.is_some_and(|b| b < 3) {
            material -= 3.0;
        }
        if weather.temperature < COLD_TEMP && item.warmth_rating.is_some_and(|w| w < 3) {
            material -= 3.0;
        }
    }
    score *= material.max(0.0) / MATERIAL_WEIGHT;

    // Style fit.
    let mut style = STYLE_WEIGHT;
    for item in outfit.all_items() {
        if formality_deviation(item, preferences) > 1 {
            style -= 3.0;
        }
        if !item.styles.iter().any(|tag| preferences.preferred_styles.contains(tag)) {
            style -= 2.0;
        }
    }
    score *= style.max(0.0) / STYLE_WEIGHT;

    // Activity fit.
    let mut activity = ACTIVITY_WEIGHT;
    for item in outfit.all_items() {
        if !item.occasions.contains(&preferences.occasion_type) {
            activity -= 4.0;
        }
    }
    score *= activity.max(0.0) / ACTIVITY_WEIGHT;

    if preferences.sustainability_preference {
        let total = outfit.item_count();
        if total > 0 {
            let eco = outfit.all_items().filter(|item| item.is_eco_friendly()).count();
            score *= 0.9 + 0.1 * (eco as f64 / total as f64);
        }
    }

    clamp_score(score)
}

/// Whether the adjusted feels-like temperature sits more than half the
/// item's range away from its midpoint.
fn item_off_center(item: &ClothingItem, adjusted_temp: f64) -> bool {
    (adjusted_temp - item.ideal_temp()).abs() > item.temp_range() / 2.0
}

fn clamp_score(score: f64) -> u8 {
    score.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        Gender, ItemId, ItemType, Layer, Season, Sustainability, TimeOfDay, WaterResistance,
    };

    fn fixture_item(id: &str) -> ClothingItem {
        ClothingItem {
            id: ItemId(id.to_owned()),
            name: id.to_owned(),
            description: String::new(),
            item_type: ItemType::Top,
            subtype: String::new(),
            layer: Layer::Base,
            min_temp: 60.0,
            max_temp: 80.0,
            formality_level: 2,
            rain_suitable: false,
            wind_suitable: false,
            snow_suitable: false,
            uv_protection: false,
            water_resistance: WaterResistance::None,
            gender: Gender::Unisex,
            seasons: vec![Season::Summer],
            occasions: vec!["casual".to_owned()],
            styles: vec!["casual".to_owned()],
            material: "Cotton".to_owned(),
            care_instructions: "Machine wash cold".to_owned(),
            colors: vec![],
            breathability: Some(4),
            warmth_rating: Some(2),
            sustainability: None,
        }
    }

    fn weather() -> WeatherConditions {
        WeatherConditions {
            temperature: 70.0,
            feels_like: 70.0,
            is_raining: false,
            is_snowing: false,
            precipitation: Precipitation::None,
            wind_speed: 4.0,
            humidity: 40,
            uv_index: 4.0,
            time_of_day: TimeOfDay::Afternoon,
            season: Season::Summer,
        }
    }

    fn preferences() -> StylePreferences {
        StylePreferences {
            formality_preference: 2,
            preferred_styles: vec!["casual".to_owned()],
            layering_preference: crate::domain::LayeringPreference::Minimal,
            ..Default::default()
        }
    }

    #[test]
    fn calm_clear_weather_with_fitting_items_scores_full_marks() {
        let outfit =
            OutfitRecommendation { base_layers: vec![fixture_item("a")], ..Default::default() };
        assert_eq!(weather_suitability(&weather(), &outfit), 100);
        assert_eq!(comfort_rating(&weather(), &preferences(), &outfit), 100);
    }

    #[test]
    fn empty_outfit_is_valid_and_pays_only_the_layering_gap() {
        let outfit = OutfitRecommendation::default();
        assert_eq!(weather_suitability(&weather(), &outfit), 100);

        // Zero layers against a desired one: 35 - 5 = 30; 100 * 30/35 = 86.
        // The sustainability bonus is skipped outright for empty outfits.
        let prefs =
            StylePreferences { sustainability_preference: true, ..preferences() };
        assert_eq!(comfort_rating(&weather(), &prefs, &outfit), 86);
    }

    #[test]
    fn out_of_range_items_cost_five_temperature_points_each() {
        let mut hot_item = fixture_item("a");
        hot_item.min_temp = 80.0;
        hot_item.max_temp = 100.0;
        let outfit = OutfitRecommendation {
            base_layers: vec![hot_item.clone(), hot_item],
            ..Default::default()
        };
        // temperature component 40 - 10 = 30; 100 * 30/40 = 75.
        assert_eq!(weather_suitability(&weather(), &outfit), 75);
    }

    #[test]
    fn heavy_rain_demands_two_protected_items_and_dry_feet() {
        let mut weather = weather();
        weather.is_raining = true;
        weather.precipitation = Precipitation::Heavy;

        let mut coat = fixture_item("coat");
        coat.item_type = ItemType::Outerwear;
        coat.layer = Layer::Outer;
        coat.rain_suitable = true;
        coat.min_temp = 60.0;
        coat.max_temp = 80.0;

        let mut boots = fixture_item("boots");
        boots.item_type = ItemType::Footwear;
        boots.layer = Layer::None;
        boots.rain_suitable = true;

        // One protected outer of two needed: -10; footwear covered.
        let outfit = OutfitRecommendation {
            outer_layers: vec![coat.clone()],
            footwear: vec![boots.clone()],
            ..Default::default()
        };
        // rain component 10/20 halves the score.
        assert_eq!(weather_suitability(&weather, &outfit), 50);

        let mut umbrella = fixture_item("umbrella");
        umbrella.item_type = ItemType::Accessory;
        umbrella.layer = Layer::None;
        umbrella.rain_suitable = true;
        let outfit = OutfitRecommendation {
            outer_layers: vec![coat],
            footwear: vec![boots],
            accessories: vec![umbrella],
            ..Default::default()
        };
        assert_eq!(weather_suitability(&weather, &outfit), 100);
    }

    #[test]
    fn wind_component_skipped_at_or_below_threshold() {
        let exposed = OutfitRecommendation {
            base_layers: vec![fixture_item("a")],
            ..Default::default()
        };

        let mut calm = weather();
        calm.wind_speed = 5.0;
        let calm_score = weather_suitability(&calm, &exposed);

        let mut gale = weather();
        gale.wind_speed = 25.0;
        let gale_score = weather_suitability(&gale, &exposed);

        // Monotonicity: dropping wind speed cannot lower the score.
        assert!(calm_score >= gale_score);
        assert_eq!(calm_score, 100);
        // Two missing wind-suitable outers at 10 points each empty the
        // component, zeroing the composite.
        assert_eq!(gale_score, 0);
    }

    #[test]
    fn snow_penalties_halve_then_empty_the_component() {
        let mut weather = weather();
        weather.is_snowing = true;

        let outfit = OutfitRecommendation {
            base_layers: vec![fixture_item("a")],
            ..Default::default()
        };
        // No snow-suitable outer (-5) and no snow-suitable footwear (-5).
        assert_eq!(weather_suitability(&weather, &outfit), 0);

        let mut shell = fixture_item("shell");
        shell.item_type = ItemType::Outerwear;
        shell.layer = Layer::Outer;
        shell.snow_suitable = true;
        let outfit = OutfitRecommendation {
            outer_layers: vec![shell],
            ..Default::default()
        };
        assert_eq!(weather_suitability(&weather, &outfit), 50);
    }

    #[test]
    fn uv_component_checks_outer_layers_and_accessories() {
        let mut weather = weather();
        weather.uv_index = 9.0;

        let mut hat = fixture_item("hat");
        hat.item_type = ItemType::Accessory;
        hat.layer = Layer::None;
        hat.uv_protection = true;

        let outfit = OutfitRecommendation { accessories: vec![hat], ..Default::default() };
        // Accessory covered, outer layer not: 5/10.
        assert_eq!(weather_suitability(&weather, &outfit), 50);
    }

    #[test]
    fn layering_deviation_costs_five_points_per_layer() {
        let prefs = StylePreferences {
            layering_preference: crate::domain::LayeringPreference::Maximum,
            ..preferences()
        };
        let outfit =
            OutfitRecommendation { base_layers: vec![fixture_item("a")], ..Default::default() };
        // One layer against a desired three: 35 - 10 = 25; 100 * 25/35 = 71.43.
        assert_eq!(comfort_rating(&weather(), &prefs, &outfit), 71);
    }

    #[test]
    fn off_center_items_are_penalized_against_adjusted_feels_like() {
        let mut weather = weather();
        weather.feels_like = 85.0;
        // Item range 60..=80, midpoint 70, half-range 10; 85 is off-center.
        let outfit =
            OutfitRecommendation { base_layers: vec![fixture_item("a")], ..Default::default() };
        // temperature component 35 - 5 = 30; 100 * 30/35 = 85.71 -> 86.
        assert_eq!(comfort_rating(&weather, &preferences(), &outfit), 86);
    }

    #[test]
    fn low_breathability_hurts_only_in_heat() {
        let mut stuffy = fixture_item("a");
        stuffy.breathability = Some(1);
        stuffy.min_temp = 60.0;
        stuffy.max_temp = 100.0;
        let outfit = OutfitRecommendation { base_layers: vec![stuffy], ..Default::default() };

        assert_eq!(comfort_rating(&weather(), &preferences(), &outfit), 100);

        let mut hot = weather();
        hot.temperature = 90.0;
        hot.feels_like = 90.0;
        // material 25 - 3 = 22 -> 88; temperature midpoint 80, half-range 20,
        // 90 is in range, layering minimal matches one layer.
        assert_eq!(comfort_rating(&hot, &preferences(), &outfit), 88);
    }

    #[test]
    fn sustainability_bonus_is_full_at_ratio_one() {
        let eco = Sustainability {
            eco_friendly: true,
            recyclable: true,
            organic_materials: false,
        };
        let mut item = fixture_item("a");
        item.sustainability = Some(eco);
        let outfit = OutfitRecommendation { base_layers: vec![item], ..Default::default() };

        let plain = comfort_rating(&weather(), &preferences(), &outfit);
        let prefs = StylePreferences { sustainability_preference: true, ..preferences() };
        let boosted = comfort_rating(&weather(), &prefs, &outfit);

        // 0.9 + 0.1 * 1.0 multiplies by exactly 1.0.
        assert_eq!(boosted, plain);
    }

    #[test]
    fn sustainability_ratio_below_one_discounts_the_score() {
        let eco = Sustainability {
            eco_friendly: true,
            recyclable: false,
            organic_materials: false,
        };
        let mut green = fixture_item("green");
        green.sustainability = Some(eco);
        let outfit = OutfitRecommendation {
            base_layers: vec![green, fixture_item("plain")],
            ..Default::default()
        };

        let prefs = StylePreferences {
            sustainability_preference: true,
            layering_preference: crate::domain::LayeringPreference::Moderate,
            ..preferences()
        };
        // All components full except the bonus: 100 * (0.9 + 0.1 * 0.5) = 95.
        assert_eq!(comfort_rating(&weather(), &prefs, &outfit), 95);
    }

    #[test]
    fn scores_stay_within_bounds_under_stacked_penalties() {
        let mut weather = weather();
        weather.is_raining = true;
        weather.is_snowing = true;
        weather.precipitation = Precipitation::Heavy;
        weather.wind_speed = 30.0;
        weather.uv_index = 11.0;
        weather.temperature = -30.0;
        weather.feels_like = -40.0;

        let items: Vec<_> = (0..12).map(|i| fixture_item(&format!("i{i}"))).collect();
        let outfit = OutfitRecommendation { base_layers: items, ..Default::default() };

        let suitability = weather_suitability(&weather, &outfit);
        let comfort = comfort_rating(&weather, &preferences(), &outfit);
        assert!(suitability <= 100);
        assert!(comfort <= 100);
        assert_eq!(suitability, 0);
    }
}
