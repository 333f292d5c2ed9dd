use std::fs;
use std::path::Path;

use anyhow::{bail, Context};
use serde::de::DeserializeOwned;
use wardrobe_core::config::AppConfig;
use wardrobe_core::{RecommendationEngine, StylePreferences, WeatherConditions};

use super::catalog::load_catalog;
use super::CommandResult;

pub fn run(
    config: &AppConfig,
    weather_path: &Path,
    preferences_path: Option<&Path>,
    pretty: bool,
) -> CommandResult {
    let catalog = match load_catalog(config, None) {
        Ok(catalog) => catalog,
        Err(error) => {
            return CommandResult::failure("recommend", "catalog_load", format!("{error:#}"), 2)
        }
    };

    let weather: WeatherConditions = match read_document(weather_path) {
        Ok(weather) => weather,
        Err(error) => {
            return CommandResult::failure("recommend", "input", format!("{error:#}"), 2)
        }
    };

    let preferences: StylePreferences = match preferences_path {
        Some(path) => match read_document(path) {
            Ok(preferences) => preferences,
            Err(error) => {
                return CommandResult::failure("recommend", "input", format!("{error:#}"), 2)
            }
        },
        None => StylePreferences::default(),
    };

    let engine = RecommendationEngine::with_rules(catalog, config.filter.profile.rule_set());
    match engine.recommend(&weather, &preferences) {
        Ok(suggestion) => {
            tracing::info!(
                event_name = "recommend.completed",
                items = suggestion.outfit.item_count(),
                weather_suitability = suggestion.weather_suitability,
                comfort_rating = suggestion.comfort_rating,
                "outfit recommendation assembled"
            );
            let payload = match serde_json::to_value(&suggestion) {
                Ok(payload) => payload,
                Err(error) => {
                    return CommandResult::failure(
                        "recommend",
                        "serialization",
                        error.to_string(),
                        1,
                    )
                }
            };
            let message = format!(
                "recommended {} items (weather {}, comfort {})",
                suggestion.outfit.item_count(),
                suggestion.weather_suitability,
                suggestion.comfort_rating
            );
            CommandResult::success_with_payload("recommend", message, payload, pretty)
        }
        Err(error) => CommandResult::failure("recommend", "invalid_input", error.to_string(), 2),
    }
}

/// Parse a `.json` or `.toml` document into the requested type.
fn read_document<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("could not read `{}`", path.display()))?;

    let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or_default();
    match extension {
        "json" => serde_json::from_str(&raw)
            .with_context(|| format!("could not parse `{}`", path.display())),
        "toml" => toml::from_str(&raw)
            .with_context(|| format!("could not parse `{}`", path.display())),
        other => bail!(
            "unsupported input format `{other}` for `{}` (expected .json or .toml)",
            path.display()
        ),
    }
}
