pub mod catalog;
pub mod config;
pub mod domain;
pub mod errors;
pub mod normalize;
pub mod recommend;

pub use catalog::{Catalog, CatalogError};
pub use domain::{
    ClothingItem, Gender, ItemId, ItemType, Layer, LayeringPreference, Precipitation, Season,
    StylePreferences, Sustainability, TimeOfDay, WaterResistance, WeatherConditions,
};
pub use errors::DomainError;
pub use recommend::{
    OccasionRule, OutfitRecommendation, OutfitSuggestion, RecommendationEngine, RuleSet,
};
