//! Partitions eligible catalog items into the six output buckets and
//! derives the runner-up alternatives.

use crate::catalog::Catalog;
use crate::domain::{ClothingItem, ItemType, Layer, StylePreferences, WeatherConditions};

use super::eligibility::{self, RuleSet};
use super::types::OutfitRecommendation;

/// Single pass over the catalog, preserving catalog order within buckets.
pub(super) fn assemble(
    catalog: &Catalog,
    weather: &WeatherConditions,
    preferences: &StylePreferences,
    rules: RuleSet,
) -> OutfitRecommendation {
    let mut outfit = OutfitRecommendation::default();
    for item in catalog.items() {
        if !eligibility::is_eligible(item, weather, preferences, rules) {
            continue;
        }
        if let Some(bucket) = bucket_mut(&mut outfit, item) {
            bucket.push(item.clone());
        }
    }
    outfit
}

/// The runner-up eligible item per bucket, by catalog order; buckets with
/// fewer than two eligible items are left empty.
pub(super) fn alternatives(outfit: &OutfitRecommendation) -> OutfitRecommendation {
    OutfitRecommendation {
        base_layers: second_pick(&outfit.base_layers),
        mid_layers: second_pick(&outfit.mid_layers),
        outer_layers: second_pick(&outfit.outer_layers),
        bottoms: second_pick(&outfit.bottoms),
        footwear: second_pick(&outfit.footwear),
        accessories: second_pick(&outfit.accessories),
    }
}

fn second_pick(bucket: &[ClothingItem]) -> Vec<ClothingItem> {
    bucket.get(1).cloned().into_iter().collect()
}

fn bucket_mut<'a>(
    outfit: &'a mut OutfitRecommendation,
    item: &ClothingItem,
) -> Option<&'a mut Vec<ClothingItem>> {
    match item.layer {
        Layer::Base => Some(&mut outfit.base_layers),
        Layer::Mid => Some(&mut outfit.mid_layers),
        Layer::Outer => Some(&mut outfit.outer_layers),
        Layer::None => match item.item_type {
            ItemType::Bottom => Some(&mut outfit.bottoms),
            ItemType::Footwear => Some(&mut outfit.footwear),
            ItemType::Accessory => Some(&mut outfit.accessories),
            // A validated catalog cannot hold an unlayered top/outerwear.
            ItemType::Top | ItemType::Outerwear => None,
        },
    }
}
