//! Output types for the recommendation engine.

use serde::{Deserialize, Serialize};

use crate::domain::ClothingItem;

/// The six output buckets, each holding eligible items in catalog order.
/// Any bucket may be empty; empty buckets are valid output, not errors.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OutfitRecommendation {
    pub base_layers: Vec<ClothingItem>,
    pub mid_layers: Vec<ClothingItem>,
    pub outer_layers: Vec<ClothingItem>,
    pub bottoms: Vec<ClothingItem>,
    pub footwear: Vec<ClothingItem>,
    pub accessories: Vec<ClothingItem>,
}

impl OutfitRecommendation {
    /// Every selected item across all six buckets, bucket order.
    pub fn all_items(&self) -> impl Iterator<Item = &ClothingItem> {
        self.base_layers
            .iter()
            .chain(&self.mid_layers)
            .chain(&self.outer_layers)
            .chain(&self.bottoms)
            .chain(&self.footwear)
            .chain(&self.accessories)
    }

    pub fn item_count(&self) -> usize {
        self.all_items().count()
    }

    /// Garments occupying a vertical layer (base + mid + outer).
    pub fn layer_count(&self) -> usize {
        self.base_layers.len() + self.mid_layers.len() + self.outer_layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.item_count() == 0
    }
}

/// The full result of one recommendation call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OutfitSuggestion {
    pub outfit: OutfitRecommendation,
    pub style_notes: Vec<String>,
    pub weather_notes: Vec<String>,
    pub layering_tips: Vec<String>,
    /// Deduplicated care instructions, first-seen catalog order.
    pub care_instructions: Vec<String>,
    /// 0-100 fit of the outfit to the weather.
    pub weather_suitability: u8,
    /// 0-100 fit of the outfit to the wearer's comfort preferences.
    pub comfort_rating: u8,
    /// Advisory seasonal color direction; never scored.
    pub color_palette: Vec<String>,
    /// Echo of the requested occasion.
    pub occasion: String,
    /// Echo of the requested formality preference.
    pub formality: u8,
    /// Secondary picks: the runner-up eligible item per bucket.
    pub alternatives: OutfitRecommendation,
}
