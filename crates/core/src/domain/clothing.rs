use serde::{Deserialize, Serialize};

use super::weather::Season;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub String);

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    Top,
    Bottom,
    Outerwear,
    Footwear,
    Accessory,
}

/// Vertical position of a garment. Bottoms, footwear and accessories always
/// carry `None`; only tops and outerwear occupy base/mid/outer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    Base,
    Mid,
    Outer,
    None,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Unisex,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WaterResistance {
    #[default]
    None,
    WaterResistant,
    Waterproof,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sustainability {
    pub eco_friendly: bool,
    pub recyclable: bool,
    pub organic_materials: bool,
}

/// One catalog entry. Immutable once the catalog is constructed.
///
/// Temperatures are degrees Fahrenheit; `min_temp ..= max_temp` is the
/// inclusive range the item is wearable in. Ratings are 1-5 ordinals.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClothingItem {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub subtype: String,
    pub layer: Layer,
    pub min_temp: f64,
    pub max_temp: f64,
    pub formality_level: u8,
    pub rain_suitable: bool,
    pub wind_suitable: bool,
    pub snow_suitable: bool,
    #[serde(default)]
    pub uv_protection: bool,
    #[serde(default)]
    pub water_resistance: WaterResistance,
    pub gender: Gender,
    pub seasons: Vec<Season>,
    pub occasions: Vec<String>,
    pub styles: Vec<String>,
    pub material: String,
    pub care_instructions: String,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub breathability: Option<u8>,
    #[serde(default)]
    pub warmth_rating: Option<u8>,
    #[serde(default)]
    pub sustainability: Option<Sustainability>,
}

impl ClothingItem {
    /// Midpoint of the wearable range, used by the comfort scorer.
    pub fn ideal_temp(&self) -> f64 {
        (self.min_temp + self.max_temp) / 2.0
    }

    pub fn temp_range(&self) -> f64 {
        self.max_temp - self.min_temp
    }

    pub fn covers_temperature(&self, temp: f64) -> bool {
        temp >= self.min_temp && temp <= self.max_temp
    }

    pub fn is_eco_friendly(&self) -> bool {
        self.sustainability.is_some_and(|s| s.eco_friendly)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scarf() -> ClothingItem {
        ClothingItem {
            id: ItemId("uni-acc-scarf".to_owned()),
            name: "Wool Scarf".to_owned(),
            description: "Warm wool scarf for cold weather".to_owned(),
            item_type: ItemType::Accessory,
            subtype: "scarf".to_owned(),
            layer: Layer::None,
            min_temp: -20.0,
            max_temp: 50.0,
            formality_level: 3,
            rain_suitable: true,
            wind_suitable: true,
            snow_suitable: true,
            uv_protection: false,
            water_resistance: WaterResistance::None,
            gender: Gender::Unisex,
            seasons: vec![Season::Fall, Season::Winter],
            occasions: vec!["casual".to_owned(), "work".to_owned()],
            styles: vec!["classic".to_owned(), "practical".to_owned()],
            material: "Wool".to_owned(),
            care_instructions: "Hand wash cold, lay flat to dry".to_owned(),
            colors: vec!["gray".to_owned(), "navy".to_owned()],
            breathability: None,
            warmth_rating: Some(4),
            sustainability: None,
        }
    }

    #[test]
    fn ideal_temp_is_range_midpoint() {
        let item = scarf();
        assert_eq!(item.ideal_temp(), 15.0);
        assert_eq!(item.temp_range(), 70.0);
    }

    #[test]
    fn covers_temperature_is_inclusive_at_both_ends() {
        let item = scarf();
        assert!(item.covers_temperature(-20.0));
        assert!(item.covers_temperature(50.0));
        assert!(!item.covers_temperature(50.1));
    }

    #[test]
    fn serde_uses_type_rename_and_kebab_case_water_resistance() {
        let mut item = scarf();
        item.water_resistance = WaterResistance::WaterResistant;
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "accessory");
        assert_eq!(json["water_resistance"], "water-resistant");
        let back: ClothingItem = serde_json::from_value(json).unwrap();
        assert_eq!(back, item);
    }
}
