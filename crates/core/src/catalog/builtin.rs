//! Compiled-in default catalog, expressed as const seed tables and mapped
//! into owned records at construction time.

use crate::domain::{
    ClothingItem, Gender, ItemId, ItemType, Layer, Season, Sustainability, WaterResistance,
};

struct ItemSeed {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    item_type: ItemType,
    subtype: &'static str,
    layer: Layer,
    min_temp: f64,
    max_temp: f64,
    formality_level: u8,
    rain_suitable: bool,
    wind_suitable: bool,
    snow_suitable: bool,
    uv_protection: bool,
    water_resistance: WaterResistance,
    gender: Gender,
    seasons: &'static [Season],
    occasions: &'static [&'static str],
    styles: &'static [&'static str],
    material: &'static str,
    care_instructions: &'static str,
    colors: &'static [&'static str],
    breathability: Option<u8>,
    warmth_rating: Option<u8>,
    sustainability: Option<Sustainability>,
}

const ITEM_SEEDS: &[ItemSeed] = &[
    // Men's base layers
    ItemSeed {
        id: "m-base-merino",
        name: "Merino Wool Base Layer",
        description: "Premium merino wool base layer for cold weather activities",
        item_type: ItemType::Top,
        subtype: "thermal",
        layer: Layer::Base,
        min_temp: -20.0,
        max_temp: 45.0,
        formality_level: 1,
        rain_suitable: true,
        wind_suitable: true,
        snow_suitable: true,
        uv_protection: false,
        water_resistance: WaterResistance::None,
        gender: Gender::Male,
        seasons: &[Season::Fall, Season::Winter],
        occasions: &["outdoor", "sports", "casual"],
        styles: &["athletic", "practical"],
        material: "Merino Wool",
        care_instructions: "Machine wash cold, lay flat to dry",
        colors: &["black", "navy", "gray"],
        breathability: Some(5),
        warmth_rating: Some(4),
        sustainability: Some(Sustainability {
            eco_friendly: true,
            recyclable: true,
            organic_materials: true,
        }),
    },
    ItemSeed {
        id: "m-base-tech-tee",
        name: "Performance Tech Tee",
        description: "Moisture-wicking performance t-shirt",
        item_type: ItemType::Top,
        subtype: "t-shirt",
        layer: Layer::Base,
        min_temp: 60.0,
        max_temp: 95.0,
        formality_level: 2,
        rain_suitable: true,
        wind_suitable: true,
        snow_suitable: false,
        uv_protection: true,
        water_resistance: WaterResistance::None,
        gender: Gender::Male,
        seasons: &[Season::Spring, Season::Summer],
        occasions: &["sports", "casual", "outdoor"],
        styles: &["athletic", "modern"],
        material: "Moisture-wicking Polyester",
        care_instructions: "Machine wash cold, tumble dry low",
        colors: &["white", "black", "blue", "gray"],
        breathability: Some(5),
        warmth_rating: Some(1),
        sustainability: None,
    },
    ItemSeed {
        id: "m-base-oxford",
        name: "Cotton Oxford Shirt",
        description: "Button-down oxford shirt that dresses up or down",
        item_type: ItemType::Top,
        subtype: "shirt",
        layer: Layer::Base,
        min_temp: 50.0,
        max_temp: 80.0,
        formality_level: 3,
        rain_suitable: false,
        wind_suitable: false,
        snow_suitable: false,
        uv_protection: false,
        water_resistance: WaterResistance::None,
        gender: Gender::Male,
        seasons: &[Season::Spring, Season::Summer, Season::Fall],
        occasions: &["work", "business", "casual"],
        styles: &["classic", "modern"],
        material: "Cotton",
        care_instructions: "Machine wash warm, iron as needed",
        colors: &["white", "light blue", "pink"],
        breathability: Some(4),
        warmth_rating: Some(2),
        sustainability: None,
    },
    // Men's mid layers
    ItemSeed {
        id: "m-mid-cashmere",
        name: "Cashmere Sweater",
        description: "Premium cashmere sweater for sophisticated occasions",
        item_type: ItemType::Top,
        subtype: "sweater",
        layer: Layer::Mid,
        min_temp: 35.0,
        max_temp: 65.0,
        formality_level: 4,
        rain_suitable: false,
        wind_suitable: true,
        snow_suitable: true,
        uv_protection: false,
        water_resistance: WaterResistance::None,
        gender: Gender::Male,
        seasons: &[Season::Fall, Season::Winter],
        occasions: &["work", "formal", "evening"],
        styles: &["luxury", "classic"],
        material: "Cashmere",
        care_instructions: "Dry clean only",
        colors: &["charcoal", "navy", "camel", "burgundy"],
        breathability: Some(4),
        warmth_rating: Some(3),
        sustainability: Some(Sustainability {
            eco_friendly: true,
            recyclable: false,
            organic_materials: true,
        }),
    },
    ItemSeed {
        id: "m-mid-fleece",
        name: "Fleece Zip Hoodie",
        description: "Midweight fleece for everyday layering",
        item_type: ItemType::Top,
        subtype: "hoodie",
        layer: Layer::Mid,
        min_temp: 30.0,
        max_temp: 55.0,
        formality_level: 1,
        rain_suitable: false,
        wind_suitable: true,
        snow_suitable: true,
        uv_protection: false,
        water_resistance: WaterResistance::None,
        gender: Gender::Male,
        seasons: &[Season::Fall, Season::Winter, Season::Spring],
        occasions: &["casual", "outdoor", "weekend"],
        styles: &["casual", "athletic"],
        material: "Recycled Polyester Fleece",
        care_instructions: "Machine wash cold, tumble dry low",
        colors: &["heather gray", "black", "forest"],
        breathability: Some(3),
        warmth_rating: Some(4),
        sustainability: Some(Sustainability {
            eco_friendly: true,
            recyclable: true,
            organic_materials: false,
        }),
    },
    // Men's outerwear
    ItemSeed {
        id: "m-outer-shell",
        name: "Waterproof Shell Jacket",
        description: "Weatherproof shell jacket for outdoor activities",
        item_type: ItemType::Outerwear,
        subtype: "jacket",
        layer: Layer::Outer,
        min_temp: 35.0,
        max_temp: 65.0,
        formality_level: 2,
        rain_suitable: true,
        wind_suitable: true,
        snow_suitable: true,
        uv_protection: false,
        water_resistance: WaterResistance::Waterproof,
        gender: Gender::Male,
        seasons: &[Season::Spring, Season::Fall],
        occasions: &["outdoor", "casual", "sports"],
        styles: &["technical", "modern"],
        material: "Gore-Tex",
        care_instructions: "Machine wash cold, tumble dry low",
        colors: &["black", "navy", "gray"],
        breathability: Some(4),
        warmth_rating: Some(2),
        sustainability: None,
    },
    ItemSeed {
        id: "m-outer-overcoat",
        name: "Wool Overcoat",
        description: "Tailored wool overcoat for cold-weather business wear",
        item_type: ItemType::Outerwear,
        subtype: "coat",
        layer: Layer::Outer,
        min_temp: 10.0,
        max_temp: 45.0,
        formality_level: 5,
        rain_suitable: false,
        wind_suitable: true,
        snow_suitable: true,
        uv_protection: false,
        water_resistance: WaterResistance::WaterResistant,
        gender: Gender::Male,
        seasons: &[Season::Fall, Season::Winter],
        occasions: &["work", "formal", "business"],
        styles: &["formal", "classic"],
        material: "Wool",
        care_instructions: "Dry clean only",
        colors: &["charcoal", "camel", "black"],
        breathability: Some(2),
        warmth_rating: Some(5),
        sustainability: None,
    },
    // Men's bottoms
    ItemSeed {
        id: "m-bottom-dress",
        name: "Wool Dress Pants",
        description: "Classic wool dress pants for formal occasions",
        item_type: ItemType::Bottom,
        subtype: "pants",
        layer: Layer::None,
        min_temp: 30.0,
        max_temp: 75.0,
        formality_level: 5,
        rain_suitable: true,
        wind_suitable: true,
        snow_suitable: true,
        uv_protection: false,
        water_resistance: WaterResistance::None,
        gender: Gender::Male,
        seasons: &[Season::Fall, Season::Winter, Season::Spring],
        occasions: &["work", "formal", "evening"],
        styles: &["formal", "classic"],
        material: "Wool Blend",
        care_instructions: "Dry clean only",
        colors: &["charcoal", "navy", "black"],
        breathability: Some(3),
        warmth_rating: Some(3),
        sustainability: None,
    },
    ItemSeed {
        id: "m-bottom-jeans",
        name: "Slim Fit Jeans",
        description: "Everyday slim-fit denim",
        item_type: ItemType::Bottom,
        subtype: "jeans",
        layer: Layer::None,
        min_temp: 35.0,
        max_temp: 80.0,
        formality_level: 2,
        rain_suitable: false,
        wind_suitable: true,
        snow_suitable: false,
        uv_protection: false,
        water_resistance: WaterResistance::None,
        gender: Gender::Male,
        seasons: &[Season::Spring, Season::Fall, Season::Winter],
        occasions: &["casual", "weekend", "evening"],
        styles: &["casual", "modern"],
        material: "Denim",
        care_instructions: "Machine wash cold, hang dry",
        colors: &["indigo", "black", "washed blue"],
        breathability: Some(3),
        warmth_rating: Some(3),
        sustainability: None,
    },
    ItemSeed {
        id: "m-bottom-shorts",
        name: "Chino Shorts",
        description: "Lightweight chino shorts for hot days",
        item_type: ItemType::Bottom,
        subtype: "shorts",
        layer: Layer::None,
        min_temp: 70.0,
        max_temp: 100.0,
        formality_level: 1,
        rain_suitable: false,
        wind_suitable: false,
        snow_suitable: false,
        uv_protection: false,
        water_resistance: WaterResistance::None,
        gender: Gender::Male,
        seasons: &[Season::Summer],
        occasions: &["casual", "weekend", "outdoor"],
        styles: &["casual", "modern"],
        material: "Cotton",
        care_instructions: "Machine wash warm",
        colors: &["khaki", "navy", "olive"],
        breathability: Some(5),
        warmth_rating: Some(1),
        sustainability: None,
    },
    // Men's footwear
    ItemSeed {
        id: "m-foot-oxford",
        name: "Leather Oxford Shoes",
        description: "Classic leather oxford shoes for formal occasions",
        item_type: ItemType::Footwear,
        subtype: "dress shoes",
        layer: Layer::None,
        min_temp: 20.0,
        max_temp: 85.0,
        formality_level: 5,
        rain_suitable: false,
        wind_suitable: true,
        snow_suitable: false,
        uv_protection: false,
        water_resistance: WaterResistance::None,
        gender: Gender::Male,
        seasons: &[Season::Spring, Season::Summer, Season::Fall, Season::Winter],
        occasions: &["work", "formal", "evening"],
        styles: &["formal", "classic"],
        material: "Leather",
        care_instructions: "Polish regularly, use shoe trees",
        colors: &["black", "brown"],
        breathability: None,
        warmth_rating: None,
        sustainability: None,
    },
    // Women's base layers
    ItemSeed {
        id: "w-base-camisole",
        name: "Silk-blend Camisole",
        description: "Luxurious silk-blend camisole for layering or wearing alone",
        item_type: ItemType::Top,
        subtype: "camisole",
        layer: Layer::Base,
        min_temp: 65.0,
        max_temp: 95.0,
        formality_level: 3,
        rain_suitable: true,
        wind_suitable: false,
        snow_suitable: false,
        uv_protection: false,
        water_resistance: WaterResistance::None,
        gender: Gender::Female,
        seasons: &[Season::Spring, Season::Summer],
        occasions: &["work", "evening", "formal"],
        styles: &["elegant", "feminine"],
        material: "Silk Blend",
        care_instructions: "Hand wash cold, lay flat to dry",
        colors: &["ivory", "black", "navy", "blush"],
        breathability: Some(5),
        warmth_rating: Some(1),
        sustainability: None,
    },
    ItemSeed {
        id: "w-base-turtleneck",
        name: "Thermal Turtleneck",
        description: "Warm and stylish turtleneck base layer",
        item_type: ItemType::Top,
        subtype: "turtleneck",
        layer: Layer::Base,
        min_temp: 30.0,
        max_temp: 60.0,
        formality_level: 3,
        rain_suitable: true,
        wind_suitable: true,
        snow_suitable: true,
        uv_protection: false,
        water_resistance: WaterResistance::None,
        gender: Gender::Female,
        seasons: &[Season::Fall, Season::Winter],
        occasions: &["work", "casual", "outdoor"],
        styles: &["classic", "practical"],
        material: "Cotton Blend",
        care_instructions: "Machine wash cold, tumble dry low",
        colors: &["black", "white", "burgundy", "navy"],
        breathability: Some(3),
        warmth_rating: Some(4),
        sustainability: None,
    },
    // Women's mid layers
    ItemSeed {
        id: "w-mid-cardigan",
        name: "Wool Blend Cardigan",
        description: "Versatile wool blend cardigan for multiple occasions",
        item_type: ItemType::Top,
        subtype: "cardigan",
        layer: Layer::Mid,
        min_temp: 40.0,
        max_temp: 65.0,
        formality_level: 3,
        rain_suitable: true,
        wind_suitable: true,
        snow_suitable: true,
        uv_protection: false,
        water_resistance: WaterResistance::None,
        gender: Gender::Female,
        seasons: &[Season::Fall, Season::Winter],
        occasions: &["work", "casual", "evening"],
        styles: &["classic", "feminine"],
        material: "Wool Blend",
        care_instructions: "Hand wash cold, lay flat to dry",
        colors: &["gray", "navy", "cream", "black"],
        breathability: Some(3),
        warmth_rating: Some(3),
        sustainability: None,
    },
    // Women's outerwear
    ItemSeed {
        id: "w-outer-trench",
        name: "Trench Coat",
        description: "Classic trench coat for sophisticated style",
        item_type: ItemType::Outerwear,
        subtype: "coat",
        layer: Layer::Outer,
        min_temp: 40.0,
        max_temp: 65.0,
        formality_level: 4,
        rain_suitable: true,
        wind_suitable: true,
        snow_suitable: false,
        uv_protection: false,
        water_resistance: WaterResistance::WaterResistant,
        gender: Gender::Female,
        seasons: &[Season::Spring, Season::Fall],
        occasions: &["work", "formal", "evening"],
        styles: &["classic", "elegant"],
        material: "Cotton Blend",
        care_instructions: "Dry clean only",
        colors: &["beige", "black", "navy"],
        breathability: Some(3),
        warmth_rating: Some(2),
        sustainability: None,
    },
    // Women's bottoms
    ItemSeed {
        id: "w-bottom-skirt",
        name: "A-Line Skirt",
        description: "Classic A-line skirt for professional settings",
        item_type: ItemType::Bottom,
        subtype: "skirt",
        layer: Layer::None,
        min_temp: 60.0,
        max_temp: 85.0,
        formality_level: 4,
        rain_suitable: true,
        wind_suitable: false,
        snow_suitable: false,
        uv_protection: false,
        water_resistance: WaterResistance::None,
        gender: Gender::Female,
        seasons: &[Season::Spring, Season::Summer],
        occasions: &["work", "formal", "evening"],
        styles: &["feminine", "classic"],
        material: "Cotton Blend",
        care_instructions: "Machine wash cold, line dry",
        colors: &["black", "navy", "gray", "beige"],
        breathability: Some(4),
        warmth_rating: Some(2),
        sustainability: None,
    },
    ItemSeed {
        id: "w-bottom-trousers",
        name: "Tailored Trousers",
        description: "Structured trousers that anchor business outfits",
        item_type: ItemType::Bottom,
        subtype: "pants",
        layer: Layer::None,
        min_temp: 30.0,
        max_temp: 75.0,
        formality_level: 4,
        rain_suitable: true,
        wind_suitable: true,
        snow_suitable: true,
        uv_protection: false,
        water_resistance: WaterResistance::None,
        gender: Gender::Female,
        seasons: &[Season::Fall, Season::Winter, Season::Spring],
        occasions: &["work", "business", "formal"],
        styles: &["classic", "elegant"],
        material: "Wool Blend",
        care_instructions: "Dry clean only",
        colors: &["black", "charcoal", "navy"],
        breathability: Some(3),
        warmth_rating: Some(3),
        sustainability: None,
    },
    // Women's footwear
    ItemSeed {
        id: "w-foot-flats",
        name: "Leather Ballet Flats",
        description: "Polished leather flats for office and evening wear",
        item_type: ItemType::Footwear,
        subtype: "flats",
        layer: Layer::None,
        min_temp: 45.0,
        max_temp: 90.0,
        formality_level: 4,
        rain_suitable: false,
        wind_suitable: true,
        snow_suitable: false,
        uv_protection: false,
        water_resistance: WaterResistance::None,
        gender: Gender::Female,
        seasons: &[Season::Spring, Season::Summer, Season::Fall],
        occasions: &["work", "formal", "evening"],
        styles: &["classic", "feminine"],
        material: "Leather",
        care_instructions: "Wipe clean with damp cloth",
        colors: &["black", "nude", "burgundy"],
        breathability: None,
        warmth_rating: None,
        sustainability: None,
    },
    // Unisex outerwear
    ItemSeed {
        id: "uni-outer-puffer",
        name: "Recycled Down Puffer",
        description: "Insulated puffer jacket for deep-winter days",
        item_type: ItemType::Outerwear,
        subtype: "puffer",
        layer: Layer::Outer,
        min_temp: -5.0,
        max_temp: 40.0,
        formality_level: 1,
        rain_suitable: false,
        wind_suitable: true,
        snow_suitable: true,
        uv_protection: false,
        water_resistance: WaterResistance::WaterResistant,
        gender: Gender::Unisex,
        seasons: &[Season::Winter],
        occasions: &["casual", "outdoor", "weekend"],
        styles: &["casual", "practical"],
        material: "Recycled Down",
        care_instructions: "Machine wash cold, gentle cycle",
        colors: &["black", "olive", "red"],
        breathability: Some(2),
        warmth_rating: Some(5),
        sustainability: Some(Sustainability {
            eco_friendly: true,
            recyclable: true,
            organic_materials: false,
        }),
    },
    // Unisex footwear
    ItemSeed {
        id: "uni-foot-sneaker",
        name: "Canvas Sneakers",
        description: "Low-profile canvas sneakers for everyday wear",
        item_type: ItemType::Footwear,
        subtype: "sneakers",
        layer: Layer::None,
        min_temp: 45.0,
        max_temp: 90.0,
        formality_level: 1,
        rain_suitable: false,
        wind_suitable: true,
        snow_suitable: false,
        uv_protection: false,
        water_resistance: WaterResistance::None,
        gender: Gender::Unisex,
        seasons: &[Season::Spring, Season::Summer, Season::Fall],
        occasions: &["casual", "weekend", "sports"],
        styles: &["casual", "athletic"],
        material: "Canvas",
        care_instructions: "Spot clean, air dry",
        colors: &["white", "black", "navy"],
        breathability: Some(4),
        warmth_rating: Some(1),
        sustainability: None,
    },
    ItemSeed {
        id: "uni-foot-boots",
        name: "Insulated Winter Boots",
        description: "Waterproof insulated boots for snow and slush",
        item_type: ItemType::Footwear,
        subtype: "boots",
        layer: Layer::None,
        min_temp: -10.0,
        max_temp: 40.0,
        formality_level: 2,
        rain_suitable: true,
        wind_suitable: true,
        snow_suitable: true,
        uv_protection: false,
        water_resistance: WaterResistance::Waterproof,
        gender: Gender::Unisex,
        seasons: &[Season::Fall, Season::Winter],
        occasions: &["casual", "outdoor", "work"],
        styles: &["practical", "modern"],
        material: "Waterproof Leather",
        care_instructions: "Wipe clean, condition leather seasonally",
        colors: &["brown", "black"],
        breathability: Some(2),
        warmth_rating: Some(4),
        sustainability: None,
    },
    // Accessories
    ItemSeed {
        id: "uni-acc-scarf",
        name: "Wool Scarf",
        description: "Warm wool scarf for cold weather",
        item_type: ItemType::Accessory,
        subtype: "scarf",
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
        seasons: &[Season::Fall, Season::Winter],
        occasions: &["casual", "work", "outdoor"],
        styles: &["classic", "practical"],
        material: "Wool",
        care_instructions: "Hand wash cold, lay flat to dry",
        colors: &["gray", "navy", "black", "camel"],
        breathability: None,
        warmth_rating: Some(4),
        sustainability: None,
    },
    ItemSeed {
        id: "uni-acc-sunglasses",
        name: "Polarized Sunglasses",
        description: "Polarized lenses with full UV filtering",
        item_type: ItemType::Accessory,
        subtype: "sunglasses",
        layer: Layer::None,
        min_temp: 40.0,
        max_temp: 110.0,
        formality_level: 2,
        rain_suitable: false,
        wind_suitable: true,
        snow_suitable: false,
        uv_protection: true,
        water_resistance: WaterResistance::None,
        gender: Gender::Unisex,
        seasons: &[Season::Spring, Season::Summer, Season::Fall],
        occasions: &["casual", "outdoor", "weekend"],
        styles: &["modern", "practical"],
        material: "Acetate",
        care_instructions: "Store in case, clean with microfiber cloth",
        colors: &["black", "tortoise"],
        breathability: None,
        warmth_rating: None,
        sustainability: None,
    },
    ItemSeed {
        id: "uni-acc-sunhat",
        name: "Packable Sun Hat",
        description: "Wide-brim packable hat for strong sun",
        item_type: ItemType::Accessory,
        subtype: "hat",
        layer: Layer::None,
        min_temp: 60.0,
        max_temp: 105.0,
        formality_level: 1,
        rain_suitable: false,
        wind_suitable: false,
        snow_suitable: false,
        uv_protection: true,
        water_resistance: WaterResistance::None,
        gender: Gender::Unisex,
        seasons: &[Season::Summer],
        occasions: &["outdoor", "casual", "weekend"],
        styles: &["practical", "casual"],
        material: "Organic Cotton",
        care_instructions: "Spot clean only",
        colors: &["natural", "olive"],
        breathability: Some(5),
        warmth_rating: None,
        sustainability: Some(Sustainability {
            eco_friendly: true,
            recyclable: false,
            organic_materials: true,
        }),
    },
    ItemSeed {
        id: "uni-acc-umbrella",
        name: "Compact Umbrella",
        description: "Windproof-frame umbrella that fits in a bag",
        item_type: ItemType::Accessory,
        subtype: "umbrella",
        layer: Layer::None,
        min_temp: -20.0,
        max_temp: 110.0,
        formality_level: 3,
        rain_suitable: true,
        wind_suitable: false,
        snow_suitable: false,
        uv_protection: false,
        water_resistance: WaterResistance::Waterproof,
        gender: Gender::Unisex,
        seasons: &[Season::Spring, Season::Summer, Season::Fall, Season::Winter],
        occasions: &["casual", "work", "business"],
        styles: &["practical", "classic"],
        material: "Nylon",
        care_instructions: "Air dry open before storing",
        colors: &["black", "navy"],
        breathability: None,
        warmth_rating: None,
        sustainability: None,
    },
];

pub(super) fn items() -> Vec<ClothingItem> {
    ITEM_SEEDS.iter().map(build_item).collect()
}

fn build_item(seed: &ItemSeed) -> ClothingItem {
    ClothingItem {
        id: ItemId(seed.id.to_owned()),
        name: seed.name.to_owned(),
        description: seed.description.to_owned(),
        item_type: seed.item_type,
        subtype: seed.subtype.to_owned(),
        layer: seed.layer,
        min_temp: seed.min_temp,
        max_temp: seed.max_temp,
        formality_level: seed.formality_level,
        rain_suitable: seed.rain_suitable,
        wind_suitable: seed.wind_suitable,
        snow_suitable: seed.snow_suitable,
        uv_protection: seed.uv_protection,
        water_resistance: seed.water_resistance,
        gender: seed.gender,
        seasons: seed.seasons.to_vec(),
        occasions: seed.occasions.iter().map(|s| (*s).to_owned()).collect(),
        styles: seed.styles.iter().map(|s| (*s).to_owned()).collect(),
        material: seed.material.to_owned(),
        care_instructions: seed.care_instructions.to_owned(),
        colors: seed.colors.iter().map(|s| (*s).to_owned()).collect(),
        breathability: seed.breathability,
        warmth_rating: seed.warmth_rating,
        sustainability: seed.sustainability,
    }
}
