pub mod clothing;
pub mod preferences;
pub mod weather;

pub use clothing::{
    ClothingItem, Gender, ItemId, ItemType, Layer, Sustainability, WaterResistance,
};
pub use preferences::{LayeringPreference, StylePreferences};
pub use weather::{Precipitation, Season, TimeOfDay, WeatherConditions};
