//! Static clothing catalog.
//!
//! The catalog is validated once at construction and read-only afterwards.
//! It is always injected into the engine rather than living behind a
//! module-level global, so tests can substitute small synthetic fixtures.

mod builtin;

use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

use crate::domain::{ClothingItem, ItemId, ItemType, Layer};
use crate::errors::DomainError;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("could not parse catalog document: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Invariant(#[from] DomainError),
}

#[derive(Clone, Debug, Deserialize)]
struct CatalogDocument {
    items: Vec<ClothingItem>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    items: Vec<ClothingItem>,
}

impl Catalog {
    /// Build a catalog from owned items, checking the load-time invariants.
    pub fn new(items: Vec<ClothingItem>) -> Result<Self, DomainError> {
        let mut seen_ids: HashSet<&str> = HashSet::new();
        for item in &items {
            validate_item(item)?;
            if !seen_ids.insert(item.id.0.as_str()) {
                return Err(DomainError::CatalogInvariant {
                    item_id: item.id.0.clone(),
                    reason: "duplicate item id".to_owned(),
                });
            }
        }
        Ok(Self { items })
    }

    /// The compiled-in default catalog.
    pub fn builtin() -> Self {
        Self { items: builtin::items() }
    }

    /// Parse a TOML `[[items]]` document into a validated catalog.
    pub fn from_toml_str(raw: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = toml::from_str(raw)?;
        Ok(Self::new(document.items)?)
    }

    pub fn items(&self) -> &[ClothingItem] {
        &self.items
    }

    pub fn find(&self, item_id: &ItemId) -> Option<&ClothingItem> {
        self.items.iter().find(|item| &item.id == item_id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn validate_item(item: &ClothingItem) -> Result<(), DomainError> {
    let fail = |reason: String| DomainError::CatalogInvariant {
        item_id: item.id.0.clone(),
        reason,
    };

    if item.min_temp > item.max_temp {
        return Err(fail(format!(
            "min_temp {} exceeds max_temp {}",
            item.min_temp, item.max_temp
        )));
    }
    if !(1..=5).contains(&item.formality_level) {
        return Err(fail(format!("formality_level {} outside 1..=5", item.formality_level)));
    }
    for (field, value) in
        [("breathability", item.breathability), ("warmth_rating", item.warmth_rating)]
    {
        if let Some(rating) = value {
            if !(1..=5).contains(&rating) {
                return Err(fail(format!("{field} {rating} outside 1..=5")));
            }
        }
    }

    let layered = matches!(item.item_type, ItemType::Top | ItemType::Outerwear);
    if layered && item.layer == Layer::None {
        return Err(fail("tops and outerwear must carry a base/mid/outer layer".to_owned()));
    }
    if !layered && item.layer != Layer::None {
        return Err(fail(
            "bottoms, footwear and accessories must carry layer `none`".to_owned(),
        ));
    }

    Ok(())
}
