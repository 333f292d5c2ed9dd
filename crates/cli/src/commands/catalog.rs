use std::fs;
use std::path::Path;

use anyhow::Context;
use serde_json::json;
use wardrobe_core::config::AppConfig;
use wardrobe_core::{Catalog, ItemType};

use super::CommandResult;

pub fn run(config: &AppConfig, path_override: Option<&Path>) -> CommandResult {
    let catalog = match load_catalog(config, path_override) {
        Ok(catalog) => catalog,
        Err(error) => {
            return CommandResult::failure("catalog", "catalog_load", format!("{error:#}"), 2)
        }
    };

    tracing::info!(
        event_name = "catalog.validated",
        items = catalog.len(),
        "catalog loaded and validated"
    );

    let message = format!("catalog valid: {} items", catalog.len());
    CommandResult::success_with_payload("catalog", message, summarize(&catalog), false)
}

/// Resolve the active catalog: explicit path, configured path, or builtin.
pub(crate) fn load_catalog(
    config: &AppConfig,
    path_override: Option<&Path>,
) -> anyhow::Result<Catalog> {
    let path = path_override
        .map(Path::to_path_buf)
        .or_else(|| config.catalog.path.clone());

    match path {
        Some(path) => {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("could not read catalog file `{}`", path.display()))?;
            Catalog::from_toml_str(&raw)
                .with_context(|| format!("could not parse catalog file `{}`", path.display()))
        }
        None => Ok(Catalog::builtin()),
    }
}

fn summarize(catalog: &Catalog) -> serde_json::Value {
    let count = |item_type: ItemType| {
        catalog.items().iter().filter(|item| item.item_type == item_type).count()
    };

    json!({
        "total": catalog.len(),
        "tops": count(ItemType::Top),
        "bottoms": count(ItemType::Bottom),
        "outerwear": count(ItemType::Outerwear),
        "footwear": count(ItemType::Footwear),
        "accessories": count(ItemType::Accessory),
    })
}
