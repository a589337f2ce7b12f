//! Category mappers: raw upstream records to the stable output shape.

pub mod map;
pub mod operator;
pub mod rank;
pub mod season;
pub mod weapon;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::types::{Category, MappedCategory, RoutedEntry, StatsError, StatsResult};

pub use map::map_maps;
pub use operator::{map_loadout, map_operators};
pub use rank::map_ranks;
pub use season::map_seasons;
pub use weapon::map_weapons;

/// Run the mapper registered for the entry's category.
pub fn map_entry(entry: &RoutedEntry) -> StatsResult<MappedCategory> {
    let data = &entry.data;
    match entry.category {
        Category::Seasons => map_seasons(data).map(MappedCategory::Seasons),
        Category::Ranks => map_ranks(data).map(MappedCategory::Ranks),
        Category::Operators => map_operators(data).map(MappedCategory::Operators),
        Category::Weapons => map_weapons(data).map(MappedCategory::Weapons),
        Category::Maps => map_maps(data).map(MappedCategory::Maps),
    }
}

/// Deserialize raw records, tagging shape errors with their category.
pub(crate) fn decode<T: DeserializeOwned>(category: Category, data: &Value) -> StatsResult<T> {
    T::deserialize(data).map_err(|source| StatsError::Shape { category, source })
}

/// Upstream asset reference; only the URL is used.
#[derive(Debug, Deserialize)]
pub(crate) struct Asset {
    pub url: String,
}
