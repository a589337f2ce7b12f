//! Maps.

use serde::Deserialize;
use serde_json::Value;

use crate::types::{Category, GameMap, MapDetails, StatsResult};

use super::{decode, Asset};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMap {
    slug: String,
    map_details: RawMapDetails,
    map_thumbnail: Asset,
    #[serde(default)]
    playlists: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMapDetails {
    title: String,
    background_image: Asset,
    #[serde(default)]
    bomb_sites: Option<Value>,
    #[serde(default)]
    location: Option<Value>,
    #[serde(default)]
    released: Option<Value>,
    #[serde(default)]
    content: Option<Value>,
}

pub fn map_maps(data: &Value) -> StatsResult<Vec<GameMap>> {
    let raw: Vec<RawMap> = decode(Category::Maps, data)?;

    Ok(raw
        .into_iter()
        .map(|map| {
            let details = map.map_details;
            GameMap {
                slug: map.slug,
                title: details.title,
                image: map.map_thumbnail.url,
                background: details.background_image.url,
                sites: details.bomb_sites,
                playlists: map.playlists,
                details: MapDetails {
                    location: details.location,
                    released: details.released,
                    description: details.content,
                },
            }
        })
        .collect())
}
