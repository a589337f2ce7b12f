//! Seasons (operations).

use serde::Deserialize;
use serde_json::Value;

use crate::types::{Category, Season, StatsResult};

use super::decode;

/// Display titles carry this label ahead of the operation name.
const TITLE_LABEL: &str = "Operation ";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSeason {
    slug: String,
    localized_items: SeasonText,
    #[serde(default)]
    start_date: Value,
}

#[derive(Debug, Deserialize)]
struct SeasonText {
    title: String,
}

pub fn map_seasons(data: &Value) -> StatsResult<Vec<Season>> {
    let raw: Vec<RawSeason> = decode(Category::Seasons, data)?;

    Ok(raw
        .into_iter()
        .map(|season| Season {
            title: strip_label(&season.localized_items.title).to_string(),
            slug: season.slug,
            start_date: season.start_date,
        })
        .collect())
}

fn strip_label(title: &str) -> &str {
    title.strip_prefix(TITLE_LABEL).unwrap_or(title)
}
