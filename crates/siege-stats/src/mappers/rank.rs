//! Ranked tiers.

use serde::Deserialize;
use serde_json::Value;

use crate::types::{Category, Rank, StatsError, StatsResult};

use super::{decode, Asset};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRank {
    slug: String,
    #[serde(default)]
    localized_items: Option<RankText>,
    #[serde(default)]
    card_image: Option<Asset>,
}

#[derive(Debug, Deserialize)]
struct RankText {
    #[serde(default)]
    title: Option<String>,
}

/// Map ranks, dropping untitled ones.
///
/// Upstream occasionally repeats the last tiers (`champion-2`, `champion-3`)
/// without any localized text; those are not real ranks.
pub fn map_ranks(data: &Value) -> StatsResult<Vec<Rank>> {
    let raw: Vec<RawRank> = decode(Category::Ranks, data)?;

    raw.into_iter()
        .filter_map(|rank| {
            let text = rank.localized_items?;
            Some(to_rank(rank.slug, text, rank.card_image))
        })
        .collect()
}

fn to_rank(slug: String, text: RankText, card_image: Option<Asset>) -> StatsResult<Rank> {
    let picture = card_image
        .map(|a| a.url)
        .ok_or_else(|| StatsError::MissingField(format!("ranks.{slug}.cardImage")))?;

    Ok(Rank {
        slug,
        title: text.title,
        picture,
    })
}
